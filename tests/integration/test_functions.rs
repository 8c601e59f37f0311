//! Free functions, statements and type aliases

use crate::common::{FUNCTIONS_H, cpp_args, outline, parse};
use clangview::io::AstStream;
use clangview::source::{AccessSpecifierType, CursorKind, CursorType, Entry, TranslationUnit};

fn has_kind(entry: &Entry, label: &str) -> bool {
    entry.find(|node| node.kind.label() == label).is_some()
}

#[test]
fn test_top_level_declarations() {
    require_libclang!();

    let unit = parse(FUNCTIONS_H, cpp_args());
    assert!(!unit.has_errors(), "{:?}", unit.diagnostics());
    assert_eq!(
        outline(unit.ast()),
        vec![
            ("Function", "add".to_string()),
            ("Function", "function_with_param".to_string()),
            ("Function", "pick".to_string()),
            ("Typedef", "uint_t".to_string()),
            ("TypeAlias", "real_t".to_string()),
        ]
    );

    let children = &unit.ast().children;
    assert_eq!(
        children[3].kind,
        CursorKind::Typedef {
            name: "uint_t".to_string(),
            underlying: CursorType::UnsignedInt,
            access: AccessSpecifierType::Invalid,
        }
    );
    assert_eq!(
        children[4].kind,
        CursorKind::TypeAlias {
            name: "real_t".to_string(),
            underlying: CursorType::Double,
            access: AccessSpecifierType::Invalid,
        }
    );
}

#[test]
fn test_function_declaration() {
    require_libclang!();

    let unit = parse(FUNCTIONS_H, cpp_args());
    let add = &unit.ast().children[0];
    assert_eq!(
        add.kind,
        CursorKind::Function {
            name: "add".to_string(),
            display_name: "add(int, int)".to_string(),
            ty: CursorType::FunctionProto,
            return_type: CursorType::Int,
            canonical_return_type: CursorType::Int,
        }
    );
    assert_eq!(
        add.children
            .iter()
            .map(|param| param.kind.clone())
            .collect::<Vec<_>>(),
        vec![
            CursorKind::Parameter {
                name: "a".to_string(),
                ty: CursorType::Int,
            },
            CursorKind::Parameter {
                name: "b".to_string(),
                ty: CursorType::Int,
            },
        ]
    );
    let span = add.span.as_ref().expect("function has a span");
    assert_eq!((span.start_pos.line, span.start_pos.col), (4, 1));
    assert_eq!((span.end_pos.line, span.end_pos.col), (4, 22));
}

#[test]
fn test_function_body() {
    require_libclang!();

    let unit = parse(FUNCTIONS_H, cpp_args());
    let function = &unit.ast().children[1];
    assert!(matches!(
        &function.kind,
        CursorKind::Function {
            return_type: CursorType::LValueReference,
            ..
        }
    ));
    assert_eq!(
        function.children[0].kind,
        CursorKind::Parameter {
            name: "k".to_string(),
            ty: CursorType::LValueReference,
        }
    );

    let body = &function.children[1];
    assert_eq!(body.kind, CursorKind::CompoundStatement);
    assert_eq!(body.children.len(), 2);

    let assignment = &body.children[0];
    assert_eq!(assignment.kind, CursorKind::BinaryOperator);
    assert_eq!(
        assignment.children[0].kind,
        CursorKind::DeclarationReferenceExpression {
            name: "k".to_string()
        }
    );
    assert_eq!(assignment.children[1].kind, CursorKind::FloatLiteral);

    let ret = &body.children[1];
    assert_eq!(ret.kind, CursorKind::ReturnStatement);
    assert_eq!(ret.find_named("k").map(|k| k.kind.label()), Some("DeclarationReferenceExpression"));
}

#[test]
fn test_control_flow_statements() {
    require_libclang!();

    let unit = parse(FUNCTIONS_H, cpp_args());
    let pick = &unit.ast().children[2];
    assert!(matches!(
        &pick.kind,
        CursorKind::Function {
            return_type: CursorType::UnsignedChar,
            ..
        }
    ));
    assert_eq!(
        pick.children[1].kind,
        CursorKind::Parameter {
            name: "b".to_string(),
            ty: CursorType::SignedChar,
        }
    );

    for label in [
        "SwitchStatement",
        "CaseStatement",
        "CharacterLiteral",
        "DefaultStatement",
        "BreakStatement",
        "WhileStatement",
        "UnaryOperator",
        "ForStatement",
        "DeclarationStatement",
        "IntegerLiteral",
        "IfStatement",
        "ContinueStatement",
    ] {
        assert!(has_kind(pick, label), "missing {label}");
    }
    assert_eq!(
        pick.find_named("i").map(|i| i.kind.clone()),
        Some(CursorKind::Variable {
            name: "i".to_string(),
            ty: CursorType::Int,
        })
    );
}

#[test]
fn test_translation_unit_json() {
    require_libclang!();

    let unit = parse(FUNCTIONS_H, cpp_args());
    let json = serde_json::to_value(&unit).unwrap();
    assert_eq!(json["file_name"], FUNCTIONS_H);
    assert_eq!(json["ast"]["kind"], "Root");
    assert_eq!(json["ast"]["children"][0]["kind"], "Function");
    assert_eq!(json["ast"]["children"][0]["name"], "add");
    assert_eq!(json["ast"]["children"][0]["return_type"], "Int");

    let back: TranslationUnit = serde_json::from_value(json).unwrap();
    assert_eq!(back, unit);
}

#[test]
fn test_stream_real_ast() {
    require_libclang!();

    let unit = parse(FUNCTIONS_H, cpp_args());
    let mut stream = AstStream::new(Vec::new());
    stream.write_entry(unit.ast(), None).unwrap();
    let output = String::from_utf8(stream.into_inner()).unwrap();

    assert_eq!(output.lines().count(), unit.ast().count());
    let first: serde_json::Value = serde_json::from_str(output.lines().nth(1).unwrap()).unwrap();
    assert_eq!(first["kind"], "Function");
    assert_eq!(first["name"], "add");
    assert_eq!(first["parent"], 0);
    assert_eq!(first["start"]["line"], 4);
}
