//! AST extraction for C++ class declarations

use crate::common::{ABSTRACT_CLASS_H, CLASS_H, INHERITANCE_H, cpp_args, outline, parse};
use clangview::io::render_tree;
use clangview::source::{
    AccessSpecifierType, ConstructorType, CursorKind, CursorType, Entry, Virtuality,
};

fn class_of(ast: &Entry) -> &Entry {
    assert_eq!(ast.kind, CursorKind::Root);
    assert_eq!(ast.children.len(), 1, "expected only the namespace at top level");
    let namespace = &ast.children[0];
    assert_eq!(
        namespace.kind,
        CursorKind::Namespace {
            name: "my_namespace".to_string()
        }
    );
    assert_eq!(namespace.children.len(), 1);
    &namespace.children[0]
}

fn assert_member_layout(class: &Entry) {
    assert_eq!(
        outline(class),
        vec![
            ("Struct", "PrivateStruct".to_string()),
            ("Field", "field".to_string()),
            ("AccessSpecifier", String::new()),
            ("Field", "field1".to_string()),
            ("Constructor", "MyTestClass".to_string()),
            ("Constructor", "MyTestClass".to_string()),
            ("Method", "operator=".to_string()),
            ("AccessSpecifier", String::new()),
            ("Field", "field3".to_string()),
            ("Method", "test_method".to_string()),
            ("Constructor", "MyTestClass".to_string()),
        ]
    );

    let members = &class.children;
    assert_eq!(
        members[0].kind,
        CursorKind::Struct {
            name: "PrivateStruct".to_string(),
            access: AccessSpecifierType::Private,
            is_abstract: false,
        }
    );
    assert_eq!(
        members[1].kind,
        CursorKind::Field {
            name: "field".to_string(),
            access: AccessSpecifierType::Private,
            ty: CursorType::Int,
        }
    );
    assert_eq!(
        members[2].kind,
        CursorKind::AccessSpecifier {
            access: AccessSpecifierType::Public
        }
    );
    assert_eq!(
        members[3].kind,
        CursorKind::Field {
            name: "field1".to_string(),
            access: AccessSpecifierType::Public,
            ty: CursorType::Float,
        }
    );
    assert_eq!(
        members[4].kind,
        CursorKind::Constructor {
            name: "MyTestClass".to_string(),
            constructor_type: ConstructorType::Default,
            access: AccessSpecifierType::Public,
        }
    );
    assert_eq!(
        members[5].kind,
        CursorKind::Constructor {
            name: "MyTestClass".to_string(),
            constructor_type: ConstructorType::Copy,
            access: AccessSpecifierType::Public,
        }
    );
    assert_eq!(
        members[7].kind,
        CursorKind::AccessSpecifier {
            access: AccessSpecifierType::Protected
        }
    );
    assert_eq!(
        members[8].kind,
        CursorKind::Field {
            name: "field3".to_string(),
            access: AccessSpecifierType::Protected,
            ty: CursorType::Bool,
        }
    );
    assert_eq!(
        members[9].kind,
        CursorKind::Method {
            name: "test_method".to_string(),
            access: AccessSpecifierType::Protected,
            ty: CursorType::FunctionProto,
            virtuality: Virtuality::NonVirtual,
            return_type: CursorType::Void,
            canonical_return_type: CursorType::Void,
            is_static: false,
            is_const: false,
        }
    );
    assert_eq!(
        members[10].kind,
        CursorKind::Constructor {
            name: "MyTestClass".to_string(),
            constructor_type: ConstructorType::Move,
            access: AccessSpecifierType::Protected,
        }
    );

    // Copy constructor: one unnamed reference parameter naming the class
    let copy_param = &members[5].children[0];
    assert_eq!(
        copy_param.kind,
        CursorKind::Parameter {
            name: String::new(),
            ty: CursorType::LValueReference,
        }
    );
    assert_eq!(
        copy_param.children[0].kind,
        CursorKind::TypeReference {
            name: "class my_namespace::MyTestClass".to_string()
        }
    );

    let move_param = &members[10].children[0];
    assert_eq!(
        move_param.kind,
        CursorKind::Parameter {
            name: String::new(),
            ty: CursorType::RValueReference,
        }
    );
}

fn operator_assign(virtuality: Virtuality) -> CursorKind {
    CursorKind::Method {
        name: "operator=".to_string(),
        access: AccessSpecifierType::Public,
        ty: CursorType::FunctionProto,
        virtuality,
        return_type: CursorType::LValueReference,
        canonical_return_type: CursorType::LValueReference,
        is_static: false,
        is_const: false,
    }
}

#[test]
fn test_class_members() {
    require_libclang!();

    let unit = parse(CLASS_H, cpp_args());
    assert!(!unit.has_errors(), "{:?}", unit.diagnostics());

    let class = class_of(unit.ast());
    assert_eq!(
        class.kind,
        CursorKind::Class {
            name: "MyTestClass".to_string(),
            access: AccessSpecifierType::Invalid,
            is_abstract: false,
        }
    );
    assert_member_layout(class);
    assert_eq!(
        class.children[6].kind,
        operator_assign(Virtuality::NonVirtual)
    );
}

#[test]
fn test_class_spans() {
    require_libclang!();

    let unit = parse(CLASS_H, cpp_args());
    let namespace = &unit.ast().children[0];
    let span = namespace.span.as_ref().expect("namespace has a span");
    assert_eq!(span.start_pos.file_name, CLASS_H);
    assert_eq!((span.start_pos.line, span.start_pos.col), (4, 1));
    assert_eq!((span.end_pos.line, span.end_pos.col), (20, 2));

    let class = &namespace.children[0];
    let span = class.span.as_ref().expect("class has a span");
    assert_eq!((span.start_pos.line, span.start_pos.col), (5, 1));
    assert_eq!((span.end_pos.line, span.end_pos.col), (19, 2));

    let field = &class.children[1];
    let span = field.span.as_ref().expect("field has a span");
    assert_eq!((span.start_pos.line, span.start_pos.col), (7, 3));
    assert_eq!((span.end_pos.line, span.end_pos.col), (7, 12));

    let copy_ref = &class.children[5].children[0].children[0];
    let span = copy_ref.span.as_ref().expect("type reference has a span");
    assert_eq!((span.start_pos.line, span.start_pos.col), (12, 21));
    assert_eq!((span.end_pos.line, span.end_pos.col), (12, 32));
}

#[test]
fn test_abstract_class() {
    require_libclang!();

    let unit = parse(ABSTRACT_CLASS_H, cpp_args());
    let class = class_of(unit.ast());
    assert_eq!(
        class.kind,
        CursorKind::Class {
            name: "MyTestClass".to_string(),
            access: AccessSpecifierType::Invalid,
            is_abstract: true,
        }
    );
    assert_member_layout(class);
    assert_eq!(
        class.children[6].kind,
        operator_assign(Virtuality::PureVirtual)
    );

    // Whatever <iostream> pulled in lives in system headers
    for (_, entry) in unit.ast().walk().skip(1) {
        let span = entry.span.as_ref().expect("every extracted node has a span");
        assert_eq!(span.start_pos.file_name, ABSTRACT_CLASS_H);
    }
}

#[test]
fn test_render_class_tree() {
    require_libclang!();

    let unit = parse(CLASS_H, cpp_args());
    let rendered = render_tree(unit.ast(), Some(2));
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "Root");
    assert_eq!(
        lines[1],
        format!("  Namespace my_namespace [{CLASS_H}:4:1-20:2]")
    );
    assert_eq!(lines[2], format!("    Class MyTestClass [{CLASS_H}:5:1-19:2]"));
    assert_eq!(lines.len(), 3);

    let full = render_tree(unit.ast(), None);
    assert!(full.contains("      Method operator= public -> LValueReference"));
    assert!(full.contains("      Constructor MyTestClass protected Move"));
}

fn method(name: &str, virtuality: Virtuality, is_static: bool, is_const: bool) -> CursorKind {
    let return_type = match name {
        "area" => CursorType::Double,
        "label" => CursorType::Pointer,
        _ => CursorType::Int,
    };
    CursorKind::Method {
        name: name.to_string(),
        access: AccessSpecifierType::Public,
        ty: CursorType::FunctionProto,
        virtuality,
        return_type,
        canonical_return_type: return_type,
        is_static,
        is_const,
    }
}

fn base_of(entry: &Entry) -> (&str, AccessSpecifierType) {
    match &entry.children[0].kind {
        CursorKind::BaseSpecifier { name, access } => (name.as_str(), *access),
        other => panic!("expected a base specifier, found {other}"),
    }
}

#[test]
fn test_virtual_members() {
    require_libclang!();

    let unit = parse(INHERITANCE_H, cpp_args());
    assert!(!unit.has_errors(), "{:?}", unit.diagnostics());
    assert_eq!(
        outline(unit.ast()),
        vec![
            ("Class", "Shape".to_string()),
            ("Class", "Square".to_string()),
            ("Struct", "Outline".to_string()),
        ]
    );

    let shape = &unit.ast().children[0];
    assert_eq!(
        shape.kind,
        CursorKind::Class {
            name: "Shape".to_string(),
            access: AccessSpecifierType::Invalid,
            is_abstract: true,
        }
    );
    let members = &shape.children;
    assert_eq!(members.len(), 5);
    assert_eq!(
        members[1].kind,
        CursorKind::Destructor {
            name: "~Shape".to_string(),
            access: AccessSpecifierType::Public,
            virtuality: Virtuality::Virtual,
        }
    );
    assert_eq!(
        members[2].kind,
        method("area", Virtuality::PureVirtual, false, true)
    );
    assert_eq!(
        members[3].kind,
        method("label", Virtuality::Virtual, false, true)
    );
    assert_eq!(
        members[4].kind,
        method("count", Virtuality::NonVirtual, true, false)
    );
}

#[test]
fn test_inherited_abstractness() {
    require_libclang!();

    let unit = parse(INHERITANCE_H, cpp_args());

    // Overriding the only pure virtual makes the derived class concrete
    let square = &unit.ast().children[1];
    assert!(matches!(
        square.kind,
        CursorKind::Class {
            is_abstract: false,
            ..
        }
    ));
    let (base, access) = base_of(square);
    assert!(base.ends_with("Shape"), "{base}");
    assert_eq!(access, AccessSpecifierType::Public);
    assert_eq!(
        square.children[2].kind,
        CursorKind::Destructor {
            name: "~Square".to_string(),
            access: AccessSpecifierType::Public,
            virtuality: Virtuality::Virtual,
        }
    );
    assert_eq!(
        square.children[3].kind,
        method("area", Virtuality::Virtual, false, true)
    );

    let outline_struct = &unit.ast().children[2];
    assert_eq!(
        outline_struct.kind,
        CursorKind::Struct {
            name: "Outline".to_string(),
            access: AccessSpecifierType::Invalid,
            is_abstract: true,
        }
    );
    let (base, access) = base_of(outline_struct);
    assert!(base.ends_with("Shape"), "{base}");
    assert_eq!(access, AccessSpecifierType::Protected);
}
