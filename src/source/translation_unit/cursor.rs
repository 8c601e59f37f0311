//! Mapping of libclang cursors onto typed node kinds
//!
//! Every `CXString` obtained here is disposed before returning. Nothing in
//! this module holds on to a cursor past the call that received it.

use clang_sys::*;
use serde::{Deserialize, Serialize};
use std::ffi::CStr;
use std::fmt;
use std::ptr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessSpecifierType {
    Invalid,
    Public,
    Protected,
    Private,
}

impl From<i32> for AccessSpecifierType {
    fn from(access_specifier: i32) -> Self {
        match access_specifier {
            clang_sys::CX_CXXPublic => AccessSpecifierType::Public,
            clang_sys::CX_CXXProtected => AccessSpecifierType::Protected,
            clang_sys::CX_CXXPrivate => AccessSpecifierType::Private,
            _ => AccessSpecifierType::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstructorType {
    None,
    Converting,
    Copy,
    Default,
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Virtuality {
    NonVirtual,
    Virtual,
    PureVirtual,
}

/// Kind of a cursor's type (`CXTypeKind`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorType {
    Invalid,
    Unexposed,
    Void,
    Bool,
    /// Plain `char` on targets where it is unsigned
    CharU,
    UnsignedChar,
    Char16,
    Char32,
    UnsignedShort,
    UnsignedInt,
    UnsignedLong,
    UnsignedLongLong,
    UnsignedInt128,
    /// Plain `char` on targets where it is signed
    CharS,
    SignedChar,
    WideChar,
    Short,
    Int,
    Long,
    LongLong,
    Int128,
    Float,
    Double,
    LongDouble,
    Nullptr,
    Overload,
    Dependent,
    Float128,
    Half,
    Float16,
    ShortAccum,
    Accum,
    LongAccum,
    UnsignedShortAccum,
    UnsignedAccum,
    UnsignedLongAccum,
    Complex,
    Pointer,
    BlockPointer,
    LValueReference,
    RValueReference,
    Record,
    Enum,
    Typedef,
    FunctionNoProto,
    FunctionProto,
    ConstantArray,
    Vector,
    IncompleteArray,
    VariableArray,
    DependentSizedArray,
    MemberPointer,
    Auto,
    Elaborated,
    Pipe,
    Attributed,
    NotSupported(i32),
}

impl From<i32> for CursorType {
    fn from(type_kind: i32) -> Self {
        match type_kind {
            clang_sys::CXType_Invalid => CursorType::Invalid,
            clang_sys::CXType_Unexposed => CursorType::Unexposed,
            clang_sys::CXType_Void => CursorType::Void,
            clang_sys::CXType_Bool => CursorType::Bool,
            clang_sys::CXType_Char_U => CursorType::CharU,
            clang_sys::CXType_UChar => CursorType::UnsignedChar,
            clang_sys::CXType_Char16 => CursorType::Char16,
            clang_sys::CXType_Char32 => CursorType::Char32,
            clang_sys::CXType_UShort => CursorType::UnsignedShort,
            clang_sys::CXType_UInt => CursorType::UnsignedInt,
            clang_sys::CXType_ULong => CursorType::UnsignedLong,
            clang_sys::CXType_ULongLong => CursorType::UnsignedLongLong,
            clang_sys::CXType_UInt128 => CursorType::UnsignedInt128,
            clang_sys::CXType_Char_S => CursorType::CharS,
            clang_sys::CXType_SChar => CursorType::SignedChar,
            clang_sys::CXType_WChar => CursorType::WideChar,
            clang_sys::CXType_Short => CursorType::Short,
            clang_sys::CXType_Int => CursorType::Int,
            clang_sys::CXType_Long => CursorType::Long,
            clang_sys::CXType_LongLong => CursorType::LongLong,
            clang_sys::CXType_Int128 => CursorType::Int128,
            clang_sys::CXType_Float => CursorType::Float,
            clang_sys::CXType_Double => CursorType::Double,
            clang_sys::CXType_LongDouble => CursorType::LongDouble,
            clang_sys::CXType_NullPtr => CursorType::Nullptr,
            clang_sys::CXType_Overload => CursorType::Overload,
            clang_sys::CXType_Dependent => CursorType::Dependent,
            clang_sys::CXType_Float128 => CursorType::Float128,
            clang_sys::CXType_Half => CursorType::Half,
            clang_sys::CXType_Float16 => CursorType::Float16,
            clang_sys::CXType_ShortAccum => CursorType::ShortAccum,
            clang_sys::CXType_Accum => CursorType::Accum,
            clang_sys::CXType_LongAccum => CursorType::LongAccum,
            clang_sys::CXType_UShortAccum => CursorType::UnsignedShortAccum,
            clang_sys::CXType_UAccum => CursorType::UnsignedAccum,
            clang_sys::CXType_ULongAccum => CursorType::UnsignedLongAccum,
            clang_sys::CXType_Complex => CursorType::Complex,
            clang_sys::CXType_Pointer => CursorType::Pointer,
            clang_sys::CXType_BlockPointer => CursorType::BlockPointer,
            clang_sys::CXType_LValueReference => CursorType::LValueReference,
            clang_sys::CXType_RValueReference => CursorType::RValueReference,
            clang_sys::CXType_Record => CursorType::Record,
            clang_sys::CXType_Enum => CursorType::Enum,
            clang_sys::CXType_Typedef => CursorType::Typedef,
            clang_sys::CXType_FunctionNoProto => CursorType::FunctionNoProto,
            clang_sys::CXType_FunctionProto => CursorType::FunctionProto,
            clang_sys::CXType_ConstantArray => CursorType::ConstantArray,
            clang_sys::CXType_Vector => CursorType::Vector,
            clang_sys::CXType_IncompleteArray => CursorType::IncompleteArray,
            clang_sys::CXType_VariableArray => CursorType::VariableArray,
            clang_sys::CXType_DependentSizedArray => CursorType::DependentSizedArray,
            clang_sys::CXType_MemberPointer => CursorType::MemberPointer,
            clang_sys::CXType_Auto => CursorType::Auto,
            clang_sys::CXType_Elaborated => CursorType::Elaborated,
            clang_sys::CXType_Pipe => CursorType::Pipe,
            clang_sys::CXType_Attributed => CursorType::Attributed,
            other => CursorType::NotSupported(other),
        }
    }
}

/// A resolved source location (expansion location, 1-based)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub file_name: String,
    pub line: u32,
    pub col: u32,
}

impl Position {
    pub(crate) fn from_location(location: CXSourceLocation) -> Position {
        let mut file: CXFile = ptr::null_mut();
        let mut line = 0;
        let mut col = 0;
        let mut offset = 0;
        unsafe {
            clang_getExpansionLocation(location, &mut file, &mut line, &mut col, &mut offset);
        }
        let file_name = if file.is_null() {
            String::new()
        } else {
            into_owned_string(unsafe { clang_getFileName(file) })
        };
        Position {
            file_name,
            line,
            col,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_name, self.line, self.col)
    }
}

/// Extent of a cursor; `end_pos` is one past the last character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSpan {
    pub start_pos: Position,
    pub end_pos: Position,
}

impl CodeSpan {
    pub(crate) fn from_cursor(cursor: CXCursor) -> CodeSpan {
        let extent = unsafe { clang_getCursorExtent(cursor) };
        let (start, end) = unsafe { (clang_getRangeStart(extent), clang_getRangeEnd(extent)) };
        CodeSpan {
            start_pos: Position::from_location(start),
            end_pos: Position::from_location(end),
        }
    }
}

impl fmt::Display for CodeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_pos.file_name == self.end_pos.file_name {
            write!(
                f,
                "{}:{}:{}-{}:{}",
                self.start_pos.file_name,
                self.start_pos.line,
                self.start_pos.col,
                self.end_pos.line,
                self.end_pos.col
            )
        } else {
            write!(f, "{}-{}", self.start_pos, self.end_pos)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CursorKind {
    /// Synthetic node standing for the translation unit
    Root,

    // Declarations
    Unexposed {
        name: String,
    },
    Namespace {
        name: String,
    },
    LinkageSpec {
        name: String,
    },
    NamespaceAlias {
        name: String,
    },
    UsingDirective {
        name: String,
    },
    UsingDeclaration {
        name: String,
    },
    Class {
        name: String,
        access: AccessSpecifierType,
        is_abstract: bool,
    },
    Struct {
        name: String,
        access: AccessSpecifierType,
        is_abstract: bool,
    },
    Union {
        name: String,
        access: AccessSpecifierType,
    },
    Enum {
        name: String,
        access: AccessSpecifierType,
    },
    EnumConstant {
        name: String,
    },
    Field {
        name: String,
        access: AccessSpecifierType,
        ty: CursorType,
    },
    Function {
        name: String,
        display_name: String,
        ty: CursorType,
        return_type: CursorType,
        canonical_return_type: CursorType,
    },
    Method {
        name: String,
        access: AccessSpecifierType,
        ty: CursorType,
        virtuality: Virtuality,
        return_type: CursorType,
        canonical_return_type: CursorType,
        is_static: bool,
        is_const: bool,
    },
    Constructor {
        name: String,
        constructor_type: ConstructorType,
        access: AccessSpecifierType,
    },
    Destructor {
        name: String,
        access: AccessSpecifierType,
        virtuality: Virtuality,
    },
    ConversionFunction {
        name: String,
        access: AccessSpecifierType,
    },
    Variable {
        name: String,
        ty: CursorType,
    },
    Parameter {
        name: String,
        ty: CursorType,
    },
    Typedef {
        name: String,
        underlying: CursorType,
        access: AccessSpecifierType,
    },
    TypeAlias {
        name: String,
        underlying: CursorType,
        access: AccessSpecifierType,
    },
    TemplateTypeParameter {
        name: String,
    },
    NonTypeTemplateParameter {
        name: String,
    },
    TemplateTemplateParameter {
        name: String,
    },
    FunctionTemplate {
        name: String,
    },
    ClassTemplate {
        name: String,
    },
    ClassTemplatePartialSpecialization {
        name: String,
    },
    AccessSpecifier {
        access: AccessSpecifierType,
    },

    // References
    TypeReference {
        name: String,
    },
    BaseSpecifier {
        name: String,
        access: AccessSpecifierType,
    },
    TemplateReference {
        name: String,
    },
    NamespaceReference {
        name: String,
    },
    MemberReference {
        name: String,
    },
    LabelReference {
        name: String,
    },
    OverloadedDeclarationReference {
        name: String,
    },
    VariableReference {
        name: String,
    },

    // Expressions
    UnexposedExpression {
        name: String,
    },
    DeclarationReferenceExpression {
        name: String,
    },
    MemberReferenceExpression {
        name: String,
    },
    CallExpression {
        name: String,
    },
    IntegerLiteral,
    FloatLiteral,
    ImaginaryLiteral,
    StringLiteral {
        value: String,
    },
    CharacterLiteral {
        value: String,
    },
    BoolLiteral,
    NullPtrLiteral,
    ParenExpression,
    UnaryOperator,
    ArraySubscript,
    BinaryOperator,
    CompoundAssignOperator,
    ConditionalOperator,
    CStyleCast {
        ty: CursorType,
    },
    InitializerList,
    Lambda,
    This,

    // Statements
    CompoundStatement,
    DeclarationStatement,
    ReturnStatement,
    IfStatement,
    SwitchStatement,
    CaseStatement,
    DefaultStatement,
    WhileStatement,
    DoStatement,
    ForStatement,
    RangeBasedForStatement,
    BreakStatement,
    ContinueStatement,
    NullStatement,

    NotSupported {
        name: String,
        cursor_kind: i32,
    },
}

impl CursorKind {
    /// Map a libclang cursor onto its typed kind
    pub fn from_cursor(cursor: CXCursor) -> CursorKind {
        let name = into_owned_string(unsafe { clang_getCursorSpelling(cursor) });
        let kind = unsafe { clang_getCursorKind(cursor) };
        match kind {
            clang_sys::CXCursor_UnexposedDecl => CursorKind::Unexposed { name },
            clang_sys::CXCursor_Namespace => CursorKind::Namespace { name },
            clang_sys::CXCursor_LinkageSpec => CursorKind::LinkageSpec { name },
            clang_sys::CXCursor_NamespaceAlias => CursorKind::NamespaceAlias { name },
            clang_sys::CXCursor_UsingDirective => CursorKind::UsingDirective { name },
            clang_sys::CXCursor_UsingDeclaration => CursorKind::UsingDeclaration { name },
            clang_sys::CXCursor_ClassDecl => CursorKind::Class {
                name,
                access: access_of(cursor),
                is_abstract: is_abstract(cursor),
            },
            clang_sys::CXCursor_StructDecl => CursorKind::Struct {
                name,
                access: access_of(cursor),
                is_abstract: is_abstract(cursor),
            },
            clang_sys::CXCursor_UnionDecl => CursorKind::Union {
                name,
                access: access_of(cursor),
            },
            clang_sys::CXCursor_EnumDecl => CursorKind::Enum {
                name,
                access: access_of(cursor),
            },
            clang_sys::CXCursor_EnumConstantDecl => CursorKind::EnumConstant { name },
            clang_sys::CXCursor_FieldDecl => CursorKind::Field {
                name,
                access: access_of(cursor),
                ty: type_of(cursor),
            },
            clang_sys::CXCursor_FunctionDecl => CursorKind::Function {
                name,
                display_name: into_owned_string(unsafe { clang_getCursorDisplayName(cursor) }),
                ty: type_of(cursor),
                return_type: return_type_of(cursor),
                canonical_return_type: canonical_return_type_of(cursor),
            },
            clang_sys::CXCursor_CXXMethod => CursorKind::Method {
                name,
                access: access_of(cursor),
                ty: type_of(cursor),
                virtuality: virtuality_of(cursor),
                return_type: return_type_of(cursor),
                canonical_return_type: canonical_return_type_of(cursor),
                is_static: unsafe { clang_CXXMethod_isStatic(cursor) } != 0,
                is_const: unsafe { clang_CXXMethod_isConst(cursor) } != 0,
            },
            clang_sys::CXCursor_Constructor => CursorKind::Constructor {
                name,
                constructor_type: constructor_type_of(cursor),
                access: access_of(cursor),
            },
            clang_sys::CXCursor_Destructor => CursorKind::Destructor {
                name,
                access: access_of(cursor),
                virtuality: virtuality_of(cursor),
            },
            clang_sys::CXCursor_ConversionFunction => CursorKind::ConversionFunction {
                name,
                access: access_of(cursor),
            },
            clang_sys::CXCursor_VarDecl => CursorKind::Variable {
                name,
                ty: type_of(cursor),
            },
            clang_sys::CXCursor_ParmDecl => CursorKind::Parameter {
                name,
                ty: type_of(cursor),
            },
            clang_sys::CXCursor_TypedefDecl => CursorKind::Typedef {
                name,
                underlying: underlying_type_of(cursor),
                access: access_of(cursor),
            },
            clang_sys::CXCursor_TypeAliasDecl => CursorKind::TypeAlias {
                name,
                underlying: underlying_type_of(cursor),
                access: access_of(cursor),
            },
            clang_sys::CXCursor_TemplateTypeParameter => CursorKind::TemplateTypeParameter { name },
            clang_sys::CXCursor_NonTypeTemplateParameter => {
                CursorKind::NonTypeTemplateParameter { name }
            }
            clang_sys::CXCursor_TemplateTemplateParameter => {
                CursorKind::TemplateTemplateParameter { name }
            }
            clang_sys::CXCursor_FunctionTemplate => CursorKind::FunctionTemplate { name },
            clang_sys::CXCursor_ClassTemplate => CursorKind::ClassTemplate { name },
            clang_sys::CXCursor_ClassTemplatePartialSpecialization => {
                CursorKind::ClassTemplatePartialSpecialization { name }
            }
            clang_sys::CXCursor_CXXAccessSpecifier => CursorKind::AccessSpecifier {
                access: access_of(cursor),
            },

            clang_sys::CXCursor_TypeRef => CursorKind::TypeReference { name },
            clang_sys::CXCursor_CXXBaseSpecifier => CursorKind::BaseSpecifier {
                name,
                access: access_of(cursor),
            },
            clang_sys::CXCursor_TemplateRef => CursorKind::TemplateReference { name },
            clang_sys::CXCursor_NamespaceRef => CursorKind::NamespaceReference { name },
            clang_sys::CXCursor_MemberRef => CursorKind::MemberReference { name },
            clang_sys::CXCursor_LabelRef => CursorKind::LabelReference { name },
            clang_sys::CXCursor_OverloadedDeclRef => {
                CursorKind::OverloadedDeclarationReference { name }
            }
            clang_sys::CXCursor_VariableRef => CursorKind::VariableReference { name },

            clang_sys::CXCursor_UnexposedExpr => CursorKind::UnexposedExpression { name },
            clang_sys::CXCursor_DeclRefExpr => CursorKind::DeclarationReferenceExpression { name },
            clang_sys::CXCursor_MemberRefExpr => CursorKind::MemberReferenceExpression { name },
            clang_sys::CXCursor_CallExpr => CursorKind::CallExpression { name },
            clang_sys::CXCursor_IntegerLiteral => CursorKind::IntegerLiteral,
            clang_sys::CXCursor_FloatingLiteral => CursorKind::FloatLiteral,
            clang_sys::CXCursor_ImaginaryLiteral => CursorKind::ImaginaryLiteral,
            clang_sys::CXCursor_StringLiteral => CursorKind::StringLiteral { value: name },
            clang_sys::CXCursor_CharacterLiteral => CursorKind::CharacterLiteral { value: name },
            clang_sys::CXCursor_CXXBoolLiteralExpr => CursorKind::BoolLiteral,
            clang_sys::CXCursor_CXXNullPtrLiteralExpr => CursorKind::NullPtrLiteral,
            clang_sys::CXCursor_ParenExpr => CursorKind::ParenExpression,
            clang_sys::CXCursor_UnaryOperator => CursorKind::UnaryOperator,
            clang_sys::CXCursor_ArraySubscriptExpr => CursorKind::ArraySubscript,
            clang_sys::CXCursor_BinaryOperator => CursorKind::BinaryOperator,
            clang_sys::CXCursor_CompoundAssignOperator => CursorKind::CompoundAssignOperator,
            clang_sys::CXCursor_ConditionalOperator => CursorKind::ConditionalOperator,
            clang_sys::CXCursor_CStyleCastExpr => CursorKind::CStyleCast {
                ty: type_of(cursor),
            },
            clang_sys::CXCursor_InitListExpr => CursorKind::InitializerList,
            clang_sys::CXCursor_LambdaExpr => CursorKind::Lambda,
            clang_sys::CXCursor_CXXThisExpr => CursorKind::This,

            clang_sys::CXCursor_CompoundStmt => CursorKind::CompoundStatement,
            clang_sys::CXCursor_DeclStmt => CursorKind::DeclarationStatement,
            clang_sys::CXCursor_ReturnStmt => CursorKind::ReturnStatement,
            clang_sys::CXCursor_IfStmt => CursorKind::IfStatement,
            clang_sys::CXCursor_SwitchStmt => CursorKind::SwitchStatement,
            clang_sys::CXCursor_CaseStmt => CursorKind::CaseStatement,
            clang_sys::CXCursor_DefaultStmt => CursorKind::DefaultStatement,
            clang_sys::CXCursor_WhileStmt => CursorKind::WhileStatement,
            clang_sys::CXCursor_DoStmt => CursorKind::DoStatement,
            clang_sys::CXCursor_ForStmt => CursorKind::ForStatement,
            clang_sys::CXCursor_CXXForRangeStmt => CursorKind::RangeBasedForStatement,
            clang_sys::CXCursor_BreakStmt => CursorKind::BreakStatement,
            clang_sys::CXCursor_ContinueStmt => CursorKind::ContinueStatement,
            clang_sys::CXCursor_NullStmt => CursorKind::NullStatement,

            other => CursorKind::NotSupported {
                name,
                cursor_kind: other,
            },
        }
    }

    /// The spelling carried by this kind, if it has one
    pub fn name(&self) -> Option<&str> {
        match self {
            CursorKind::Unexposed { name }
            | CursorKind::Namespace { name }
            | CursorKind::LinkageSpec { name }
            | CursorKind::NamespaceAlias { name }
            | CursorKind::UsingDirective { name }
            | CursorKind::UsingDeclaration { name }
            | CursorKind::Class { name, .. }
            | CursorKind::Struct { name, .. }
            | CursorKind::Union { name, .. }
            | CursorKind::Enum { name, .. }
            | CursorKind::EnumConstant { name }
            | CursorKind::Field { name, .. }
            | CursorKind::Function { name, .. }
            | CursorKind::Method { name, .. }
            | CursorKind::Constructor { name, .. }
            | CursorKind::Destructor { name, .. }
            | CursorKind::ConversionFunction { name, .. }
            | CursorKind::Variable { name, .. }
            | CursorKind::Parameter { name, .. }
            | CursorKind::Typedef { name, .. }
            | CursorKind::TypeAlias { name, .. }
            | CursorKind::TemplateTypeParameter { name }
            | CursorKind::NonTypeTemplateParameter { name }
            | CursorKind::TemplateTemplateParameter { name }
            | CursorKind::FunctionTemplate { name }
            | CursorKind::ClassTemplate { name }
            | CursorKind::ClassTemplatePartialSpecialization { name }
            | CursorKind::TypeReference { name }
            | CursorKind::BaseSpecifier { name, .. }
            | CursorKind::TemplateReference { name }
            | CursorKind::NamespaceReference { name }
            | CursorKind::MemberReference { name }
            | CursorKind::LabelReference { name }
            | CursorKind::OverloadedDeclarationReference { name }
            | CursorKind::VariableReference { name }
            | CursorKind::UnexposedExpression { name }
            | CursorKind::DeclarationReferenceExpression { name }
            | CursorKind::MemberReferenceExpression { name }
            | CursorKind::CallExpression { name }
            | CursorKind::NotSupported { name, .. } => Some(name),
            CursorKind::StringLiteral { value } | CursorKind::CharacterLiteral { value } => {
                Some(value)
            }
            _ => None,
        }
    }

    /// Variant name, e.g. `Method` or `CompoundStatement`
    pub fn label(&self) -> &'static str {
        match self {
            CursorKind::Root => "Root",
            CursorKind::Unexposed { .. } => "Unexposed",
            CursorKind::Namespace { .. } => "Namespace",
            CursorKind::LinkageSpec { .. } => "LinkageSpec",
            CursorKind::NamespaceAlias { .. } => "NamespaceAlias",
            CursorKind::UsingDirective { .. } => "UsingDirective",
            CursorKind::UsingDeclaration { .. } => "UsingDeclaration",
            CursorKind::Class { .. } => "Class",
            CursorKind::Struct { .. } => "Struct",
            CursorKind::Union { .. } => "Union",
            CursorKind::Enum { .. } => "Enum",
            CursorKind::EnumConstant { .. } => "EnumConstant",
            CursorKind::Field { .. } => "Field",
            CursorKind::Function { .. } => "Function",
            CursorKind::Method { .. } => "Method",
            CursorKind::Constructor { .. } => "Constructor",
            CursorKind::Destructor { .. } => "Destructor",
            CursorKind::ConversionFunction { .. } => "ConversionFunction",
            CursorKind::Variable { .. } => "Variable",
            CursorKind::Parameter { .. } => "Parameter",
            CursorKind::Typedef { .. } => "Typedef",
            CursorKind::TypeAlias { .. } => "TypeAlias",
            CursorKind::TemplateTypeParameter { .. } => "TemplateTypeParameter",
            CursorKind::NonTypeTemplateParameter { .. } => "NonTypeTemplateParameter",
            CursorKind::TemplateTemplateParameter { .. } => "TemplateTemplateParameter",
            CursorKind::FunctionTemplate { .. } => "FunctionTemplate",
            CursorKind::ClassTemplate { .. } => "ClassTemplate",
            CursorKind::ClassTemplatePartialSpecialization { .. } => {
                "ClassTemplatePartialSpecialization"
            }
            CursorKind::AccessSpecifier { .. } => "AccessSpecifier",
            CursorKind::TypeReference { .. } => "TypeReference",
            CursorKind::BaseSpecifier { .. } => "BaseSpecifier",
            CursorKind::TemplateReference { .. } => "TemplateReference",
            CursorKind::NamespaceReference { .. } => "NamespaceReference",
            CursorKind::MemberReference { .. } => "MemberReference",
            CursorKind::LabelReference { .. } => "LabelReference",
            CursorKind::OverloadedDeclarationReference { .. } => "OverloadedDeclarationReference",
            CursorKind::VariableReference { .. } => "VariableReference",
            CursorKind::UnexposedExpression { .. } => "UnexposedExpression",
            CursorKind::DeclarationReferenceExpression { .. } => "DeclarationReferenceExpression",
            CursorKind::MemberReferenceExpression { .. } => "MemberReferenceExpression",
            CursorKind::CallExpression { .. } => "CallExpression",
            CursorKind::IntegerLiteral => "IntegerLiteral",
            CursorKind::FloatLiteral => "FloatLiteral",
            CursorKind::ImaginaryLiteral => "ImaginaryLiteral",
            CursorKind::StringLiteral { .. } => "StringLiteral",
            CursorKind::CharacterLiteral { .. } => "CharacterLiteral",
            CursorKind::BoolLiteral => "BoolLiteral",
            CursorKind::NullPtrLiteral => "NullPtrLiteral",
            CursorKind::ParenExpression => "ParenExpression",
            CursorKind::UnaryOperator => "UnaryOperator",
            CursorKind::ArraySubscript => "ArraySubscript",
            CursorKind::BinaryOperator => "BinaryOperator",
            CursorKind::CompoundAssignOperator => "CompoundAssignOperator",
            CursorKind::ConditionalOperator => "ConditionalOperator",
            CursorKind::CStyleCast { .. } => "CStyleCast",
            CursorKind::InitializerList => "InitializerList",
            CursorKind::Lambda => "Lambda",
            CursorKind::This => "This",
            CursorKind::CompoundStatement => "CompoundStatement",
            CursorKind::DeclarationStatement => "DeclarationStatement",
            CursorKind::ReturnStatement => "ReturnStatement",
            CursorKind::IfStatement => "IfStatement",
            CursorKind::SwitchStatement => "SwitchStatement",
            CursorKind::CaseStatement => "CaseStatement",
            CursorKind::DefaultStatement => "DefaultStatement",
            CursorKind::WhileStatement => "WhileStatement",
            CursorKind::DoStatement => "DoStatement",
            CursorKind::ForStatement => "ForStatement",
            CursorKind::RangeBasedForStatement => "RangeBasedForStatement",
            CursorKind::BreakStatement => "BreakStatement",
            CursorKind::ContinueStatement => "ContinueStatement",
            CursorKind::NullStatement => "NullStatement",
            CursorKind::NotSupported { .. } => "NotSupported",
        }
    }
}

impl fmt::Display for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())?;
        if let Some(name) = self.name().filter(|name| !name.is_empty()) {
            write!(f, " {name}")?;
        }
        match self {
            CursorKind::Class {
                access,
                is_abstract,
                ..
            }
            | CursorKind::Struct {
                access,
                is_abstract,
                ..
            } => {
                write_access(f, *access)?;
                if *is_abstract {
                    write!(f, " abstract")?;
                }
            }
            CursorKind::Union { access, .. }
            | CursorKind::Enum { access, .. }
            | CursorKind::ConversionFunction { access, .. }
            | CursorKind::BaseSpecifier { access, .. }
            | CursorKind::AccessSpecifier { access } => write_access(f, *access)?,
            CursorKind::Field { access, ty, .. } => {
                write_access(f, *access)?;
                write!(f, " : {ty:?}")?;
            }
            CursorKind::Typedef {
                access, underlying, ..
            }
            | CursorKind::TypeAlias {
                access, underlying, ..
            } => {
                write_access(f, *access)?;
                write!(f, " = {underlying:?}")?;
            }
            CursorKind::Function {
                display_name,
                return_type,
                ..
            } => write!(f, " ({display_name}) -> {return_type:?}")?,
            CursorKind::Method {
                access,
                virtuality,
                return_type,
                is_static,
                is_const,
                ..
            } => {
                write_access(f, *access)?;
                write_virtuality(f, *virtuality)?;
                if *is_static {
                    write!(f, " static")?;
                }
                if *is_const {
                    write!(f, " const")?;
                }
                write!(f, " -> {return_type:?}")?;
            }
            CursorKind::Constructor {
                constructor_type,
                access,
                ..
            } => {
                write_access(f, *access)?;
                write!(f, " {constructor_type:?}")?;
            }
            CursorKind::Destructor {
                access, virtuality, ..
            } => {
                write_access(f, *access)?;
                write_virtuality(f, *virtuality)?;
            }
            CursorKind::Variable { ty, .. }
            | CursorKind::Parameter { ty, .. }
            | CursorKind::CStyleCast { ty } => write!(f, " : {ty:?}")?,
            CursorKind::NotSupported { cursor_kind, .. } => {
                write!(f, " (cursor kind {cursor_kind})")?
            }
            _ => {}
        }
        Ok(())
    }
}

fn write_access(f: &mut fmt::Formatter<'_>, access: AccessSpecifierType) -> fmt::Result {
    match access {
        AccessSpecifierType::Invalid => Ok(()),
        AccessSpecifierType::Public => write!(f, " public"),
        AccessSpecifierType::Protected => write!(f, " protected"),
        AccessSpecifierType::Private => write!(f, " private"),
    }
}

fn write_virtuality(f: &mut fmt::Formatter<'_>, virtuality: Virtuality) -> fmt::Result {
    match virtuality {
        Virtuality::NonVirtual => Ok(()),
        Virtuality::Virtual => write!(f, " virtual"),
        Virtuality::PureVirtual => write!(f, " pure-virtual"),
    }
}

/// Copy a `CXString` into an owned `String` and dispose it
pub(crate) fn into_owned_string(cx_string: CXString) -> String {
    unsafe {
        let raw = clang_getCString(cx_string);
        let owned = if raw.is_null() {
            String::new()
        } else {
            CStr::from_ptr(raw).to_string_lossy().into_owned()
        };
        clang_disposeString(cx_string);
        owned
    }
}

fn access_of(cursor: CXCursor) -> AccessSpecifierType {
    unsafe { clang_getCXXAccessSpecifier(cursor) }.into()
}

fn type_of(cursor: CXCursor) -> CursorType {
    unsafe { clang_getCursorType(cursor).kind }.into()
}

fn return_type_of(cursor: CXCursor) -> CursorType {
    unsafe { clang_getCursorResultType(cursor).kind }.into()
}

fn canonical_return_type_of(cursor: CXCursor) -> CursorType {
    unsafe { clang_getCanonicalType(clang_getCursorResultType(cursor)).kind }.into()
}

fn underlying_type_of(cursor: CXCursor) -> CursorType {
    unsafe { clang_getTypedefDeclUnderlyingType(cursor).kind }.into()
}

fn is_abstract(cursor: CXCursor) -> bool {
    unsafe { clang_CXXRecord_isAbstract(cursor) != 0 }
}

fn virtuality_of(cursor: CXCursor) -> Virtuality {
    unsafe {
        if clang_CXXMethod_isPureVirtual(cursor) != 0 {
            Virtuality::PureVirtual
        } else if clang_CXXMethod_isVirtual(cursor) != 0 {
            Virtuality::Virtual
        } else {
            Virtuality::NonVirtual
        }
    }
}

fn constructor_type_of(cursor: CXCursor) -> ConstructorType {
    unsafe {
        if clang_CXXConstructor_isCopyConstructor(cursor) != 0 {
            ConstructorType::Copy
        } else if clang_CXXConstructor_isMoveConstructor(cursor) != 0 {
            ConstructorType::Move
        } else if clang_CXXConstructor_isDefaultConstructor(cursor) != 0 {
            ConstructorType::Default
        } else if clang_CXXConstructor_isConvertingConstructor(cursor) != 0 {
            ConstructorType::Converting
        } else {
            ConstructorType::None
        }
    }
}
