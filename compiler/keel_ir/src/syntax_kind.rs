//! Node kinds of the concrete syntax tree.

use std::fmt;

/// Closed set of node shapes. Every tree node carries exactly one.
///
/// Grouped roughly as the grammar is: compilation unit and namespaces, type
/// declarations and their clauses, members, statements, expressions, types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SyntaxKind {
    // Compilation unit
    CompilationUnit,
    UsingDirective,
    NameEquals,
    NamespaceDeclaration,
    FileScopedNamespaceDeclaration,
    GlobalStatement,

    // Type declarations
    ClassDeclaration,
    StructDeclaration,
    InterfaceDeclaration,
    RecordDeclaration,
    RecordStructDeclaration,
    EnumDeclaration,
    EnumMemberDeclaration,
    DelegateDeclaration,
    ExtensionDeclaration,

    // Declaration clauses
    AttributeList,
    AttributeTargetSpecifier,
    Attribute,
    AttributeArgumentList,
    AttributeArgument,
    TypeParameterList,
    TypeParameter,
    ParameterList,
    BracketedParameterList,
    Parameter,
    EqualsValueClause,
    ForType,
    BaseList,
    SimpleBaseType,
    PrimaryConstructorBaseType,
    TypeParameterConstraintClause,
    ClassConstraint,
    StructConstraint,
    ConstructorConstraint,
    TypeConstraint,
    AllowsConstraintClause,
    RefStructConstraint,

    // Members
    FieldDeclaration,
    EventFieldDeclaration,
    VariableDeclaration,
    VariableDeclarator,
    MethodDeclaration,
    ConstructorDeclaration,
    ConstructorInitializer,
    DestructorDeclaration,
    PropertyDeclaration,
    IndexerDeclaration,
    AccessorList,
    AccessorDeclaration,
    ArrowExpressionClause,
    OperatorDeclaration,
    ConversionOperatorDeclaration,
    IncompleteMember,

    // Statements
    Block,
    LocalDeclarationStatement,
    LocalFunctionStatement,
    ExpressionStatement,
    EmptyStatement,
    IfStatement,
    ElseClause,
    WhileStatement,
    DoStatement,
    ForStatement,
    ForEachStatement,
    ReturnStatement,
    BreakStatement,
    ContinueStatement,
    ThrowStatement,
    GotoStatement,
    TryStatement,
    CatchClause,
    CatchDeclaration,
    CatchFilterClause,
    FinallyClause,
    SwitchStatement,
    SwitchSection,
    CaseSwitchLabel,
    DefaultSwitchLabel,
    YieldReturnStatement,
    YieldBreakStatement,
    UnsafeStatement,
    CheckedStatement,
    UncheckedStatement,
    LockStatement,
    UsingStatement,
    LabeledStatement,

    // Expressions
    LiteralExpression,
    ThisExpression,
    BaseExpression,
    ParenthesizedExpression,
    TupleExpression,
    ArgumentList,
    BracketedArgumentList,
    Argument,
    InvocationExpression,
    ElementAccessExpression,
    MemberAccessExpression,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    AwaitExpression,
    CastExpression,
    BinaryExpression,
    IsExpression,
    AsExpression,
    AssignmentExpression,
    ConditionalExpression,
    RangeExpression,
    ObjectCreationExpression,
    ImplicitObjectCreationExpression,
    ArrayCreationExpression,
    ImplicitArrayCreationExpression,
    InitializerExpression,
    TypeOfExpression,
    DefaultExpression,
    SizeOfExpression,
    CheckedExpression,
    CollectionExpression,
    ExpressionElement,
    SpreadElement,
    WithElement,
    SimpleLambdaExpression,
    ParenthesizedLambdaExpression,
    ThrowExpression,

    // Names and types
    IdentifierName,
    GenericName,
    TypeArgumentList,
    QualifiedName,
    AliasQualifiedName,
    PredefinedType,
    ArrayType,
    ArrayRankSpecifier,
    OmittedArraySizeExpression,
    NullableType,
    TupleType,
    TupleElement,
    RefType,
}

impl SyntaxKind {
    pub fn is_type_declaration(self) -> bool {
        matches!(
            self,
            SyntaxKind::ClassDeclaration
                | SyntaxKind::StructDeclaration
                | SyntaxKind::InterfaceDeclaration
                | SyntaxKind::RecordDeclaration
                | SyntaxKind::RecordStructDeclaration
                | SyntaxKind::EnumDeclaration
                | SyntaxKind::DelegateDeclaration
                | SyntaxKind::ExtensionDeclaration
        )
    }

    pub fn is_namespace_declaration(self) -> bool {
        matches!(
            self,
            SyntaxKind::NamespaceDeclaration | SyntaxKind::FileScopedNamespaceDeclaration
        )
    }

    pub fn is_member_declaration(self) -> bool {
        self.is_type_declaration()
            || matches!(
                self,
                SyntaxKind::FieldDeclaration
                    | SyntaxKind::EventFieldDeclaration
                    | SyntaxKind::MethodDeclaration
                    | SyntaxKind::ConstructorDeclaration
                    | SyntaxKind::DestructorDeclaration
                    | SyntaxKind::PropertyDeclaration
                    | SyntaxKind::IndexerDeclaration
                    | SyntaxKind::OperatorDeclaration
                    | SyntaxKind::ConversionOperatorDeclaration
                    | SyntaxKind::IncompleteMember
            )
    }

    pub fn is_statement(self) -> bool {
        matches!(
            self,
            SyntaxKind::Block
                | SyntaxKind::LocalDeclarationStatement
                | SyntaxKind::LocalFunctionStatement
                | SyntaxKind::ExpressionStatement
                | SyntaxKind::EmptyStatement
                | SyntaxKind::IfStatement
                | SyntaxKind::WhileStatement
                | SyntaxKind::DoStatement
                | SyntaxKind::ForStatement
                | SyntaxKind::ForEachStatement
                | SyntaxKind::ReturnStatement
                | SyntaxKind::BreakStatement
                | SyntaxKind::ContinueStatement
                | SyntaxKind::ThrowStatement
                | SyntaxKind::GotoStatement
                | SyntaxKind::TryStatement
                | SyntaxKind::SwitchStatement
                | SyntaxKind::YieldReturnStatement
                | SyntaxKind::YieldBreakStatement
                | SyntaxKind::UnsafeStatement
                | SyntaxKind::CheckedStatement
                | SyntaxKind::UncheckedStatement
                | SyntaxKind::LockStatement
                | SyntaxKind::UsingStatement
                | SyntaxKind::LabeledStatement
        )
    }

    pub fn is_type(self) -> bool {
        matches!(
            self,
            SyntaxKind::IdentifierName
                | SyntaxKind::GenericName
                | SyntaxKind::QualifiedName
                | SyntaxKind::AliasQualifiedName
                | SyntaxKind::PredefinedType
                | SyntaxKind::ArrayType
                | SyntaxKind::NullableType
                | SyntaxKind::TupleType
                | SyntaxKind::RefType
        )
    }

    pub fn is_collection_element(self) -> bool {
        matches!(
            self,
            SyntaxKind::ExpressionElement | SyntaxKind::SpreadElement | SyntaxKind::WithElement
        )
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
