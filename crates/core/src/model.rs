//! Resolved type descriptors consumed by the generator.
//!
//! A descriptor is the already-resolved shape of one class: its declarations
//! (for documentation and imports), its own members and the members of each
//! base type in the inheritance chain. The generator never resolves symbols
//! itself; whatever front end produced the descriptor has done that work.
//!
//! All types deserialize from camelCase JSON/YAML documents.

use serde::{Deserialize, Serialize};

/// A fully resolved class-like type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// Fully qualified namespace; empty for the global namespace.
    #[serde(default)]
    pub namespace: String,
    /// Simple name of the class, without generic arguments.
    pub name: String,
    /// Generic parameters in declaration order.
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    /// Partial declarations of the type, primary declaration first.
    #[serde(default)]
    pub declarations: Vec<Declaration>,
    /// Members declared on the type itself.
    #[serde(default)]
    pub members: Vec<Member>,
    /// Base types, nearest first.
    #[serde(default)]
    pub ancestors: Vec<Ancestor>,
}

impl TypeDescriptor {
    /// Create an empty descriptor for a class in the given namespace.
    pub fn class(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            declarations: vec![Declaration::new(DeclarationKind::Class)],
            ..Self::default()
        }
    }

    /// The primary declaration, if any.
    pub fn primary_declaration(&self) -> Option<&Declaration> {
        self.declarations.first()
    }
}

/// A generic type parameter with its verbatim constraint clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeParameter {
    /// Parameter name, e.g. `T`.
    pub name: String,
    /// Full constraint clause, e.g. `where T : notnull`.
    #[serde(default)]
    pub constraint: Option<String>,
}

impl TypeParameter {
    /// Unconstrained type parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
        }
    }

    /// Type parameter with a constraint clause.
    pub fn constrained(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: Some(constraint.into()),
        }
    }
}

/// One syntactic declaration of the type (a class may be partial).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    /// Syntax kind of the declaration.
    pub kind: DeclarationKind,
    /// Trivia immediately preceding the declaration, in source order.
    #[serde(default)]
    pub leading_trivia: Vec<Trivia>,
    /// Import scopes enclosing the declaration, outermost first.
    #[serde(default)]
    pub import_scopes: Vec<ImportScope>,
}

impl Declaration {
    /// Declaration with no trivia and no imports.
    pub fn new(kind: DeclarationKind) -> Self {
        Self {
            kind,
            leading_trivia: Vec::new(),
            import_scopes: Vec::new(),
        }
    }
}

/// Syntax kind of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
    /// `class`
    Class,
    /// `struct`
    Struct,
    /// `record` / `record class`
    Record,
    /// `interface`
    Interface,
    /// `enum`
    Enum,
}

/// A piece of leading trivia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trivia {
    /// Trivia classification.
    pub kind: TriviaKind,
    /// Raw source text.
    pub text: String,
}

impl Trivia {
    /// Documentation comment trivia.
    pub fn doc(text: impl Into<String>) -> Self {
        Self {
            kind: TriviaKind::DocComment,
            text: text.into(),
        }
    }
}

/// Trivia classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriviaKind {
    /// `///` or `/** */` documentation comment.
    DocComment,
    /// Ordinary comment.
    Comment,
    /// Whitespace or line breaks.
    Whitespace,
}

/// Import directives of one enclosing scope (compilation unit or namespace).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportScope {
    /// Verbatim directive texts, e.g. `using System;`.
    #[serde(default)]
    pub imports: Vec<String>,
}

/// A base type in the inheritance chain and the members it declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ancestor {
    /// Fully qualified type name, e.g. `Acme.Shapes.Shape`.
    pub name: String,
    /// Members declared on this base type.
    #[serde(default)]
    pub members: Vec<Member>,
}

/// Declared accessibility of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Accessibility {
    /// `public`
    #[default]
    Public,
    /// `internal`
    Internal,
    /// `protected`
    Protected,
    /// `protected internal`
    ProtectedInternal,
    /// `private protected`
    PrivateProtected,
    /// `private`
    Private,
}

impl Accessibility {
    /// Whether the member is visible as `public`.
    pub fn is_public(self) -> bool {
        matches!(self, Accessibility::Public)
    }
}

/// Textual type signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSig {
    /// Type text without a trailing nullable annotation, e.g. `List<int>`.
    pub name: String,
    /// Whether the type carries a nullable annotation.
    #[serde(default)]
    pub nullable: bool,
    /// Whether the type is a value type.
    #[serde(default)]
    pub is_value_type: bool,
}

impl TypeSig {
    /// Non-nullable reference type.
    pub fn reference(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: false,
            is_value_type: false,
        }
    }

    /// Non-nullable value type.
    pub fn value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: false,
            is_value_type: true,
        }
    }

    /// The same type with a nullable annotation.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Rendered type text, including the `?` annotation when nullable.
    pub fn display(&self) -> String {
        if self.nullable && !self.name.ends_with('?') {
            format!("{}?", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// A class member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Member {
    /// Property or indexer.
    Property(Property),
    /// Method of any kind.
    Method(Method),
    /// Event.
    Event(Event),
}

/// A property or indexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Property type.
    #[serde(rename = "type")]
    pub ty: TypeSig,
    /// Whether a getter exists and is public.
    #[serde(default)]
    pub has_public_getter: bool,
    /// Whether a setter exists and is public.
    #[serde(default)]
    pub has_public_setter: bool,
    /// Indexers are properties with parameters.
    #[serde(default)]
    pub is_indexer: bool,
    /// Static property.
    #[serde(default)]
    pub is_static: bool,
    /// Declared accessibility.
    #[serde(default)]
    pub accessibility: Accessibility,
}

impl Property {
    /// Public instance property with a public getter and setter.
    pub fn new(name: impl Into<String>, ty: TypeSig) -> Self {
        Self {
            name: name.into(),
            ty,
            has_public_getter: true,
            has_public_setter: true,
            is_indexer: false,
            is_static: false,
            accessibility: Accessibility::Public,
        }
    }
}

/// Method kind as reported by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MethodKind {
    /// Plain named method.
    #[default]
    Ordinary,
    /// Instance constructor.
    Constructor,
    /// Static constructor.
    StaticConstructor,
    /// Finalizer.
    Destructor,
    /// Property getter.
    PropertyGet,
    /// Property setter.
    PropertySet,
    /// Event `add` accessor.
    EventAdd,
    /// Event `remove` accessor.
    EventRemove,
    /// User-defined operator.
    Operator,
    /// User-defined conversion.
    Conversion,
    /// Explicit interface implementation.
    ExplicitInterfaceImplementation,
}

/// A method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    /// Method name.
    pub name: String,
    /// Return type; `void` for none.
    pub return_type: TypeSig,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Method type parameters.
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    /// Static method.
    #[serde(default)]
    pub is_static: bool,
    /// Declared accessibility.
    #[serde(default)]
    pub accessibility: Accessibility,
    /// Method kind.
    #[serde(default)]
    pub method_kind: MethodKind,
    /// Type declaring the method when it differs from the listing type.
    #[serde(default)]
    pub declaring_type: Option<String>,
    /// Type owning the original definition when this method overrides one.
    #[serde(default)]
    pub overridden_from: Option<String>,
}

impl Method {
    /// Public ordinary instance method with no parameters.
    pub fn new(name: impl Into<String>, return_type: TypeSig) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters: Vec::new(),
            type_parameters: Vec::new(),
            is_static: false,
            accessibility: Accessibility::Public,
            method_kind: MethodKind::Ordinary,
            declaring_type: None,
            overridden_from: None,
        }
    }

    /// Append a parameter.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter type, including its nullability.
    #[serde(rename = "type")]
    pub ty: TypeSig,
    /// Explicit default value, if declared.
    #[serde(default)]
    pub default_value: Option<DefaultValue>,
}

impl Parameter {
    /// Parameter without a default value.
    pub fn new(name: impl Into<String>, ty: TypeSig) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value: None,
        }
    }

    /// The same parameter with an explicit default.
    pub fn with_default(mut self, value: DefaultValue) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// Explicit default value of a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum DefaultValue {
    /// String constant, unquoted.
    String(String),
    /// `null` or `default`.
    Null,
    /// Any other constant, rendered verbatim (`42`, `true`, `1.5f`).
    Literal(String),
}

/// An event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event name.
    pub name: String,
    /// Handler delegate type.
    pub handler_type: TypeSig,
    /// Static event.
    #[serde(default)]
    pub is_static: bool,
    /// Declared accessibility.
    #[serde(default)]
    pub accessibility: Accessibility,
}

impl Event {
    /// Public instance event.
    pub fn new(name: impl Into<String>, handler_type: TypeSig) -> Self {
        Self {
            name: name.into(),
            handler_type,
            is_static: false,
            accessibility: Accessibility::Public,
        }
    }
}
