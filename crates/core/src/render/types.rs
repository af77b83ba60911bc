//! C# interface IR.
//!
//! This module defines the rendered shape of an interface:
//! - InterfaceArtifact: the whole file (imports, namespace, declaration)
//! - MemberDecl: property, method and event declarations
//! - ParamDecl / DefaultExpr: method parameters and their default values
//!
//! Every type name in here is already final text; the only decisions left
//! for emission are layout and indentation.

/// Generic parameter list and constraint clauses, both verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericClause {
    /// `<T, U>` or empty.
    pub params: String,
    /// `where T : notnull where U : class` or empty.
    pub constraints: String,
}

impl GenericClause {
    /// Whether there are no type parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Property accessor combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessors {
    /// `{ get; set; }`
    GetSet,
    /// `{ get; }`
    Get,
    /// `{ set; }`
    Set,
}

impl Accessors {
    /// Accessors for a pair of public visibility flags.
    ///
    /// Returns `None` when neither accessor is public.
    pub fn from_flags(get: bool, set: bool) -> Option<Self> {
        match (get, set) {
            (true, true) => Some(Accessors::GetSet),
            (true, false) => Some(Accessors::Get),
            (false, true) => Some(Accessors::Set),
            (false, false) => None,
        }
    }
}

/// Property declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    /// Property name.
    pub name: String,
    /// Rendered property type, including any `?`.
    pub ty: String,
    /// Public accessors.
    pub accessors: Accessors,
}

/// Rendered default value of a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultExpr {
    /// Quoted string constant (stored unescaped).
    String(String),
    /// `default(T)` for the given value type.
    ZeroValue(String),
    /// `null`
    Null,
    /// Verbatim literal text.
    Literal(String),
}

/// Method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    /// Parameter name.
    pub name: String,
    /// Rendered parameter type.
    pub ty: String,
    /// Explicit default value, if any.
    pub default: Option<DefaultExpr>,
}

/// Method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    /// Method name.
    pub name: String,
    /// Rendered return type.
    pub return_type: String,
    /// Method type parameters and constraints.
    pub generics: GenericClause,
    /// Parameters in declaration order.
    pub params: Vec<ParamDecl>,
}

/// Event declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDecl {
    /// Event name.
    pub name: String,
    /// Rendered delegate type.
    pub handler_type: String,
}

/// Interface member declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberDecl {
    /// Property declaration.
    Property(PropertyDecl),
    /// Method declaration.
    Method(MethodDecl),
    /// Event declaration.
    Event(EventDecl),
}

/// A complete interface, ready for emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceArtifact {
    /// Namespace; empty means the global namespace.
    pub namespace: String,
    /// Interface name, `I` + class name.
    pub name: String,
    /// Class type parameters and constraints.
    pub generics: GenericClause,
    /// Import directives, verbatim.
    pub imports: Vec<String>,
    /// Documentation comment lines for the interface, each starting with a
    /// comment marker.
    pub documentation: Vec<String>,
    /// Members: properties, then methods, then events.
    pub members: Vec<MemberDecl>,
    /// Whether any member signature carries a nullable annotation.
    pub requires_nullable_context: bool,
}

impl InterfaceArtifact {
    /// Number of properties, methods and events.
    pub fn member_counts(&self) -> (usize, usize, usize) {
        self.members
            .iter()
            .fold((0, 0, 0), |(p, m, e), member| match member {
                MemberDecl::Property(_) => (p + 1, m, e),
                MemberDecl::Method(_) => (p, m + 1, e),
                MemberDecl::Event(_) => (p, m, e + 1),
            })
    }
}
