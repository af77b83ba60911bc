//! Interface rendering.
//!
//! Two steps, mirroring a small compiler back end:
//! 1. Lowering: classified members + type metadata -> `InterfaceArtifact`
//! 2. Emission: `InterfaceArtifact` -> C# source text via the `Emit` trait
//!
//! ## Module Structure
//!
//! - `types`: interface IR (InterfaceArtifact, MemberDecl, ParamDecl, ...)
//! - `lower`: signature, default value, nullability and documentation rules
//! - `emit`: IR -> code strings
//! - `utils`: escaping, generic clauses, documentation and import helpers

mod emit;
mod lower;
mod types;
pub mod utils;

pub use emit::{Emit, EmitOptions};
pub use lower::{interface_name, lower};
pub use types::{
    Accessors, DefaultExpr, EventDecl, GenericClause, InterfaceArtifact, MemberDecl, MethodDecl,
    ParamDecl, PropertyDecl,
};
