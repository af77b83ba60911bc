#![forbid(unsafe_code)]
#![deny(unused_must_use, missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Generate C# interfaces that mirror the public instance API of a class.
//!
//! The input is a pre-resolved [`TypeDescriptor`]; the output is interface
//! source text. Generation is a pure function of its input: no I/O, no shared
//! state, and calls may run in parallel.
//!
//! ```
//! use ifacegen_core::{Member, Property, TypeDescriptor, TypeSig, generate};
//!
//! let mut widget = TypeDescriptor::class("Acme", "Widget");
//! widget
//!     .members
//!     .push(Member::Property(Property::new("Name", TypeSig::reference("string"))));
//!
//! let code = generate(&widget);
//! assert!(code.contains("public partial interface IWidget"));
//! assert!(code.contains("string Name { get; set; }"));
//! ```

pub mod config;
pub mod extract;
mod generator;
pub mod load;
pub mod model;
pub mod render;

pub use config::{ConfigError, GeneratorConfig};
pub use extract::{ClassifiedMembers, extract};
pub use generator::{generate, generate_artifact, generate_with};
pub use load::{LoadError, read_descriptors};
pub use model::{
    Accessibility, Ancestor, Declaration, DeclarationKind, DefaultValue, Event, ImportScope,
    Member, Method, MethodKind, Parameter, Property, Trivia, TriviaKind, TypeDescriptor,
    TypeParameter, TypeSig,
};
pub use render::{Emit, EmitOptions, InterfaceArtifact};
