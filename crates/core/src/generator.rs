//! Interface generator entry points.
//!
//! The pipeline is:
//! 1. Extract: TypeDescriptor -> ClassifiedMembers (exposure rules)
//! 2. Lower: ClassifiedMembers -> InterfaceArtifact (rendering rules)
//! 3. Emit: InterfaceArtifact -> String

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::extract::extract;
use crate::model::TypeDescriptor;
use crate::render::{EmitOptions, InterfaceArtifact, lower};

/// Generate interface source for `ty` with the default configuration.
///
/// Returns an empty string when `ty` is not declared as a class.
pub fn generate(ty: &TypeDescriptor) -> String {
    generate_with(ty, &GeneratorConfig::default())
}

/// Generate interface source for `ty`.
///
/// Returns an empty string when `ty` is not declared as a class.
pub fn generate_with(ty: &TypeDescriptor, config: &GeneratorConfig) -> String {
    let Some(artifact) = generate_artifact(ty, config) else {
        return String::new();
    };
    let code = artifact.emit_with(&EmitOptions::from(config));
    debug!(
        interface = %artifact.name,
        members = artifact.members.len(),
        nullable = artifact.requires_nullable_context,
        code_len = code.len(),
        "Generated interface."
    );
    code
}

/// Build the interface IR without emitting it.
pub fn generate_artifact(
    ty: &TypeDescriptor,
    config: &GeneratorConfig,
) -> Option<InterfaceArtifact> {
    let members = extract(ty, config)?;
    Some(lower(ty, &members, config))
}
