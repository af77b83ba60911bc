//! C# code emission via the Emit trait.
//!
//! Leaf nodes (parameters, defaults, member signatures) implement `Emit`
//! directly. The artifact itself needs layout options, so it is emitted with
//! `InterfaceArtifact::emit_with`; its `Emit` impl uses the defaults.

use crate::config::GeneratorConfig;

use super::types::{
    Accessors, DefaultExpr, EventDecl, GenericClause, InterfaceArtifact, MemberDecl, MethodDecl,
    ParamDecl, PropertyDecl,
};
use super::utils::{INHERITDOC, escape_cs_string};

/// Trait for emitting C# code from IR nodes.
pub trait Emit {
    /// Convert the node to its C# string representation.
    fn emit(&self) -> String;
}

/// Layout options for artifact emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    /// Spaces per indentation level.
    pub indent: u8,
    /// Emit `#nullable enable` when the artifact requires a nullable context.
    pub nullable_directive: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self::from(&GeneratorConfig::default())
    }
}

impl From<&GeneratorConfig> for EmitOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            indent: config.indent,
            nullable_directive: config.nullable_directive,
        }
    }
}

// =============================================================================
// Generics and Parameters
// =============================================================================

impl Emit for GenericClause {
    fn emit(&self) -> String {
        format!("{} {}", self.params, self.constraints)
            .trim()
            .to_string()
    }
}

impl Emit for DefaultExpr {
    fn emit(&self) -> String {
        match self {
            DefaultExpr::String(s) => format!("\"{}\"", escape_cs_string(s)),
            DefaultExpr::ZeroValue(ty) => format!("default({ty})"),
            DefaultExpr::Null => "null".to_string(),
            DefaultExpr::Literal(text) => text.clone(),
        }
    }
}

impl Emit for ParamDecl {
    fn emit(&self) -> String {
        match &self.default {
            Some(default) => format!("{} {} = {}", self.ty, self.name, default.emit()),
            None => format!("{} {}", self.ty, self.name),
        }
    }
}

// =============================================================================
// Members
// =============================================================================

impl Emit for Accessors {
    fn emit(&self) -> String {
        match self {
            Accessors::GetSet => "{ get; set; }".to_string(),
            Accessors::Get => "{ get; }".to_string(),
            Accessors::Set => "{ set; }".to_string(),
        }
    }
}

impl Emit for PropertyDecl {
    fn emit(&self) -> String {
        format!("{} {} {}", self.ty, self.name, self.accessors.emit())
    }
}

impl Emit for MethodDecl {
    fn emit(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| p.emit())
            .collect::<Vec<_>>()
            .join(", ");
        let constraints = if self.generics.constraints.is_empty() {
            String::new()
        } else {
            format!(" {}", self.generics.constraints)
        };
        format!(
            "{} {}{}({}){};",
            self.return_type, self.name, self.generics.params, params, constraints
        )
    }
}

impl Emit for EventDecl {
    fn emit(&self) -> String {
        format!("event {} {};", self.handler_type, self.name)
    }
}

impl Emit for MemberDecl {
    fn emit(&self) -> String {
        match self {
            MemberDecl::Property(p) => p.emit(),
            MemberDecl::Method(m) => m.emit(),
            MemberDecl::Event(e) => e.emit(),
        }
    }
}

// =============================================================================
// Interface
// =============================================================================

impl Emit for InterfaceArtifact {
    fn emit(&self) -> String {
        self.emit_with(&EmitOptions::default())
    }
}

impl InterfaceArtifact {
    /// Interface declaration line, e.g. `public partial interface IBox<T> where T : notnull`.
    pub fn declaration(&self) -> String {
        format!("public partial interface {}{}", self.name, self.generics.emit())
    }

    /// Emit the full source file.
    pub fn emit_with(&self, options: &EmitOptions) -> String {
        let unit = " ".repeat(usize::from(options.indent));
        let has_namespace = !self.namespace.is_empty();
        let outer = if has_namespace { unit.clone() } else { String::new() };
        let inner = format!("{outer}{unit}");

        let mut output = String::new();

        for import in &self.imports {
            output.push_str(import);
            output.push('\n');
        }
        if !self.imports.is_empty() {
            output.push('\n');
        }

        if self.requires_nullable_context && options.nullable_directive {
            output.push_str("#nullable enable\n\n");
        }

        if has_namespace {
            output.push_str(&format!("namespace {}\n{{\n", self.namespace));
        }

        for line in &self.documentation {
            output.push_str(&format!("{outer}{line}\n"));
        }

        output.push_str(&format!("{outer}{}\n{outer}{{\n", self.declaration()));

        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&format!("{inner}{INHERITDOC}\n"));
            output.push_str(&format!("{inner}{}\n", member.emit()));
        }

        output.push_str(&format!("{outer}}}\n"));

        if has_namespace {
            output.push_str("}\n");
        }

        output
    }
}

// =============================================================================
// Tests
// =============================================================================
