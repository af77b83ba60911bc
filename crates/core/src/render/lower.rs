//! Lowering from classified members to the interface IR.
//!
//! All rendering decisions (type text, default values, accessors, nullable
//! context, documentation and imports) are made here. The resulting
//! `InterfaceArtifact` is assembled once and handed to emission untouched.

use crate::config::GeneratorConfig;
use crate::extract::ClassifiedMembers;
use crate::model::{DefaultValue, Event, Method, Parameter, Property, TypeDescriptor};

use super::types::{
    Accessors, DefaultExpr, EventDecl, InterfaceArtifact, MemberDecl, MethodDecl, ParamDecl,
    PropertyDecl,
};
use super::utils::{collect_imports, documentation_lines, generic_clause};

/// Interface name for a class name.
pub fn interface_name(class_name: &str) -> String {
    format!("I{class_name}")
}

/// Build the interface artifact for `ty` from its classified members.
pub fn lower(
    ty: &TypeDescriptor,
    members: &ClassifiedMembers,
    config: &GeneratorConfig,
) -> InterfaceArtifact {
    let mut decls = Vec::with_capacity(members.len());
    decls.extend(members.properties.iter().filter_map(lower_property));
    decls.extend(members.methods.iter().map(lower_method).map(MemberDecl::Method));
    decls.extend(members.events.iter().map(lower_event).map(MemberDecl::Event));

    let requires_nullable_context = members
        .properties
        .iter()
        .any(|p| p.ty.nullable && property_accessors(p).is_some())
        || members.methods.iter().any(method_uses_nullable)
        || members.events.iter().any(|e| e.handler_type.nullable);

    InterfaceArtifact {
        namespace: ty.namespace.trim().to_string(),
        name: interface_name(&ty.name),
        generics: generic_clause(&ty.type_parameters),
        imports: collect_imports(&ty.declarations, config.dedup_imports),
        documentation: ty
            .primary_declaration()
            .map(documentation_lines)
            .unwrap_or_default(),
        members: decls,
        requires_nullable_context,
    }
}

fn method_uses_nullable(method: &Method) -> bool {
    method.return_type.nullable || method.parameters.iter().any(|p| p.ty.nullable)
}

/// `None` when the property has no public accessor and is not rendered.
fn property_accessors(prop: &Property) -> Option<Accessors> {
    Accessors::from_flags(prop.has_public_getter, prop.has_public_setter)
}

fn lower_property(prop: &Property) -> Option<MemberDecl> {
    let accessors = property_accessors(prop)?;
    Some(MemberDecl::Property(PropertyDecl {
        name: prop.name.clone(),
        ty: prop.ty.display(),
        accessors,
    }))
}

fn lower_method(method: &Method) -> MethodDecl {
    MethodDecl {
        name: method.name.clone(),
        return_type: method.return_type.display(),
        generics: generic_clause(&method.type_parameters),
        params: method.parameters.iter().map(lower_param).collect(),
    }
}

fn lower_param(param: &Parameter) -> ParamDecl {
    let ty = param.ty.display();
    let default = param.default_value.as_ref().map(|value| match value {
        DefaultValue::String(s) => DefaultExpr::String(s.clone()),
        DefaultValue::Null if param.ty.is_value_type => DefaultExpr::ZeroValue(ty.clone()),
        DefaultValue::Null => DefaultExpr::Null,
        DefaultValue::Literal(text) => DefaultExpr::Literal(text.clone()),
    });
    ParamDecl {
        name: param.name.clone(),
        ty,
        default,
    }
}

fn lower_event(event: &Event) -> EventDecl {
    EventDecl {
        name: event.name.clone(),
        handler_type: event.handler_type.display(),
    }
}
