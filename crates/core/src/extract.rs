//! Member extraction.
//!
//! Walks the members declared on a class and on each of its base types
//! (except the root object type) and keeps the ones an interface can expose:
//! - Properties: public, instance, not an indexer
//! - Methods: public, instance, ordinary, not owned by the root object type
//! - Events: public, instance
//!
//! A member reached again further up the chain (override or hiding) keeps
//! the position of its first, most derived occurrence.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::model::{DeclarationKind, Event, Member, Method, MethodKind, Property, TypeDescriptor};

/// Members eligible for the interface, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedMembers {
    /// Exposed properties.
    pub properties: Vec<Property>,
    /// Exposed methods.
    pub methods: Vec<Method>,
    /// Exposed events.
    pub events: Vec<Event>,
}

impl ClassifiedMembers {
    /// Total number of exposed members.
    pub fn len(&self) -> usize {
        self.properties.len() + self.methods.len() + self.events.len()
    }

    /// Whether nothing is exposed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Whether the descriptor's primary declaration is a class.
pub fn is_class_shaped(ty: &TypeDescriptor) -> bool {
    ty.primary_declaration()
        .is_some_and(|decl| decl.kind == DeclarationKind::Class)
}

/// Classify the members of `ty`.
///
/// Returns `None` when the type is not declared as a class.
pub fn extract(ty: &TypeDescriptor, config: &GeneratorConfig) -> Option<ClassifiedMembers> {
    if !is_class_shaped(ty) {
        debug!(name = %ty.name, "Skipping type that is not declared as a class.");
        return None;
    }

    let mut collector = Collector::new(config);
    collector.visit(&ty.members);
    for ancestor in &ty.ancestors {
        if config.is_root_object(&ancestor.name) {
            debug!(ancestor = %ancestor.name, "Skipping root object members.");
            continue;
        }
        collector.visit(&ancestor.members);
    }

    let members = collector.finish();
    debug!(
        name = %ty.name,
        properties = members.properties.len(),
        methods = members.methods.len(),
        events = members.events.len(),
        "Classified members."
    );
    Some(members)
}

struct Collector<'a> {
    config: &'a GeneratorConfig,
    properties: Vec<Property>,
    property_index: HashMap<String, usize>,
    methods: Vec<Method>,
    method_keys: HashSet<String>,
    events: Vec<Event>,
    event_names: HashSet<String>,
}

impl<'a> Collector<'a> {
    fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            properties: Vec::new(),
            property_index: HashMap::new(),
            methods: Vec::new(),
            method_keys: HashSet::new(),
            events: Vec::new(),
            event_names: HashSet::new(),
        }
    }

    fn visit(&mut self, members: &[Member]) {
        for member in members {
            match member {
                Member::Property(prop) if is_exposed_property(prop) => self.add_property(prop),
                Member::Method(method) if self.is_exposed_method(method) => self.add_method(method),
                Member::Event(event) if is_exposed_event(event) => self.add_event(event),
                _ => {}
            }
        }
    }

    fn add_property(&mut self, prop: &Property) {
        if let Some(&index) = self.property_index.get(&prop.name) {
            // Most permissive accessor combination wins
            let existing = &mut self.properties[index];
            existing.has_public_getter |= prop.has_public_getter;
            existing.has_public_setter |= prop.has_public_setter;
            return;
        }
        self.property_index
            .insert(prop.name.clone(), self.properties.len());
        self.properties.push(prop.clone());
    }

    fn is_exposed_method(&self, method: &Method) -> bool {
        method.accessibility.is_public()
            && !method.is_static
            && method.method_kind == MethodKind::Ordinary
            && !method
                .declaring_type
                .as_deref()
                .is_some_and(|owner| self.config.is_root_object(owner))
            && !method
                .overridden_from
                .as_deref()
                .is_some_and(|owner| self.config.is_root_object(owner))
    }

    fn add_method(&mut self, method: &Method) {
        if self.method_keys.insert(method_identity(method)) {
            self.methods.push(method.clone());
        }
    }

    fn add_event(&mut self, event: &Event) {
        if self.event_names.insert(event.name.clone()) {
            self.events.push(event.clone());
        }
    }

    fn finish(self) -> ClassifiedMembers {
        let properties = self
            .properties
            .into_iter()
            .filter(|prop| prop.has_public_getter || prop.has_public_setter)
            .collect();
        ClassifiedMembers {
            properties,
            methods: self.methods,
            events: self.events,
        }
    }
}

fn is_exposed_property(prop: &Property) -> bool {
    prop.accessibility.is_public() && !prop.is_static && !prop.is_indexer
}

fn is_exposed_event(event: &Event) -> bool {
    event.accessibility.is_public() && !event.is_static
}

/// Signature identity used to collapse overrides: name, arity and parameter types.
fn method_identity(method: &Method) -> String {
    let params: Vec<String> = method.parameters.iter().map(|p| p.ty.display()).collect();
    format!(
        "{}`{}({})",
        method.name,
        method.type_parameters.len(),
        params.join(",")
    )
}
