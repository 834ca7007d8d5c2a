//! Common test utilities for building journey definitions.
use keiro::error::GraphLoadError;
use keiro::prelude::*;

/// Builds a form with the given `(key, type)` field declarations.
#[allow(dead_code)]
pub fn form(id: &str, name: &str, fields: &[(&str, &str)]) -> FormDefinition {
    FormDefinition {
        id: id.to_string(),
        name: name.to_string(),
        fields: fields
            .iter()
            .map(|(key, field_type)| FieldDefinition {
                key: key.to_string(),
                field_type: field_type.to_string(),
                title: None,
            })
            .collect(),
    }
}

/// Builds a form-backed node.
#[allow(dead_code)]
pub fn node(id: &str, component_id: &str) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        node_type: "form".to_string(),
        position: Position::default(),
        component_id: component_id.to_string(),
        label: format!("Step {}", id),
        attributes: Default::default(),
    }
}

#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> EdgeDefinition {
    EdgeDefinition {
        source: source.to_string(),
        target: target.to_string(),
    }
}

/// Linear chain `A -> B -> C` with forms FA, FB, FC respectively assigned.
#[allow(dead_code)]
pub fn create_linear_journey() -> JourneyDefinition {
    JourneyDefinition {
        nodes: vec![node("A", "FA"), node("B", "FB"), node("C", "FC")],
        edges: vec![edge("A", "B"), edge("B", "C")],
        forms: vec![
            form("FA", "Form A", &[("email", "string"), ("name", "string")]),
            form("FB", "Form B", &[("notes", "string")]),
            form("FC", "Form C", &[("email", "string"), ("completed_at", "string")]),
        ],
        ..Default::default()
    }
}

/// Diamond `A -> B`, `A -> C`, `B -> D`, `C -> D` with forms FA..FD.
#[allow(dead_code)]
pub fn create_diamond_journey() -> JourneyDefinition {
    JourneyDefinition {
        nodes: vec![
            node("A", "FA"),
            node("B", "FB"),
            node("C", "FC"),
            node("D", "FD"),
        ],
        edges: vec![
            edge("A", "B"),
            edge("A", "C"),
            edge("B", "D"),
            edge("C", "D"),
        ],
        forms: vec![
            form("FA", "Form A", &[("email", "string")]),
            form("FB", "Form B", &[("notes", "string")]),
            form("FC", "Form C", &[("name", "string")]),
            form("FD", "Form D", &[("summary", "string")]),
        ],
        ..Default::default()
    }
}

/// Two-node cycle `A -> B`, `B -> A`.
#[allow(dead_code)]
pub fn create_cyclic_journey() -> JourneyDefinition {
    JourneyDefinition {
        nodes: vec![node("A", "FA"), node("B", "FB")],
        edges: vec![edge("A", "B"), edge("B", "A")],
        forms: vec![
            form("FA", "Form A", &[("email", "string")]),
            form("FB", "Form B", &[("notes", "string")]),
        ],
        ..Default::default()
    }
}

/// A `GraphSource` that always yields a clone of a prebuilt journey.
#[allow(dead_code)]
pub struct StaticSource(pub JourneyDefinition);

impl GraphSource for StaticSource {
    fn fetch_graph(&self) -> std::result::Result<JourneyDefinition, GraphLoadError> {
        Ok(self.0.clone())
    }
}

/// A `GraphSource` that always fails, simulating an unreachable service.
#[allow(dead_code)]
pub struct FailingSource;

impl GraphSource for FailingSource {
    fn fetch_graph(&self) -> std::result::Result<JourneyDefinition, GraphLoadError> {
        Err(GraphLoadError::JsonParse("service unreachable".to_string()))
    }
}

/// Ids of a dependency list, for order-sensitive assertions.
#[allow(dead_code)]
pub fn form_ids(forms: &[&FormDefinition]) -> Vec<String> {
    forms.iter().map(|f| f.id.clone()).collect()
}
