/// The complete, canonical definition of a journey graph, ready for editing.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default)]
pub struct JourneyDefinition {
    pub nodes: Vec<NodeDefinition>,
    pub edges: Vec<EdgeDefinition>,
    pub forms: Vec<FormDefinition>,
    /// Branch definitions carried through unmodified for the external runtime.
    pub branches: Vec<serde_json::Value>,
    /// Trigger endpoint definitions carried through unmodified.
    pub triggers: Vec<serde_json::Value>,
    /// Top-level response keys not modeled here (blueprint name, tenant, ...),
    /// in their original order.
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl JourneyDefinition {
    /// Looks up a form by id.
    pub fn form(&self, form_id: &str) -> Option<&FormDefinition> {
        self.forms.iter().find(|f| f.id == form_id)
    }

    /// Looks up a node by id.
    pub fn node(&self, node_id: &str) -> Option<&NodeDefinition> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    /// Resolves the form a node renders, via its `component_id`.
    pub fn form_of(&self, node: &NodeDefinition) -> Option<&FormDefinition> {
        self.form(&node.component_id)
    }
}

/// Defines a single step in the journey, backed by a reusable form.
#[derive(Debug, Clone)]
pub struct NodeDefinition {
    pub id: String,
    /// Render-type tag (the original data uses `"form"` throughout).
    pub node_type: String,
    /// Display-only canvas position; not semantically load-bearing.
    pub position: Position,
    /// Id of the `FormDefinition` this node renders. A node id is independent
    /// of its form id; many nodes may reference the same reusable form.
    pub component_id: String,
    /// Human-readable step name.
    pub label: String,
    /// Workflow-configuration attributes (approval rules, prerequisites, SLA
    /// config, ...) the core never interprets, in their original key order.
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

/// A 2D canvas position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Defines a directed connection between two nodes. Multiple edges between
/// the same pair are permitted and never deduplicated.
#[derive(Debug, Clone)]
pub struct EdgeDefinition {
    pub source: String,
    pub target: String,
}

/// A reusable field schema definition that nodes render and collect.
#[derive(Debug, Clone)]
pub struct FormDefinition {
    pub id: String,
    pub name: String,
    /// Declared fields in schema order.
    pub fields: Vec<FieldDefinition>,
}

impl FormDefinition {
    /// Looks up a declared field by key.
    pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.key == key)
    }
}

/// A single declared field of a form.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    pub key: String,
    pub field_type: String,
    pub title: Option<String>,
}
