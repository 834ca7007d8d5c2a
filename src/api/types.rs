use serde::Deserialize;

/// Full graph payload as returned by the journey data service.
#[derive(Debug, Deserialize)]
pub struct GraphResponse {
    pub nodes: Vec<ApiNode>,
    pub edges: Vec<ApiEdge>,
    pub forms: Vec<ApiForm>,
    /// Branch payloads, passed through unmodified.
    #[serde(default)]
    pub branches: Vec<serde_json::Value>,
    /// Trigger endpoint payloads, passed through unmodified.
    #[serde(default)]
    pub triggers: Vec<serde_json::Value>,
    /// Remaining top-level keys (id, blueprint_name, tenant_id, $schema, ...),
    /// in their original order.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Node with id, render type and canvas position.
#[derive(Debug, Deserialize)]
pub struct ApiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub position: ApiPosition,
    pub data: ApiNodeData,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct ApiPosition {
    pub x: f64,
    pub y: f64,
}

/// Node data envelope. Only the form reference and display name are modeled;
/// the workflow configuration (approval rules, prerequisites, SLA config,
/// input mapping, ...) is captured as an opaque, order-preserving payload.
#[derive(Debug, Deserialize)]
pub struct ApiNodeData {
    pub component_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

/// Directed edge between two node ids.
#[derive(Debug, Deserialize)]
pub struct ApiEdge {
    pub source: String,
    pub target: String,
}

/// Form definition with its JSON-schema-shaped field declarations.
#[derive(Debug, Deserialize)]
pub struct ApiForm {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub field_schema: ApiFieldSchema,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ApiFieldSchema {
    /// Property name -> descriptor object, in declaration order.
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub required: Vec<String>,
}
