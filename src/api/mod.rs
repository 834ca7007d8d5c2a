//! Raw wire types for the journey graph service and their conversion into
//! the canonical model.

pub mod types;

pub use types::*;

use crate::error::{ConversionError, GraphLoadError};
use crate::journey::{
    EdgeDefinition, FieldDefinition, FormDefinition, IntoJourney, JourneyDefinition,
    NodeDefinition, Position,
};
use std::fs;

impl GraphResponse {
    /// Parses a graph service payload from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GraphLoadError> {
        serde_json::from_str(json).map_err(|e| GraphLoadError::JsonParse(e.to_string()))
    }

    /// Loads a graph service payload from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, GraphLoadError> {
        let content = fs::read_to_string(path).map_err(|e| GraphLoadError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }
}

impl IntoJourney for GraphResponse {
    fn into_journey(self) -> Result<JourneyDefinition, ConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|raw| {
                if raw.id.is_empty() {
                    return Err(ConversionError::ValidationError(
                        "node with empty id".to_string(),
                    ));
                }
                Ok(NodeDefinition {
                    id: raw.id,
                    node_type: raw.node_type,
                    position: Position {
                        x: raw.position.x,
                        y: raw.position.y,
                    },
                    component_id: raw.data.component_id,
                    label: raw.data.name,
                    attributes: raw.data.attributes,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let edges = self
            .edges
            .into_iter()
            .map(|raw| EdgeDefinition {
                source: raw.source,
                target: raw.target,
            })
            .collect();

        let forms = self
            .forms
            .into_iter()
            .map(|raw| {
                if raw.id.is_empty() {
                    return Err(ConversionError::ValidationError(
                        "form with empty id".to_string(),
                    ));
                }
                Ok(FormDefinition {
                    fields: convert_field_schema(&raw.field_schema),
                    id: raw.id,
                    name: raw.name,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(JourneyDefinition {
            nodes,
            edges,
            forms,
            branches: self.branches,
            triggers: self.triggers,
            metadata: self.extra,
        })
    }
}

/// Flattens JSON-schema properties into declared fields, preserving order.
/// Non-object property values are skipped; a missing `type` defaults to
/// `"string"` and `title` stays optional.
fn convert_field_schema(schema: &ApiFieldSchema) -> Vec<FieldDefinition> {
    schema
        .properties
        .iter()
        .filter_map(|(key, value)| {
            let descriptor = value.as_object()?;
            Some(FieldDefinition {
                key: key.clone(),
                field_type: descriptor
                    .get("type")
                    .and_then(|t| t.as_str())
                    .unwrap_or("string")
                    .to_string(),
                title: descriptor
                    .get("title")
                    .and_then(|t| t.as_str())
                    .map(str::to_string),
            })
        })
        .collect()
}
