use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// The committed prefill configuration for one node: field name -> value
/// (literal string or encoded mapping reference).
pub type PrefillValues = AHashMap<String, String>;

/// Process-wide store of committed prefill configurations, keyed by node id.
///
/// A node that was never edited has no entry; absence and an empty mapping
/// are both read as "no prefill configured". Mutations arrive either through
/// the fine-grained setters or through `commit`, which atomically replaces a
/// node's whole mapping when an editing draft is saved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrefillStore {
    entries: AHashMap<String, PrefillValues>,
}

impl PrefillStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a single field's configured value for a node.
    pub fn set_field(
        &mut self,
        node_id: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.entries
            .entry(node_id.into())
            .or_default()
            .insert(field.into(), value.into());
    }

    /// Removes a single field's configured value. A no-op when the node or
    /// field has no entry.
    pub fn remove_field(&mut self, node_id: &str, field: &str) {
        if let Some(values) = self.entries.get_mut(node_id) {
            values.remove(field);
        }
    }

    /// The committed mapping for a node, if any edit was ever saved.
    pub fn get_fields(&self, node_id: &str) -> Option<&PrefillValues> {
        self.entries.get(node_id)
    }

    /// Atomically replaces the stored mapping for a node.
    pub fn commit(&mut self, node_id: impl Into<String>, values: PrefillValues) {
        self.entries.insert(node_id.into(), values);
    }

    /// Whether a node has any configured prefill value.
    pub fn has_prefill(&self, node_id: &str) -> bool {
        self.entries
            .get(node_id)
            .is_some_and(|values| !values.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(node id, mapping)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PrefillValues)> {
        self.entries.iter()
    }
}
