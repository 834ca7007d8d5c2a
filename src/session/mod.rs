//! The top-level editing session.
//!
//! `JourneySession` owns the loaded graph and the committed prefill store,
//! exactly one of each per editor instance. The graph arrives through a
//! one-time `GraphSource` fetch; until that succeeds the session is in a
//! valid "no data" state and every graph-dependent operation no-ops
//! gracefully instead of failing. All mutation happens on discrete caller
//! events, so no synchronization is needed.

use crate::api::GraphResponse;
use crate::error::GraphLoadError;
use crate::journey::{EdgeSketch, IntoJourney, JourneyDefinition, NodeSketch};
use crate::mapping::{self, MappingInfo};
use crate::prefill::{
    GlobalVariable, MappingCatalog, PrefillDraft, PrefillStore, PrefillValues, default_globals,
};
use crate::resolver::{DependencyResolver, FormDependencies};
use tracing::{error, info};

/// The one read operation the external graph service exposes. Fetching must
/// be idempotent and side-effect-free from the session's perspective.
pub trait GraphSource {
    fn fetch_graph(&self) -> Result<JourneyDefinition, GraphLoadError>;
}

/// Loads the graph payload from a JSON file on disk.
pub struct JsonFileSource {
    path: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl GraphSource for JsonFileSource {
    fn fetch_graph(&self) -> Result<JourneyDefinition, GraphLoadError> {
        GraphResponse::from_file(&self.path)?
            .into_journey()
            .map_err(GraphLoadError::from)
    }
}

/// Top-level controller owning the graph model and the prefill store.
#[derive(Default)]
pub struct JourneySession {
    journey: Option<JourneyDefinition>,
    store: PrefillStore,
    globals: Vec<GlobalVariable>,
}

impl JourneySession {
    /// Creates an empty session with the built-in global variable catalog.
    pub fn new() -> Self {
        Self {
            journey: None,
            store: PrefillStore::new(),
            globals: default_globals(),
        }
    }

    /// Creates an empty session with a custom global variable catalog.
    pub fn with_globals(globals: Vec<GlobalVariable>) -> Self {
        Self {
            globals,
            ..Self::new()
        }
    }

    /// Performs the one-time graph fetch. A failure is logged and leaves the
    /// session unloaded; there is no retry. Returns whether a graph is
    /// loaded afterwards.
    pub fn load(&mut self, source: &dyn GraphSource) -> bool {
        match source.fetch_graph() {
            Ok(journey) => {
                info!(
                    nodes = journey.nodes.len(),
                    edges = journey.edges.len(),
                    forms = journey.forms.len(),
                    "journey graph loaded"
                );
                self.journey = Some(journey);
            }
            Err(e) => {
                error!("Error loading graph data: {}", e);
            }
        }
        self.journey.is_some()
    }

    pub fn is_loaded(&self) -> bool {
        self.journey.is_some()
    }

    pub fn journey(&self) -> Option<&JourneyDefinition> {
        self.journey.as_ref()
    }

    pub fn store(&self) -> &PrefillStore {
        &self.store
    }

    pub fn globals(&self) -> &[GlobalVariable] {
        &self.globals
    }

    /// Opens a node's prefill configuration for editing, seeded with the
    /// last-saved values. Returns `None` while no graph is loaded, when the
    /// node is unknown, or when its `component_id` resolves to no form;
    /// a node click on a half-loaded editor does nothing rather than fail.
    pub fn open_prefill(&self, node_id: &str) -> Option<PrefillDraft> {
        let journey = self.journey.as_ref()?;
        let node = journey.node(node_id)?;
        let form = journey.form_of(node)?;

        let empty = PrefillValues::default();
        let initial = self.store.get_fields(node_id).unwrap_or(&empty);
        Some(PrefillDraft::new(node_id, form.clone(), initial))
    }

    /// Commits an editing draft into the store, atomically replacing the
    /// node's mapping, and returns the `(node id, mapping)` pair handed to
    /// the external save callback. Drafts that are never saved simply drop.
    pub fn save_prefill(&mut self, draft: PrefillDraft) -> (String, PrefillValues) {
        let node_id = draft.node_id().to_string();
        let values = draft.into_values();
        info!(node_id = %node_id, fields = values.len(), "prefill saved");
        self.store.commit(node_id.clone(), values.clone());
        (node_id, values)
    }

    /// Upstream form dependencies for a node; empty while no graph is loaded.
    pub fn dependencies(&self, node_id: &str) -> FormDependencies<'_> {
        match &self.journey {
            Some(journey) => DependencyResolver::new(journey).resolve(node_id),
            None => FormDependencies::default(),
        }
    }

    /// Every mapping target offered for a node: fields of direct and
    /// transitive dependency forms, plus the global catalog.
    pub fn mapping_catalog(&self, node_id: &str) -> MappingCatalog {
        MappingCatalog::new(&self.dependencies(node_id), &self.globals)
    }

    /// Display labels for a stored prefill value. Degrades to "Unknown"
    /// labels for literals, unresolvable references, or an unloaded graph.
    pub fn describe(&self, value: &str) -> MappingInfo {
        mapping::describe_value(value, self.journey.as_ref())
    }

    /// Whether a stored value is a mapping reference under the loaded graph.
    pub fn is_reference(&self, value: &str) -> bool {
        mapping::is_mapping_reference(value, self.journey.as_ref())
    }

    /// Draw-ready nodes for a rendering surface; empty while unloaded.
    pub fn node_sketches(&self) -> Vec<NodeSketch> {
        self.journey
            .as_ref()
            .map(|j| j.node_sketches())
            .unwrap_or_default()
    }

    /// Draw-ready edge connectors; empty while unloaded.
    pub fn edge_sketches(&self) -> Vec<EdgeSketch> {
        self.journey
            .as_ref()
            .map(|j| j.edge_sketches())
            .unwrap_or_default()
    }
}
