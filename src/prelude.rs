//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! keiro crate. Import this module to get access to the core functionality
//! without having to import each type individually.

// Session and graph loading
pub use crate::session::{GraphSource, JourneySession, JsonFileSource};

// Canonical graph model
pub use crate::journey::{
    EdgeDefinition, EdgeSketch, FieldDefinition, FormDefinition, IntoJourney, JourneyDefinition,
    NodeDefinition, NodeSketch, Position,
};

// Wire format
pub use crate::api::GraphResponse;

// Mapping codec
pub use crate::mapping::{MappingInfo, MappingValue, describe_value, is_mapping_reference};

// Dependency resolution
pub use crate::resolver::{DependencyResolver, FormDependencies};

// Prefill configuration
pub use crate::prefill::{
    AddOutcome, DraftState, GlobalVariable, MappingCatalog, MappingGroup, MappingOption,
    PrefillDraft, PrefillStore, PrefillValues, default_globals,
};

// Error types
pub use crate::error::{ConversionError, GraphLoadError, PrefillError, SnapshotError};

// Hashing collections commonly used with this crate
pub use ahash::{AHashMap, AHashSet};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
