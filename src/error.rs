use thiserror::Error;

/// Errors that can occur while loading a journey graph from an external source.
#[derive(Error, Debug, Clone)]
pub enum GraphLoadError {
    #[error("Failed to read graph file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse journey graph JSON: {0}")]
    JsonParse(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Errors that can occur when converting a custom format into a `JourneyDefinition`.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid journey data: {0}")]
    ValidationError(String),
}

/// Errors surfaced by the prefill editing draft. None of these are fatal;
/// they block a single user action and are meant to be displayed inline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefillError {
    #[error("Please select a field")]
    NoFieldSelected,

    #[error("Field '{field}' is not declared in form '{form_id}'")]
    UnknownField { field: String, form_id: String },

    #[error("Field '{field}' already has a prefill value")]
    FieldAlreadyConfigured { field: String },

    #[error("Field '{field}' has no prefill value to edit")]
    NotConfigured { field: String },

    #[error("Another field is currently being edited")]
    EditInProgress,
}

/// Errors that can occur when persisting or restoring a prefill store snapshot.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("{0}")]
    Generic(String),
}
