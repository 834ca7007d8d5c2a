use super::definition::JourneyDefinition;
use crate::error::ConversionError;

/// A trait for custom data models that can be converted into a Keiro
/// `JourneyDefinition`.
///
/// This is the primary extension point for making Keiro format-agnostic. The
/// built-in `api::GraphResponse` wire format implements it; callers with
/// their own graph source format implement it on their own structs and the
/// rest of the crate (resolver, prefill editing, rendering projections)
/// works unchanged.
///
/// # Example
///
/// ```rust,no_run
/// use keiro::prelude::*;
/// use keiro::error::ConversionError;
///
/// struct MyStep { id: String, form_id: String }
/// struct MyWorkflow { steps: Vec<MyStep> }
///
/// impl IntoJourney for MyWorkflow {
///     fn into_journey(self) -> std::result::Result<JourneyDefinition, ConversionError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|step| NodeDefinition {
///                 label: step.id.clone(),
///                 id: step.id,
///                 node_type: "form".to_string(),
///                 position: Position::default(),
///                 component_id: step.form_id,
///                 attributes: Default::default(),
///             })
///             .collect();
///
///         Ok(JourneyDefinition {
///             nodes,
///             edges: vec![], // Convert your edges and forms here as well
///             ..Default::default()
///         })
///     }
/// }
/// ```
pub trait IntoJourney {
    /// Consumes the object and converts it into a Keiro-compatible journey.
    fn into_journey(self) -> Result<JourneyDefinition, ConversionError>;
}
