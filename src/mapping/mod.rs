//! The mapping-reference codec.
//!
//! A prefill value is a plain string. Two syntactic forms make it a
//! *reference* instead of a literal: `global.<key>` points at a global
//! variable, `<formId>.<fieldKey>` points at a field on another form.
//! Everything else is a literal. Classification and display never fail;
//! unresolvable input degrades to "Unknown" labels.

use crate::journey::JourneyDefinition;

/// Namespace prefix for global variable references.
pub const GLOBAL_PREFIX: &str = "global.";

/// A classified prefill value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingValue {
    /// Not a reference; stored and displayed verbatim.
    Literal(String),
    /// References a global variable, e.g. `global.currentUser`.
    Global { key: String },
    /// References a field on a specific form, e.g. `f_01.email`.
    FormField { form_id: String, field_key: String },
}

/// Human-readable labels for a prefill value, used by list rows and chips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingInfo {
    pub form_name: String,
    pub field_name: String,
}

impl MappingValue {
    /// Builds a global variable reference.
    pub fn global(key: impl Into<String>) -> Self {
        MappingValue::Global { key: key.into() }
    }

    /// Builds a form field reference.
    pub fn form_field(form_id: impl Into<String>, field_key: impl Into<String>) -> Self {
        MappingValue::FormField {
            form_id: form_id.into(),
            field_key: field_key.into(),
        }
    }

    /// Classifies a raw string against a set of known form ids.
    ///
    /// Decision order: the `global.` namespace wins outright; otherwise the
    /// *longest* known form id that prefixes the value (followed by `.`)
    /// wins; otherwise the value is a literal. Longest-prefix-wins keeps
    /// classification deterministic when one form id is a prefix of another
    /// (`"a"` vs `"ab"`), independent of form iteration order.
    pub fn classify<'a, I>(value: &str, known_form_ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        if let Some(key) = value.strip_prefix(GLOBAL_PREFIX) {
            return MappingValue::Global {
                key: key.to_string(),
            };
        }

        let mut best: Option<&str> = None;
        for form_id in known_form_ids {
            if form_id.is_empty() {
                continue;
            }
            let matches = value
                .strip_prefix(form_id)
                .is_some_and(|rest| rest.starts_with('.'));
            if matches && best.is_none_or(|b| form_id.len() > b.len()) {
                best = Some(form_id);
            }
        }

        match best {
            Some(form_id) => MappingValue::FormField {
                field_key: value[form_id.len() + 1..].to_string(),
                form_id: form_id.to_string(),
            },
            None => MappingValue::Literal(value.to_string()),
        }
    }

    /// Classifies a raw string against the forms of a loaded journey.
    pub fn classify_in(value: &str, journey: &JourneyDefinition) -> Self {
        Self::classify(value, journey.forms.iter().map(|f| f.id.as_str()))
    }

    /// Renders the stored string form. Inverse of `classify` for references,
    /// provided no other known form id is a longer prefix of the result.
    pub fn encode(&self) -> String {
        match self {
            MappingValue::Literal(value) => value.clone(),
            MappingValue::Global { key } => format!("{}{}", GLOBAL_PREFIX, key),
            MappingValue::FormField { form_id, field_key } => {
                format!("{}.{}", form_id, field_key)
            }
        }
    }

    /// Whether this value references another form or a global, rather than
    /// being a literal.
    pub fn is_reference(&self) -> bool {
        !matches!(self, MappingValue::Literal(_))
    }

    /// Produces display labels for this value.
    ///
    /// Globals label as "Global Data"; form references resolve the form name
    /// through the journey, degrading to "Unknown Form" when the id does not
    /// resolve. The field key is shown verbatim, never validated against the
    /// form's schema. Literals (and any value with no journey loaded) label
    /// as "Unknown" with the raw value as the field name.
    pub fn describe(&self, journey: Option<&JourneyDefinition>) -> MappingInfo {
        match self {
            MappingValue::Global { key } => MappingInfo {
                form_name: "Global Data".to_string(),
                field_name: key.clone(),
            },
            MappingValue::FormField { form_id, field_key } => {
                let form_name = journey
                    .and_then(|j| j.form(form_id))
                    .map(|form| form.name.clone())
                    .unwrap_or_else(|| "Unknown Form".to_string());
                MappingInfo {
                    form_name,
                    field_name: field_key.clone(),
                }
            }
            MappingValue::Literal(value) => MappingInfo {
                form_name: "Unknown".to_string(),
                field_name: value.clone(),
            },
        }
    }
}

/// Classifies and describes a raw string in one step.
///
/// With no journey loaded every value is treated as a literal, so the
/// result is always `("Unknown", value)`, so the caller keeps rendering
/// something sensible while the graph fetch is still outstanding.
pub fn describe_value(value: &str, journey: Option<&JourneyDefinition>) -> MappingInfo {
    match journey {
        Some(j) => MappingValue::classify_in(value, j).describe(journey),
        None => MappingInfo {
            form_name: "Unknown".to_string(),
            field_name: value.to_string(),
        },
    }
}

/// Whether a raw string is a mapping reference in the context of a journey.
/// The `global.` namespace is recognized even before a journey is loaded.
pub fn is_mapping_reference(value: &str, journey: Option<&JourneyDefinition>) -> bool {
    value.starts_with(GLOBAL_PREFIX)
        || journey.is_some_and(|j| MappingValue::classify_in(value, j).is_reference())
}
