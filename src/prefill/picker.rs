//! Candidate data for the mapping picker: upstream form fields grouped per
//! dependency form, plus the fixed global variable catalog.

use crate::journey::FormDefinition;
use crate::mapping::MappingValue;
use crate::resolver::FormDependencies;
use itertools::Itertools;

/// A fixed, non-graph-sourced variable available to every node.
#[derive(Debug, Clone)]
pub struct GlobalVariable {
    pub key: String,
    pub label: String,
    pub description: String,
}

impl GlobalVariable {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// The built-in global variable catalog.
pub fn default_globals() -> Vec<GlobalVariable> {
    vec![
        GlobalVariable::new("currentDate", "Current Date", "The current date"),
        GlobalVariable::new(
            "currentUser",
            "Current User",
            "The currently logged in user",
        ),
        GlobalVariable::new("journeyId", "Journey ID", "The ID of the current journey"),
        GlobalVariable::new(
            "organizationName",
            "Organization Name",
            "Name of the organization",
        ),
        GlobalVariable::new("organizationId", "Organization ID", "ID of the organization"),
    ]
}

/// A selectable mapping target as offered to a field-picking surface.
/// `id` is the encoded reference string stored on selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingOption {
    pub id: String,
    pub label: String,
    pub description: String,
    pub data_type: String,
}

impl MappingOption {
    /// Case-insensitive search over label, description and id.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.label.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.id.to_lowercase().contains(&query)
    }
}

/// One dependency form's selectable fields, for accordion-style grouping.
#[derive(Debug, Clone)]
pub struct MappingGroup {
    pub form_id: String,
    pub form_name: String,
    pub options: Vec<MappingOption>,
}

impl MappingGroup {
    fn for_form(form: &FormDefinition) -> Self {
        Self {
            form_id: form.id.clone(),
            form_name: form.name.clone(),
            options: form_options(form),
        }
    }
}

/// All mapping targets offered for one node, split the way the picker
/// presents them: direct dependencies, transitive dependencies, globals.
#[derive(Debug, Clone, Default)]
pub struct MappingCatalog {
    pub direct: Vec<MappingGroup>,
    pub transitive: Vec<MappingGroup>,
    pub globals: Vec<MappingOption>,
}

impl MappingCatalog {
    pub fn new(dependencies: &FormDependencies<'_>, globals: &[GlobalVariable]) -> Self {
        Self {
            direct: dependencies
                .direct
                .iter()
                .map(|form| MappingGroup::for_form(form))
                .collect(),
            transitive: dependencies
                .transitive
                .iter()
                .map(|form| MappingGroup::for_form(form))
                .collect(),
            globals: global_options(globals),
        }
    }

    /// Flattens every section into one list matching a search query,
    /// deduplicated by reference id (a form repeated across sections would
    /// otherwise offer the same target twice).
    pub fn search(&self, query: &str) -> Vec<&MappingOption> {
        self.direct
            .iter()
            .chain(self.transitive.iter())
            .flat_map(|group| group.options.iter())
            .chain(self.globals.iter())
            .filter(|option| option.matches(query))
            .unique_by(|option| option.id.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.transitive.is_empty() && self.globals.is_empty()
    }
}

/// The selectable targets a single form contributes: one option per declared
/// field, labeled by key, described by the field's title when present.
pub fn form_options(form: &FormDefinition) -> Vec<MappingOption> {
    form.fields
        .iter()
        .map(|field| MappingOption {
            id: MappingValue::form_field(&form.id, &field.key).encode(),
            label: field.key.clone(),
            description: field.title.clone().unwrap_or_else(|| field.key.clone()),
            data_type: field.field_type.clone(),
        })
        .collect()
}

/// The selectable targets the global catalog contributes.
pub fn global_options(globals: &[GlobalVariable]) -> Vec<MappingOption> {
    globals
        .iter()
        .map(|var| MappingOption {
            id: MappingValue::global(&var.key).encode(),
            label: var.label.clone(),
            description: var.description.clone(),
            data_type: "string".to_string(),
        })
        .collect()
}
