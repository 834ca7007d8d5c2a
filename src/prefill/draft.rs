use super::store::PrefillValues;
use crate::error::PrefillError;
use crate::journey::{FieldDefinition, FormDefinition};

/// What the editing surface is currently doing.
///
/// The add/edit cycle is a small state machine instead of a bag of flags, so
/// "editing while nothing is selected" and similar combinations cannot be
/// represented at all. `value` is the text buffer for the pending entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftState {
    /// No field chosen; submitting from here is a validation error.
    Idle,
    /// A not-yet-configured field is chosen and a value is being entered.
    Selecting { field: String, value: String },
    /// An already-configured field is being changed; it stays selectable
    /// even though it is in use, but no other field may be chosen until the
    /// edit is submitted or cancelled.
    Editing { field: String, value: String },
}

/// Outcome of submitting the pending entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The value was written into the draft.
    Added,
    /// The value was empty; the caller should open the mapping picker for
    /// this field and come back through [`PrefillDraft::apply_mapping`].
    MappingRequested(String),
}

/// A working draft of one node's prefill configuration.
///
/// Created when a node is opened for editing, seeded with the last-saved
/// values. All mutations stay local to the draft; the committed store is
/// only touched when the draft is saved through the session. Dropping a
/// draft discards it.
#[derive(Debug, Clone)]
pub struct PrefillDraft {
    node_id: String,
    form: FormDefinition,
    /// Configured entries in form-schema order, then insertion order.
    values: Vec<(String, String)>,
    state: DraftState,
}

impl PrefillDraft {
    pub fn new(node_id: impl Into<String>, form: FormDefinition, initial: &PrefillValues) -> Self {
        // Seed in schema order so reopening an editor lists fields stably.
        let values = form
            .fields
            .iter()
            .filter_map(|field| {
                initial
                    .get(&field.key)
                    .map(|value| (field.key.clone(), value.clone()))
            })
            .collect();

        Self {
            node_id: node_id.into(),
            form,
            values,
            state: DraftState::Idle,
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn form(&self) -> &FormDefinition {
        &self.form
    }

    pub fn state(&self) -> &DraftState {
        &self.state
    }

    /// The draft's configured entries, in display order.
    pub fn values(&self) -> &[(String, String)] {
        &self.values
    }

    pub fn value_of(&self, field: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, value)| value.as_str())
    }

    /// Declared fields currently offered for selection: every schema field
    /// without a configured value, plus the field being edited (which
    /// remains selectable even though it is in use).
    pub fn available_fields(&self) -> Vec<&FieldDefinition> {
        let editing = match &self.state {
            DraftState::Editing { field, .. } => Some(field.as_str()),
            _ => None,
        };
        self.form
            .fields
            .iter()
            .filter(|field| self.value_of(&field.key).is_none() || editing == Some(&field.key))
            .collect()
    }

    /// Chooses a field for a new prefill entry.
    pub fn select_field(&mut self, field: &str) -> Result<(), PrefillError> {
        if matches!(self.state, DraftState::Editing { .. }) {
            return Err(PrefillError::EditInProgress);
        }
        if self.form.field(field).is_none() {
            return Err(PrefillError::UnknownField {
                field: field.to_string(),
                form_id: self.form.id.clone(),
            });
        }
        if self.value_of(field).is_some() {
            return Err(PrefillError::FieldAlreadyConfigured {
                field: field.to_string(),
            });
        }
        self.state = DraftState::Selecting {
            field: field.to_string(),
            value: String::new(),
        };
        Ok(())
    }

    /// Updates the pending entry's text buffer.
    pub fn set_value(&mut self, text: impl Into<String>) -> Result<(), PrefillError> {
        match &mut self.state {
            DraftState::Idle => Err(PrefillError::NoFieldSelected),
            DraftState::Selecting { value, .. } | DraftState::Editing { value, .. } => {
                *value = text.into();
                Ok(())
            }
        }
    }

    /// Begins changing an already-configured field.
    pub fn begin_edit(&mut self, field: &str) -> Result<(), PrefillError> {
        if matches!(self.state, DraftState::Editing { .. }) {
            return Err(PrefillError::EditInProgress);
        }
        let Some(current) = self.value_of(field) else {
            return Err(PrefillError::NotConfigured {
                field: field.to_string(),
            });
        };
        self.state = DraftState::Editing {
            field: field.to_string(),
            value: current.to_string(),
        };
        Ok(())
    }

    /// Submits the pending entry.
    ///
    /// With nothing selected this is the inline "Please select a field"
    /// validation error. With an empty value the draft stays put and asks
    /// the caller to open the mapping picker instead.
    pub fn submit(&mut self) -> Result<AddOutcome, PrefillError> {
        let (field, value) = match &self.state {
            DraftState::Idle => return Err(PrefillError::NoFieldSelected),
            DraftState::Selecting { field, value } | DraftState::Editing { field, value } => {
                (field.clone(), value.clone())
            }
        };
        if value.is_empty() {
            return Ok(AddOutcome::MappingRequested(field));
        }
        self.upsert(field, value);
        self.state = DraftState::Idle;
        Ok(AddOutcome::Added)
    }

    /// Writes a picker-selected mapping reference into the pending entry and
    /// completes it.
    pub fn apply_mapping(&mut self, reference: impl Into<String>) -> Result<(), PrefillError> {
        let field = match &self.state {
            DraftState::Idle => return Err(PrefillError::NoFieldSelected),
            DraftState::Selecting { field, .. } | DraftState::Editing { field, .. } => {
                field.clone()
            }
        };
        self.upsert(field, reference.into());
        self.state = DraftState::Idle;
        Ok(())
    }

    /// Abandons the pending entry without touching configured values.
    pub fn cancel(&mut self) {
        self.state = DraftState::Idle;
    }

    /// Removes a configured field. If that field was the pending entry, the
    /// pending entry is abandoned too.
    pub fn remove_field(&mut self, field: &str) {
        self.values.retain(|(key, _)| key != field);
        let pending = match &self.state {
            DraftState::Selecting { field: pending, .. }
            | DraftState::Editing { field: pending, .. } => pending == field,
            DraftState::Idle => false,
        };
        if pending {
            self.state = DraftState::Idle;
        }
    }

    /// Saving is blocked while an edit is in progress, matching the dialog's
    /// disabled save button.
    pub fn can_save(&self) -> bool {
        !matches!(self.state, DraftState::Editing { .. })
    }

    /// Consumes the draft into the mapping handed to the store on commit.
    pub fn into_values(self) -> PrefillValues {
        self.values.into_iter().collect()
    }

    fn upsert(&mut self, field: String, value: String) {
        match self.values.iter_mut().find(|(key, _)| *key == field) {
            Some(entry) => entry.1 = value,
            None => self.values.push((field, value)),
        }
    }
}
