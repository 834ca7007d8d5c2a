//! Tests for the prefill store, the editing draft state machine, and the
//! mapping picker data.
mod common;
use common::*;
use keiro::prelude::*;

fn sample_form() -> FormDefinition {
    form(
        "FC",
        "Form C",
        &[("email", "string"), ("name", "string"), ("notes", "string")],
    )
}

fn empty_draft() -> PrefillDraft {
    PrefillDraft::new("C", sample_form(), &PrefillValues::default())
}

// --- Store ---

#[test]
fn test_store_absence_is_not_an_entry() {
    let mut store = PrefillStore::new();
    assert!(store.get_fields("C").is_none());
    assert!(!store.has_prefill("C"));

    // An empty committed mapping exists but still reads as "no prefill".
    store.commit("C", PrefillValues::default());
    assert!(store.get_fields("C").is_some());
    assert!(!store.has_prefill("C"));
}

#[test]
fn test_store_set_and_remove_field() {
    let mut store = PrefillStore::new();
    store.set_field("C", "email", "global.currentUser");
    store.set_field("C", "name", "Ada");
    store.remove_field("C", "name");
    store.remove_field("C", "never_set");
    store.remove_field("other", "email");

    let values = store.get_fields("C").unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values.get("email").map(String::as_str), Some("global.currentUser"));
}

#[test]
fn test_store_commit_replaces_atomically() {
    let mut store = PrefillStore::new();
    store.set_field("C", "email", "old");
    store.set_field("C", "name", "old");

    let mut replacement = PrefillValues::default();
    replacement.insert("notes".to_string(), "new".to_string());
    store.commit("C", replacement);

    let values = store.get_fields("C").unwrap();
    assert_eq!(values.len(), 1);
    assert!(values.contains_key("notes"));
}

#[test]
fn test_store_snapshot_round_trip() {
    let mut store = PrefillStore::new();
    store.set_field("C", "email", "global.currentUser");
    store.set_field("D", "name", "FA.name");

    let bytes = store.to_bytes().expect("Failed to serialize store");
    let restored = PrefillStore::from_bytes(&bytes).expect("Failed to restore store");

    assert_eq!(restored.len(), 2);
    assert_eq!(
        restored.get_fields("C").and_then(|v| v.get("email")).map(String::as_str),
        Some("global.currentUser")
    );
}

// --- Draft state machine ---

#[test]
fn test_submit_without_selection_is_a_validation_error() {
    let mut draft = empty_draft();
    let err = draft.submit().unwrap_err();
    assert_eq!(err, PrefillError::NoFieldSelected);
    assert_eq!(err.to_string(), "Please select a field");
}

#[test]
fn test_add_field_with_literal_value() {
    let mut draft = empty_draft();
    draft.select_field("email").unwrap();
    draft.set_value("hello@example.com").unwrap();
    assert_eq!(draft.submit().unwrap(), AddOutcome::Added);

    assert_eq!(draft.state(), &DraftState::Idle);
    assert_eq!(draft.value_of("email"), Some("hello@example.com"));
}

#[test]
fn test_selecting_undeclared_field_is_rejected() {
    let mut draft = empty_draft();
    let err = draft.select_field("nope").unwrap_err();
    assert_eq!(
        err,
        PrefillError::UnknownField {
            field: "nope".to_string(),
            form_id: "FC".to_string(),
        }
    );
}

#[test]
fn test_selecting_configured_field_is_rejected() {
    let mut draft = empty_draft();
    draft.select_field("email").unwrap();
    draft.set_value("x").unwrap();
    draft.submit().unwrap();

    let err = draft.select_field("email").unwrap_err();
    assert_eq!(
        err,
        PrefillError::FieldAlreadyConfigured {
            field: "email".to_string()
        }
    );
}

#[test]
fn test_empty_value_requests_the_mapping_picker() {
    let mut draft = empty_draft();
    draft.select_field("email").unwrap();

    let outcome = draft.submit().unwrap();
    assert_eq!(outcome, AddOutcome::MappingRequested("email".to_string()));
    // The pending entry survives so the picker result can land on it.
    assert!(matches!(draft.state(), DraftState::Selecting { .. }));

    draft.apply_mapping("FA.email").unwrap();
    assert_eq!(draft.state(), &DraftState::Idle);
    assert_eq!(draft.value_of("email"), Some("FA.email"));
}

#[test]
fn test_set_value_without_selection_is_rejected() {
    let mut draft = empty_draft();
    assert_eq!(draft.set_value("x").unwrap_err(), PrefillError::NoFieldSelected);
    assert_eq!(
        draft.apply_mapping("global.currentUser").unwrap_err(),
        PrefillError::NoFieldSelected
    );
}

#[test]
fn test_edit_flow_updates_value() {
    let mut draft = empty_draft();
    draft.select_field("email").unwrap();
    draft.set_value("old").unwrap();
    draft.submit().unwrap();

    draft.begin_edit("email").unwrap();
    assert!(!draft.can_save(), "save must be blocked while editing");
    draft.set_value("new").unwrap();
    draft.submit().unwrap();

    assert!(draft.can_save());
    assert_eq!(draft.value_of("email"), Some("new"));
}

#[test]
fn test_editing_unconfigured_field_is_rejected() {
    let mut draft = empty_draft();
    let err = draft.begin_edit("email").unwrap_err();
    assert_eq!(
        err,
        PrefillError::NotConfigured {
            field: "email".to_string()
        }
    );
}

#[test]
fn test_no_other_selection_while_editing() {
    let mut draft = empty_draft();
    draft.select_field("email").unwrap();
    draft.set_value("x").unwrap();
    draft.submit().unwrap();
    draft.begin_edit("email").unwrap();

    assert_eq!(draft.select_field("name").unwrap_err(), PrefillError::EditInProgress);
    assert_eq!(draft.begin_edit("email").unwrap_err(), PrefillError::EditInProgress);
}

#[test]
fn test_cancel_edit_keeps_old_value() {
    let mut draft = empty_draft();
    draft.select_field("email").unwrap();
    draft.set_value("old").unwrap();
    draft.submit().unwrap();

    draft.begin_edit("email").unwrap();
    draft.set_value("new").unwrap();
    draft.cancel();

    assert_eq!(draft.state(), &DraftState::Idle);
    assert_eq!(draft.value_of("email"), Some("old"));
}

#[test]
fn test_remove_field_while_editing_resets_the_draft() {
    let mut draft = empty_draft();
    draft.select_field("email").unwrap();
    draft.set_value("x").unwrap();
    draft.submit().unwrap();

    draft.begin_edit("email").unwrap();
    draft.remove_field("email");

    assert_eq!(draft.state(), &DraftState::Idle);
    assert_eq!(draft.value_of("email"), None);
    assert!(draft.can_save());
}

#[test]
fn test_available_fields_excludes_configured_except_editing() {
    let mut draft = empty_draft();
    draft.select_field("email").unwrap();
    draft.set_value("x").unwrap();
    draft.submit().unwrap();

    let keys: Vec<_> = draft.available_fields().iter().map(|f| f.key.clone()).collect();
    assert_eq!(keys, vec!["name", "notes"]);

    draft.begin_edit("email").unwrap();
    let keys: Vec<_> = draft.available_fields().iter().map(|f| f.key.clone()).collect();
    assert_eq!(keys, vec!["email", "name", "notes"]);
}

#[test]
fn test_draft_seeds_in_schema_order() {
    let mut initial = PrefillValues::default();
    initial.insert("notes".to_string(), "n".to_string());
    initial.insert("email".to_string(), "e".to_string());

    let draft = PrefillDraft::new("C", sample_form(), &initial);
    let order: Vec<_> = draft.values().iter().map(|(k, _)| k.clone()).collect();
    assert_eq!(order, vec!["email", "notes"]);
}

// --- Picker data ---

#[test]
fn test_catalog_groups_and_global_catalog() {
    let journey = create_linear_journey();
    let resolver = DependencyResolver::new(&journey);
    let deps = resolver.resolve("C");
    let catalog = MappingCatalog::new(&deps, &default_globals());

    assert_eq!(catalog.direct.len(), 1);
    assert_eq!(catalog.direct[0].form_name, "Form B");
    assert_eq!(catalog.direct[0].options[0].id, "FB.notes");
    assert_eq!(catalog.transitive.len(), 1);
    assert_eq!(catalog.transitive[0].form_id, "FA");
    assert_eq!(catalog.globals.len(), 5);
    assert!(catalog.globals.iter().any(|o| o.id == "global.currentUser"));
}

#[test]
fn test_catalog_search_filters_and_deduplicates() {
    let journey = create_diamond_journey();
    let resolver = DependencyResolver::new(&journey);
    let deps = resolver.resolve("D");
    let catalog = MappingCatalog::new(&deps, &default_globals());

    // Case-insensitive match across label, description and id.
    let hits = catalog.search("EMAIL");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "FA.email");

    let all = catalog.search("");
    let mut ids: Vec<_> = all.iter().map(|o| o.id.as_str()).collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(before, ids.len(), "search results must not repeat ids");
}

#[test]
fn test_form_options_use_titles_when_present() {
    let mut form = sample_form();
    form.fields[0].title = Some("Email Address".to_string());

    let options = keiro::prefill::form_options(&form);
    assert_eq!(options[0].id, "FC.email");
    assert_eq!(options[0].label, "email");
    assert_eq!(options[0].description, "Email Address");
    // Fields without a title fall back to their key.
    assert_eq!(options[1].description, "name");
}
