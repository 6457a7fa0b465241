use super::*;

fn category(id: &str, active: bool) -> Category {
    Category {
        id: id.to_owned(),
        name: format!("Category {id}"),
        slug: format!("category-{id}"),
        description: None,
        is_active: active,
        created_at: None,
        updated_at: None,
    }
}

fn envelope(items: Vec<Category>) -> ApiEnvelope<Vec<Category>> {
    ApiEnvelope { status: "ok".to_owned(), message: None, data: Some(items) }
}

#[test]
fn begin_load_clears_previous_error() {
    let mut state = CategoriesState { error: Some("old".to_owned()), ..CategoriesState::default() };
    state.begin_load();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn finish_load_replaces_items() {
    let mut state = CategoriesState { items: vec![category("old", true)], ..CategoriesState::default() };
    state.begin_load();
    state.finish_load(Ok(envelope(vec![category("a", true), category("b", false)])));

    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.active_count(), 1);
}

#[test]
fn finish_load_without_data_empties_list() {
    let mut state = CategoriesState { items: vec![category("old", true)], ..CategoriesState::default() };
    state.finish_load(Ok(ApiEnvelope { status: "ok".to_owned(), message: None, data: None }));
    assert!(state.items.is_empty());
}

#[test]
fn failed_load_keeps_items_and_records_message() {
    let mut state = CategoriesState { items: vec![category("a", true)], ..CategoriesState::default() };
    state.begin_load();
    state.finish_load(Err(ApiError::Status {
        status_code: 500,
        message: "Database unavailable".to_owned(),
        error_code: "DB_DOWN".to_owned(),
    }));

    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("Database unavailable"));
}
