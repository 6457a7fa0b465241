use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::http::{HttpResponse, Method};
use crate::net::test_support::{RecordingTransport, body_json, client_with};

fn category_json(id: &str, active: bool) -> serde_json::Value {
    json!({
        "_id": id,
        "name": "Systems Programming",
        "slug": "systems-programming",
        "description": "Low-level courses",
        "isActive": active,
        "createdAt": "2024-03-01T00:00:00Z",
        "updatedAt": "2024-03-02T00:00:00Z"
    })
}

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(category_endpoint("c1"), "/category/c1");
    assert_eq!(toggle_status_endpoint("c1"), "/category/c1/toggle-status");
}

#[test]
fn get_all_categories_is_one_public_get() {
    let transport = RecordingTransport::replying(
        200,
        json!({ "status": "ok", "data": [category_json("c1", true), category_json("c2", false)] }),
    );
    let client = client_with(&transport);

    let envelope = block_on(get_all_categories(&client)).expect("categories");

    let categories = envelope.into_data().expect("data");
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].id, "c1");
    assert!(!categories[1].is_active);

    let sent = transport.only_request();
    assert_eq!(sent.method, Method::Get);
    assert_eq!(sent.url, "https://api.example.test/v1/category");
    assert!(sent.header("Authorization").is_none());
    assert!(sent.body.is_none());
}

#[test]
fn get_category_by_id_is_public() {
    let transport = RecordingTransport::replying(200, json!({ "status": "ok", "data": category_json("c9", true) }));
    let client = client_with(&transport);

    let category = block_on(get_category_by_id(&client, "c9")).expect("category").into_data().expect("data");

    assert_eq!(category.slug, "systems-programming");
    let sent = transport.only_request();
    assert_eq!(sent.url, "https://api.example.test/v1/category/c9");
    assert!(sent.header("Authorization").is_none());
}

#[test]
fn add_category_is_one_authenticated_post_with_json_body() {
    let transport = RecordingTransport::replying(201, json!({ "status": "ok", "data": category_json("c3", true) }));
    let client = client_with(&transport);
    let payload = AddCategoryRequest { name: "Data Science".to_owned(), description: Some("Stats & ML".to_owned()) };

    block_on(add_category(&client, "admin-token", &payload)).expect("added");

    let sent = transport.only_request();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, "https://api.example.test/v1/category");
    assert_eq!(sent.header("Authorization"), Some("Bearer admin-token"));
    assert_eq!(body_json(&sent), json!({ "name": "Data Science", "description": "Stats & ML" }));
}

#[test]
fn update_category_sends_only_changed_fields() {
    let transport = RecordingTransport::replying(200, json!({ "status": "ok", "data": category_json("c1", true) }));
    let client = client_with(&transport);
    let payload = UpdateCategoryRequest { name: Some("Renamed".to_owned()), ..UpdateCategoryRequest::default() };

    block_on(update_category(&client, "tok", "c1", &payload)).expect("updated");

    let sent = transport.only_request();
    assert_eq!(sent.method, Method::Patch);
    assert_eq!(sent.url, "https://api.example.test/v1/category/c1");
    assert_eq!(body_json(&sent), json!({ "name": "Renamed" }));
}

#[test]
fn delete_and_toggle_carry_token_without_body() {
    let transport = RecordingTransport::with_responses(Vec::new());
    let client = client_with(&transport);

    block_on(delete_category(&client, "tok", "c1")).expect("deleted");
    let toggled = block_on(toggle_category_status(&client, "tok", "c2"));

    assert!(toggled.is_ok());
    let sent = transport.requests();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].method, Method::Delete);
    assert_eq!(sent[0].url, "https://api.example.test/v1/category/c1");
    assert_eq!(sent[1].method, Method::Patch);
    assert_eq!(sent[1].url, "https://api.example.test/v1/category/c2/toggle-status");
    for request in &sent {
        assert_eq!(request.header("Authorization"), Some("Bearer tok"));
        assert!(request.body.is_none());
    }
}

#[test]
fn delete_with_no_content_reply_succeeds() {
    let transport =
        RecordingTransport::with_responses(vec![Ok(HttpResponse { status: 204, body: String::new() })]);
    let client = client_with(&transport);

    let ack = block_on(delete_category(&client, "tok", "c1")).expect("deleted");

    assert_eq!(ack.status, "no_content");
    assert!(ack.data.is_none());
}

#[test]
fn forbidden_mutation_is_reported_not_retried() {
    let transport = RecordingTransport::replying(
        403,
        json!({ "statusCode": 403, "message": "Forbidden", "errorCode": "FORBIDDEN" }),
    );
    let client = client_with(&transport);

    let err = block_on(delete_category(&client, "student-token", "c1")).unwrap_err();

    assert_eq!(err.status_code(), Some(403));
    assert_eq!(err.error_code(), "FORBIDDEN");
    assert_eq!(transport.requests().len(), 1);
}
