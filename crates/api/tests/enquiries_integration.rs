//! Integration tests for enquiry endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    admin_login, create_test_app, get_request_with_auth, json_request,
    json_request_with_auth, parse_response_body, send, test_config,
};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::json;

#[tokio::test]
async fn test_submit_enquiry_and_admin_sees_it() {
    let app = create_test_app(test_config());

    let response = send(
        &app,
        json_request(
            Method::POST,
            "/api/enquiries",
            json!({
                "name": "Jane",
                "email": "jane@x.com",
                "contact": "555-1234",
                "comment": "Hi"
            }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let ack = parse_response_body(response).await;
    assert_eq!(ack["success"], true);
    assert!(ack.get("id").is_none());

    let token = admin_login(&app).await;
    let response = send(&app, get_request_with_auth("/api/enquiries", &token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let enquiries = body.as_array().unwrap();
    assert_eq!(enquiries.len(), 1);
    let enquiry = &enquiries[0];
    assert_eq!(enquiry["name"], "Jane");
    assert_eq!(enquiry["email"], "jane@x.com");
    assert_eq!(enquiry["contact"], "555-1234");
    assert_eq!(enquiry["comment"], "Hi");
    assert_eq!(enquiry["status"], "new");
    let created_at = enquiry["created_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn test_enquiry_missing_fields() {
    let app = create_test_app(test_config());

    for payload in [
        json!({ "email": "jane@x.com", "contact": "1", "comment": "Hi" }),
        json!({ "name": "Jane", "email": "jane@x.com", "contact": "", "comment": "Hi" }),
        json!({ "name": "Jane", "email": "jane@x.com", "contact": "1", "comment": "  " }),
        json!({ "name": "Jane", "email": "", "contact": "1", "comment": "Hi" }),
    ] {
        let response = send(&app, json_request(Method::POST, "/api/enquiries", payload)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = parse_response_body(response).await;
        assert_eq!(body["error"], "validation_error");
    }

    let token = admin_login(&app).await;
    let response = send(&app, get_request_with_auth("/api/enquiries", &token)).await;
    let body = parse_response_body(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_enquiry_invalid_email() {
    let app = create_test_app(test_config());

    let response = send(
        &app,
        json_request(
            Method::POST,
            "/api/enquiries",
            json!({ "name": "Jane", "email": "not-an-email", "contact": "1", "comment": "Hi" }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert!(body["message"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_enquiries_listed_newest_first() {
    let app = create_test_app(test_config());

    let mut names = Vec::new();
    for _ in 0..3 {
        let name: String = Name().fake();
        let email: String = SafeEmail().fake();
        let response = send(
            &app,
            json_request(
                Method::POST,
                "/api/enquiries",
                json!({ "name": name, "email": email, "contact": "555", "comment": "Hello" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        names.push(name);
    }

    let token = admin_login(&app).await;
    let response = send(&app, get_request_with_auth("/api/enquiries", &token)).await;
    let body = parse_response_body(response).await;
    let listed: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    let expected: Vec<&str> = names.iter().rev().map(String::as_str).collect();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn test_enquiries_cannot_be_deleted() {
    let app = create_test_app(test_config());
    let token = admin_login(&app).await;

    let response = send(
        &app,
        json_request_with_auth(
            Method::DELETE,
            &format!("/api/enquiries/{}", uuid::Uuid::new_v4()),
            json!({}),
            &token,
        ),
    )
    .await;

    assert!(response.status().is_client_error());
    assert_ne!(response.status(), StatusCode::OK);
}
