//! Integration tests for short video endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    admin_login, create_short_video, create_test_app, delete_request_with_auth, get_request,
    json_request, json_request_with_auth, parse_response_body, send, test_config,
};
use serde_json::json;
use std::collections::HashSet;
use uuid::Uuid;

#[tokio::test]
async fn test_create_short_video() {
    let app = create_test_app(test_config());
    let token = admin_login(&app).await;

    let body = create_short_video(&app, &token, "Studio tour", 2).await;

    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    assert_eq!(body["title"], "Studio tour");
    assert_eq!(body["url"], "https://www.instagram.com/reel/Studio-tour/");
    assert_eq!(body["order"], 2);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_order_defaults_to_zero() {
    let app = create_test_app(test_config());
    let token = admin_login(&app).await;

    let response = send(
        &app,
        json_request_with_auth(
            Method::POST,
            "/api/short-videos",
            json!({ "title": "No order", "url": "https://example.com/r/1" }),
            &token,
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["order"], 0);
}

#[tokio::test]
async fn test_create_short_video_validation() {
    let app = create_test_app(test_config());
    let token = admin_login(&app).await;

    for payload in [
        json!({ "title": "", "url": "https://example.com/r/1" }),
        json!({ "title": "Missing url" }),
        json!({ "title": "   ", "url": "   " }),
    ] {
        let response = send(
            &app,
            json_request_with_auth(Method::POST, "/api/short-videos", payload, &token),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = parse_response_body(response).await;
        assert_eq!(body["error"], "validation_error");
    }

    let response = send(&app, get_request("/api/short-videos")).await;
    let body = parse_response_body(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_is_public_and_ordered() {
    let app = create_test_app(test_config());
    let token = admin_login(&app).await;

    create_short_video(&app, &token, "third", 3).await;
    create_short_video(&app, &token, "first", 1).await;
    create_short_video(&app, &token, "second", 2).await;

    let response = send(&app, get_request("/api/short-videos")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_ten_reels_then_capacity_exceeded() {
    let app = create_test_app(test_config());
    let token = admin_login(&app).await;

    for i in 0..10 {
        create_short_video(&app, &token, &format!("reel {}", i), 9 - i).await;
    }

    let response = send(&app, get_request("/api/short-videos")).await;
    let body = parse_response_body(response).await;
    let videos = body.as_array().unwrap();
    assert_eq!(videos.len(), 10);
    let orders: Vec<i64> = videos.iter().map(|v| v["order"].as_i64().unwrap()).collect();
    let mut sorted = orders.clone();
    sorted.sort();
    assert_eq!(orders, sorted);
    let ids: HashSet<&str> = videos.iter().map(|v| v["id"].as_str().unwrap()).collect();
    assert_eq!(ids.len(), 10);

    let response = send(
        &app,
        json_request_with_auth(
            Method::POST,
            "/api/short-videos",
            json!({ "title": "eleventh", "url": "https://example.com/r/11", "order": 11 }),
            &token,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "capacity_exceeded");

    let response = send(&app, get_request("/api/short-videos")).await;
    let body = parse_response_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_concurrent_creates_never_exceed_cap() {
    let app = create_test_app(test_config());
    let token = admin_login(&app).await;

    let mut handles = Vec::new();
    for i in 0..25 {
        let app = app.clone();
        let token = token.clone();
        handles.push(tokio::spawn(async move {
            send(
                &app,
                json_request_with_auth(
                    Method::POST,
                    "/api/short-videos",
                    json!({ "title": format!("race {}", i), "url": "https://example.com/r" }),
                    &token,
                ),
            )
            .await
            .status()
        }));
    }

    let mut created = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            StatusCode::CREATED => created += 1,
            StatusCode::CONFLICT => rejected += 1,
            other => panic!("Unexpected status {}", other),
        }
    }
    assert_eq!(created, 10);
    assert_eq!(rejected, 15);
}

#[tokio::test]
async fn test_delete_frees_a_slot() {
    let app = create_test_app(test_config());
    let token = admin_login(&app).await;

    let mut ids = Vec::new();
    for i in 0..10 {
        let body = create_short_video(&app, &token, &format!("reel {}", i), i).await;
        ids.push(body["id"].as_str().unwrap().to_string());
    }

    let response = send(
        &app,
        delete_request_with_auth(&format!("/api/short-videos/{}", ids[0]), &token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["success"], true);

    create_short_video(&app, &token, "replacement", 99).await;

    let response = send(&app, get_request("/api/short-videos")).await;
    let body = parse_response_body(response).await;
    let videos = body.as_array().unwrap();
    assert_eq!(videos.len(), 10);
    assert!(videos.iter().all(|v| v["id"] != ids[0].as_str()));
}

#[tokio::test]
async fn test_delete_unknown_id() {
    let app = create_test_app(test_config());
    let token = admin_login(&app).await;
    create_short_video(&app, &token, "keep me", 0).await;

    let response = send(
        &app,
        delete_request_with_auth(&format!("/api/short-videos/{}", Uuid::new_v4()), &token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "not_found");

    let response = send(&app, get_request("/api/short-videos")).await;
    let body = parse_response_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_requires_admin() {
    let app = create_test_app(test_config());
    let token = admin_login(&app).await;
    let video = create_short_video(&app, &token, "protected", 0).await;

    let response = send(
        &app,
        delete_request_with_auth(
            &format!("/api/short-videos/{}", video["id"].as_str().unwrap()),
            "not-a-token",
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_malformed_id_is_not_found() {
    let app = create_test_app(test_config());
    let token = admin_login(&app).await;

    let response = send(
        &app,
        delete_request_with_auth("/api/short-videos/not-a-uuid", &token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_unsupported_method_is_not_allowed() {
    let app = create_test_app(test_config());

    let response = send(
        &app,
        json_request(Method::PATCH, "/api/short-videos", json!({ "title": "x" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = send(
        &app,
        json_request(
            Method::PATCH,
            &format!("/api/short-videos/{}", Uuid::new_v4()),
            json!({ "title": "x" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
