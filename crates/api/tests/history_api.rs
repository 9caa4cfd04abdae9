//! HTTP-level integration tests for the `/history` endpoints.

mod common;

use std::sync::Arc;

use aletheia_store::MemoryStore;
use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};

#[tokio::test]
async fn create_echoes_item_with_generated_fields_and_nulls() {
    let store = Arc::new(MemoryStore::new());

    let response = post_json(
        common::build_test_app(store),
        "/history",
        serde_json::json!({
            "user_id": "u1",
            "dilemma_key": "trolley",
            "utilitarian_html": "<p>x</p>",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["ok"], true);

    let item = &json["item"];
    assert!(item["id"].is_string());
    assert!(!item["id"].as_str().unwrap().is_empty());
    assert_eq!(item["user_id"], "u1");
    assert_eq!(item["dilemma_key"], "trolley");
    assert_eq!(item["utilitarian_html"], "<p>x</p>");
    assert!(item["custom_text"].is_null());
    assert!(item["deontologist_html"].is_null());
    assert!(item["virtue_ethicist_html"].is_null());
    assert!(item["created_at"].is_string());
}

#[tokio::test]
async fn create_with_only_custom_text_persists_html_fields_as_null() {
    let store = Arc::new(MemoryStore::new());

    let response = post_json(
        common::build_test_app(store.clone()),
        "/history",
        serde_json::json!({ "custom_text": "my own dilemma" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["item"]["custom_text"], "my own dilemma");
    assert!(json["item"]["user_id"].is_null());
    assert!(json["item"]["utilitarian_html"].is_null());

    let response = get(common::build_test_app(store), "/history").await;
    let json = body_json(response).await;
    assert!(json["items"][0]["utilitarian_html"].is_null());
}

#[tokio::test]
async fn list_paginates_with_total() {
    let store = Arc::new(MemoryStore::new());
    for key in ["trolley", "lifeboat"] {
        let response = post_json(
            common::build_test_app(store.clone()),
            "/history",
            serde_json::json!({ "user_id": "u1", "dilemma_key": key }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(
        common::build_test_app(store),
        "/history?user_id=u1&limit=1&offset=0",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["ok"], true);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["total"], 2);
    // Newest first.
    assert_eq!(json["items"][0]["dilemma_key"], "lifeboat");
}

#[tokio::test]
async fn list_is_sorted_newest_first() {
    let store = Arc::new(MemoryStore::new());
    for key in ["trolley", "lifeboat", "doctor"] {
        post_json(
            common::build_test_app(store.clone()),
            "/history",
            serde_json::json!({ "user_id": "u1", "dilemma_key": key }),
        )
        .await;
    }

    let response = get(common::build_test_app(store), "/history?user_id=u1").await;
    let json = body_json(response).await;

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    let timestamps: Vec<&str> = items
        .iter()
        .map(|i| i["created_at"].as_str().unwrap())
        .collect();
    for pair in timestamps.windows(2) {
        // RFC 3339 timestamps compare lexicographically.
        assert!(pair[0] >= pair[1]);
    }
}

#[tokio::test]
async fn list_limit_zero_clamps_to_one() {
    let store = Arc::new(MemoryStore::new());
    for key in ["trolley", "lifeboat"] {
        post_json(
            common::build_test_app(store.clone()),
            "/history",
            serde_json::json!({ "user_id": "u1", "dilemma_key": key }),
        )
        .await;
    }

    let response = get(common::build_test_app(store), "/history?user_id=u1&limit=0").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["total"], 2);
}

#[tokio::test]
async fn list_non_numeric_limit_and_offset_fall_back_to_defaults() {
    let store = Arc::new(MemoryStore::new());
    post_json(
        common::build_test_app(store.clone()),
        "/history",
        serde_json::json!({ "user_id": "u1", "dilemma_key": "trolley" }),
    )
    .await;

    let response = get(
        common::build_test_app(store),
        "/history?user_id=u1&limit=abc&offset=xyz",
    )
    .await;

    // Not a client error: bad values revert to limit 20 / offset 0.
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn list_oversized_limit_and_negative_offset_are_clamped() {
    let store = Arc::new(MemoryStore::new());
    post_json(
        common::build_test_app(store.clone()),
        "/history",
        serde_json::json!({ "user_id": "u1", "dilemma_key": "trolley" }),
    )
    .await;

    let response = get(
        common::build_test_app(store),
        "/history?user_id=u1&limit=500&offset=-3",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["total"], 1);
}

#[tokio::test]
async fn list_without_user_id_spans_all_owners() {
    let store = Arc::new(MemoryStore::new());
    for (user, key) in [("u1", "trolley"), ("u2", "lifeboat")] {
        post_json(
            common::build_test_app(store.clone()),
            "/history",
            serde_json::json!({ "user_id": user, "dilemma_key": key }),
        )
        .await;
    }

    let response = get(common::build_test_app(store), "/history").await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 2);
}

#[tokio::test]
async fn list_empty_user_id_is_treated_as_absent() {
    let store = Arc::new(MemoryStore::new());
    post_json(
        common::build_test_app(store.clone()),
        "/history",
        serde_json::json!({ "user_id": "u1", "dilemma_key": "trolley" }),
    )
    .await;

    let response = get(common::build_test_app(store), "/history?user_id=").await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
}

#[tokio::test]
async fn delete_without_id_returns_400() {
    let store = Arc::new(MemoryStore::new());

    let response = delete(common::build_test_app(store), "/history").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"], "id required");
}

#[tokio::test]
async fn delete_unknown_id_still_succeeds() {
    let store = Arc::new(MemoryStore::new());

    let response = delete(
        common::build_test_app(store),
        "/history?id=no-such-record",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "ok": true }));
}

#[tokio::test]
async fn delete_removes_the_record() {
    let store = Arc::new(MemoryStore::new());
    let response = post_json(
        common::build_test_app(store.clone()),
        "/history",
        serde_json::json!({ "user_id": "u1", "dilemma_key": "trolley" }),
    )
    .await;
    let created = body_json(response).await;
    let id = created["item"]["id"].as_str().unwrap().to_string();

    let response = delete(
        common::build_test_app(store.clone()),
        &format!("/history?id={id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(common::build_test_app(store), "/history?user_id=u1").await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 0);
}
