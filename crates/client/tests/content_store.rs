//! Tests for [`ContentStore`] cache semantics against mock servers.

mod common;

use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;

use quill_client::types::{CreateContent, UpdateContent};
use quill_client::{ContentClient, ContentStore};

fn store_for(base_url: String) -> ContentStore {
    ContentStore::new(ContentClient::new(base_url))
}

// ---------------------------------------------------------------------------
// Test: refresh replaces the cached list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn refresh_replaces_cached_list() {
    let app = Router::new().route(
        "/content",
        get(|| async {
            Json(json!([
                {"id": 1, "title": "ページ1"},
                {"id": 2, "title": "ページ2"},
            ]))
        }),
    );
    let mut store = store_for(common::serve(app).await);

    store.refresh().await.unwrap();

    assert_eq!(store.contents().len(), 2);
    assert_eq!(store.contents()[0].id, 1);
    assert_eq!(store.contents()[1].id, 2);
}

// ---------------------------------------------------------------------------
// Test: create appends the server's representation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_appends_to_list() {
    let app = Router::new().route(
        "/content",
        post(|| async {
            (
                StatusCode::CREATED,
                Json(json!({"id": 10, "title": "新規ページ", "body": "本文テキスト"})),
            )
        }),
    );
    let mut store = store_for(common::serve(app).await);

    let created = store
        .create(&CreateContent {
            title: Some("新規ページ".to_string()),
            body: Some("本文テキスト".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(created.id, 10);
    assert_eq!(store.contents().len(), 1);
    assert_eq!(store.contents()[0].id, 10);
}

// ---------------------------------------------------------------------------
// Test: select loads the record without touching the list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn select_loads_record_without_touching_list() {
    let app = Router::new().route(
        "/content/{id}",
        get(|| async { Json(json!({"id": 5, "title": "選択ページ"})) }),
    );
    let mut store = store_for(common::serve(app).await);

    let selected = store.select(5).await.unwrap();

    assert_eq!(selected.id, 5);
    assert_eq!(store.selected().unwrap().id, 5);
    assert!(store.contents().is_empty());
}

// ---------------------------------------------------------------------------
// Test: update patches the list entry and the selection in place
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_patches_list_and_selection() {
    let app = Router::new()
        .route(
            "/content",
            get(|| async { Json(json!([{"id": 1, "title": "古いタイトル"}])) }),
        )
        .route(
            "/content/{id}",
            get(|| async { Json(json!({"id": 1, "title": "古いタイトル"})) })
                .put(|| async { Json(json!({"id": 1, "title": "新しいタイトル"})) }),
        );
    let mut store = store_for(common::serve(app).await);

    store.refresh().await.unwrap();
    store.select(1).await.unwrap();

    store
        .update(
            1,
            &UpdateContent {
                title: Some("新しいタイトル".to_string()),
                body: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(store.contents()[0].title.as_deref(), Some("新しいタイトル"));
    assert_eq!(
        store.selected().unwrap().title.as_deref(),
        Some("新しいタイトル")
    );
}

// ---------------------------------------------------------------------------
// Test: delete removes the entry and clears a matching selection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_entry_and_clears_selection() {
    let app = Router::new()
        .route(
            "/content",
            get(|| async {
                Json(json!([
                    {"id": 1, "title": "残るページ"},
                    {"id": 2, "title": "消えるページ"},
                ]))
            }),
        )
        .route(
            "/content/{id}",
            get(|| async { Json(json!({"id": 2, "title": "消えるページ"})) })
                .delete(|| async { StatusCode::NO_CONTENT }),
        );
    let mut store = store_for(common::serve(app).await);

    store.refresh().await.unwrap();
    store.select(2).await.unwrap();

    store.delete(2).await.unwrap();

    assert_eq!(store.contents().len(), 1);
    assert_eq!(store.contents()[0].id, 1);
    assert!(store.selected().is_none());
}

// ---------------------------------------------------------------------------
// Test: a failed mutation leaves the cache untouched
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_update_leaves_cache_untouched() {
    let app = Router::new()
        .route(
            "/content",
            get(|| async { Json(json!([{"id": 1, "title": "古いタイトル"}])) }),
        )
        .route(
            "/content/{id}",
            get(|| async { Json(json!({"id": 1, "title": "古いタイトル"})) })
                .put(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
    let mut store = store_for(common::serve(app).await);

    store.refresh().await.unwrap();
    store.select(1).await.unwrap();

    store
        .update(
            1,
            &UpdateContent {
                title: Some("新しいタイトル".to_string()),
                body: None,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(store.contents()[0].title.as_deref(), Some("古いタイトル"));
    assert_eq!(
        store.selected().unwrap().title.as_deref(),
        Some("古いタイトル")
    );
}

#[tokio::test]
async fn failed_delete_leaves_cache_untouched() {
    let app = Router::new()
        .route(
            "/content",
            get(|| async { Json(json!([{"id": 1, "title": "ページ"}])) }),
        )
        .route(
            "/content/{id}",
            delete(|| async { StatusCode::NOT_FOUND }),
        );
    let mut store = store_for(common::serve(app).await);

    store.refresh().await.unwrap();

    store.delete(1).await.unwrap_err();

    assert_eq!(store.contents().len(), 1);
}
