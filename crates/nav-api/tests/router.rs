//! HTTP surface

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use nav_api::{build_router, build_schema, AppState};
use nav_core::repositories::{NavigationItemRepository, NavigationTreeRepository};
use nav_core::services::NavigationService;
use nav_infrastructure::InMemoryNavigationStore;
use nav_shared::config::AppConfig;

fn app(toml: &str) -> Router {
    let config = AppConfig::from_toml_str(toml).unwrap();
    let store = Arc::new(InMemoryNavigationStore::new());
    let items: Arc<dyn NavigationItemRepository> = store.clone();
    let trees: Arc<dyn NavigationTreeRepository> = store;
    let service = NavigationService::new(items, trees, config.navigation.clone());
    let schema = build_schema(Arc::new(service), &config.graphql);
    build_router(AppState { schema, config })
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = app("");

    let response = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "healthy");

    let response = app
        .oneshot(Request::get("/health/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["success"], true);
}

#[tokio::test]
async fn test_graphql_post() {
    let body = json!({
        "query": "query($shopId: ID!) { navigationItemsByShopId(shopId: $shopId) { totalCount } }",
        "variables": { "shopId": "shop-1" }
    });
    let response = app("")
        .oneshot(
            Request::post("/graphql")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"]["navigationItemsByShopId"]["totalCount"], 0);
}

#[tokio::test]
async fn test_graphiql_follows_playground_setting() {
    let response = app("")
        .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app("[graphql]\npath = \"/api/graphql\"\nplayground = false\n")
        .oneshot(Request::get("/api/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
