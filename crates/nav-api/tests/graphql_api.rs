//! Executes documents against the full schema backed by the in-memory store

use std::sync::Arc;

use async_graphql::{Request, Variables};
use serde_json::{json, Value};

use nav_api::{build_schema, NavigationSchema};
use nav_core::repositories::{NavigationItemRepository, NavigationTreeRepository};
use nav_core::services::NavigationService;
use nav_infrastructure::InMemoryNavigationStore;
use nav_shared::config::AppConfig;

const CREATE_ITEM: &str = r#"
    mutation($input: CreateNavigationItemInput!) {
        createNavigationItem(input: $input) {
            clientMutationId
            navigationItem {
                _id
                shopId
                hasUnpublishedChanges
                data { url }
                draftData { url content { language value } }
            }
        }
    }
"#;

const CREATE_TREE: &str = r#"
    mutation($input: CreateNavigationTreeInput!) {
        createNavigationTree(input: $input) {
            navigationTree { _id name hasUnpublishedChanges }
        }
    }
"#;

const TREE_BY_ID: &str = r#"
    query($id: ID!, $language: String!, $secondary: Boolean! = false) {
        navigationTreeById(id: $id, language: $language, shouldIncludeSecondary: $secondary) {
            _id
            name
            hasUnpublishedChanges
            items {
                navigationItem {
                    _id
                    data { contentForLanguage }
                }
            }
            draftItems {
                isSecondary
                navigationItem {
                    draftData {
                        contentForLanguage
                        german: contentForLanguage(language: "de")
                    }
                }
                items { navigationItem { _id } }
            }
        }
    }
"#;

fn schema() -> NavigationSchema {
    let config = AppConfig::from_toml_str("").unwrap();
    let store = Arc::new(InMemoryNavigationStore::new());
    let items: Arc<dyn NavigationItemRepository> = store.clone();
    let trees: Arc<dyn NavigationTreeRepository> = store;
    let service = NavigationService::new(items, trees, config.navigation.clone());
    build_schema(Arc::new(service), &config.graphql)
}

/// Runs a document and returns the whole response as JSON (`data` and `errors`).
async fn run(schema: &NavigationSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    serde_json::to_value(schema.execute(request).await).unwrap()
}

fn error_code(response: &Value) -> &str {
    response["errors"][0]["extensions"]["code"].as_str().unwrap_or_default()
}

async fn create_item(schema: &NavigationSchema, shop_id: &str, label: &str) -> String {
    let response = run(
        schema,
        CREATE_ITEM,
        json!({
            "input": {
                "navigationItem": {
                    "shopId": shop_id,
                    "draftData": {
                        "url": format!("/{}", label.to_lowercase()),
                        "content": [{ "language": "en", "value": label }]
                    }
                }
            }
        }),
    )
    .await;
    response["data"]["createNavigationItem"]["navigationItem"]["_id"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn create_tree(schema: &NavigationSchema, draft_items: Value) -> String {
    let response = run(
        schema,
        CREATE_TREE,
        json!({
            "input": {
                "shopId": "shop-1",
                "navigationTree": { "name": "Main menu", "draftItems": draft_items }
            }
        }),
    )
    .await;
    assert!(response["errors"].is_null(), "unexpected errors: {}", response);
    response["data"]["createNavigationTree"]["navigationTree"]["_id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_create_item_returns_draft_without_flag() {
    let schema = schema();
    let response = run(
        &schema,
        CREATE_ITEM,
        json!({
            "input": {
                "clientMutationId": "abc",
                "navigationItem": {
                    "shopId": "shop-1",
                    "draftData": { "content": [{ "language": "en", "value": "Home" }] }
                }
            }
        }),
    )
    .await;

    let payload = &response["data"]["createNavigationItem"];
    assert_eq!(payload["clientMutationId"], "abc");
    assert_eq!(payload["navigationItem"]["shopId"], "shop-1");
    assert_eq!(payload["navigationItem"]["hasUnpublishedChanges"], false);
    assert!(payload["navigationItem"]["data"].is_null());
    assert_eq!(
        payload["navigationItem"]["draftData"]["content"],
        json!([{ "language": "en", "value": "Home" }])
    );
}

#[tokio::test]
async fn test_duplicate_language_is_a_validation_error() {
    let schema = schema();
    let response = run(
        &schema,
        CREATE_ITEM,
        json!({
            "input": {
                "navigationItem": {
                    "shopId": "shop-1",
                    "draftData": {
                        "content": [
                            { "language": "en", "value": "Home" },
                            { "language": "en", "value": "Start" }
                        ]
                    }
                }
            }
        }),
    )
    .await;

    assert_eq!(error_code(&response), "VALIDATION_ERROR");
    assert!(response["data"].is_null());
}

#[tokio::test]
async fn test_metadata_must_be_an_object() {
    let schema = schema();
    let query = r#"
        mutation($input: CreateNavigationItemInput!) {
            createNavigationItem(input: $input) {
                navigationItem { metadata }
            }
        }
    "#;
    let input = |metadata: Value| {
        json!({ "input": { "navigationItem": { "shopId": "shop-1", "metadata": metadata } } })
    };

    let response = run(&schema, query, input(json!(5))).await;
    assert!(response["errors"].as_array().is_some_and(|errors| !errors.is_empty()));
    assert!(response["data"].is_null());

    let response = run(&schema, query, input(json!({ "a": [1, 2] }))).await;
    assert!(response["errors"].is_null(), "unexpected errors: {}", response);
    assert_eq!(
        response["data"]["createNavigationItem"]["navigationItem"]["metadata"],
        json!({ "a": [1, 2] })
    );
}

#[tokio::test]
async fn test_tree_lookup_resolves_language_and_filters_secondary() {
    let schema = schema();
    let home = create_item(&schema, "shop-1", "Home").await;
    let shop = create_item(&schema, "shop-1", "Shop").await;
    let help = create_item(&schema, "shop-1", "Help").await;
    let tree_id = create_tree(
        &schema,
        json!([
            { "navigationItemId": home, "items": [{ "navigationItemId": shop }] },
            { "navigationItemId": help, "isSecondary": true }
        ]),
    )
    .await;

    let response = run(&schema, TREE_BY_ID, json!({ "id": tree_id, "language": "en" })).await;
    let tree = &response["data"]["navigationTreeById"];
    assert_eq!(tree["name"], "Main menu");
    assert_eq!(tree["hasUnpublishedChanges"], true);
    assert_eq!(tree["items"], json!([]));

    let draft = tree["draftItems"].as_array().unwrap();
    assert_eq!(draft.len(), 1);
    assert_eq!(draft[0]["navigationItem"]["draftData"]["contentForLanguage"], "Home");
    assert!(draft[0]["navigationItem"]["draftData"]["german"].is_null());
    assert_eq!(draft[0]["items"][0]["navigationItem"]["_id"], shop.as_str());

    let response = run(
        &schema,
        TREE_BY_ID,
        json!({ "id": tree_id, "language": "fr", "secondary": true }),
    )
    .await;
    let draft = response["data"]["navigationTreeById"]["draftItems"].as_array().unwrap().clone();
    assert_eq!(draft.len(), 2);
    assert_eq!(draft[1]["isSecondary"], true);
    assert!(draft[0]["navigationItem"]["draftData"]["contentForLanguage"].is_null());
}

#[tokio::test]
async fn test_missing_tree_is_null_not_error() {
    let schema = schema();
    for id in [uuid::Uuid::new_v4().to_string(), "not-an-id".to_string()] {
        let response = run(&schema, TREE_BY_ID, json!({ "id": id, "language": "en" })).await;
        assert!(response["errors"].is_null());
        assert!(response["data"]["navigationTreeById"].is_null());
    }
}

#[tokio::test]
async fn test_publish_promotes_tree_and_items() {
    let schema = schema();
    let home = create_item(&schema, "shop-1", "Home").await;
    let tree_id = create_tree(&schema, json!([{ "navigationItemId": home }])).await;

    let response = run(
        &schema,
        r#"
            mutation($input: PublishNavigationChangesInput!) {
                publishNavigationChanges(input: $input) {
                    clientMutationId
                    navigationTree {
                        hasUnpublishedChanges
                        items { navigationItem { hasUnpublishedChanges data { url } } }
                    }
                }
            }
        "#,
        json!({ "input": { "id": tree_id, "shopId": "shop-1", "clientMutationId": "p1" } }),
    )
    .await;
    let payload = &response["data"]["publishNavigationChanges"];
    assert_eq!(payload["clientMutationId"], "p1");
    assert_eq!(payload["navigationTree"]["hasUnpublishedChanges"], false);
    let item = &payload["navigationTree"]["items"][0]["navigationItem"];
    assert_eq!(item["hasUnpublishedChanges"], false);
    assert_eq!(item["data"]["url"], "/home");

    let response = run(&schema, TREE_BY_ID, json!({ "id": tree_id, "language": "en" })).await;
    let tree = &response["data"]["navigationTreeById"];
    assert_eq!(tree["hasUnpublishedChanges"], false);
    assert_eq!(tree["items"][0]["navigationItem"]["data"]["contentForLanguage"], "Home");
}

#[tokio::test]
async fn test_update_item_sets_flag_and_keeps_published_data() {
    let schema = schema();
    let home = create_item(&schema, "shop-1", "Home").await;

    let response = run(
        &schema,
        r#"
            mutation($input: UpdateNavigationItemInput!) {
                updateNavigationItem(input: $input) {
                    navigationItem { hasUnpublishedChanges data { url } draftData { url } }
                }
            }
        "#,
        json!({
            "input": {
                "id": home,
                "navigationItem": { "shopId": "shop-1", "draftData": { "url": "/start" } }
            }
        }),
    )
    .await;
    let item = &response["data"]["updateNavigationItem"]["navigationItem"];
    assert_eq!(item["hasUnpublishedChanges"], true);
    assert_eq!(item["draftData"]["url"], "/start");
    assert!(item["data"].is_null());
}

#[tokio::test]
async fn test_mutation_error_codes() {
    let schema = schema();
    let home = create_item(&schema, "shop-1", "Home").await;
    create_tree(&schema, json!([{ "navigationItemId": home }])).await;

    let delete = r#"
        mutation($input: DeleteNavigationItemInput!) {
            deleteNavigationItem(input: $input) { navigationItem { _id } }
        }
    "#;
    let response = run(&schema, delete, json!({ "input": { "id": home } })).await;
    assert_eq!(error_code(&response), "CONFLICT");

    let response = run(&schema, delete, json!({ "input": { "id": "missing" } })).await;
    assert_eq!(error_code(&response), "NOT_FOUND");

    let response = run(
        &schema,
        r#"
            mutation($input: UpdateNavigationTreeInput!) {
                updateNavigationTree(input: $input) { navigationTree { _id } }
            }
        "#,
        json!({
            "input": {
                "id": uuid::Uuid::new_v4().to_string(),
                "navigationTree": { "name": "Renamed" }
            }
        }),
    )
    .await;
    assert_eq!(error_code(&response), "NOT_FOUND");
}

#[tokio::test]
async fn test_items_by_shop_connection() {
    let schema = schema();
    for label in ["One", "Two", "Three"] {
        create_item(&schema, "shop-1", label).await;
    }
    create_item(&schema, "shop-2", "Elsewhere").await;

    let query = r#"
        query($after: ConnectionCursor, $first: Int, $last: Int) {
            navigationItemsByShopId(shopId: "shop-1", after: $after, first: $first, last: $last, sortOrder: asc) {
                totalCount
                edges { cursor node { _id } }
                nodes { _id }
                pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
            }
        }
    "#;

    let response = run(&schema, query, json!({ "first": 2 })).await;
    let connection = &response["data"]["navigationItemsByShopId"];
    assert_eq!(connection["totalCount"], 3);
    assert_eq!(connection["edges"].as_array().unwrap().len(), 2);
    assert_eq!(connection["nodes"][1]["_id"], connection["edges"][1]["node"]["_id"]);
    assert_eq!(connection["pageInfo"]["hasNextPage"], true);
    assert_eq!(connection["pageInfo"]["hasPreviousPage"], false);

    let after = connection["pageInfo"]["endCursor"].clone();
    let response = run(&schema, query, json!({ "first": 2, "after": after })).await;
    let connection = &response["data"]["navigationItemsByShopId"];
    assert_eq!(connection["edges"].as_array().unwrap().len(), 1);
    assert_eq!(connection["pageInfo"]["hasNextPage"], false);
    assert_eq!(connection["pageInfo"]["hasPreviousPage"], true);

    let response = run(&schema, query, json!({ "first": 1, "last": 1 })).await;
    assert_eq!(error_code(&response), "BAD_USER_INPUT");

    let response = run(&schema, query, json!({ "after": "bogus" })).await;
    assert_eq!(error_code(&response), "BAD_USER_INPUT");
}

#[test]
fn test_schema_keeps_public_names_and_defaults() {
    let sdl = schema().sdl();
    assert!(sdl.contains("shouldIncludeSecondary: Boolean! = false"));
    assert!(sdl.contains("sortOrder: SortOrder! = desc"));
    assert!(sdl.contains("sortBy: NavigationItemSortByField! = createdAt"));
    assert!(sdl.contains("scalar JSONObject"));
    assert!(sdl.contains("scalar ConnectionCursor"));
    assert!(sdl.contains("_id: ID!"));
    assert!(sdl.contains("totalCount: Int!"));
}
