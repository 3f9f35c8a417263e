//! GraphQL output types

use std::sync::Arc;

use async_graphql::{Enum, Object, SimpleObject, ID};
use chrono::{DateTime, Utc};
use tracing::warn;

use nav_core::domain as model;
use nav_core::pagination::{self, Page};
use nav_core::services::ResolvedNavigationTree;

use super::scalars::{ConnectionCursor, JsonObject};

/// Sort direction
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum SortOrder {
    /// Ascending, e.g. A to Z or oldest first
    #[graphql(name = "asc")]
    Asc,
    /// Descending, e.g. Z to A or newest first
    #[graphql(name = "desc")]
    Desc,
}

impl From<SortOrder> for pagination::SortOrder {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => pagination::SortOrder::Asc,
            SortOrder::Desc => pagination::SortOrder::Desc,
        }
    }
}

/// Fields by which navigation items can be sorted
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum NavigationItemSortByField {
    #[graphql(name = "_id")]
    Id,
    #[graphql(name = "createdAt")]
    CreatedAt,
}

impl From<NavigationItemSortByField> for pagination::NavigationItemSortBy {
    fn from(field: NavigationItemSortByField) -> Self {
        match field {
            NavigationItemSortByField::Id => pagination::NavigationItemSortBy::Id,
            NavigationItemSortByField::CreatedAt => pagination::NavigationItemSortBy::CreatedAt,
        }
    }
}

/// Label of a navigation item in one language
#[derive(SimpleObject, Clone, Debug)]
pub struct NavigationItemContent {
    /// The language of the piece of navigation content
    pub language: Option<String>,
    /// The translated value, in plain text or markdown
    pub value: Option<String>,
}

impl From<&model::NavigationItemContent> for NavigationItemContent {
    fn from(content: &model::NavigationItemContent) -> Self {
        Self {
            language: Some(content.language.clone()),
            value: content.value.clone(),
        }
    }
}

/// Content and link settings of a navigation item
#[derive(Clone, Debug)]
pub struct NavigationItemData {
    data: model::NavigationItemData,
    language: Option<String>,
}

#[Object]
impl NavigationItemData {
    /// CSS class names
    async fn class_names(&self) -> Option<String> {
        self.data.class_names.clone()
    }

    /// Content of the item in every available language
    async fn content(&self) -> Option<Vec<NavigationItemContent>> {
        Some(self.data.content.iter().map(NavigationItemContent::from).collect())
    }

    /// Content for the requested language. Defaults to the language the tree was read in.
    async fn content_for_language(&self, language: Option<String>) -> Option<String> {
        let language = language.or_else(|| self.language.clone())?;
        self.data.content_for_language(&language).map(str::to_string)
    }

    /// Whether the URL is relative to the storefront
    async fn is_url_relative(&self) -> Option<bool> {
        self.data.is_url_relative
    }

    /// Whether the link opens in a new window
    async fn should_open_in_new_window(&self) -> Option<bool> {
        self.data.should_open_in_new_window
    }

    /// The URL the item links to
    async fn url(&self) -> Option<String> {
        self.data.url.clone()
    }
}

/// An item that can be placed in navigation trees
#[derive(Clone, Debug)]
pub struct NavigationItem {
    item: model::NavigationItem,
    language: Option<String>,
}

impl NavigationItem {
    pub fn new(item: model::NavigationItem, language: Option<String>) -> Self {
        Self { item, language }
    }

    fn wrap(&self, data: &model::NavigationItemData) -> NavigationItemData {
        NavigationItemData {
            data: data.clone(),
            language: self.language.clone(),
        }
    }
}

#[Object]
impl NavigationItem {
    /// The navigation item ID
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID(self.item.id.to_string())
    }

    /// The ID of the shop the navigation item belongs to
    async fn shop_id(&self) -> ID {
        ID(self.item.shop_id.clone())
    }

    /// The date and time at which this navigation item was created
    async fn created_at(&self) -> DateTime<Utc> {
        self.item.created_at
    }

    /// The published data for this navigation item
    async fn data(&self) -> Option<NavigationItemData> {
        self.item.data.as_ref().map(|data| self.wrap(data))
    }

    /// The draft data for this navigation item
    async fn draft_data(&self) -> Option<NavigationItemData> {
        Some(self.wrap(&self.item.draft_data))
    }

    /// Whether the navigation item has unpublished changes
    async fn has_unpublished_changes(&self) -> Option<bool> {
        Some(self.item.has_unpublished_changes)
    }

    /// An object for storing custom data
    async fn metadata(&self) -> Option<JsonObject> {
        self.item.metadata.clone().map(JsonObject)
    }
}

/// A navigation tree with its referenced items looked up
#[derive(Clone, Debug)]
pub struct NavigationTree {
    resolved: Arc<ResolvedNavigationTree>,
}

impl NavigationTree {
    pub fn new(resolved: ResolvedNavigationTree) -> Self {
        Self {
            resolved: Arc::new(resolved),
        }
    }
}

#[Object]
impl NavigationTree {
    /// The navigation tree ID
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID(self.resolved.tree.id.to_string())
    }

    /// The ID of the shop the navigation tree belongs to
    async fn shop_id(&self) -> ID {
        ID(self.resolved.tree.shop_id.clone())
    }

    /// The name of the tree, for operator display purposes
    async fn name(&self) -> String {
        self.resolved.tree.name.clone()
    }

    /// The published items
    async fn items(&self) -> Option<Vec<NavigationTreeItem>> {
        Some(NavigationTreeItem::build(&self.resolved.tree.items, &self.resolved))
    }

    /// The draft items
    async fn draft_items(&self) -> Option<Vec<NavigationTreeItem>> {
        Some(NavigationTreeItem::build(&self.resolved.tree.draft_items, &self.resolved))
    }

    /// Whether the navigation tree has unpublished changes
    async fn has_unpublished_changes(&self) -> Option<bool> {
        Some(self.resolved.tree.has_unpublished_changes)
    }
}

/// A node of a navigation tree
#[derive(Clone, Debug)]
pub struct NavigationTreeItem {
    node: model::NavigationTreeItem,
    item: model::NavigationItem,
    resolved: Arc<ResolvedNavigationTree>,
}

impl NavigationTreeItem {
    /// Nodes whose item can no longer be found are left out.
    fn build(
        nodes: &[model::NavigationTreeItem],
        resolved: &Arc<ResolvedNavigationTree>,
    ) -> Vec<NavigationTreeItem> {
        nodes
            .iter()
            .filter_map(|node| match resolved.item(&node.navigation_item_id) {
                Some(item) => Some(NavigationTreeItem {
                    node: node.clone(),
                    item: item.clone(),
                    resolved: resolved.clone(),
                }),
                None => {
                    warn!(
                        "Tree {} references missing navigation item {}",
                        resolved.tree.id, node.navigation_item_id
                    );
                    None
                }
            })
            .collect()
    }
}

#[Object]
impl NavigationTreeItem {
    /// Whether the navigation item should display its children
    async fn expanded(&self) -> Option<bool> {
        Some(self.node.expanded)
    }

    /// Whether the navigation item should be hidden from customers
    async fn is_private(&self) -> Option<bool> {
        Some(self.node.is_private)
    }

    /// Whether the navigation item is a secondary navigation item
    async fn is_secondary(&self) -> Option<bool> {
        Some(self.node.is_secondary)
    }

    /// Whether the navigation item should be shown in the navigation
    async fn is_visible(&self) -> Option<bool> {
        Some(self.node.is_visible)
    }

    /// Child tree items
    async fn items(&self) -> Option<Vec<NavigationTreeItem>> {
        Some(NavigationTreeItem::build(&self.node.items, &self.resolved))
    }

    /// The navigation item
    async fn navigation_item(&self) -> NavigationItem {
        NavigationItem::new(self.item.clone(), self.resolved.language.clone())
    }
}

/// A navigation item with its pagination cursor
#[derive(SimpleObject)]
pub struct NavigationItemEdge {
    /// The cursor that represents this node in the paginated results
    pub cursor: ConnectionCursor,
    /// The navigation item
    pub node: Option<NavigationItem>,
}

/// Pagination information
#[derive(SimpleObject, Debug, Clone)]
pub struct PageInfo {
    /// The cursor of the last edge
    pub end_cursor: Option<ConnectionCursor>,
    /// Whether more edges exist after the last one
    pub has_next_page: bool,
    /// Whether more edges exist before the first one
    pub has_previous_page: bool,
    /// The cursor of the first edge
    pub start_cursor: Option<ConnectionCursor>,
}

/// Wraps a list of navigation items, providing pagination cursors and information
#[derive(SimpleObject)]
pub struct NavigationItemConnection {
    /// The list of nodes that match the query, wrapped in an edge to provide a cursor string for each
    pub edges: Option<Vec<NavigationItemEdge>>,
    /// The list of nodes, for clients that do not need cursors
    pub nodes: Option<Vec<NavigationItem>>,
    /// Information to help a client request the next or previous page
    pub page_info: PageInfo,
    /// The total number of nodes that match the query
    pub total_count: i32,
}

impl From<Page<model::NavigationItem>> for NavigationItemConnection {
    fn from(page: Page<model::NavigationItem>) -> Self {
        let page_info = PageInfo {
            end_cursor: page.page_info.end_cursor.map(ConnectionCursor),
            has_next_page: page.page_info.has_next_page,
            has_previous_page: page.page_info.has_previous_page,
            start_cursor: page.page_info.start_cursor.map(ConnectionCursor),
        };
        let nodes: Vec<NavigationItem> = page
            .edges
            .iter()
            .map(|edge| NavigationItem::new(edge.node.clone(), None))
            .collect();
        let edges = page
            .edges
            .into_iter()
            .map(|edge| NavigationItemEdge {
                cursor: ConnectionCursor(edge.cursor),
                node: Some(NavigationItem::new(edge.node, None)),
            })
            .collect();

        Self {
            edges: Some(edges),
            nodes: Some(nodes),
            page_info,
            total_count: i32::try_from(page.total_count).unwrap_or(i32::MAX),
        }
    }
}

/// Response payload for `createNavigationItem`
#[derive(SimpleObject)]
pub struct CreateNavigationItemPayload {
    /// The same string you sent with the mutation params, for matching mutation calls with their responses
    pub client_mutation_id: Option<String>,
    /// The created navigation item
    pub navigation_item: Option<NavigationItem>,
}

/// Response payload for `updateNavigationItem`
#[derive(SimpleObject)]
pub struct UpdateNavigationItemPayload {
    /// The same string you sent with the mutation params, for matching mutation calls with their responses
    pub client_mutation_id: Option<String>,
    /// The updated navigation item
    pub navigation_item: Option<NavigationItem>,
}

/// Response payload for `deleteNavigationItem`
#[derive(SimpleObject)]
pub struct DeleteNavigationItemPayload {
    /// The same string you sent with the mutation params, for matching mutation calls with their responses
    pub client_mutation_id: Option<String>,
    /// The deleted navigation item, as it was before deletion
    pub navigation_item: Option<NavigationItem>,
}

/// Response payload for `createNavigationTree`
#[derive(SimpleObject)]
pub struct CreateNavigationTreePayload {
    /// The same string you sent with the mutation params, for matching mutation calls with their responses
    pub client_mutation_id: Option<String>,
    /// The created navigation tree
    pub navigation_tree: Option<NavigationTree>,
}

/// Response payload for `updateNavigationTree`
#[derive(SimpleObject)]
pub struct UpdateNavigationTreePayload {
    /// The same string you sent with the mutation params, for matching mutation calls with their responses
    pub client_mutation_id: Option<String>,
    /// The updated navigation tree
    pub navigation_tree: Option<NavigationTree>,
}

/// Response payload for `publishNavigationChanges`
#[derive(SimpleObject)]
pub struct PublishNavigationChangesPayload {
    /// The same string you sent with the mutation params, for matching mutation calls with their responses
    pub client_mutation_id: Option<String>,
    /// The navigation tree with updated items
    pub navigation_tree: Option<NavigationTree>,
}
