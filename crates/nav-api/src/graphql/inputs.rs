//! GraphQL input types and their conversion into domain values

use async_graphql::{InputObject, ID};

use nav_core::domain::{self as model, Metadata};
use nav_core::services::{NavigationItemUpdate, NavigationTreeUpdate, NewNavigationItem, NewNavigationTree};
use nav_core::DomainError;
use nav_shared::parse_id;

use super::scalars::JsonObject;

/// Label of a navigation item in one language
#[derive(InputObject, Debug, Clone)]
pub struct NavigationItemContentInput {
    /// The language of the piece of navigation content
    pub language: String,
    /// The translated value, in plain text or markdown
    pub value: Option<String>,
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct NavigationItemDataInput {
    /// CSS class names
    pub class_names: Option<String>,
    /// Content of the item, one entry per language
    pub content: Option<Vec<NavigationItemContentInput>>,
    /// Whether the URL is relative to the storefront
    pub is_url_relative: Option<bool>,
    /// Whether the link opens in a new window
    pub should_open_in_new_window: Option<bool>,
    /// The URL the item links to
    pub url: Option<String>,
}

impl From<NavigationItemDataInput> for model::NavigationItemData {
    fn from(input: NavigationItemDataInput) -> Self {
        Self {
            url: input.url,
            is_url_relative: input.is_url_relative,
            should_open_in_new_window: input.should_open_in_new_window,
            class_names: input.class_names,
            content: input
                .content
                .unwrap_or_default()
                .into_iter()
                .map(|entry| model::NavigationItemContent {
                    language: entry.language,
                    value: entry.value,
                })
                .collect(),
        }
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct NavigationItemInput {
    /// The draft data for the navigation item
    pub draft_data: Option<NavigationItemDataInput>,
    /// An object for storing custom data
    pub metadata: Option<JsonObject>,
    /// The ID of the shop the navigation item belongs to
    pub shop_id: ID,
}

impl NavigationItemInput {
    fn into_parts(self) -> (String, Option<model::NavigationItemData>, Option<Metadata>) {
        (
            self.shop_id.0,
            self.draft_data.map(Into::into),
            self.metadata.map(|metadata| metadata.0),
        )
    }
}

/// Input for the `createNavigationItem` mutation
#[derive(InputObject, Debug, Clone)]
pub struct CreateNavigationItemInput {
    /// An optional string identifying the mutation call, which will be returned in the response payload
    pub client_mutation_id: Option<String>,
    /// The navigation item to create
    pub navigation_item: NavigationItemInput,
}

impl From<NavigationItemInput> for NewNavigationItem {
    fn from(input: NavigationItemInput) -> Self {
        let (shop_id, draft_data, metadata) = input.into_parts();
        Self {
            shop_id,
            draft_data,
            metadata,
        }
    }
}

/// Input for the `updateNavigationItem` mutation
#[derive(InputObject, Debug, Clone)]
pub struct UpdateNavigationItemInput {
    /// An optional string identifying the mutation call, which will be returned in the response payload
    pub client_mutation_id: Option<String>,
    /// The ID of the navigation item to update
    pub id: ID,
    /// The new draft data. Its `shopId` must match the item's shop.
    pub navigation_item: NavigationItemInput,
}

impl From<NavigationItemInput> for NavigationItemUpdate {
    fn from(input: NavigationItemInput) -> Self {
        let (shop_id, draft_data, metadata) = input.into_parts();
        Self {
            shop_id: Some(shop_id),
            draft_data,
            metadata,
        }
    }
}

/// Input for the `deleteNavigationItem` mutation
#[derive(InputObject, Debug, Clone)]
pub struct DeleteNavigationItemInput {
    /// An optional string identifying the mutation call, which will be returned in the response payload
    pub client_mutation_id: Option<String>,
    /// The ID of the navigation item to delete
    pub id: ID,
    /// The ID of the shop the navigation item belongs to
    pub shop_id: Option<ID>,
}

/// A node of a navigation tree
#[derive(InputObject, Debug, Clone)]
pub struct NavigationTreeItemInput {
    /// Whether the navigation item should display its children
    pub expanded: Option<bool>,
    /// Whether the navigation item should be hidden from customers
    pub is_private: Option<bool>,
    /// Whether the navigation item is a secondary navigation item
    pub is_secondary: Option<bool>,
    /// Whether the navigation item should be shown in the navigation
    pub is_visible: Option<bool>,
    /// Child tree items
    pub items: Option<Vec<NavigationTreeItemInput>>,
    /// The ID of the navigation item this node places
    pub navigation_item_id: ID,
}

impl NavigationTreeItemInput {
    pub fn into_model(self) -> Result<model::NavigationTreeItem, DomainError> {
        let navigation_item_id = parse_id(&self.navigation_item_id).ok_or_else(|| {
            DomainError::ValidationError(format!("Invalid navigation item id: {}", self.navigation_item_id.0))
        })?;

        Ok(model::NavigationTreeItem {
            navigation_item_id,
            expanded: self.expanded.unwrap_or(false),
            is_private: self.is_private.unwrap_or(false),
            is_secondary: self.is_secondary.unwrap_or(false),
            is_visible: self.is_visible.unwrap_or(true),
            items: Self::into_models(self.items.unwrap_or_default())?,
        })
    }

    pub fn into_models(items: Vec<NavigationTreeItemInput>) -> Result<Vec<model::NavigationTreeItem>, DomainError> {
        items.into_iter().map(Self::into_model).collect()
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct NavigationTreeInput {
    /// The draft structure of the tree
    pub draft_items: Option<Vec<NavigationTreeItemInput>>,
    /// The name of the tree, for operator display purposes
    pub name: Option<String>,
}

impl NavigationTreeInput {
    fn draft_items(&mut self) -> Result<Option<Vec<model::NavigationTreeItem>>, DomainError> {
        self.draft_items
            .take()
            .map(NavigationTreeItemInput::into_models)
            .transpose()
    }
}

/// Input for the `createNavigationTree` mutation
#[derive(InputObject, Debug, Clone)]
pub struct CreateNavigationTreeInput {
    /// An optional string identifying the mutation call, which will be returned in the response payload
    pub client_mutation_id: Option<String>,
    /// The tree to create. `name` is required.
    pub navigation_tree: NavigationTreeInput,
    /// The ID of the shop the navigation tree belongs to
    pub shop_id: ID,
}

impl TryFrom<CreateNavigationTreeInput> for NewNavigationTree {
    type Error = DomainError;

    fn try_from(mut input: CreateNavigationTreeInput) -> Result<Self, Self::Error> {
        let draft_items = input.navigation_tree.draft_items()?.unwrap_or_default();
        let name = input
            .navigation_tree
            .name
            .ok_or_else(|| DomainError::ValidationError("Tree name is required".to_string()))?;

        Ok(Self {
            shop_id: input.shop_id.0,
            name,
            draft_items,
        })
    }
}

/// Input for the `updateNavigationTree` mutation
#[derive(InputObject, Debug, Clone)]
pub struct UpdateNavigationTreeInput {
    /// An optional string identifying the mutation call, which will be returned in the response payload
    pub client_mutation_id: Option<String>,
    /// The ID of the navigation tree to update
    pub id: ID,
    /// The new name and/or draft structure
    pub navigation_tree: NavigationTreeInput,
    /// The ID of the shop the navigation tree belongs to
    pub shop_id: Option<ID>,
}

impl TryFrom<UpdateNavigationTreeInput> for NavigationTreeUpdate {
    type Error = DomainError;

    fn try_from(mut input: UpdateNavigationTreeInput) -> Result<Self, Self::Error> {
        Ok(Self {
            draft_items: input.navigation_tree.draft_items()?,
            name: input.navigation_tree.name,
            shop_id: input.shop_id.map(|id| id.0),
        })
    }
}

/// Input for the `publishNavigationChanges` mutation
#[derive(InputObject, Debug, Clone)]
pub struct PublishNavigationChangesInput {
    /// An optional string identifying the mutation call, which will be returned in the response payload
    pub client_mutation_id: Option<String>,
    /// The ID of the navigation tree to publish
    pub id: ID,
    /// The ID of the shop the navigation tree belongs to
    pub shop_id: Option<ID>,
}
