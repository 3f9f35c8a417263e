//! Query root

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};
use tracing::debug;

use nav_core::pagination::PageRequest;
use nav_core::services::DynNavigationService;
use nav_shared::parse_id;

use super::error::graphql_error;
use super::scalars::ConnectionCursor;
use super::types::{NavigationItemConnection, NavigationItemSortByField, NavigationTree, SortOrder};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Returns a navigation tree by its ID in the specified language
    async fn navigation_tree_by_id(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The ID of the navigation tree")] id: ID,
        #[graphql(desc = "Navigation language")] language: String,
        #[graphql(desc = "Only return the tree if it belongs to this shop")] shop_id: Option<ID>,
        #[graphql(default = false, desc = "Include secondary navigation items alongside primary items")]
        should_include_secondary: bool,
    ) -> Result<Option<NavigationTree>> {
        let Some(tree_id) = parse_id(&id) else {
            debug!("navigationTreeById called with unparseable id {:?}", id.0);
            return Ok(None);
        };

        let service = ctx.data::<Arc<DynNavigationService>>()?;
        let resolved = service
            .navigation_tree_by_id(
                &tree_id,
                &language,
                shop_id.as_ref().map(|id| id.as_str()),
                should_include_secondary,
            )
            .await
            .map_err(graphql_error)?;

        Ok(resolved.map(NavigationTree::new))
    }

    /// Returns the navigation items for a shop
    #[allow(clippy::too_many_arguments)]
    async fn navigation_items_by_shop_id(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The ID of the shop to load navigation items for")] shop_id: ID,
        #[graphql(desc = "Return only results that come after this cursor")] after: Option<ConnectionCursor>,
        #[graphql(desc = "Return only results that come before this cursor")] before: Option<ConnectionCursor>,
        #[graphql(desc = "Return at most this many results")] first: Option<i32>,
        #[graphql(desc = "Return at most this many results, counting back from the end")] last: Option<i32>,
        #[graphql(desc = "Skip this many results before taking `first`")] offset: Option<i32>,
        #[graphql(default_with = "SortOrder::Desc", desc = "Return results sorted in this order")]
        sort_order: SortOrder,
        #[graphql(
            default_with = "NavigationItemSortByField::CreatedAt",
            desc = "By default, navigation items are sorted by when they were created, newest first"
        )]
        sort_by: NavigationItemSortByField,
    ) -> Result<NavigationItemConnection> {
        let service = ctx.data::<Arc<DynNavigationService>>()?;
        let request = PageRequest {
            after: after.map(|cursor| cursor.0),
            before: before.map(|cursor| cursor.0),
            first: first.map(i64::from),
            last: last.map(i64::from),
            offset: offset.map(i64::from),
            sort_order: sort_order.into(),
            sort_by: sort_by.into(),
        };

        let page = service
            .navigation_items_by_shop_id(&shop_id, &request)
            .await
            .map_err(graphql_error)?;

        Ok(page.into())
    }
}
