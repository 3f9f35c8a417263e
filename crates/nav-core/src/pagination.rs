//! Relay-style cursor pagination over navigation items

use std::cmp::Ordering;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use uuid::Uuid;

use nav_shared::config::NavigationSettings;

use crate::domain::NavigationItem;
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationItemSortBy {
    Id,
    #[default]
    CreatedAt,
}

#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    pub after: Option<String>,
    pub before: Option<String>,
    pub first: Option<i64>,
    pub last: Option<i64>,
    pub offset: Option<i64>,
    pub sort_order: SortOrder,
    pub sort_by: NavigationItemSortBy,
}

#[derive(Debug, Clone)]
pub struct Edge<T> {
    pub cursor: String,
    pub node: T,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
    pub total_count: usize,
}

pub fn encode_cursor(id: &Uuid) -> String {
    STANDARD.encode(id.to_string())
}

pub fn decode_cursor(cursor: &str) -> Result<Uuid, DomainError> {
    let invalid = || DomainError::InvalidCursor(cursor.to_string());
    let bytes = STANDARD.decode(cursor).map_err(|_| invalid())?;
    let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
    Uuid::parse_str(&raw).map_err(|_| invalid())
}

fn compare(a: &NavigationItem, b: &NavigationItem, sort_by: NavigationItemSortBy) -> Ordering {
    match sort_by {
        NavigationItemSortBy::Id => a.id.cmp(&b.id),
        NavigationItemSortBy::CreatedAt => a
            .created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id)),
    }
}

fn check_request(request: &PageRequest) -> Result<(), DomainError> {
    if request.first.is_some() && request.last.is_some() {
        return Err(DomainError::InvalidPagination(
            "`first` and `last` cannot be combined".to_string(),
        ));
    }
    for (name, value) in [
        ("first", request.first),
        ("last", request.last),
        ("offset", request.offset),
    ] {
        if matches!(value, Some(v) if v < 0) {
            return Err(DomainError::InvalidPagination(format!("`{}` must not be negative", name)));
        }
    }
    if request.offset.is_some() && (request.before.is_some() || request.last.is_some()) {
        return Err(DomainError::InvalidPagination(
            "`offset` cannot be combined with `before` or `last`".to_string(),
        ));
    }
    Ok(())
}

/// Sorts `items` and cuts the page described by `request`.
///
/// The window is computed on the fully sorted list, so `has_next_page` and
/// `has_previous_page` report whether anything exists past either end of the page.
pub fn paginate(
    mut items: Vec<NavigationItem>,
    request: &PageRequest,
    settings: &NavigationSettings,
) -> Result<Page<NavigationItem>, DomainError> {
    check_request(request)?;

    items.sort_by(|a, b| {
        let ordering = compare(a, b, request.sort_by);
        match request.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let total = items.len();
    let position = |cursor: &str| -> Result<usize, DomainError> {
        let id = decode_cursor(cursor)?;
        items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| DomainError::InvalidCursor(cursor.to_string()))
    };

    let mut start = 0;
    let mut end = total;
    if let Some(after) = request.after.as_deref() {
        start = position(after)? + 1;
    }
    if let Some(before) = request.before.as_deref() {
        end = position(before)?;
    }
    start = start.min(end);

    if let Some(offset) = request.offset {
        start = (start + offset as usize).min(end);
    }

    let max = settings.max_page_size as usize;
    match (request.first, request.last) {
        (_, Some(last)) => start = start.max(end.saturating_sub((last as usize).min(max))),
        (Some(first), None) => end = end.min(start + (first as usize).min(max)),
        (None, None) => end = end.min(start + (settings.default_page_size as usize).min(max)),
    }

    let edges: Vec<Edge<NavigationItem>> = items
        .into_iter()
        .skip(start)
        .take(end - start)
        .map(|node| Edge {
            cursor: encode_cursor(&node.id),
            node,
        })
        .collect();

    let page_info = PageInfo {
        start_cursor: edges.first().map(|edge| edge.cursor.clone()),
        end_cursor: edges.last().map(|edge| edge.cursor.clone()),
        has_next_page: end < total,
        has_previous_page: start > 0,
    };

    Ok(Page {
        edges,
        page_info,
        total_count: total,
    })
}
