// ============================================================================
// Navigation Core - Navigation Item Entity
// File: crates/nav-core/src/domain/navigation_item.rs
// Description: Localized navigation link with draft/published content
// ============================================================================

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use nav_shared::{new_id, EntityId, ShopId};

use crate::error::DomainError;

/// Free-form key/value map attached to an item
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Label of a navigation item in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NavigationItemContent {
    pub language: String,

    #[validate(length(max = 1024, message = "Content value too long"))]
    pub value: Option<String>,
}

impl NavigationItemContent {
    pub fn new(language: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            value: Some(value.into()),
        }
    }
}

/// Content and link settings of a navigation item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NavigationItemData {
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub url: Option<String>,

    pub is_url_relative: Option<bool>,
    pub should_open_in_new_window: Option<bool>,

    #[validate(length(max = 512, message = "Class names must be at most 512 characters"))]
    pub class_names: Option<String>,

    pub content: Vec<NavigationItemContent>,
}

impl NavigationItemData {
    /// Trims languages and rejects empty or duplicated ones.
    pub fn normalized(mut self) -> Result<Self, DomainError> {
        self.validate()?;

        let mut seen = HashSet::with_capacity(self.content.len());
        for entry in self.content.iter_mut() {
            entry.language = entry.language.trim().to_string();
            if entry.language.is_empty() {
                return Err(DomainError::EmptyContentLanguage);
            }
            entry.validate()?;
            if !seen.insert(entry.language.clone()) {
                return Err(DomainError::DuplicateContentLanguage(entry.language.clone()));
            }
        }

        Ok(self)
    }

    pub fn content_for_language(&self, language: &str) -> Option<&str> {
        self.content
            .iter()
            .find(|entry| entry.language == language)
            .and_then(|entry| entry.value.as_deref())
    }
}

/// Navigation Item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: EntityId,
    pub shop_id: ShopId,
    /// Published content, absent until the first publish
    pub data: Option<NavigationItemData>,
    pub draft_data: NavigationItemData,
    pub has_unpublished_changes: bool,
    pub metadata: Option<Metadata>,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl NavigationItem {
    pub fn new(
        shop_id: ShopId,
        draft_data: Option<NavigationItemData>,
        metadata: Option<Metadata>,
    ) -> Result<Self, DomainError> {
        let shop_id = shop_id.trim().to_string();
        if shop_id.is_empty() {
            return Err(DomainError::ValidationError("Shop id is required".to_string()));
        }

        Ok(Self {
            id: new_id(),
            shop_id,
            data: None,
            draft_data: draft_data.unwrap_or_default().normalized()?,
            has_unpublished_changes: false,
            metadata,
            created_at: Utc::now(),
            modified_at: None,
        })
    }

    /// Writes to the draft side only. Fields left as `None` keep their current value.
    pub fn apply_draft_update(
        &mut self,
        draft_data: Option<NavigationItemData>,
        metadata: Option<Metadata>,
    ) -> Result<(), DomainError> {
        if let Some(draft_data) = draft_data {
            self.draft_data = draft_data.normalized()?;
        }
        if metadata.is_some() {
            self.metadata = metadata;
        }
        self.has_unpublished_changes = true;
        self.modified_at = Some(Utc::now());
        Ok(())
    }

    pub fn publish(&mut self) {
        self.data = Some(self.draft_data.clone());
        self.has_unpublished_changes = false;
        self.modified_at = Some(Utc::now());
    }

    pub fn belongs_to(&self, shop_id: &str) -> bool {
        self.shop_id == shop_id
    }
}
