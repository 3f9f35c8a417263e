//! Common types

use uuid::Uuid;

pub type EntityId = Uuid;

/// Shops are owned by the external shop system; their ids are opaque strings.
pub type ShopId = String;

pub fn new_id() -> EntityId {
    Uuid::new_v4()
}

/// Parses a client-supplied id. Anything that is not a UUID cannot name one of our entities.
pub fn parse_id(raw: &str) -> Option<EntityId> {
    Uuid::parse_str(raw.trim()).ok()
}
