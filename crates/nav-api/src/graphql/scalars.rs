//! Custom scalars

use async_graphql::scalar;
use serde::{Deserialize, Serialize};

use nav_core::domain::Metadata;

/// Free-form JSON object. Anything other than an object is rejected on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonObject(pub Metadata);

scalar!(JsonObject, "JSONObject", "An arbitrary JSON object");

/// Opaque pagination cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionCursor(pub String);

scalar!(ConnectionCursor, "ConnectionCursor", "An opaque string that identifies a position in a connection");
