//! Wire types for the content API.
//!
//! The client keeps its own view of the wire contract rather than borrowing
//! the server's models -- the API is consumed as an external collaborator,
//! and only the fields the contract names are assumed.

use quill_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// A content record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: DbId,
    pub title: Option<String>,
    pub body: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// Payload for creating a record. Unset fields are omitted from the JSON
/// body entirely.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Payload for a partial update; only the fields being changed are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}
