//! Content model and DTOs.

use quill_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contents` table.
///
/// Serialized in camelCase: the wire contract predates this server and the
/// client expects `createdAt` / `updatedAt`.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: DbId,
    pub title: Option<String>,
    pub body: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a content record. Both fields optional: the transport
/// layer imposes no content minimums.
#[derive(Debug, Deserialize)]
pub struct CreateContent {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// DTO for a partial update. Absent fields leave the column unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateContent {
    pub title: Option<String>,
    pub body: Option<String>,
}
