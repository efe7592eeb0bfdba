//! Primitive type aliases shared across the workspace.

/// Database row identifier (BIGSERIAL).
pub type DbId = i64;

/// UTC timestamp as stored in `created_at` / `updated_at` columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
