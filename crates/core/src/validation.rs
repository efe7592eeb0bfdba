//! Content validation rules for the title and body fields.
//!
//! These are the rules the editing UI applies before attempting a mutating
//! API call. Failures are returned as data, never as errors: the server
//! accepts whatever the transport layer delivers, so checking these rules
//! is strictly the caller's responsibility.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum title length in characters (untrimmed).
pub const MAX_TITLE_LENGTH: usize = 50;

/// Minimum body length in characters, measured after trimming.
pub const MIN_BODY_LENGTH: usize = 10;

/// Maximum body length in characters (untrimmed).
pub const MAX_BODY_LENGTH: usize = 2000;

/// User-facing message for a missing or whitespace-only title.
pub const TITLE_TOO_SHORT: &str = "タイトルは1文字以上で入力してください";

/// User-facing message for a title over [`MAX_TITLE_LENGTH`] characters.
pub const TITLE_TOO_LONG: &str = "タイトルは50文字以下で入力してください";

/// User-facing message for a body under [`MIN_BODY_LENGTH`] trimmed characters.
pub const BODY_TOO_SHORT: &str = "本文は10文字以上で入力してください";

/// User-facing message for a body over [`MAX_BODY_LENGTH`] characters.
pub const BODY_TOO_LONG: &str = "本文は2000文字以下で入力してください";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Body,
}

/// A single failed field check with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: Field,
    pub message: &'static str,
}

/// Outcome of validating a full content draft.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Failed checks in field order: title first, then body.
    pub errors: Vec<ValidationError>,
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a title: at least one non-whitespace character, at most
/// [`MAX_TITLE_LENGTH`] characters.
///
/// The lower bound is checked against the trimmed string and runs first, so
/// a whitespace-only title of any length reports "too short", not
/// "too long". The upper bound counts the untrimmed string.
pub fn validate_title(title: &str) -> Option<ValidationError> {
    if title.trim().is_empty() {
        return Some(ValidationError {
            field: Field::Title,
            message: TITLE_TOO_SHORT,
        });
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Some(ValidationError {
            field: Field::Title,
            message: TITLE_TOO_LONG,
        });
    }
    None
}

/// Validate a body: at least [`MIN_BODY_LENGTH`] trimmed characters, at most
/// [`MAX_BODY_LENGTH`] untrimmed characters.
///
/// Leading/trailing whitespace does not count toward the minimum but does
/// count toward the maximum, so padding around a valid core is accepted as
/// long as the total stays within the upper bound.
pub fn validate_body(body: &str) -> Option<ValidationError> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.chars().count() < MIN_BODY_LENGTH {
        return Some(ValidationError {
            field: Field::Body,
            message: BODY_TOO_SHORT,
        });
    }
    if body.chars().count() > MAX_BODY_LENGTH {
        return Some(ValidationError {
            field: Field::Body,
            message: BODY_TOO_LONG,
        });
    }
    None
}

/// Validate a full draft: both checks run independently (no short-circuit),
/// and the collected errors keep title-then-body order.
pub fn validate_content(title: &str, body: &str) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(err) = validate_title(title) {
        errors.push(err);
    }
    if let Some(err) = validate_body(body) {
        errors.push(err);
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
