//! Input validation helpers
//!
//! Centralized text length constants and validation functions for admin
//! edits. Every check runs before any store I/O.

use rust_decimal::Decimal;
use shared::error::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: menu item, category, add-on, size
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions, ingredients and allergen entries
pub const MAX_NOTE_LEN: usize = 2000;

/// Short identifiers: phone, table label
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Admin secret (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Prices above this are treated as typos
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a price: non-negative and below [`MAX_PRICE`].
pub fn validate_price(value: Decimal, field: &str) -> Result<(), AppError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(AppError::with_message(
            shared::ErrorCode::MenuItemInvalidPrice,
            format!("{field} must be non-negative, got {value}"),
        )
        .with_detail("field", field));
    }
    if value > MAX_PRICE {
        return Err(AppError::with_message(
            shared::ErrorCode::MenuItemInvalidPrice,
            format!("{field} exceeds maximum allowed ({MAX_PRICE}), got {value}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}
