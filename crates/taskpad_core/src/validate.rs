//! Pure validation and formatting helpers.
//!
//! # Responsibility
//! - Field-level input checks shared by the credential service and the
//!   collaborator UI.
//! - Date display formatting.
//!
//! # Invariants
//! - Every function is pure and side-effect free.
//! - The email check is presentation-layer shape validation, intentionally
//!   permissive; it is not RFC-compliant address verification.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email shape regex"));

const MIN_PASSWORD_LEN: usize = 6;

/// True iff the trimmed string is non-empty.
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True iff `value` looks like `local@domain.tld` with no whitespace and no
/// extra `@`.
pub fn is_valid_email_shape(value: &str) -> bool {
    EMAIL_SHAPE_RE.is_match(value)
}

/// True iff the password meets the minimum length of 6.
pub fn is_valid_password_length(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LEN
}

/// Reformats an ISO-style `YYYY-MM-DD` string as `DD/MM/YYYY`.
///
/// No calendar validation happens here: `"2024-13-40"` becomes
/// `"40/13/2024"` without complaint. Inputs that do not split into exactly
/// three `-`-separated fields are returned unchanged.
pub fn format_date(iso_date: &str) -> String {
    let mut parts = iso_date.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => format!("{day}/{month}/{year}"),
        _ => iso_date.to_string(),
    }
}
