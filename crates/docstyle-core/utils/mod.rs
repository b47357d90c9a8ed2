//! Utility functions and shared types for docstyle core
//!
//! Contains error types, hashing helpers and the small string predicates
//! the validation rules share.
//!
//! # Example
//!
//! ```rust
//! use docstyle_core::utils::{is_valid_color, has_invalid_name_chars};
//!
//! assert!(is_valid_color("#1F4E79"));
//! assert!(is_valid_color("rgb(31, 78, 121)"));
//! assert!(!is_valid_color("blue"));
//! assert!(has_invalid_name_chars("Heading: 1"));
//! ```

pub mod errors;
pub mod hashers;

pub use errors::{CoreError, ErrorCategory, ResolutionError};
pub use hashers::{create_hash_map, create_hash_map_with_capacity, create_hash_set};

/// Characters that may not appear in style names or ids
pub const INVALID_NAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Check whether a string contains any of [`INVALID_NAME_CHARS`]
#[must_use]
pub fn has_invalid_name_chars(value: &str) -> bool {
    value.contains(INVALID_NAME_CHARS)
}

/// Check for a 7-character `#RRGGBB` color
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Check for an `rgb(...)` color
///
/// Accepts three comma separated integer channels in `0..=255`.
#[must_use]
pub fn is_rgb_function(value: &str) -> bool {
    let Some(inner) = value
        .trim()
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return false;
    };

    let mut channels = 0;
    for part in inner.split(',') {
        if part.trim().parse::<u8>().is_err() {
            return false;
        }
        channels += 1;
    }
    channels == 3
}

/// Check whether a color value is in one of the accepted forms
#[must_use]
pub fn is_valid_color(value: &str) -> bool {
    is_hex_color(value) || is_rgb_function(value)
}
