//! Short code generation and validation utilities.
//!
//! Generated codes are 6 lowercase base-36 characters (`[0-9a-z]`), which gives
//! 36^6 ≈ 2.2 billion combinations. With `n` live codes the chance that a
//! single draw collides is `n / 36^6`, so even at a million stored links a
//! collision happens roughly once every 2 000 creations and a second retry is
//! practically never needed.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Number of characters in a generated code.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Maximum length accepted for a custom code.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 32;

const BASE36_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a random 6-character base-36 code.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..GENERATED_CODE_LENGTH)
        .map(|_| BASE36_ALPHABET[rng.random_range(0..BASE36_ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 1-32 characters
/// - Allowed characters: ASCII letters, digits and the unreserved marks
///   `-`, `_`, `.`, `~`
/// - Not `.` or `..`, which clients collapse as path segments
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::bad_request(
            format!("Custom code must be 1-{MAX_CUSTOM_CODE_LENGTH} characters"),
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
    {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits and - _ . ~",
            json!({ "code": code }),
        ));
    }

    if code == "." || code == ".." {
        return Err(AppError::bad_request(
            "Custom code cannot be a relative path segment",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
