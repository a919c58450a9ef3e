//! Request payloads accepted by the API and their validation rules.
//!
//! Forms are deserialized from camelCase JSON, validated with `validator`,
//! and converted into domain values. All rule violations of one request are
//! reported together as a list of messages.

use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::ValidationErrors;

pub mod contact;
pub mod contact_image;

#[derive(Debug, Error)]
/// Errors that can occur when processing request payloads.
pub enum FormError {
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Invalid contact type")]
    InvalidContactType,

    #[error("Invalid name")]
    InvalidName,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid phone number format")]
    InvalidPhoneNumber,

    #[error("Invalid base64 image data")]
    InvalidImageData,

    #[error("Invalid file name")]
    InvalidFileName,

    #[error("Invalid image type")]
    InvalidContentType,

    #[error("No images provided")]
    NoImages,
}

/// Flattens `validator` errors into messages, ordered by `field_order`.
pub fn validation_messages(errors: &ValidationErrors, field_order: &[&str]) -> Vec<String> {
    let mut fields = errors.field_errors().into_iter().collect::<Vec<_>>();
    fields.sort_by_key(|(field, _)| {
        field_order
            .iter()
            .position(|name| *field == **name)
            .unwrap_or(usize::MAX)
    });

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect()
}

/// Deserializes an optional string, trimming it and treating blanks as absent.
pub fn trimmed_optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
