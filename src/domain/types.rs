//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce the field rules of contacts and their images
//! (positive identifiers, bounded names, validated email and phone, decodable
//! base64 payloads, whitelisted MIME types) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use validator::ValidateEmail;

/// Longest accepted contact name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;
/// Longest accepted contact email, in characters.
pub const MAX_EMAIL_LENGTH: usize = 100;
/// Longest accepted phone number, in characters.
pub const MAX_PHONE_LENGTH: usize = 20;
/// Longest accepted image file name, in characters.
pub const MAX_FILE_NAME_LENGTH: usize = 100;

/// MIME types accepted for uploaded images.
pub const ALLOWED_IMAGE_CONTENT_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Optional `+`, a non-zero leading digit and at most 15 more digits.
pub static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("phone pattern is valid"));

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string is longer than the column allows.
    #[error("value cannot exceed {0} characters")]
    TooLong(usize),
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Phone number did not match the expected pattern.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Contact type is neither a customer nor a lead.
    #[error("invalid contact type: {0}")]
    InvalidContactType(String),
    /// Image payload is not valid base64.
    #[error("invalid base64 image data")]
    InvalidBase64,
    /// Content type is not one of the accepted image MIME types.
    #[error("invalid image type: {0}")]
    InvalidContentType(String),
}

/// Trims the value and rejects empty or overlong input.
fn bounded_string<S: Into<String>>(value: S, max: usize) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    if trimmed.chars().count() > max {
        return Err(TypeConstraintError::TooLong(max));
    }
    Ok(trimmed)
}

/// Drops ASCII whitespace, so line-wrapped (MIME style) payloads decode.
pub fn strip_base64_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

/// Returns `true` when `value` decodes as standard base64, ignoring whitespace.
pub fn is_valid_base64(value: &str) -> bool {
    let compact = strip_base64_whitespace(value);
    !compact.is_empty() && BASE64.decode(compact).is_ok()
}

/// Returns `true` when `value` is one of [`ALLOWED_IMAGE_CONTENT_TYPES`], ignoring case.
pub fn is_allowed_content_type(value: &str) -> bool {
    let lowered = value.trim().to_lowercase();
    ALLOWED_IMAGE_CONTENT_TYPES.contains(&lowered.as_str())
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(ContactId, "Unique identifier for a contact.");
id_newtype!(ContactImageId, "Unique identifier for a contact image.");

/// Macro to generate trimmed string newtypes with an upper length bound.
macro_rules! bounded_string_newtype {
    ($name:ident, $max:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty, length-checked value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                Ok(Self(bounded_string(value, $max)?))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

bounded_string_newtype!(
    ContactName,
    MAX_NAME_LENGTH,
    "Contact display name, trimmed and at most 100 characters."
);

bounded_string_newtype!(
    ImageFileName,
    MAX_FILE_NAME_LENGTH,
    "Original file name of an uploaded image, trimmed and at most 100 characters."
);

/// Lower-cased and validated email address of a contact.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = bounded_string(email, MAX_EMAIL_LENGTH)?.to_lowercase();
        if normalized.validate_email() {
            Ok(Self(normalized))
        } else {
            Err(TypeConstraintError::InvalidEmail)
        }
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ContactEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ContactEmail {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Phone number made of an optional `+` followed by digits.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Constructs a phone number ensuring it matches [`PHONE_REGEX`].
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let phone = bounded_string(value, MAX_PHONE_LENGTH)?;
        if PHONE_REGEX.is_match(&phone) {
            Ok(Self(phone))
        } else {
            Err(TypeConstraintError::InvalidPhone)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Base64-encoded image payload that is known to decode.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ImageData(String);

impl ImageData {
    /// Wraps the payload after checking that it is non-empty, decodable base64.
    /// Embedded whitespace is removed before storing.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = strip_base64_whitespace(&value.into());
        if value.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if !is_valid_base64(&value) {
            return Err(TypeConstraintError::InvalidBase64);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ImageData {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Lower-cased image MIME type from [`ALLOWED_IMAGE_CONTENT_TYPES`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ImageContentType(String);

impl ImageContentType {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        let lowered = value.trim().to_lowercase();
        if ALLOWED_IMAGE_CONTENT_TYPES.contains(&lowered.as_str()) {
            Ok(Self(lowered))
        } else {
            Err(TypeConstraintError::InvalidContentType(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ImageContentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ImageContentType {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Kind of contact. Stored and transmitted as its numeric discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ContactType {
    #[default]
    Customer = 0,
    Lead = 1,
}

impl ContactType {
    /// Numeric value used in the database and on the wire.
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Parses a JSON value holding either the discriminant or the variant name.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, TypeConstraintError> {
        match value {
            serde_json::Value::Number(number) => number
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| TypeConstraintError::InvalidContactType(number.to_string()))
                .and_then(Self::try_from),
            serde_json::Value::String(name) => name.parse(),
            other => Err(TypeConstraintError::InvalidContactType(other.to_string())),
        }
    }
}

impl Display for ContactType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactType::Customer => write!(f, "Customer"),
            ContactType::Lead => write!(f, "Lead"),
        }
    }
}

impl TryFrom<i32> for ContactType {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ContactType::Customer),
            1 => Ok(ContactType::Lead),
            other => Err(TypeConstraintError::InvalidContactType(other.to_string())),
        }
    }
}

impl std::str::FromStr for ContactType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("customer") || s == "0" => Ok(ContactType::Customer),
            s if s.eq_ignore_ascii_case("lead") || s == "1" => Ok(ContactType::Lead),
            other => Err(TypeConstraintError::InvalidContactType(other.to_string())),
        }
    }
}

impl Serialize for ContactType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_i32())
    }
}

struct ContactTypeVisitor;

impl Visitor<'_> for ContactTypeVisitor {
    type Value = ContactType;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("0, 1, \"Customer\" or \"Lead\"")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        i32::try_from(v)
            .map_err(|_| E::custom(TypeConstraintError::InvalidContactType(v.to_string())))
            .and_then(|v| ContactType::try_from(v).map_err(E::custom))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i32::try_from(v)
            .map_err(|_| E::custom(TypeConstraintError::InvalidContactType(v.to_string())))
            .and_then(|v| ContactType::try_from(v).map_err(E::custom))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for ContactType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ContactTypeVisitor)
    }
}
