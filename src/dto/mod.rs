//! DTOs shaping the JSON bodies returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod contact;
pub mod contact_image;
pub mod health;

/// Uniform envelope wrapping every `/api` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub errors: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn failure(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors,
            timestamp: Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    /// Successful response without a payload (`data` is `null`).
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            errors: Vec::new(),
            timestamp: Utc::now(),
        }
    }
}

/// Query string of the image limit checks.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLimitQuery {
    pub additional_images: Option<u32>,
}

impl ImageLimitQuery {
    pub fn additional(&self) -> u32 {
        self.additional_images.unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_uses_camel_case_and_null_data() {
        let body = serde_json::to_value(ApiResponse::<()>::failure(
            "Validation failed",
            vec!["Name is required".to_string()],
        ))
        .unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Validation failed");
        assert!(body["data"].is_null());
        assert_eq!(body["errors"][0], "Name is required");
        assert!(body["timestamp"].is_string());
    }

    #[test]
    fn limit_query_defaults_to_one() {
        let query: ImageLimitQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.additional(), 1);

        let query: ImageLimitQuery = serde_json::from_str(r#"{"additionalImages":5}"#).unwrap();
        assert_eq!(query.additional(), 5);
    }
}
