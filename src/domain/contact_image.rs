use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ContactId, ContactImageId, ImageContentType, ImageData, ImageFileName};

/// Maximum number of images a single contact may own.
pub const MAX_IMAGES_PER_CONTACT: usize = 10;

/// Returns `true` when `additional` more images still fit under the cap.
pub fn fits_image_limit(current: usize, additional: usize) -> bool {
    current.saturating_add(additional) <= MAX_IMAGES_PER_CONTACT
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactImage {
    pub id: ContactImageId,
    pub contact_id: ContactId,
    pub image_data: ImageData,
    pub file_name: Option<ImageFileName>,
    pub content_type: Option<ImageContentType>,
    /// Insert time in UTC.
    pub uploaded_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewContactImage {
    pub image_data: ImageData,
    pub file_name: Option<ImageFileName>,
    pub content_type: Option<ImageContentType>,
    pub uploaded_at: NaiveDateTime,
}

impl NewContactImage {
    /// Builds an image stamped with the current UTC time.
    #[must_use]
    pub fn new(
        image_data: ImageData,
        file_name: Option<ImageFileName>,
        content_type: Option<ImageContentType>,
    ) -> Self {
        Self {
            image_data,
            file_name,
            content_type,
            uploaded_at: Utc::now().naive_utc(),
        }
    }
}
