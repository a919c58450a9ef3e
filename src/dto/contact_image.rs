use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::contact_image::ContactImage;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactImageDto {
    pub id: i32,
    pub contact_id: i32,
    pub image_data: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl From<ContactImage> for ContactImageDto {
    fn from(image: ContactImage) -> Self {
        Self {
            id: image.id.get(),
            contact_id: image.contact_id.get(),
            image_data: image.image_data.into_inner(),
            file_name: image.file_name.map(|f| f.into_inner()),
            content_type: image.content_type.map(|c| c.into_inner()),
            uploaded_at: DateTime::from_naive_utc_and_offset(image.uploaded_at, Utc),
        }
    }
}
