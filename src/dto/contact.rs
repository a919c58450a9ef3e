use serde::{Deserialize, Serialize};

use crate::domain::contact::{Contact, ContactSummary, ContactWithImages};
use crate::domain::types::ContactType;
use crate::dto::contact_image::ContactImageDto;

/// Contact as exposed over the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub image_count: usize,
}

impl ContactDto {
    pub fn new(contact: Contact, image_count: usize) -> Self {
        Self {
            id: contact.id.get(),
            name: contact.name.into_inner(),
            email: contact.email.map(|e| e.into_inner()),
            phone: contact.phone.map(|p| p.into_inner()),
            contact_type: contact.contact_type,
            image_count,
        }
    }
}

impl From<ContactSummary> for ContactDto {
    fn from(summary: ContactSummary) -> Self {
        Self::new(summary.contact, summary.image_count)
    }
}

/// Contact with its images, returned by `GET /api/contacts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetailDto {
    #[serde(flatten)]
    pub contact: ContactDto,
    pub images: Vec<ContactImageDto>,
}

impl From<ContactWithImages> for ContactDetailDto {
    fn from(value: ContactWithImages) -> Self {
        let image_count = value.images.len();
        Self {
            contact: ContactDto::new(value.contact, image_count),
            images: value.images.into_iter().map(ContactImageDto::from).collect(),
        }
    }
}
