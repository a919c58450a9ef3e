//! Diesel models for images attached to contacts.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::contact_image::{
    ContactImage as DomainContactImage, NewContactImage as DomainNewContactImage,
};
use crate::domain::types::{
    ContactId, ContactImageId, ImageContentType, ImageData, ImageFileName, TypeConstraintError,
};
use crate::models::contact::Contact;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Contact, foreign_key = contact_id))]
#[diesel(table_name = crate::schema::contact_images)]
pub struct ContactImage {
    pub id: i32,
    pub contact_id: i32,
    pub image_data: String, // base64 text, decoded only by clients
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub uploaded_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::contact_images)]
pub struct NewContactImage<'a> {
    pub contact_id: i32,
    pub image_data: &'a str,
    pub file_name: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub uploaded_at: NaiveDateTime,
}

impl TryFrom<ContactImage> for DomainContactImage {
    type Error = TypeConstraintError;

    fn try_from(image: ContactImage) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ContactImageId::try_from(image.id)?,
            contact_id: ContactId::try_from(image.contact_id)?,
            image_data: ImageData::new(image.image_data)?,
            file_name: image.file_name.map(ImageFileName::new).transpose()?,
            content_type: image.content_type.map(ImageContentType::new).transpose()?,
            uploaded_at: image.uploaded_at,
        })
    }
}

impl<'a> NewContactImage<'a> {
    /// Binds a domain image to the contact that will own it.
    pub fn for_contact(contact_id: ContactId, image: &'a DomainNewContactImage) -> Self {
        Self {
            contact_id: contact_id.get(),
            image_data: image.image_data.as_str(),
            file_name: image.file_name.as_ref().map(ImageFileName::as_str),
            content_type: image.content_type.as_ref().map(ImageContentType::as_str),
            uploaded_at: image.uploaded_at,
        }
    }
}
