//! Image workflows for a single contact.

use crate::domain::contact_image::{ContactImage, MAX_IMAGES_PER_CONTACT, NewContactImage};
use crate::domain::types::{ContactId, ContactImageId};
use crate::forms::contact_image::{UploadImageForm, parse_image_batch};
use crate::repository::errors::RepositoryError;
use crate::repository::{ContactImageReader, ContactImageWriter, ContactReader};
use crate::services::contacts::{can_add_more_images, parse_contact_id, require_contact};
use crate::services::{ServiceError, ServiceResult, contact_not_found, image_not_found};

fn parse_image_id(contact_id: ContactId, image_id: i32) -> ServiceResult<ContactImageId> {
    ContactImageId::new(image_id).map_err(|_| image_not_found(contact_id, image_id))
}

fn insert_images<R>(
    repo: &R,
    contact_id: ContactId,
    images: &[NewContactImage],
) -> ServiceResult<Vec<ContactImage>>
where
    R: ContactImageWriter + ?Sized,
{
    repo.create_contact_images(contact_id, images, MAX_IMAGES_PER_CONTACT)
        .map_err(|err| match err {
            RepositoryError::NotFound => contact_not_found(contact_id),
            RepositoryError::ImageLimitExceeded {
                current,
                requested,
                limit,
            } => {
                log::warn!(
                    "Rejected {requested} image(s) for contact {contact_id}: {current} of {limit} stored"
                );
                if requested == 1 {
                    ServiceError::LimitExceeded(format!(
                        "Maximum number of images ({limit}) reached for this contact"
                    ))
                } else {
                    ServiceError::LimitExceeded(format!(
                        "Cannot upload {requested} images. Maximum allowed is {} more images",
                        limit.saturating_sub(current)
                    ))
                }
            }
            other => ServiceError::from(other),
        })
}

/// Lists the images of a contact, oldest first.
pub fn list_images<R>(repo: &R, contact_id: i32) -> ServiceResult<Vec<ContactImage>>
where
    R: ContactReader + ContactImageReader + ?Sized,
{
    log::info!("Getting images for contact ID {contact_id}");
    let id = parse_contact_id(contact_id)?;
    require_contact(repo, id)?;

    let images = repo.list_contact_images(id)?;
    log::debug!("Loaded {} images for contact {id}", images.len());
    Ok(images)
}

/// Loads one image belonging to the contact.
pub fn get_image<R>(repo: &R, contact_id: i32, image_id: i32) -> ServiceResult<ContactImage>
where
    R: ContactImageReader + ?Sized,
{
    log::info!("Getting image {image_id} for contact ID {contact_id}");
    let contact_id = parse_contact_id(contact_id)?;
    let image_id = parse_image_id(contact_id, image_id)?;

    repo.get_contact_image(contact_id, image_id)?
        .ok_or_else(|| image_not_found(contact_id, image_id))
}

/// Validates and stores a single image, enforcing the per-contact cap.
pub fn upload_image<R>(repo: &R, contact_id: i32, form: UploadImageForm) -> ServiceResult<ContactImage>
where
    R: ContactImageWriter + ?Sized,
{
    let id = parse_contact_id(contact_id)?;
    let image = NewContactImage::try_from(form)?;

    let image = insert_images(repo, id, std::slice::from_ref(&image))?
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::Internal("Inserted image was not returned".to_string()))?;

    log::info!("Uploaded image {} for contact {id}", image.id);
    Ok(image)
}

/// Validates every image of the batch and stores all of them or none.
pub fn upload_images<R>(
    repo: &R,
    contact_id: i32,
    forms: Vec<UploadImageForm>,
) -> ServiceResult<Vec<ContactImage>>
where
    R: ContactImageWriter + ?Sized,
{
    let id = parse_contact_id(contact_id)?;
    let images = parse_image_batch(forms)?;

    let stored = insert_images(repo, id, &images)?;

    log::info!("Uploaded {} images for contact {id}", stored.len());
    Ok(stored)
}

/// Removes one image of the contact.
pub fn delete_image<R>(repo: &R, contact_id: i32, image_id: i32) -> ServiceResult<()>
where
    R: ContactImageWriter + ?Sized,
{
    let contact_id = parse_contact_id(contact_id)?;
    let image_id = parse_image_id(contact_id, image_id)?;

    if !repo.delete_contact_image(contact_id, image_id)? {
        return Err(image_not_found(contact_id, image_id));
    }

    log::info!("Deleted image {image_id} of contact {contact_id}");
    Ok(())
}

/// Read-only check whether `additional` more images would be accepted.
pub fn validate_image_limit<R>(repo: &R, contact_id: i32, additional: u32) -> ServiceResult<bool>
where
    R: ContactReader + ?Sized,
{
    can_add_more_images(repo, contact_id, additional)
}
