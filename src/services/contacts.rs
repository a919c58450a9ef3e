//! Contact management workflows.

use crate::domain::contact::{
    Contact, ContactSummary, ContactWithImages, NewContact, UpdateContact,
};
use crate::domain::contact_image::fits_image_limit;
use crate::domain::types::ContactId;
use crate::forms::contact::{CreateContactForm, UpdateContactForm};
use crate::repository::errors::RepositoryError;
use crate::repository::{ContactImageReader, ContactReader, ContactWriter};
use crate::services::{ServiceError, ServiceResult, contact_not_found};

/// Parses a path id; ids that can never exist are reported as missing.
pub(crate) fn parse_contact_id(id: i32) -> ServiceResult<ContactId> {
    ContactId::new(id).map_err(|_| contact_not_found(id))
}

/// Loads the contact or fails with `NotFound`.
pub(crate) fn require_contact<R>(repo: &R, id: ContactId) -> ServiceResult<Contact>
where
    R: ContactReader + ?Sized,
{
    repo.get_contact_by_id(id)?.ok_or_else(|| contact_not_found(id))
}

/// Lists every contact together with its current image count.
pub fn list_contacts<R>(repo: &R) -> ServiceResult<Vec<ContactSummary>>
where
    R: ContactReader + ?Sized,
{
    log::info!("Getting all contacts");
    let contacts = repo.list_contacts_with_image_count()?;
    log::debug!("Loaded {} contacts", contacts.len());
    Ok(contacts)
}

/// Loads a contact with all of its images.
pub fn get_contact<R>(repo: &R, contact_id: i32) -> ServiceResult<ContactWithImages>
where
    R: ContactReader + ContactImageReader + ?Sized,
{
    log::info!("Getting contact with ID {contact_id}");
    let id = parse_contact_id(contact_id)?;
    let contact = require_contact(repo, id)?;
    let images = repo.list_contact_images(id)?;
    log::debug!("Contact {id} has {} images", images.len());

    Ok(ContactWithImages { contact, images })
}

/// Validates the form and inserts a new contact.
pub fn create_contact<R>(repo: &R, form: CreateContactForm) -> ServiceResult<Contact>
where
    R: ContactWriter + ?Sized,
{
    let new_contact = NewContact::try_from(form)?;
    let contact = repo.create_contact(&new_contact)?;

    log::info!("Created contact {} ({})", contact.id, contact.contact_type);
    Ok(contact)
}

/// Overwrites name, email and phone of an existing contact.
pub fn update_contact<R>(
    repo: &R,
    contact_id: i32,
    form: UpdateContactForm,
) -> ServiceResult<ContactSummary>
where
    R: ContactReader + ContactWriter + ?Sized,
{
    let id = parse_contact_id(contact_id)?;
    let updates = UpdateContact::try_from(form)?;

    let contact = repo.update_contact(id, &updates).map_err(|err| match err {
        RepositoryError::NotFound => contact_not_found(id),
        other => ServiceError::from(other),
    })?;
    let image_count = repo.count_contact_images(id)?;

    log::info!("Updated contact {id}");
    Ok(ContactSummary {
        contact,
        image_count,
    })
}

/// Deletes a contact and every image it owns.
pub fn delete_contact<R>(repo: &R, contact_id: i32) -> ServiceResult<()>
where
    R: ContactWriter + ?Sized,
{
    let id = parse_contact_id(contact_id)?;

    repo.delete_contact(id).map_err(|err| match err {
        RepositoryError::NotFound => contact_not_found(id),
        other => ServiceError::from(other),
    })?;

    log::info!("Deleted contact {id} with its images");
    Ok(())
}

/// Reports whether `additional` more images fit under the per-contact cap.
pub fn can_add_more_images<R>(repo: &R, contact_id: i32, additional: u32) -> ServiceResult<bool>
where
    R: ContactReader + ?Sized,
{
    let id = parse_contact_id(contact_id)?;
    require_contact(repo, id)?;

    let current = repo.count_contact_images(id)?;
    Ok(fits_image_limit(current, additional as usize))
}
