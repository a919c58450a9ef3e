//! Persistence traits for contacts and their images.
//!
//! Services depend only on the reader/writer traits below; [`DieselRepository`]
//! is the SQLite implementation wired into the HTTP layer.

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        contact::{Contact, ContactSummary, NewContact, UpdateContact},
        contact_image::{ContactImage, NewContactImage},
        types::{ContactId, ContactImageId},
    },
    repository::errors::RepositoryResult,
};

pub mod contact;
pub mod contact_image;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel-backed repository sharing one connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait ContactReader {
    fn get_contact_by_id(&self, id: ContactId) -> RepositoryResult<Option<Contact>>;
    /// All contacts ordered by id, each with its current image count.
    fn list_contacts_with_image_count(&self) -> RepositoryResult<Vec<ContactSummary>>;
    fn count_contact_images(&self, id: ContactId) -> RepositoryResult<usize>;
}

pub trait ContactWriter {
    fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact>;
    fn update_contact(&self, id: ContactId, updates: &UpdateContact) -> RepositoryResult<Contact>;
    /// Removes the contact and every image it owns in one transaction.
    fn delete_contact(&self, id: ContactId) -> RepositoryResult<()>;
}

pub trait ContactImageReader {
    /// Images of the contact ordered by upload time, oldest first.
    fn list_contact_images(&self, contact_id: ContactId) -> RepositoryResult<Vec<ContactImage>>;
    fn get_contact_image(
        &self,
        contact_id: ContactId,
        image_id: ContactImageId,
    ) -> RepositoryResult<Option<ContactImage>>;
}

pub trait ContactImageWriter {
    /// Inserts all images or none.
    ///
    /// The owner's current image count is checked against `limit` inside the
    /// same write transaction as the insert, failing with
    /// [`errors::RepositoryError::ImageLimitExceeded`] when the batch does not
    /// fit and with [`errors::RepositoryError::NotFound`] when the contact is
    /// missing.
    fn create_contact_images(
        &self,
        contact_id: ContactId,
        images: &[NewContactImage],
        limit: usize,
    ) -> RepositoryResult<Vec<ContactImage>>;
    /// Returns `false` when no image matched the pair.
    fn delete_contact_image(
        &self,
        contact_id: ContactId,
        image_id: ContactImageId,
    ) -> RepositoryResult<bool>;
}
