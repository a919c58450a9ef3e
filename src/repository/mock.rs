//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::contact::{Contact, ContactSummary, NewContact, UpdateContact};
use crate::domain::contact_image::{ContactImage, NewContactImage};
use crate::domain::types::{ContactId, ContactImageId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ContactImageReader, ContactImageWriter, ContactReader, ContactWriter};

mock! {
    pub Repository {}

    impl ContactReader for Repository {
        fn get_contact_by_id(&self, id: ContactId) -> RepositoryResult<Option<Contact>>;
        fn list_contacts_with_image_count(&self) -> RepositoryResult<Vec<ContactSummary>>;
        fn count_contact_images(&self, id: ContactId) -> RepositoryResult<usize>;
    }

    impl ContactWriter for Repository {
        fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact>;
        fn update_contact(
            &self,
            id: ContactId,
            updates: &UpdateContact,
        ) -> RepositoryResult<Contact>;
        fn delete_contact(&self, id: ContactId) -> RepositoryResult<()>;
    }

    impl ContactImageReader for Repository {
        fn list_contact_images(&self, contact_id: ContactId) -> RepositoryResult<Vec<ContactImage>>;
        fn get_contact_image(
            &self,
            contact_id: ContactId,
            image_id: ContactImageId,
        ) -> RepositoryResult<Option<ContactImage>>;
    }

    impl ContactImageWriter for Repository {
        fn create_contact_images(
            &self,
            contact_id: ContactId,
            images: &[NewContactImage],
            limit: usize,
        ) -> RepositoryResult<Vec<ContactImage>>;
        fn delete_contact_image(
            &self,
            contact_id: ContactId,
            image_id: ContactImageId,
        ) -> RepositoryResult<bool>;
    }
}
