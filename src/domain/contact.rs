use serde::{Deserialize, Serialize};

use crate::domain::contact_image::ContactImage;
use crate::domain::types::{ContactEmail, ContactId, ContactName, ContactType, PhoneNumber};

/// A customer or lead known to the system.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    pub name: ContactName,
    pub email: Option<ContactEmail>,
    pub phone: Option<PhoneNumber>,
    pub contact_type: ContactType,
}

/// Contact together with the number of images it currently owns.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactSummary {
    pub contact: Contact,
    pub image_count: usize,
}

/// Contact with all of its images, oldest first.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactWithImages {
    pub contact: Contact,
    pub images: Vec<ContactImage>,
}

#[derive(Clone, Debug)]
pub struct NewContact {
    pub name: ContactName,
    pub email: Option<ContactEmail>,
    pub phone: Option<PhoneNumber>,
    pub contact_type: ContactType,
}

impl NewContact {
    #[must_use]
    pub fn new(
        name: ContactName,
        email: Option<ContactEmail>,
        phone: Option<PhoneNumber>,
        contact_type: ContactType,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            contact_type,
        }
    }
}

/// Mutable part of a contact. The type is fixed at creation.
#[derive(Clone, Debug)]
pub struct UpdateContact {
    pub name: ContactName,
    pub email: Option<ContactEmail>,
    pub phone: Option<PhoneNumber>,
}

impl UpdateContact {
    #[must_use]
    pub fn new(name: ContactName, email: Option<ContactEmail>, phone: Option<PhoneNumber>) -> Self {
        Self { name, email, phone }
    }
}
