//! Repository implementation for contacts.

use std::collections::HashMap;

use diesel::dsl::count_star;
use diesel::prelude::*;

use crate::{
    domain::{
        contact::{Contact, ContactSummary, NewContact, UpdateContact},
        types::ContactId,
    },
    models::contact::{
        Contact as DbContact, NewContact as DbNewContact, UpdateContact as DbUpdateContact,
    },
    repository::{
        ContactReader, ContactWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ContactReader for DieselRepository {
    fn get_contact_by_id(&self, id: ContactId) -> RepositoryResult<Option<Contact>> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let db_contact = contacts::table
            .find(id.get())
            .first::<DbContact>(&mut conn)
            .optional()?;

        db_contact
            .map(|c| Contact::try_from(c).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_contacts_with_image_count(&self) -> RepositoryResult<Vec<ContactSummary>> {
        use crate::schema::{contact_images, contacts};

        let mut conn = self.conn()?;

        let db_contacts = contacts::table
            .order(contacts::id.asc())
            .load::<DbContact>(&mut conn)?;

        let counts: HashMap<i32, i64> = contact_images::table
            .group_by(contact_images::contact_id)
            .select((contact_images::contact_id, count_star()))
            .load::<(i32, i64)>(&mut conn)?
            .into_iter()
            .collect();

        db_contacts
            .into_iter()
            .map(|db_contact| {
                let image_count = counts.get(&db_contact.id).copied().unwrap_or(0) as usize;
                let contact = Contact::try_from(db_contact).map_err(RepositoryError::from)?;
                Ok(ContactSummary {
                    contact,
                    image_count,
                })
            })
            .collect()
    }

    fn count_contact_images(&self, id: ContactId) -> RepositoryResult<usize> {
        use crate::schema::contact_images;

        let mut conn = self.conn()?;
        let total: i64 = contact_images::table
            .filter(contact_images::contact_id.eq(id.get()))
            .count()
            .get_result(&mut conn)?;

        Ok(total as usize)
    }
}

impl ContactWriter for DieselRepository {
    fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let insertable: DbNewContact = new_contact.into();

        let db_contact = diesel::insert_into(contacts::table)
            .values(&insertable)
            .get_result::<DbContact>(&mut conn)?;

        Contact::try_from(db_contact).map_err(RepositoryError::from)
    }

    fn update_contact(&self, id: ContactId, updates: &UpdateContact) -> RepositoryResult<Contact> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateContact = updates.into();

        let db_contact = diesel::update(contacts::table.find(id.get()))
            .set(&db_updates)
            .get_result::<DbContact>(&mut conn)?;

        Contact::try_from(db_contact).map_err(RepositoryError::from)
    }

    fn delete_contact(&self, id: ContactId) -> RepositoryResult<()> {
        use crate::schema::{contact_images, contacts};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(contact_images::table.filter(contact_images::contact_id.eq(id.get())))
                .execute(conn)?;
            let deleted = diesel::delete(contacts::table.find(id.get())).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }
}
