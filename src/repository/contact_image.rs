//! Repository implementation for contact images.

use diesel::prelude::*;

use crate::{
    domain::{
        contact_image::{ContactImage, NewContactImage},
        types::{ContactId, ContactImageId},
    },
    models::contact_image::{
        ContactImage as DbContactImage, NewContactImage as DbNewContactImage,
    },
    repository::{
        ContactImageReader, ContactImageWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ContactImageReader for DieselRepository {
    fn list_contact_images(&self, contact_id: ContactId) -> RepositoryResult<Vec<ContactImage>> {
        use crate::schema::contact_images;

        let mut conn = self.conn()?;
        contact_images::table
            .filter(contact_images::contact_id.eq(contact_id.get()))
            .order((contact_images::uploaded_at.asc(), contact_images::id.asc()))
            .load::<DbContactImage>(&mut conn)?
            .into_iter()
            .map(|image| ContactImage::try_from(image).map_err(RepositoryError::from))
            .collect()
    }

    fn get_contact_image(
        &self,
        contact_id: ContactId,
        image_id: ContactImageId,
    ) -> RepositoryResult<Option<ContactImage>> {
        use crate::schema::contact_images;

        let mut conn = self.conn()?;
        let db_image = contact_images::table
            .filter(contact_images::id.eq(image_id.get()))
            .filter(contact_images::contact_id.eq(contact_id.get()))
            .first::<DbContactImage>(&mut conn)
            .optional()?;

        db_image
            .map(|image| ContactImage::try_from(image).map_err(RepositoryError::from))
            .transpose()
    }
}

impl ContactImageWriter for DieselRepository {
    fn create_contact_images(
        &self,
        contact_id: ContactId,
        images: &[NewContactImage],
        limit: usize,
    ) -> RepositoryResult<Vec<ContactImage>> {
        use crate::schema::{contact_images, contacts};

        let mut conn = self.conn()?;

        // IMMEDIATE takes the write lock up front, so the count below cannot
        // go stale before the insert commits.
        let inserted = conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let exists = diesel::select(diesel::dsl::exists(
                contacts::table.find(contact_id.get()),
            ))
            .get_result::<bool>(conn)?;
            if !exists {
                return Err(RepositoryError::NotFound);
            }

            let current: i64 = contact_images::table
                .filter(contact_images::contact_id.eq(contact_id.get()))
                .count()
                .get_result(conn)?;
            let current = current as usize;

            if current + images.len() > limit {
                return Err(RepositoryError::ImageLimitExceeded {
                    current,
                    requested: images.len(),
                    limit,
                });
            }

            images
                .iter()
                .map(|image| {
                    diesel::insert_into(contact_images::table)
                        .values(DbNewContactImage::for_contact(contact_id, image))
                        .get_result::<DbContactImage>(conn)
                        .map_err(RepositoryError::from)
                })
                .collect::<RepositoryResult<Vec<_>>>()
        })?;

        inserted
            .into_iter()
            .map(|image| ContactImage::try_from(image).map_err(RepositoryError::from))
            .collect()
    }

    fn delete_contact_image(
        &self,
        contact_id: ContactId,
        image_id: ContactImageId,
    ) -> RepositoryResult<bool> {
        use crate::schema::contact_images;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(
            contact_images::table
                .filter(contact_images::id.eq(image_id.get()))
                .filter(contact_images::contact_id.eq(contact_id.get())),
        )
        .execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
