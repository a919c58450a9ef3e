//! Domain aggregates exposed by the contacts service layer.

pub mod contact;
pub mod contact_image;
pub mod types;
