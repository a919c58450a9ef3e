//! Database models shared across the contacts repository.

pub mod contact;
pub mod contact_image;
#[cfg(feature = "server")]
pub mod config;
