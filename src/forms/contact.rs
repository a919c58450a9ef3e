use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::contact::{NewContact, UpdateContact};
use crate::domain::types::{
    ContactEmail, ContactName, ContactType, MAX_NAME_LENGTH, PHONE_REGEX, PhoneNumber,
};
use crate::forms::{FormError, trimmed_optional, validation_messages};

const CONTACT_FIELDS: &[&str] = &["name", "email", "phone", "contact_type", "type"];

fn validate_contact_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("Name is required")));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::new("length")
            .with_message(Cow::Borrowed("Name cannot exceed 100 characters")));
    }
    Ok(())
}

fn validate_contact_type(value: &serde_json::Value) -> Result<(), ValidationError> {
    ContactType::from_json(value).map(|_| ()).map_err(|_| {
        ValidationError::new("contact_type").with_message(Cow::Borrowed("Invalid contact type"))
    })
}

/// An absent `type` means a customer; an explicit `null` is still rejected.
fn default_contact_type() -> serde_json::Value {
    serde_json::Value::from(ContactType::Customer.as_i32())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /api/contacts`.
pub struct CreateContactForm {
    #[serde(default)]
    #[validate(custom(function = "validate_contact_name"))]
    pub name: String,
    #[serde(default, deserialize_with = "trimmed_optional")]
    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email cannot exceed 100 characters")
    )]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "trimmed_optional")]
    #[validate(
        length(max = 20, message = "Phone cannot exceed 20 characters"),
        regex(path = *PHONE_REGEX, message = "Invalid phone number format")
    )]
    pub phone: Option<String>,
    /// Numeric discriminant (`0` customer, `1` lead) or the variant name.
    #[serde(rename = "type", default = "default_contact_type")]
    #[validate(custom(function = "validate_contact_type"))]
    pub contact_type: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `PUT /api/contacts/{id}`. The contact type cannot be changed.
pub struct UpdateContactForm {
    #[serde(default)]
    #[validate(custom(function = "validate_contact_name"))]
    pub name: String,
    #[serde(default, deserialize_with = "trimmed_optional")]
    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email cannot exceed 100 characters")
    )]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "trimmed_optional")]
    #[validate(
        length(max = 20, message = "Phone cannot exceed 20 characters"),
        regex(path = *PHONE_REGEX, message = "Invalid phone number format")
    )]
    pub phone: Option<String>,
}

fn parse_common(
    name: String,
    email: Option<String>,
    phone: Option<String>,
) -> Result<(ContactName, Option<ContactEmail>, Option<PhoneNumber>), FormError> {
    let name = ContactName::new(name).map_err(|_| FormError::InvalidName)?;
    let email = email
        .map(ContactEmail::new)
        .transpose()
        .map_err(|_| FormError::InvalidEmail)?;
    let phone = phone
        .map(PhoneNumber::new)
        .transpose()
        .map_err(|_| FormError::InvalidPhoneNumber)?;
    Ok((name, email, phone))
}

impl TryFrom<CreateContactForm> for NewContact {
    type Error = FormError;

    fn try_from(form: CreateContactForm) -> Result<Self, Self::Error> {
        form.validate()
            .map_err(|e| FormError::Validation(validation_messages(&e, CONTACT_FIELDS)))?;

        let contact_type =
            ContactType::from_json(&form.contact_type).map_err(|_| FormError::InvalidContactType)?;
        let (name, email, phone) = parse_common(form.name, form.email, form.phone)?;

        Ok(NewContact::new(name, email, phone, contact_type))
    }
}

impl TryFrom<UpdateContactForm> for UpdateContact {
    type Error = FormError;

    fn try_from(form: UpdateContactForm) -> Result<Self, Self::Error> {
        form.validate()
            .map_err(|e| FormError::Validation(validation_messages(&e, CONTACT_FIELDS)))?;

        let (name, email, phone) = parse_common(form.name, form.email, form.phone)?;

        Ok(UpdateContact::new(name, email, phone))
    }
}
