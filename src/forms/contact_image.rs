use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::contact_image::NewContactImage;
use crate::domain::types::{
    ImageContentType, ImageData, ImageFileName, is_allowed_content_type, is_valid_base64,
};
use crate::forms::{FormError, trimmed_optional, validation_messages};

// Field keys as reported by `validator`, in Rust and wire spelling.
const IMAGE_FIELDS: &[&str] = &[
    "image_data",
    "imageData",
    "file_name",
    "fileName",
    "content_type",
    "contentType",
];

fn validate_image_data(data: &str) -> Result<(), ValidationError> {
    if data.is_empty() {
        return Err(
            ValidationError::new("required").with_message(Cow::Borrowed("Image data is required"))
        );
    }
    if !is_valid_base64(data) {
        return Err(ValidationError::new("base64")
            .with_message(Cow::Borrowed("Invalid base64 image data")));
    }
    Ok(())
}

fn validate_content_type(content_type: &str) -> Result<(), ValidationError> {
    if is_allowed_content_type(content_type) {
        Ok(())
    } else {
        Err(ValidationError::new("content_type").with_message(Cow::Borrowed("Invalid image type")))
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// One image in `POST /api/contacts/{id}/images` or its batch variant.
pub struct UploadImageForm {
    /// Base64 payload without a `data:` URL prefix.
    #[serde(default)]
    #[validate(custom(function = "validate_image_data"))]
    pub image_data: String,
    #[serde(default, deserialize_with = "trimmed_optional")]
    #[validate(length(max = 100, message = "File name cannot exceed 100 characters"))]
    pub file_name: Option<String>,
    #[serde(default, deserialize_with = "trimmed_optional")]
    #[validate(custom(function = "validate_content_type"))]
    pub content_type: Option<String>,
}

impl UploadImageForm {
    fn messages(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => validation_messages(&errors, IMAGE_FIELDS),
        }
    }

    fn into_domain(self) -> Result<NewContactImage, FormError> {
        let image_data = ImageData::new(self.image_data).map_err(|_| FormError::InvalidImageData)?;
        let file_name = self
            .file_name
            .map(ImageFileName::new)
            .transpose()
            .map_err(|_| FormError::InvalidFileName)?;
        let content_type = self
            .content_type
            .map(ImageContentType::new)
            .transpose()
            .map_err(|_| FormError::InvalidContentType)?;

        Ok(NewContactImage::new(image_data, file_name, content_type))
    }
}

impl TryFrom<UploadImageForm> for NewContactImage {
    type Error = FormError;

    fn try_from(form: UploadImageForm) -> Result<Self, Self::Error> {
        let messages = form.messages();
        if !messages.is_empty() {
            return Err(FormError::Validation(messages));
        }
        form.into_domain()
    }
}

/// Validates a whole batch, collecting the messages of every image before
/// converting any of them.
pub fn parse_image_batch(forms: Vec<UploadImageForm>) -> Result<Vec<NewContactImage>, FormError> {
    if forms.is_empty() {
        return Err(FormError::NoImages);
    }

    let messages = forms.iter().flat_map(UploadImageForm::messages).collect::<Vec<_>>();
    if !messages.is_empty() {
        return Err(FormError::Validation(messages));
    }

    forms.into_iter().map(UploadImageForm::into_domain).collect()
}
