//! Card form validation
//!
//! Field-level validation for the create/edit card forms. Errors are never
//! thrown: each submit attempt recomputes one optional message per field,
//! and the form blocks until every message clears. Messages are the exact
//! strings the interface shows inline next to each field.

use crate::config::{MAX_IMAGE_SIZE_BYTES, MIN_DESCRIPTION_LEN, MIN_TITLE_LEN};
use crate::store::{CardDraft, CardStatus};
use thiserror::Error;

/// Raw field values as a form would hold them: free text until validated
#[derive(Debug, Clone, Default)]
pub struct CardForm {
    pub title: String,
    pub price: String,
    pub quantity: String,
    pub description: String,
    pub status: CardStatus,
    pub image: Option<String>,
}

/// One optional inline message per form field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl FieldErrors {
    pub fn is_valid(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
            && self.description.is_none()
            && self.image.is_none()
    }
}

impl CardForm {
    /// Validate every field and produce a draft ready for the store, or
    /// the full set of inline messages. A card switched to inactive has
    /// its quantity forced to zero here, in the form, not in the store.
    pub fn validate(&self) -> std::result::Result<CardDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.title.trim().is_empty() {
            errors.title = Some("El título es requerido".to_string());
        } else if self.title.chars().count() < MIN_TITLE_LEN {
            errors.title = Some("El título debe tener al menos 3 caracteres".to_string());
        }

        if self.price.trim().is_empty() {
            errors.price = Some("El precio es requerido".to_string());
        } else if self.price.trim().parse::<f64>().map_or(true, |p| p <= 0.0) {
            errors.price = Some("El precio debe ser un número mayor a 0".to_string());
        }

        let mut quantity: u32 = 0;
        if self.quantity.trim().is_empty() {
            errors.quantity = Some("La cantidad es requerida".to_string());
        } else {
            match self.quantity.trim().parse::<u32>() {
                Ok(parsed) => quantity = parsed,
                Err(_) => {
                    errors.quantity =
                        Some("La cantidad debe ser un número mayor o igual a 0".to_string());
                }
            }
        }

        if self.description.trim().is_empty() {
            errors.description = Some("La descripción es requerida".to_string());
        } else if self.description.chars().count() < MIN_DESCRIPTION_LEN {
            errors.description =
                Some("La descripción debe tener al menos 10 caracteres".to_string());
        }

        if self.image.is_none() {
            errors.image = Some("La imagen es requerida".to_string());
        }

        if !errors.is_valid() {
            return Err(errors);
        }

        if self.status == CardStatus::Inactive {
            quantity = 0;
        }

        Ok(CardDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            price: self.price.trim().to_string(),
            quantity,
            image: self.image.clone(),
        })
    }
}

/// Keystroke filter for the price input: digits and decimal points only
pub fn sanitize_price(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Keystroke filter for the quantity input: digits only
pub fn sanitize_quantity(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Why an image upload was rejected. The messages double as the toast
/// text; a rejected upload leaves any previously selected image untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Por favor, selecciona una imagen válida")]
    NotAnImage,
    #[error("La imagen es demasiado grande. El tamaño máximo es 5MB.")]
    TooLarge,
}

/// Check an upload before accepting it: must carry an image MIME type and
/// fit within the size limit
pub fn check_image_upload(mime_type: &str, size: usize) -> std::result::Result<(), UploadError> {
    if !mime_type.starts_with("image/") {
        return Err(UploadError::NotAnImage);
    }
    if size > MAX_IMAGE_SIZE_BYTES {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}
