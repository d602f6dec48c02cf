use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::brand::{BrandStatus, NewBrand, SocialLinks, UpdateBrand};
use crate::domain::image::NewImage;
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

/// Maximum allowed length for a brand name.
const NAME_MAX_LEN: u64 = 128;

/// Result type returned by the brand form helpers.
pub type BrandFormResult<T> = Result<T, BrandFormError>;

/// Errors that can occur while processing brand forms.
#[derive(Debug, Error)]
pub enum BrandFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("brand name cannot be empty")]
    EmptyName,
}

/// Social link fields as entered in the brand dialog.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SocialLinksForm {
    #[validate(url)]
    pub facebook: Option<String>,
    #[validate(url)]
    pub twitter: Option<String>,
    #[validate(url)]
    pub instagram: Option<String>,
    #[validate(url)]
    pub linkedin: Option<String>,
}

impl SocialLinksForm {
    fn into_social_links(self) -> Option<SocialLinks> {
        let links = SocialLinks {
            facebook: self.facebook.filter(|v| !v.is_empty()),
            twitter: self.twitter.filter(|v| !v.is_empty()),
            instagram: self.instagram.filter(|v| !v.is_empty()),
            linkedin: self.linkedin.filter(|v| !v.is_empty()),
        };
        (links != SocialLinks::default()).then_some(links)
    }
}

/// Form payload emitted when submitting the "Add brand" dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct AddBrandForm {
    /// Name entered by the user.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Optional logo reference from the image uploader.
    pub logo: Option<String>,
    /// Gallery images from the image uploader.
    #[serde(default)]
    pub images: Vec<NewImage>,
    /// Initial status selected in the dialog.
    pub status: BrandStatus,
    /// Optional public website URL.
    #[validate(url)]
    pub website: Option<String>,
    /// Optional social profile links.
    #[validate(nested)]
    pub social_links: Option<SocialLinksForm>,
}

impl AddBrandForm {
    /// Validates and sanitizes the payload into a domain `NewBrand`.
    pub fn into_new_brand(self) -> BrandFormResult<NewBrand> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(BrandFormError::EmptyName);
        }

        let mut payload = NewBrand::new(name, sanitize_multiline_text(&self.description))
            .with_status(self.status)
            .with_images(self.images);

        if let Some(logo) = self.logo.filter(|l| !l.is_empty()) {
            payload = payload.with_logo(logo);
        }
        if let Some(website) = self.website.filter(|w| !w.is_empty()) {
            payload = payload.with_website(website);
        }
        if let Some(links) = self.social_links.and_then(SocialLinksForm::into_social_links) {
            payload = payload.with_social_links(links);
        }

        Ok(payload)
    }
}

/// Form payload emitted when submitting the "Edit brand" dialog. Absent
/// fields leave the record untouched.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditBrandForm {
    /// Optional new name.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: Option<String>,
    /// Optional description update.
    pub description: Option<String>,
    /// Optional logo update; an empty string keeps the existing logo.
    pub logo: Option<String>,
    /// Optional full replacement of the gallery images.
    pub images: Option<Vec<NewImage>>,
    /// Optional status update.
    pub status: Option<BrandStatus>,
    /// Optional website update (empty string clears the existing value).
    pub website: Option<String>,
    /// Optional social links update.
    #[validate(nested)]
    pub social_links: Option<SocialLinksForm>,
}

impl EditBrandForm {
    /// Validates and sanitizes the payload into a domain `UpdateBrand`.
    pub fn into_update_brand(self) -> BrandFormResult<UpdateBrand> {
        self.validate()?;

        let mut updates = UpdateBrand::new();

        if let Some(name) = self.name {
            let sanitized = sanitize_inline_text(&name);
            if sanitized.is_empty() {
                return Err(BrandFormError::EmptyName);
            }
            updates = updates.name(sanitized);
        }

        if let Some(description) = self.description {
            updates = updates.description(sanitize_multiline_text(&description));
        }

        if let Some(logo) = self.logo {
            updates = updates.logo(logo);
        }

        if let Some(images) = self.images {
            updates = updates.images(images);
        }

        if let Some(status) = self.status {
            updates = updates.status(status);
        }

        if let Some(website) = self.website {
            let trimmed = website.trim();
            if trimmed.is_empty() {
                updates = updates.website(None::<String>);
            } else {
                updates = updates.website(Some(trimmed));
            }
        }

        if let Some(links) = self.social_links {
            updates = updates.social_links(links.into_social_links());
        }

        Ok(updates)
    }
}
