use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::image::NewImage;
use crate::domain::product::{Discount, NewProduct, ProductStatus, UpdateProduct};
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: u64 = 128;

/// Maximum allowed length for a category label.
const CATEGORY_MAX_LEN: u64 = 64;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product forms.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
    /// A scheduled status was requested without a date.
    #[error("scheduled products require a scheduled date")]
    MissingScheduledDate,
}

/// Discount fields as entered in the product dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct DiscountForm {
    /// Whether the discount is applied.
    pub enabled: bool,
    /// Discount percentage; the form enforces the 0–100 range the store
    /// does not.
    #[validate(range(min = 0.0, max = 100.0))]
    pub amount: f64,
}

impl From<DiscountForm> for Discount {
    fn from(form: DiscountForm) -> Self {
        Self {
            enabled: form.enabled,
            amount: form.amount,
        }
    }
}

/// Form payload emitted when submitting the "Add product" dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    /// Name entered by the user.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Category label.
    #[validate(length(min = 1, max = CATEGORY_MAX_LEN))]
    pub category: String,
    /// Unit price; the form enforces non-negativity the store does not.
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Optional primary image reference from the image uploader.
    pub image: Option<String>,
    /// Gallery images from the image uploader.
    #[serde(default)]
    pub images: Vec<NewImage>,
    /// Brand the product belongs to.
    #[validate(length(min = 1))]
    pub brand_id: String,
    /// Units in stock.
    pub stock: u32,
    /// Publication status selected in the dialog.
    pub status: ProductStatus,
    /// Publication date, required when `status` is `scheduled`.
    pub scheduled_date: Option<DateTime<Utc>>,
    /// Optional discount fields.
    #[validate(nested)]
    pub discount: Option<DiscountForm>,
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        if self.status == ProductStatus::Scheduled && self.scheduled_date.is_none() {
            return Err(ProductFormError::MissingScheduledDate);
        }

        let mut payload = NewProduct::new(
            name,
            self.brand_id,
            sanitize_inline_text(&self.category),
            self.price,
        )
        .with_description(sanitize_multiline_text(&self.description))
        .with_images(self.images)
        .with_stock(self.stock)
        .with_status(self.status);

        if let Some(image) = self.image.filter(|i| !i.is_empty()) {
            payload = payload.with_image(image);
        }
        if let Some(date) = self.scheduled_date {
            payload = payload.with_scheduled_date(date);
        }
        if let Some(discount) = self.discount {
            payload = payload.with_discount(discount.into());
        }

        Ok(payload)
    }
}

/// Form payload emitted when submitting the "Edit product" dialog. Absent
/// fields leave the record untouched.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditProductForm {
    /// Optional new name.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: Option<String>,
    /// Optional description update.
    pub description: Option<String>,
    /// Optional category update.
    #[validate(length(min = 1, max = CATEGORY_MAX_LEN))]
    pub category: Option<String>,
    /// Optional price update.
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    /// Optional primary image update.
    pub image: Option<String>,
    /// Optional full replacement of the gallery images.
    pub images: Option<Vec<NewImage>>,
    /// Optional re-assignment to another brand.
    #[validate(length(min = 1))]
    pub brand_id: Option<String>,
    /// Optional stock update.
    pub stock: Option<u32>,
    /// Optional status update.
    pub status: Option<ProductStatus>,
    /// Optional scheduled date update; `Some(None)` clears it.
    pub scheduled_date: Option<Option<DateTime<Utc>>>,
    /// Optional discount update; `Some(None)` clears it.
    #[serde(default)]
    pub discount: Option<Option<DiscountForm>>,
}

impl EditProductForm {
    /// Validates and sanitizes the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let mut updates = UpdateProduct::new();

        if let Some(name) = self.name {
            let sanitized = sanitize_inline_text(&name);
            if sanitized.is_empty() {
                return Err(ProductFormError::EmptyName);
            }
            updates = updates.name(sanitized);
        }

        if let Some(description) = self.description {
            updates = updates.description(sanitize_multiline_text(&description));
        }

        if let Some(category) = self.category {
            updates = updates.category(sanitize_inline_text(&category));
        }

        if let Some(price) = self.price {
            updates = updates.price(price);
        }

        if let Some(image) = self.image {
            updates = updates.image(image);
        }

        if let Some(images) = self.images {
            updates = updates.images(images);
        }

        if let Some(brand_id) = self.brand_id {
            updates = updates.brand_id(brand_id);
        }

        if let Some(stock) = self.stock {
            updates = updates.stock(stock);
        }

        if let Some(status) = self.status {
            updates = updates.status(status);
        }

        if let Some(scheduled_date) = self.scheduled_date {
            updates = updates.scheduled_date(scheduled_date);
        }

        if let Some(discount) = self.discount {
            if let Some(form) = &discount {
                form.validate()?;
            }
            updates = updates.discount(discount.map(Into::into));
        }

        Ok(updates)
    }
}
