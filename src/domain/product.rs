use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::image::{ImageRef, NewImage};

/// Publication status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Published,
    Scheduled,
    Hidden,
}

/// Percentage discount attached to a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    /// Whether the discount is currently applied.
    pub enabled: bool,
    /// Discount percentage. The store does not range-check this; the form
    /// layer enforces 0–100.
    pub amount: f64,
}

/// Domain representation of a product managed through the back office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier of the product.
    pub id: String,
    /// Human-readable name of the product.
    pub name: String,
    /// Longer description shown on the product page.
    pub description: String,
    /// Free-form category label.
    pub category: String,
    /// Unit price. The store does not validate sign or range.
    pub price: f64,
    /// Primary image reference; empty string when unset.
    #[serde(default)]
    pub image: String,
    /// Gallery images, normalized to `local` on every write path.
    pub images: Vec<ImageRef>,
    /// Soft reference to the owning brand; never checked against the brand
    /// store and never cascaded on brand deletion.
    pub brand_id: String,
    /// Identifier of the owning user (fixed demo owner).
    pub owner_id: String,
    /// Units in stock. The store does not validate range.
    pub stock: u32,
    /// Timestamp for when the product record was created.
    pub created_at: DateTime<Utc>,
    /// Publication status.
    pub status: ProductStatus,
    /// Publication date for `scheduled` products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    /// Optional percentage discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
}

/// Payload required to insert a new product. Id, owner and creation
/// timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Longer description shown on the product page.
    pub description: String,
    /// Free-form category label.
    pub category: String,
    /// Unit price, stored as given.
    pub price: f64,
    /// Primary image reference; defaults to the empty string.
    pub image: String,
    /// Gallery images as supplied by the acquisition layer.
    pub images: Vec<NewImage>,
    /// Soft reference to the owning brand.
    pub brand_id: String,
    /// Units in stock, stored as given.
    pub stock: u32,
    /// Publication status.
    pub status: ProductStatus,
    /// Publication date for `scheduled` products.
    pub scheduled_date: Option<DateTime<Utc>>,
    /// Optional percentage discount.
    pub discount: Option<Discount>,
}

impl NewProduct {
    /// Build a new product payload with the supplied details.
    pub fn new(
        name: impl Into<String>,
        brand_id: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category: category.into(),
            price,
            image: String::new(),
            images: Vec::new(),
            brand_id: brand_id.into(),
            stock: 0,
            status: ProductStatus::Published,
            scheduled_date: None,
            discount: None,
        }
    }

    /// Attach a descriptive text to the payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach a primary image reference to the payload.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Attach gallery images to the payload.
    pub fn with_images(mut self, images: Vec<NewImage>) -> Self {
        self.images = images;
        self
    }

    /// Set the initial stock level.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Set the publication status.
    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    /// Schedule publication for a future date.
    pub fn with_scheduled_date(mut self, date: DateTime<Utc>) -> Self {
        self.scheduled_date = Some(date);
        self
    }

    /// Attach a discount to the payload.
    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.discount = Some(discount);
        self
    }
}

/// Patch data applied when updating an existing product. Absent fields are
/// retained; `images`, when present, fully replaces the prior list after
/// normalization.
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    /// Optional name update.
    pub name: Option<String>,
    /// Optional description update.
    pub description: Option<String>,
    /// Optional category update.
    pub category: Option<String>,
    /// Optional price update.
    pub price: Option<f64>,
    /// Optional primary image update.
    pub image: Option<String>,
    /// Optional full replacement of the gallery images.
    pub images: Option<Vec<NewImage>>,
    /// Optional re-assignment to another brand (still unchecked).
    pub brand_id: Option<String>,
    /// Optional stock update.
    pub stock: Option<u32>,
    /// Optional status update; any status may follow any other.
    pub status: Option<ProductStatus>,
    /// Optional scheduled date update, using `None` inside to clear it.
    pub scheduled_date: Option<Option<DateTime<Utc>>>,
    /// Optional discount update, using `None` inside to clear it.
    pub discount: Option<Option<Discount>>,
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Update the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Update the price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Update the primary image reference.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Replace the gallery images.
    pub fn images(mut self, images: Vec<NewImage>) -> Self {
        self.images = Some(images);
        self
    }

    /// Re-assign the product to another brand.
    pub fn brand_id(mut self, brand_id: impl Into<String>) -> Self {
        self.brand_id = Some(brand_id.into());
        self
    }

    /// Update the stock level.
    pub fn stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Update the publication status.
    pub fn status(mut self, status: ProductStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Update the scheduled date, using `None` to clear an existing value.
    pub fn scheduled_date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.scheduled_date = Some(date);
        self
    }

    /// Update the discount, using `None` to clear an existing value.
    pub fn discount(mut self, discount: Option<Discount>) -> Self {
        self.discount = Some(discount);
        self
    }
}
