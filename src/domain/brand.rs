use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::image::{ImageRef, NewImage};

/// Publication status of a brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandStatus {
    Active,
    Inactive,
}

/// Social profile links attached to a brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

/// Domain representation of a brand managed through the back office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Unique identifier of the brand.
    pub id: String,
    /// Human-readable name of the brand.
    pub name: String,
    /// Longer description shown on the brand page.
    pub description: String,
    /// Logo reference; empty string when no logo has been uploaded.
    pub logo: String,
    /// Gallery images, normalized to `local` on every write path.
    pub images: Vec<ImageRef>,
    /// Identifier of the owning user (fixed demo owner).
    pub owner_id: String,
    /// Timestamp for when the brand record was created.
    pub created_at: DateTime<Utc>,
    /// Whether the brand is active or inactive.
    pub status: BrandStatus,
    /// Optional public website URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Optional social profile links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
}

/// Payload required to insert a new brand. Id, owner and creation
/// timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewBrand {
    /// Human-readable name of the brand.
    pub name: String,
    /// Longer description shown on the brand page.
    pub description: String,
    /// Logo reference; defaults to the empty string.
    pub logo: String,
    /// Gallery images as supplied by the acquisition layer.
    pub images: Vec<NewImage>,
    /// Whether the brand starts active or inactive.
    pub status: BrandStatus,
    /// Optional public website URL.
    pub website: Option<String>,
    /// Optional social profile links.
    pub social_links: Option<SocialLinks>,
}

impl NewBrand {
    /// Build a new brand payload with the supplied name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            logo: String::new(),
            images: Vec::new(),
            status: BrandStatus::Active,
            website: None,
            social_links: None,
        }
    }

    /// Attach a logo reference to the payload.
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = logo.into();
        self
    }

    /// Attach gallery images to the payload.
    pub fn with_images(mut self, images: Vec<NewImage>) -> Self {
        self.images = images;
        self
    }

    /// Set the initial status.
    pub fn with_status(mut self, status: BrandStatus) -> Self {
        self.status = status;
        self
    }

    /// Attach a website URL to the payload.
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Attach social profile links to the payload.
    pub fn with_social_links(mut self, links: SocialLinks) -> Self {
        self.social_links = Some(links);
        self
    }
}

/// Patch data applied when updating an existing brand. Absent fields are
/// retained; `images`, when present, fully replaces the prior list after
/// normalization; `logo` is applied only when non-empty.
#[derive(Debug, Clone, Default)]
pub struct UpdateBrand {
    /// Optional name update.
    pub name: Option<String>,
    /// Optional description update.
    pub description: Option<String>,
    /// Optional logo update; ignored when empty.
    pub logo: Option<String>,
    /// Optional full replacement of the gallery images.
    pub images: Option<Vec<NewImage>>,
    /// Optional status update.
    pub status: Option<BrandStatus>,
    /// Optional website update, using `None` inside to clear the value.
    pub website: Option<Option<String>>,
    /// Optional social links update, using `None` inside to clear the value.
    pub social_links: Option<Option<SocialLinks>>,
}

impl UpdateBrand {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the brand name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Update the logo reference.
    pub fn logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    /// Replace the gallery images.
    pub fn images(mut self, images: Vec<NewImage>) -> Self {
        self.images = Some(images);
        self
    }

    /// Update the status.
    pub fn status(mut self, status: BrandStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Update the website, using `None` to clear an existing value.
    pub fn website(mut self, website: Option<impl Into<String>>) -> Self {
        self.website = Some(website.map(Into::into));
        self
    }

    /// Update the social links, using `None` to clear an existing value.
    pub fn social_links(mut self, links: Option<SocialLinks>) -> Self {
        self.social_links = Some(links);
        self
    }
}
