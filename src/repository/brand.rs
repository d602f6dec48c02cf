use chrono::Utc;

use crate::DEMO_OWNER_ID;
use crate::domain::brand::{Brand, NewBrand, UpdateBrand};
use crate::domain::image::normalize_images;
use crate::domain::new_id;
use crate::repository::errors::RepositoryResult;
use crate::repository::observer::StoreEvent;
use crate::repository::{BRANDS_SLOT, BrandReader, BrandWriter, SnapshotRepository};
use crate::storage::Storage;

impl<S: Storage> BrandReader for SnapshotRepository<S> {
    fn get_brand_by_id(&self, id: &str) -> RepositoryResult<Option<Brand>> {
        let state = self.brands_read();
        Ok(state.brands.iter().find(|b| b.id == id).cloned())
    }

    fn list_brands(&self) -> RepositoryResult<Vec<Brand>> {
        Ok(self.brands_read().brands.clone())
    }
}

impl<S: Storage> BrandWriter for SnapshotRepository<S> {
    fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand> {
        let brand = Brand {
            id: new_id(),
            name: new_brand.name.clone(),
            description: new_brand.description.clone(),
            logo: new_brand.logo.clone(),
            images: normalize_images(new_brand.images.clone()),
            owner_id: DEMO_OWNER_ID.to_string(),
            created_at: Utc::now(),
            status: new_brand.status,
            website: new_brand.website.clone(),
            social_links: new_brand.social_links.clone(),
        };

        {
            let mut state = self.brands_write();
            state.brands.push(brand.clone());
            self.persist(BRANDS_SLOT, &*state)?;
        }
        self.notify(StoreEvent::Brands);
        Ok(brand)
    }

    fn update_brand(&self, brand_id: &str, updates: &UpdateBrand) -> RepositoryResult<()> {
        {
            let mut state = self.brands_write();
            let Some(brand) = state.brands.iter_mut().find(|b| b.id == brand_id) else {
                log::debug!("update for unknown brand `{brand_id}` ignored");
                return Ok(());
            };

            if let Some(name) = &updates.name {
                brand.name = name.clone();
            }
            if let Some(description) = &updates.description {
                brand.description = description.clone();
            }
            // An empty logo means "keep the existing one".
            if let Some(logo) = &updates.logo
                && !logo.is_empty()
            {
                brand.logo = logo.clone();
            }
            if let Some(images) = &updates.images {
                brand.images = normalize_images(images.clone());
            }
            if let Some(status) = updates.status {
                brand.status = status;
            }
            if let Some(website) = &updates.website {
                brand.website = website.clone();
            }
            if let Some(social_links) = &updates.social_links {
                brand.social_links = social_links.clone();
            }

            self.persist(BRANDS_SLOT, &*state)?;
        }
        self.notify(StoreEvent::Brands);
        Ok(())
    }

    fn delete_brand(&self, brand_id: &str) -> RepositoryResult<()> {
        {
            let mut state = self.brands_write();
            let before = state.brands.len();
            state.brands.retain(|b| b.id != brand_id);
            if state.brands.len() == before {
                log::debug!("delete for unknown brand `{brand_id}` ignored");
                return Ok(());
            }
            // Products referencing this brand are left untouched; the
            // reference dangles.
            self.persist(BRANDS_SLOT, &*state)?;
        }
        self.notify(StoreEvent::Brands);
        Ok(())
    }
}
