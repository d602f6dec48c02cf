use chrono::Utc;

use crate::DEMO_OWNER_ID;
use crate::domain::image::normalize_images;
use crate::domain::new_id;
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::repository::errors::RepositoryResult;
use crate::repository::observer::StoreEvent;
use crate::repository::{PRODUCTS_SLOT, ProductReader, ProductWriter, SnapshotRepository};
use crate::storage::Storage;

impl<S: Storage> ProductReader for SnapshotRepository<S> {
    fn get_product_by_id(&self, id: &str) -> RepositoryResult<Option<Product>> {
        let state = self.products_read();
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }

    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.products_read().products.clone())
    }

    fn list_products_by_brand(&self, brand_id: &str) -> RepositoryResult<Vec<Product>> {
        let state = self.products_read();
        Ok(state
            .products
            .iter()
            .filter(|p| p.brand_id == brand_id)
            .cloned()
            .collect())
    }
}

impl<S: Storage> ProductWriter for SnapshotRepository<S> {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        let product = Product {
            id: new_id(),
            name: new_product.name.clone(),
            description: new_product.description.clone(),
            category: new_product.category.clone(),
            price: new_product.price,
            image: new_product.image.clone(),
            images: normalize_images(new_product.images.clone()),
            brand_id: new_product.brand_id.clone(),
            owner_id: DEMO_OWNER_ID.to_string(),
            stock: new_product.stock,
            created_at: Utc::now(),
            status: new_product.status,
            scheduled_date: new_product.scheduled_date,
            discount: new_product.discount,
        };

        {
            let mut state = self.products_write();
            state.products.push(product.clone());
            self.persist(PRODUCTS_SLOT, &*state)?;
        }
        self.notify(StoreEvent::Products);
        Ok(product)
    }

    fn update_product(&self, product_id: &str, updates: &UpdateProduct) -> RepositoryResult<()> {
        {
            let mut state = self.products_write();
            let Some(product) = state.products.iter_mut().find(|p| p.id == product_id) else {
                log::debug!("update for unknown product `{product_id}` ignored");
                return Ok(());
            };

            if let Some(name) = &updates.name {
                product.name = name.clone();
            }
            if let Some(description) = &updates.description {
                product.description = description.clone();
            }
            if let Some(category) = &updates.category {
                product.category = category.clone();
            }
            if let Some(price) = updates.price {
                product.price = price;
            }
            if let Some(image) = &updates.image {
                product.image = image.clone();
            }
            if let Some(images) = &updates.images {
                product.images = normalize_images(images.clone());
            }
            if let Some(brand_id) = &updates.brand_id {
                product.brand_id = brand_id.clone();
            }
            if let Some(stock) = updates.stock {
                product.stock = stock;
            }
            if let Some(status) = updates.status {
                product.status = status;
            }
            if let Some(scheduled_date) = updates.scheduled_date {
                product.scheduled_date = scheduled_date;
            }
            if let Some(discount) = updates.discount {
                product.discount = discount;
            }

            self.persist(PRODUCTS_SLOT, &*state)?;
        }
        self.notify(StoreEvent::Products);
        Ok(())
    }

    fn delete_product(&self, product_id: &str) -> RepositoryResult<()> {
        {
            let mut state = self.products_write();
            let before = state.products.len();
            state.products.retain(|p| p.id != product_id);
            if state.products.len() == before {
                log::debug!("delete for unknown product `{product_id}` ignored");
                return Ok(());
            }
            self.persist(PRODUCTS_SLOT, &*state)?;
        }
        self.notify(StoreEvent::Products);
        Ok(())
    }
}
