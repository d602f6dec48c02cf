use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::domain::brand::{Brand, NewBrand, UpdateBrand};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;
use crate::repository::observer::{Listener, ObserverRegistry, StoreEvent, SubscriptionId};
use crate::storage::Storage;

pub mod errors;
pub mod observer;
pub mod seed;

mod brand;
mod product;
mod session;

#[cfg(test)]
pub mod mock;

/// Slot holding the persisted session snapshot.
pub const AUTH_SLOT: &str = "auth-storage";
/// Slot holding the persisted brand collection snapshot.
pub const BRANDS_SLOT: &str = "brands-storage";
/// Slot holding the persisted product collection snapshot.
pub const PRODUCTS_SLOT: &str = "products-storage";

/// Read-only operations over the signed-in session.
pub trait SessionReader {
    fn current_user(&self) -> RepositoryResult<Option<User>>;
}

/// Write operations over the signed-in session.
pub trait SessionWriter {
    fn set_current_user(&self, user: &User) -> RepositoryResult<()>;
    fn clear_current_user(&self) -> RepositoryResult<()>;
}

/// Read-only operations over brand records.
pub trait BrandReader {
    fn get_brand_by_id(&self, id: &str) -> RepositoryResult<Option<Brand>>;
    fn list_brands(&self) -> RepositoryResult<Vec<Brand>>;
}

/// Write operations over brand records. Update and delete with an unknown
/// id are silent no-ops.
pub trait BrandWriter {
    fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand>;
    fn update_brand(&self, brand_id: &str, updates: &UpdateBrand) -> RepositoryResult<()>;
    fn delete_brand(&self, brand_id: &str) -> RepositoryResult<()>;
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: &str) -> RepositoryResult<Option<Product>>;
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    /// All products whose `brand_id` equals the argument, in collection
    /// order. Empty when nothing matches, including for brand ids that no
    /// longer exist.
    fn list_products_by_brand(&self, brand_id: &str) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over product records. Update and delete with an
/// unknown id are silent no-ops.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: &str, updates: &UpdateProduct) -> RepositoryResult<()>;
    fn delete_product(&self, product_id: &str) -> RepositoryResult<()>;
}

/// Persisted session state.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct SessionState {
    #[serde(default)]
    pub current_user: Option<User>,
}

/// Persisted brand collection. Order is insertion order.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct BrandsState {
    pub brands: Vec<Brand>,
}

/// Persisted product collection. Order is insertion order.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProductsState {
    pub products: Vec<Product>,
}

/// Snapshot-persisting repository backing the three stores.
///
/// All state lives in memory; every mutation rewrites the touched store's
/// whole snapshot into its storage slot and then notifies subscribers.
/// Writes to different slots are independent, with no transactional
/// grouping.
pub struct SnapshotRepository<S: Storage> {
    storage: S,
    session: RwLock<SessionState>,
    brands: RwLock<BrandsState>,
    products: RwLock<ProductsState>,
    observers: ObserverRegistry,
}

impl<S: Storage> SnapshotRepository<S> {
    /// Open the repository over `storage`, restoring any persisted
    /// snapshots. The brand and product stores are seeded with the demo
    /// dataset on first run; the session restores the last signed-in user,
    /// if any.
    pub fn open(storage: S) -> RepositoryResult<Self> {
        let session: SessionState = match load_slot(&storage, AUTH_SLOT)? {
            Some(state) => state,
            None => SessionState::default(),
        };

        let brands: BrandsState = match load_slot(&storage, BRANDS_SLOT)? {
            Some(state) => state,
            None => {
                let state = BrandsState {
                    brands: seed::demo_brands(),
                };
                store_slot(&storage, BRANDS_SLOT, &state)?;
                log::info!("seeded {} demo brands", state.brands.len());
                state
            }
        };

        let products: ProductsState = match load_slot(&storage, PRODUCTS_SLOT)? {
            Some(state) => state,
            None => {
                let state = ProductsState {
                    products: seed::demo_products(),
                };
                store_slot(&storage, PRODUCTS_SLOT, &state)?;
                log::info!("seeded {} demo products", state.products.len());
                state
            }
        };

        Ok(Self {
            storage,
            session: RwLock::new(session),
            brands: RwLock::new(brands),
            products: RwLock::new(products),
            observers: ObserverRegistry::new(),
        })
    }

    /// Register a change listener; it runs synchronously after every
    /// mutation until unsubscribed.
    pub fn subscribe(&self, listener: Listener) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    /// Remove a previously registered listener.
    pub fn unsubscribe(&self, subscription: SubscriptionId) -> bool {
        self.observers.unsubscribe(subscription)
    }

    pub(crate) fn notify(&self, event: StoreEvent) {
        self.observers.notify(event);
    }

    pub(crate) fn session_read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn session_write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn brands_read(&self) -> RwLockReadGuard<'_, BrandsState> {
        self.brands.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn brands_write(&self) -> RwLockWriteGuard<'_, BrandsState> {
        self.brands.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn products_read(&self) -> RwLockReadGuard<'_, ProductsState> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn products_write(&self) -> RwLockWriteGuard<'_, ProductsState> {
        self.products.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn persist<T: Serialize>(&self, slot: &str, state: &T) -> RepositoryResult<()> {
        store_slot(&self.storage, slot, state)
    }
}

fn load_slot<S: Storage, T: DeserializeOwned>(
    storage: &S,
    slot: &str,
) -> RepositoryResult<Option<T>> {
    match storage.load(slot)? {
        Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
        None => Ok(None),
    }
}

fn store_slot<S: Storage, T: Serialize>(
    storage: &S,
    slot: &str,
    state: &T,
) -> RepositoryResult<()> {
    let payload = serde_json::to_string(state)?;
    storage.store(slot, &payload)?;
    Ok(())
}
