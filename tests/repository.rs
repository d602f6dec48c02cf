use std::sync::{Arc, Mutex};

use brandboard::DEMO_OWNER_ID;
use brandboard::domain::brand::{BrandStatus, NewBrand, UpdateBrand};
use brandboard::domain::image::{ImageSource, NewImage};
use brandboard::domain::product::{NewProduct, ProductStatus, UpdateProduct};
use brandboard::domain::user::User;
use brandboard::repository::observer::StoreEvent;
use brandboard::repository::{
    BrandReader, BrandWriter, ProductReader, ProductWriter, SessionReader, SessionWriter,
};

mod common;

#[test]
fn seeds_demo_dataset_on_first_run() {
    let store = common::TestStore::new();
    let repo = store.open();

    let brands = repo.list_brands().expect("list brands");
    assert_eq!(brands.len(), 3);
    assert_eq!(brands[0].name, "EcoGlow Skincare");

    let products = repo.list_products().expect("list products");
    assert_eq!(products.len(), 7);

    assert!(repo.current_user().expect("current user").is_none());
}

#[test]
fn create_brand_assigns_fresh_id_and_appends() {
    let store = common::TestStore::new();
    let repo = store.open();

    let payload = NewBrand::new("Acme", "d")
        .with_logo("l")
        .with_status(BrandStatus::Active);
    let brand = repo.create_brand(&payload).expect("create brand");

    assert!(!brand.id.is_empty());
    assert_eq!(brand.owner_id, DEMO_OWNER_ID);

    let brands = repo.list_brands().expect("list brands");
    assert_eq!(brands.len(), 4);
    assert_eq!(brands.last().map(|b| b.id.as_str()), Some(brand.id.as_str()));
    assert!(brands.iter().take(3).all(|b| b.id != brand.id));

    let found = repo
        .get_brand_by_id(&brand.id)
        .expect("get brand")
        .expect("brand should exist");
    assert_eq!(found, brand);
}

#[test]
fn create_brand_normalizes_images_to_local() {
    let store = common::TestStore::new();
    let repo = store.open();

    let payload = NewBrand::new("Acme", "d").with_images(vec![
        NewImage::from_url("https://example.com/a.jpg"),
        NewImage::from_file("blob:preview", "/tmp/b.jpg"),
    ]);
    let brand = repo.create_brand(&payload).expect("create brand");

    assert_eq!(brand.images.len(), 2);
    for image in &brand.images {
        assert_eq!(image.source, ImageSource::Local);
        assert!(!image.id.is_empty());
    }
}

#[test]
fn update_brand_changes_only_supplied_fields() {
    let store = common::TestStore::new();
    let repo = store.open();

    let before = repo
        .get_brand_by_id("1")
        .expect("get brand")
        .expect("seeded brand");

    repo.update_brand("1", &UpdateBrand::new().name("X"))
        .expect("update brand");

    let after = repo
        .get_brand_by_id("1")
        .expect("get brand")
        .expect("seeded brand");
    assert_eq!(after.name, "X");
    assert_eq!(after.description, before.description);
    assert_eq!(after.images, before.images);
    assert_eq!(after.logo, before.logo);
    assert_eq!(after.status, before.status);
}

#[test]
fn update_brand_keeps_logo_when_empty_and_replaces_images() {
    let store = common::TestStore::new();
    let repo = store.open();

    let before = repo
        .get_brand_by_id("2")
        .expect("get brand")
        .expect("seeded brand");
    assert!(!before.logo.is_empty());

    let updates = UpdateBrand::new()
        .logo("")
        .images(vec![NewImage::from_url("https://example.com/new.jpg")]);
    repo.update_brand("2", &updates).expect("update brand");

    let after = repo
        .get_brand_by_id("2")
        .expect("get brand")
        .expect("seeded brand");
    assert_eq!(after.logo, before.logo);
    assert_eq!(after.images.len(), 1);
    assert_eq!(after.images[0].url, "https://example.com/new.jpg");
    assert_eq!(after.images[0].source, ImageSource::Local);
}

#[test]
fn update_brand_with_unknown_id_is_a_noop() {
    let store = common::TestStore::new();
    let repo = store.open();

    let before = repo.list_brands().expect("list brands");
    repo.update_brand("nonexistent", &UpdateBrand::new().name("X"))
        .expect("update should not fail");
    let after = repo.list_brands().expect("list brands");
    assert_eq!(before, after);
}

#[test]
fn delete_brand_leaves_products_dangling() {
    let store = common::TestStore::new();
    let repo = store.open();

    repo.delete_brand("1").expect("delete brand");
    assert!(repo.get_brand_by_id("1").expect("get brand").is_none());
    assert_eq!(repo.list_brands().expect("list brands").len(), 2);

    // No cascade: both EcoGlow products survive with their dangling
    // brand reference.
    let product = repo
        .get_product_by_id("1")
        .expect("get product")
        .expect("product should survive brand deletion");
    assert_eq!(product.brand_id, "1");
    let orphans = repo.list_products_by_brand("1").expect("list by brand");
    assert_eq!(orphans.len(), 2);
}

#[test]
fn delete_brand_with_unknown_id_is_a_noop() {
    let store = common::TestStore::new();
    let repo = store.open();

    repo.delete_brand("nonexistent").expect("delete should not fail");
    assert_eq!(repo.list_brands().expect("list brands").len(), 3);
}

#[test]
fn list_products_by_brand_preserves_collection_order() {
    let store = common::TestStore::new();
    let repo = store.open();

    let ecoglow = repo.list_products_by_brand("1").expect("list by brand");
    let ids: Vec<&str> = ecoglow.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);

    assert!(repo
        .list_products_by_brand("unknown")
        .expect("list by brand")
        .is_empty());
}

#[test]
fn update_product_changes_only_supplied_fields() {
    let store = common::TestStore::new();
    let repo = store.open();

    let before = repo
        .get_product_by_id("1")
        .expect("get product")
        .expect("seeded product");

    repo.update_product("1", &UpdateProduct::new().price(59.99))
        .expect("update product");

    let after = repo
        .get_product_by_id("1")
        .expect("get product")
        .expect("seeded product");
    assert_eq!(after.price, 59.99);
    assert_eq!(after.name, before.name);
    assert_eq!(after.stock, before.stock);
    assert_eq!(after.images, before.images);
    assert_eq!(after.discount, before.discount);
    assert_eq!(after.status, before.status);
}

#[test]
fn product_status_transitions_are_unrestricted() {
    let store = common::TestStore::new();
    let repo = store.open();

    for status in [
        ProductStatus::Hidden,
        ProductStatus::Scheduled,
        ProductStatus::Published,
    ] {
        repo.update_product("3", &UpdateProduct::new().status(status))
            .expect("update product");
        let product = repo
            .get_product_by_id("3")
            .expect("get product")
            .expect("seeded product");
        assert_eq!(product.status, status);
    }
}

#[test]
fn create_and_delete_product_round_trip() {
    let store = common::TestStore::new();
    let repo = store.open();

    let payload = NewProduct::new("Night Cream", "1", "Skincare", 24.99).with_stock(12);
    let product = repo.create_product(&payload).expect("create product");

    assert_eq!(repo.list_products().expect("list products").len(), 8);
    let by_brand = repo.list_products_by_brand("1").expect("list by brand");
    assert_eq!(by_brand.last().map(|p| p.id.as_str()), Some(product.id.as_str()));

    repo.delete_product(&product.id).expect("delete product");
    assert!(repo
        .get_product_by_id(&product.id)
        .expect("get product")
        .is_none());
    assert_eq!(repo.list_products().expect("list products").len(), 7);
}

#[test]
fn state_survives_a_restart() {
    let store = common::TestStore::new();

    let brand_id = {
        let repo = store.open();
        let brand = repo
            .create_brand(&NewBrand::new("Acme", "d"))
            .expect("create brand");
        repo.delete_product("7").expect("delete product");
        repo.set_current_user(&User::register("a@example.com", "A"))
            .expect("set current user");
        brand.id
    };

    // A fresh repository over the same directory restores the persisted
    // snapshots instead of reseeding.
    let repo = store.open();
    assert_eq!(repo.list_brands().expect("list brands").len(), 4);
    assert!(repo
        .get_brand_by_id(&brand_id)
        .expect("get brand")
        .is_some());
    assert_eq!(repo.list_products().expect("list products").len(), 6);
    let user = repo
        .current_user()
        .expect("current user")
        .expect("session should be restored");
    assert_eq!(user.email, "a@example.com");
}

#[test]
fn session_set_and_clear_round_trip() {
    let store = common::TestStore::new();
    let repo = store.open();

    let user = User::register("a@example.com", "A");
    repo.set_current_user(&user).expect("set current user");
    assert_eq!(repo.current_user().expect("current user"), Some(user));

    repo.clear_current_user().expect("clear current user");
    assert!(repo.current_user().expect("current user").is_none());

    // Clearing twice stays a no-op.
    repo.clear_current_user().expect("clear current user");
    assert!(repo.current_user().expect("current user").is_none());
}

#[test]
fn mutations_notify_subscribers_before_returning() {
    let store = common::TestStore::new();
    let repo = store.open();

    let seen: Arc<Mutex<Vec<StoreEvent>>> = Arc::default();
    let subscription = {
        let seen = Arc::clone(&seen);
        repo.subscribe(Arc::new(move |event| {
            seen.lock().expect("lock").push(event);
        }))
    };

    repo.create_brand(&NewBrand::new("Acme", "d"))
        .expect("create brand");
    repo.delete_product("7").expect("delete product");
    repo.clear_current_user().expect("clear current user");

    assert_eq!(
        *seen.lock().expect("lock"),
        vec![StoreEvent::Brands, StoreEvent::Products, StoreEvent::Session]
    );

    assert!(repo.unsubscribe(subscription));
    repo.delete_brand("2").expect("delete brand");
    assert_eq!(seen.lock().expect("lock").len(), 3);
}
