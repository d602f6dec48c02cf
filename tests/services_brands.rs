use brandboard::domain::brand::BrandStatus;
use brandboard::domain::image::NewImage;
use brandboard::forms::brands::{AddBrandForm, EditBrandForm};
use brandboard::repository::BrandReader;
use brandboard::services::ServiceError;
use brandboard::services::brands;

mod common;

fn add_form(name: &str) -> AddBrandForm {
    AddBrandForm {
        name: name.to_string(),
        description: "d".to_string(),
        logo: Some("l".to_string()),
        images: Vec::new(),
        status: BrandStatus::Active,
        website: None,
        social_links: None,
    }
}

#[test]
fn create_brand_grows_seeded_collection() {
    let store = common::TestStore::new();
    let repo = store.open();

    let brand = brands::create_brand(&repo, add_form("Acme")).expect("create brand");

    let all = brands::list_brands(&repo, None).expect("list brands");
    assert_eq!(all.len(), 4);

    let found = brands::get_brand(&repo, &brand.id)
        .expect("get brand")
        .expect("brand should exist");
    assert_eq!(found, brand);
    assert_eq!(found.logo, "l");
}

#[test]
fn create_brand_with_invalid_form_leaves_collection_unchanged() {
    let store = common::TestStore::new();
    let repo = store.open();

    let mut form = add_form("Acme");
    form.website = Some("not a url".to_string());

    let result = brands::create_brand(&repo, form);
    assert!(matches!(result, Err(ServiceError::Form(_))));
    assert_eq!(repo.list_brands().expect("list brands").len(), 3);
}

#[test]
fn update_brand_applies_partial_edit() {
    let store = common::TestStore::new();
    let repo = store.open();

    let form = EditBrandForm {
        status: Some(BrandStatus::Inactive),
        images: Some(vec![NewImage::from_url("https://example.com/new.jpg")]),
        ..EditBrandForm::default()
    };
    brands::update_brand(&repo, "3", form).expect("update brand");

    let brand = repo
        .get_brand_by_id("3")
        .expect("get brand")
        .expect("seeded brand");
    assert_eq!(brand.status, BrandStatus::Inactive);
    assert_eq!(brand.images.len(), 1);
    assert_eq!(brand.name, "TechVibe");
}

#[test]
fn update_brand_with_unknown_id_is_a_noop() {
    let store = common::TestStore::new();
    let repo = store.open();

    let before = repo.list_brands().expect("list brands");
    brands::update_brand(
        &repo,
        "nonexistent",
        EditBrandForm {
            name: Some("X".to_string()),
            ..EditBrandForm::default()
        },
    )
    .expect("update should not fail");
    assert_eq!(repo.list_brands().expect("list brands"), before);
}

#[test]
fn delete_brand_removes_exactly_one_record() {
    let store = common::TestStore::new();
    let repo = store.open();

    brands::delete_brand(&repo, "2").expect("delete brand");

    let all = brands::list_brands(&repo, None).expect("list brands");
    let ids: Vec<&str> = all.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn list_brands_search_matches_description() {
    let store = common::TestStore::new();
    let repo = store.open();

    let hits = brands::list_brands(&repo, Some("furniture")).expect("list brands");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "ArtisanWood");
}
