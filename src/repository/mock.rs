use mockall::mock;

use super::{
    BrandReader, BrandWriter, ProductReader, ProductWriter, SessionReader, SessionWriter,
};
use crate::domain::{
    brand::{Brand, NewBrand, UpdateBrand},
    product::{NewProduct, Product, UpdateProduct},
    user::User,
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub SessionReader {}

    impl SessionReader for SessionReader {
        fn current_user(&self) -> RepositoryResult<Option<User>>;
    }
}

mock! {
    pub SessionWriter {}

    impl SessionWriter for SessionWriter {
        fn set_current_user(&self, user: &User) -> RepositoryResult<()>;
        fn clear_current_user(&self) -> RepositoryResult<()>;
    }
}

mock! {
    pub BrandReader {}

    impl BrandReader for BrandReader {
        fn get_brand_by_id(&self, id: &str) -> RepositoryResult<Option<Brand>>;
        fn list_brands(&self) -> RepositoryResult<Vec<Brand>>;
    }
}

mock! {
    pub BrandWriter {}

    impl BrandWriter for BrandWriter {
        fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand>;
        fn update_brand(&self, brand_id: &str, updates: &UpdateBrand) -> RepositoryResult<()>;
        fn delete_brand(&self, brand_id: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: &str) -> RepositoryResult<Option<Product>>;
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
        fn list_products_by_brand(&self, brand_id: &str) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: &str, updates: &UpdateProduct) -> RepositoryResult<()>;
        fn delete_product(&self, product_id: &str) -> RepositoryResult<()>;
    }
}
