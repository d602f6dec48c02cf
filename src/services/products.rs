use crate::domain::product::Product;
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads the product list, optionally filtered by a search term matched
/// case-insensitively against name, description and category.
pub fn list_products<R>(repo: &R, search: Option<&str>) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    let products = repo.list_products()?;
    let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(products);
    };

    let term = term.to_lowercase();
    Ok(products
        .into_iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&term)
                || p.description.to_lowercase().contains(&term)
                || p.category.to_lowercase().contains(&term)
        })
        .collect())
}

/// Loads a single product for the detail view.
pub fn get_product<R>(repo: &R, id: &str) -> ServiceResult<Option<Product>>
where
    R: ProductReader + ?Sized,
{
    Ok(repo.get_product_by_id(id)?)
}

/// Loads the products belonging to a brand, in collection order. An
/// unknown brand id yields an empty list.
pub fn list_products_by_brand<R>(repo: &R, brand_id: &str) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    Ok(repo.list_products_by_brand(brand_id)?)
}

/// Creates a new product from the dialog form.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let payload = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let product = repo.create_product(&payload)?;
    log::info!("created product `{}` ({})", product.name, product.id);
    Ok(product)
}

/// Applies the edit dialog's changes to an existing product. Editing an
/// unknown id is a no-op.
pub fn update_product<R>(repo: &R, product_id: &str, form: EditProductForm) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    let updates = form
        .into_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_product(product_id, &updates)?;
    Ok(())
}

/// Deletes a product; deleting an unknown id is a no-op.
pub fn delete_product<R>(repo: &R, product_id: &str) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ProductStatus;
    use crate::repository::mock::{MockProductReader, MockProductWriter};
    use crate::repository::seed;

    #[test]
    fn list_products_filters_by_category_too() {
        let mut repo = MockProductReader::new();
        repo.expect_list_products()
            .returning(|| Ok(seed::demo_products()));

        let products = list_products(&repo, Some("furniture")).expect("list products");
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.category == "Furniture"));
    }

    #[test]
    fn create_product_rejects_invalid_form_before_writing() {
        let mut repo = MockProductWriter::new();
        repo.expect_create_product().never();

        let form = AddProductForm {
            name: "Serum".to_string(),
            description: String::new(),
            category: "Skincare".to_string(),
            price: -10.0,
            image: None,
            images: Vec::new(),
            brand_id: "1".to_string(),
            stock: 0,
            status: ProductStatus::Published,
            scheduled_date: None,
            discount: None,
        };

        let result = create_product(&repo, form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
