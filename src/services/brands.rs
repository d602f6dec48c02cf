use crate::domain::brand::Brand;
use crate::forms::brands::{AddBrandForm, EditBrandForm};
use crate::repository::{BrandReader, BrandWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads the brand list, optionally filtered by a search term matched
/// case-insensitively against name and description.
pub fn list_brands<R>(repo: &R, search: Option<&str>) -> ServiceResult<Vec<Brand>>
where
    R: BrandReader + ?Sized,
{
    let brands = repo.list_brands()?;
    let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(brands);
    };

    let term = term.to_lowercase();
    Ok(brands
        .into_iter()
        .filter(|b| {
            b.name.to_lowercase().contains(&term) || b.description.to_lowercase().contains(&term)
        })
        .collect())
}

/// Loads a single brand for the detail view.
pub fn get_brand<R>(repo: &R, id: &str) -> ServiceResult<Option<Brand>>
where
    R: BrandReader + ?Sized,
{
    Ok(repo.get_brand_by_id(id)?)
}

/// Creates a new brand from the dialog form.
pub fn create_brand<R>(repo: &R, form: AddBrandForm) -> ServiceResult<Brand>
where
    R: BrandWriter + ?Sized,
{
    let payload = form
        .into_new_brand()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let brand = repo.create_brand(&payload)?;
    log::info!("created brand `{}` ({})", brand.name, brand.id);
    Ok(brand)
}

/// Applies the edit dialog's changes to an existing brand. Editing an
/// unknown id is a no-op.
pub fn update_brand<R>(repo: &R, brand_id: &str, form: EditBrandForm) -> ServiceResult<()>
where
    R: BrandWriter + ?Sized,
{
    let updates = form
        .into_update_brand()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_brand(brand_id, &updates)?;
    Ok(())
}

/// Deletes a brand. Products referencing it keep their dangling
/// `brand_id`; deleting an unknown id is a no-op.
pub fn delete_brand<R>(repo: &R, brand_id: &str) -> ServiceResult<()>
where
    R: BrandWriter + ?Sized,
{
    repo.delete_brand(brand_id)?;
    Ok(())
}
