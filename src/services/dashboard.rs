use crate::domain::brand::BrandStatus;
use crate::repository::{BrandReader, ProductReader};
use crate::services::ServiceResult;

/// Aggregates shown on the dashboard page.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    /// Number of brands.
    pub total_brands: usize,
    /// Number of brands currently active.
    pub active_brands: usize,
    /// Number of products.
    pub total_products: usize,
    /// Sum of stock across all products.
    pub total_stock: u64,
    /// Sum of product prices.
    pub total_revenue: f64,
}

/// Computes the dashboard aggregates from the current store state.
pub fn load_dashboard<R>(repo: &R) -> ServiceResult<DashboardStats>
where
    R: BrandReader + ProductReader + ?Sized,
{
    let brands = repo.list_brands()?;
    let products = repo.list_products()?;

    Ok(DashboardStats {
        total_brands: brands.len(),
        active_brands: brands
            .iter()
            .filter(|b| b.status == BrandStatus::Active)
            .count(),
        total_products: products.len(),
        total_stock: products.iter().map(|p| u64::from(p.stock)).sum(),
        total_revenue: products.iter().map(|p| p.price).sum(),
    })
}
