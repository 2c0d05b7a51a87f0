use crate::{
    domain::requests::FindAllBrands,
    model::{Brand, Product},
};
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynBrandQueryService = Arc<dyn BrandQueryServiceTrait + Send + Sync>;

pub trait BrandQueryServiceTrait {
    fn find_all(&self, req: &FindAllBrands) -> Result<Vec<Brand>, ServiceError>;
    fn find_products_by_brand(&self, brand_id: &str) -> Result<Vec<Product>, ServiceError>;
}
