use crate::{domain::requests::FindAllProducts, model::Product};
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

pub trait ProductQueryServiceTrait {
    fn find_all(&self, req: &FindAllProducts) -> Result<Vec<Product>, ServiceError>;
}
