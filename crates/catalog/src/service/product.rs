use crate::{
    abstract_trait::ProductQueryServiceTrait, catalog::Catalog,
    domain::requests::FindAllProducts, model::Product,
};
use shared::{
    errors::ServiceError,
    utils::{Metrics, Operation, Status},
};
use std::{sync::Arc, time::Instant};
use tracing::info;

#[derive(Clone)]
pub struct ProductQueryService {
    catalog: Arc<Catalog>,
    metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(catalog: Arc<Catalog>, metrics: Metrics) -> Self {
        Self { catalog, metrics }
    }

    /// `needle` must already be lowercase.
    fn matches(&self, product: &Product, needle: &str) -> bool {
        let brand_matches = self
            .catalog
            .brand(product.brand_id)
            .is_some_and(|brand| brand.name.to_lowercase().contains(needle));

        brand_matches
            || product.name.to_lowercase().contains(needle)
            || product.description.to_lowercase().contains(needle)
    }
}

impl ProductQueryServiceTrait for ProductQueryService {
    fn find_all(&self, req: &FindAllProducts) -> Result<Vec<Product>, ServiceError> {
        info!("🔍 Finding products | Search: {:?}", req.search);

        let started = Instant::now();

        let products: Vec<Product> = match req.term() {
            None => self.catalog.products().to_vec(),
            Some(term) => {
                let needle = term.to_lowercase();
                self.catalog
                    .products()
                    .iter()
                    .filter(|p| self.matches(p, &needle))
                    .cloned()
                    .collect()
            }
        };

        self.metrics.record(
            Operation::ListProducts,
            Status::Success,
            started.elapsed().as_secs_f64(),
        );

        info!("✅ Found {} products", products.len());

        Ok(products)
    }
}
