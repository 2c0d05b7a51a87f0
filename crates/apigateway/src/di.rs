use catalog::{
    abstract_trait::{DynBrandQueryService, DynProductQueryService},
    catalog::Catalog,
    service::{BrandQueryService, ProductQueryService},
};
use shared::utils::Metrics;
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub brand_query: DynBrandQueryService,
    pub product_query: DynProductQueryService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("brand_query", &"DynBrandQueryService")
            .field("product_query", &"DynProductQueryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(catalog: Arc<Catalog>, metrics: Metrics) -> Self {
        let brand_query: DynBrandQueryService =
            Arc::new(BrandQueryService::new(catalog.clone(), metrics.clone()));

        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(catalog, metrics));

        Self {
            brand_query,
            product_query,
        }
    }
}
