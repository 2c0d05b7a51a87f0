use crate::{
    abstract_trait::BrandQueryServiceTrait,
    catalog::Catalog,
    domain::{lookup::BrandLookup, requests::FindAllBrands},
    model::{Brand, Product},
    utils::{BrandIdParam, parse_brand_id, parse_limit},
};
use shared::{
    errors::ServiceError,
    utils::{Metrics, Operation, Status},
};
use std::{sync::Arc, time::Instant};
use tracing::info;

#[derive(Clone)]
pub struct BrandQueryService {
    catalog: Arc<Catalog>,
    metrics: Metrics,
}

impl BrandQueryService {
    pub fn new(catalog: Arc<Catalog>, metrics: Metrics) -> Self {
        Self { catalog, metrics }
    }

    /// Resolves a raw brand id without collapsing the failure cases.
    pub fn lookup(&self, raw_id: &str) -> BrandLookup<'_> {
        let id = match parse_brand_id(raw_id) {
            BrandIdParam::Id(id) => id,
            BrandIdParam::OutOfRange => return BrandLookup::LookupMiss(raw_id.to_string()),
            BrandIdParam::Malformed => return BrandLookup::ParseFailure(raw_id.to_string()),
        };

        match self.catalog.brand(id) {
            Some(brand) => BrandLookup::Found {
                brand,
                products: self.catalog.products_of(id).collect(),
            },
            None => BrandLookup::LookupMiss(raw_id.to_string()),
        }
    }

    fn record<T>(&self, operation: Operation, started: Instant, result: &Result<T, ServiceError>) {
        self.metrics.record(
            operation,
            Status::of(result),
            started.elapsed().as_secs_f64(),
        );
    }
}

impl BrandQueryServiceTrait for BrandQueryService {
    fn find_all(&self, req: &FindAllBrands) -> Result<Vec<Brand>, ServiceError> {
        info!("🔍 Finding brands | Limit: {:?}", req.limit);

        let started = Instant::now();

        let result = parse_limit(req.limit.as_deref()).map(|limit| {
            let brands = self.catalog.brands();
            let take = limit.unwrap_or(brands.len());
            brands.iter().take(take).cloned().collect::<Vec<_>>()
        });

        self.record(Operation::ListBrands, started, &result);

        if let Ok(brands) = &result {
            info!("✅ Found {} brands", brands.len());
        }

        result
    }

    fn find_products_by_brand(&self, brand_id: &str) -> Result<Vec<Product>, ServiceError> {
        info!("🏷️ Finding products by brand: '{brand_id}'");

        let started = Instant::now();
        let result = self.lookup(brand_id).into_products();

        self.record(Operation::ListBrandProducts, started, &result);

        if let Ok(products) = &result {
            info!("✅ Found {} products for brand {brand_id}", products.len());
        }

        result
    }
}
