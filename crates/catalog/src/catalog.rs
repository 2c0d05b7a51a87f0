//! The in-memory brand and product collections.
//!
//! A [`Catalog`] is built once at startup and shared behind an `Arc`; nothing
//! mutates it afterwards. Replacing the data means building a new `Catalog`
//! and swapping the `Arc` as a whole.

use crate::model::{Brand, Product};
use serde::Deserialize;
use shared::errors::CatalogError;
use std::{collections::HashMap, path::Path};
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    brands: Vec<Brand>,
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    brands: Vec<Brand>,
    products: Vec<Product>,
    brand_index: HashMap<i32, usize>,
}

impl Catalog {
    /// Builds a catalog, keeping both collections in the order given.
    ///
    /// Brand ids must be unique. Products pointing at an unknown brand are
    /// kept; they just never match a brand-scoped query.
    pub fn new(brands: Vec<Brand>, products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut brand_index = HashMap::with_capacity(brands.len());

        for (position, brand) in brands.iter().enumerate() {
            if brand_index.insert(brand.id, position).is_some() {
                return Err(CatalogError::DuplicateBrand(brand.id));
            }
        }

        for product in products
            .iter()
            .filter(|p| !brand_index.contains_key(&p.brand_id))
        {
            warn!(
                product_id = product.id,
                brand_id = product.brand_id,
                "⚠️ Product references an unknown brand"
            );
        }

        Ok(Self {
            brands,
            products,
            brand_index,
        })
    }

    pub fn from_json_str(document: &str) -> Result<Self, CatalogError> {
        let CatalogDocument { brands, products } = serde_json::from_str(document)?;
        Self::new(brands, products)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        let document = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&document)?;

        info!(
            "📦 Catalog loaded from {} | Brands: {}, Products: {}",
            path.display(),
            catalog.brands.len(),
            catalog.products.len()
        );

        Ok(catalog)
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn brand(&self, id: i32) -> Option<&Brand> {
        self.brand_index.get(&id).map(|&position| &self.brands[position])
    }

    pub fn products_of(&self, brand_id: i32) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.brand_id == brand_id)
    }
}
