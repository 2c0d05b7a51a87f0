use crate::model::{Brand, Product};
use shared::errors::{NotFoundReason, ServiceError};

/// Outcome of resolving a raw brand id against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandLookup<'a> {
    ParseFailure(String),
    LookupMiss(String),
    Found {
        brand: &'a Brand,
        products: Vec<&'a Product>,
    },
}

impl BrandLookup<'_> {
    /// Collapses the lookup into the public contract: a non-empty product
    /// list or `NotFound`.
    pub fn into_products(self) -> Result<Vec<Product>, ServiceError> {
        match self {
            BrandLookup::ParseFailure(raw) => {
                Err(ServiceError::NotFound(NotFoundReason::MalformedBrandId(raw)))
            }
            BrandLookup::LookupMiss(id) => {
                Err(ServiceError::NotFound(NotFoundReason::UnknownBrand(id)))
            }
            BrandLookup::Found { brand, products } if products.is_empty() => {
                Err(ServiceError::NotFound(NotFoundReason::NoProducts(brand.id)))
            }
            BrandLookup::Found { products, .. } => {
                Ok(products.into_iter().cloned().collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_brand_is_not_found() {
        let brand = Brand {
            id: 3,
            name: "Empty".into(),
        };

        let lookup = BrandLookup::Found {
            brand: &brand,
            products: vec![],
        };

        assert_eq!(
            lookup.into_products(),
            Err(ServiceError::NotFound(NotFoundReason::NoProducts(3)))
        );
    }

    #[test]
    fn parse_failure_keeps_the_raw_input() {
        assert_eq!(
            BrandLookup::ParseFailure("bob".into()).into_products(),
            Err(ServiceError::NotFound(NotFoundReason::MalformedBrandId(
                "bob".into()
            )))
        );
    }
}
