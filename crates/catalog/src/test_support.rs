use crate::catalog::Catalog;
use std::sync::Arc;

pub const FIXTURE: &str = include_str!("../../../data/catalog.json");

pub fn fixture_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::from_json_str(FIXTURE).expect("fixture catalog must parse"))
}
