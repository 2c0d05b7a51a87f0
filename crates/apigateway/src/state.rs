use crate::di::DependenciesInject;
use catalog::catalog::Catalog;
use prometheus_client::registry::Registry;
use shared::utils::Metrics;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("registry", &self.registry)
            .finish()
    }
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let mut registry = Registry::default();
        let metrics = Metrics::new();

        metrics.register(&mut registry);

        Self {
            di_container: DependenciesInject::new(catalog, metrics),
            registry: Arc::new(registry),
        }
    }
}
