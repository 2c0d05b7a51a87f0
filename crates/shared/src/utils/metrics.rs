use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Operation {
    ListBrands,
    ListBrandProducts,
    ListProducts,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

impl Status {
    pub fn of<T, E>(result: &Result<T, E>) -> Self {
        if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub operation: Operation,
    pub status: Status,
}

/// Per-operation query counters and latency histograms.
///
/// Clones share the underlying families, so one instance can be handed to
/// every service and registered once.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.0001, 0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
                ])
            }),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "catalog_queries",
            "Number of catalog queries evaluated",
            self.request_counter.clone(),
        );

        registry.register(
            "catalog_query_duration_seconds",
            "Catalog query evaluation time in seconds",
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, operation: Operation, status: Status, duration_secs: f64) {
        let labels = Labels { operation, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}
