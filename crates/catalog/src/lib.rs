pub mod abstract_trait;
pub mod catalog;
pub mod domain;
pub mod model;
pub mod service;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;
