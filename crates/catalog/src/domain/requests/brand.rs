use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllBrands {
    /// Maximum number of brands to return. Must be a non-negative integer.
    #[param(example = "4")]
    pub limit: Option<String>,
}
