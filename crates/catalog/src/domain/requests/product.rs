use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllProducts {
    /// Case-insensitive text matched against brand name, product name and description.
    #[param(example = "oakley")]
    pub search: Option<String>,
}

impl FindAllProducts {
    /// The search term, or `None` when absent or empty.
    pub fn term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}
