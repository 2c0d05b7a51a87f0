use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Brand {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Oakley")]
    pub name: String,
}
