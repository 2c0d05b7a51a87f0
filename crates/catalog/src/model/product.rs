use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub brand_id: i32,
    #[schema(example = "Superglasses")]
    pub name: String,
    #[schema(example = "The best glasses in the world")]
    pub description: String,
}
