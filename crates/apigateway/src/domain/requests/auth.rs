use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct LoginRequest {
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "hunter22")]
    pub password: String,
}
