use crate::domain::requests::auth::LoginRequest;
use axum::{Json, http::StatusCode, response::IntoResponse, routing::post};
use shared::errors::{ErrorResponse, HttpError};
use tracing::warn;
use utoipa_axum::router::OpenApiRouter;

pub async fn health_checker_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 501, description = "Login is not implemented", body = ErrorResponse)
    )
)]
pub async fn login_user_handler() -> Result<StatusCode, HttpError> {
    warn!("🔒 Login attempted, but authentication is not implemented");
    Err(HttpError::NotImplemented(
        "Login is not implemented".to_string(),
    ))
}

pub fn auth_routes() -> OpenApiRouter {
    OpenApiRouter::new().route("/api/login", post(login_user_handler))
}
