use crate::{middleware::query::FirstValueQuery, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use catalog::{
    abstract_trait::DynBrandQueryService,
    domain::requests::FindAllBrands,
    model::{Brand, Product},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use tracing::warn;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/brands",
    tag = "Brand",
    params(FindAllBrands),
    responses(
        (status = 200, description = "Brands in catalog order, capped by limit", body = Vec<Brand>),
        (status = 400, description = "Malformed limit", body = ErrorResponse)
    )
)]
pub async fn get_brands(
    Extension(service): Extension<DynBrandQueryService>,
    FirstValueQuery(params): FirstValueQuery<FindAllBrands>,
) -> Result<impl IntoResponse, HttpError> {
    let brands = service
        .find_all(&params)
        .inspect_err(|e| warn!("❌ Rejected brand listing: {e}"))?;

    Ok((StatusCode::OK, Json(brands)))
}

#[utoipa::path(
    get,
    path = "/api/brands/{brand_id}/products",
    tag = "Brand",
    params(("brand_id" = String, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "Products owned by the brand", body = Vec<Product>),
        (status = 404, description = "Malformed, unknown or empty brand", body = ErrorResponse)
    )
)]
pub async fn get_brand_products(
    Extension(service): Extension<DynBrandQueryService>,
    Path(brand_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service
        .find_products_by_brand(&brand_id)
        .inspect_err(|e| warn!("❌ Brand products lookup failed: {e}"))?;

    Ok((StatusCode::OK, Json(products)))
}

pub fn brand_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/brands", get(get_brands))
        .route("/api/brands/{brand_id}/products", get(get_brand_products))
        .layer(Extension(app_state.di_container.brand_query.clone()))
}
