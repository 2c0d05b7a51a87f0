use crate::{middleware::query::FirstValueQuery, state::AppState};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use catalog::{
    abstract_trait::DynProductQueryService, domain::requests::FindAllProducts, model::Product,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    params(FindAllProducts),
    responses(
        (status = 200, description = "Products matching the search term, in catalog order", body = Vec<Product>)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
    FirstValueQuery(params): FirstValueQuery<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.find_all(&params)?;
    Ok((StatusCode::OK, Json(products)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .layer(Extension(app_state.di_container.product_query.clone()))
}
