use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::api::parse_path_param;
use crate::error::ApiError;
use crate::models::{Product, ProductId};
use crate::state::AppState;

/// GET /products/ - every product in creation order
pub async fn list(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store.all())
}

/// GET /products/:id - single product, 404 when no product has the id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id: ProductId = parse_path_param("id", &id)?;
    let product = state.store.get(id)?;
    Ok(Json(product))
}

/// GET /products/price/:price - products priced strictly above `price`
pub async fn price_above(
    State(state): State<AppState>,
    Path(price): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let threshold: f64 = parse_path_param("price", &price)?;
    Ok(Json(state.store.priced_above(threshold)))
}
