use axum::extract::State;

use crate::api::JsonBody;
use crate::middleware::ApiResponse;
use crate::models::{Product, ProductAttributes};
use crate::state::AppState;

/// POST /products/ - create one product, answer with it and its new id
pub async fn create(
    State(state): State<AppState>,
    JsonBody(attributes): JsonBody<ProductAttributes>,
) -> ApiResponse<Product> {
    let product = state.store.add(attributes);
    tracing::info!("Created product {}", product.id);
    ApiResponse::created("Product created successfully", product)
}

/// POST /products/range - create a batch in order
///
/// Answers with the whole catalog, not only the new products, to stay
/// compatible with existing clients.
pub async fn create_range(
    State(state): State<AppState>,
    JsonBody(batch): JsonBody<Vec<ProductAttributes>>,
) -> ApiResponse<Vec<Product>> {
    let created = state.store.add_many(batch);
    tracing::info!("Created {} products", created.len());
    ApiResponse::created("Products created successfully", state.store.all())
}
