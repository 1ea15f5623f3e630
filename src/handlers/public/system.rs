use axum::response::Json;
use serde_json::{json, Value};

/// GET /ping - liveness probe
pub async fn ping() -> &'static str {
    "pong!!"
}

/// GET / - service name, version and route map
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Product Catalog API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "ping": "GET /ping",
            "list": "GET /products/",
            "show": "GET /products/:id",
            "price": "GET /products/price/:price",
            "create": "POST /products/ (Authorization required)",
            "create_range": "POST /products/range (Authorization required)",
        }
    }))
}
