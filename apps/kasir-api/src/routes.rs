//! Router construction.
//!
//! Two routers exist and one of them is chosen at startup:
//!
//! ```text
//!                        router(service)          degraded_router()
//! /health                200                      200
//! /api/produk            GET / POST               503 (any method)
//! /api/produk/{id}       GET / PUT / DELETE       503 (any method)
//! other methods          405                      503
//! unknown path           404                      404
//! ```
//!
//! `/api/produk/` is registered separately from the `/*id` capture because
//! a wildcard does not match an empty segment; both land on the same
//! handlers, which reject the empty id with 400.

use axum::routing::{any, get, MethodRouter};
use axum::Router;

use crate::handlers::fallback::{method_not_allowed, not_found, service_unavailable};
use crate::handlers::health::health;
use crate::handlers::product::{
    create_product, delete_product, get_product, list_products, update_product,
};
use crate::service::ProductService;

pub const HEALTH_PATH: &str = "/health";
pub const COLLECTION_PATH: &str = "/api/produk";
pub const ITEM_PREFIX: &str = "/api/produk/";
pub const ITEM_PATH: &str = "/api/produk/*id";

/// Full catalog router.
pub fn router(service: ProductService) -> Router {
    let collection: MethodRouter<ProductService> = get(list_products)
        .post(create_product)
        .fallback(method_not_allowed);

    let item: MethodRouter<ProductService> = get(get_product)
        .put(update_product)
        .delete(delete_product)
        .fallback(method_not_allowed);

    Router::new()
        .route(HEALTH_PATH, get(health).fallback(method_not_allowed))
        .route(COLLECTION_PATH, collection)
        .route(ITEM_PREFIX, item.clone())
        .route(ITEM_PATH, item)
        .fallback(not_found)
        .with_state(service)
}

/// Router used when the database could not be initialised.
pub fn degraded_router() -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health).fallback(method_not_allowed))
        .route(COLLECTION_PATH, any(service_unavailable))
        .route(ITEM_PREFIX, any(service_unavailable))
        .route(ITEM_PATH, any(service_unavailable))
        .fallback(not_found)
}
