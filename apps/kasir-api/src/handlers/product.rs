//! # Product Handlers
//!
//! ## Route Table
//! ```text
//! ┌────────┬──────────────────────┬───────────────────────────┬──────────────┐
//! │ Method │ Path                 │ Success                   │ Failure      │
//! ├────────┼──────────────────────┼───────────────────────────┼──────────────┤
//! │ GET    │ /api/produk          │ 200 [Product]             │              │
//! │ POST   │ /api/produk          │ 201 Product               │ 400          │
//! │ GET    │ /api/produk/{id}     │ 200 Product               │ 400 / 404    │
//! │ PUT    │ /api/produk/{id}     │ 200 Product               │ 400 / 404    │
//! │ DELETE │ /api/produk/{id}     │ 200 {"message": ...}      │ 400 / 404    │
//! └────────┴──────────────────────┴───────────────────────────┴──────────────┘
//! ```
//!
//! The id segment is captured raw and parsed here, so a bad id is a 400
//! before storage is touched. Bodies are taken as bytes and decoded by
//! [`ProductInput::from_json`]; every decode failure is a 400 regardless of
//! the request's content type.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use kasir_core::{parse_product_id, Product, ProductInput};

use crate::error::ApiError;
use crate::service::ProductService;

/// Confirmation body for a successful delete.
pub const DELETE_MESSAGE: &str = "sukses delete";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Parses the captured id; `/api/produk/` has no capture and yields "".
fn product_id(raw: Option<Path<String>>) -> Result<i64, ApiError> {
    let raw = raw.map(|Path(raw)| raw).unwrap_or_default();
    Ok(parse_product_id(&raw)?)
}

/// `GET /api/produk`
pub async fn list_products(
    State(service): State<ProductService>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = service.list().await?;
    Ok(Json(products))
}

/// `POST /api/produk`
pub async fn create_product(
    State(service): State<ProductService>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let input = ProductInput::from_json(&body)?;
    let product = service.create(input).await?;

    info!(id = product.id, name = %product.name, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// `GET /api/produk/{id}`
pub async fn get_product(
    State(service): State<ProductService>,
    raw_id: Option<Path<String>>,
) -> Result<Json<Product>, ApiError> {
    let id = product_id(raw_id)?;
    let product = service.get_by_id(id).await?;
    Ok(Json(product))
}

/// `PUT /api/produk/{id}`
pub async fn update_product(
    State(service): State<ProductService>,
    raw_id: Option<Path<String>>,
    body: Bytes,
) -> Result<Json<Product>, ApiError> {
    let id = product_id(raw_id)?;
    let input = ProductInput::from_json(&body)?;
    let product = service.update(id, input).await?;

    info!(id, "Product updated");
    Ok(Json(product))
}

/// `DELETE /api/produk/{id}`
pub async fn delete_product(
    State(service): State<ProductService>,
    raw_id: Option<Path<String>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = product_id(raw_id)?;
    service.delete(id).await?;

    info!(id, "Product deleted");
    Ok(Json(MessageResponse {
        message: DELETE_MESSAGE,
    }))
}
