//! Route handlers: extract, validate, call the store, wrap the result.

use super::envelope::Envelope;
use super::error::ApiError;
use super::validation::{parse_id, validate_create, validate_update};
use super::AppState;
use crate::model::{Product, ProductCreate, ProductUpdate};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::{info, instrument};

type ApiResult<T> = Result<(StatusCode, Json<Envelope<T>>), ApiError>;

fn respond<T>(status: StatusCode, envelope: Envelope<T>) -> ApiResult<T> {
    Ok((status, Json(envelope)))
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub products: usize,
}

/// GET /health
#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> ApiResult<Health> {
    let products = state.products.list_products().await?.len();
    respond(
        StatusCode::OK,
        Envelope::success(
            "ok",
            Health {
                status: "ok",
                products,
            },
        ),
    )
}

/// GET /api/products
#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    let products = state.products.list_products().await?;
    respond(
        StatusCode::OK,
        Envelope::success("products listed", products),
    )
}

/// GET /api/products/:id
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Product> {
    let id = parse_id(&raw_id)?;
    let product = state.products.get_product(id).await?;
    respond(StatusCode::OK, Envelope::success("product found", product))
}

/// POST /api/products
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> ApiResult<Product> {
    let Json(params) = payload?;
    validate_create(&params)?;
    let product = state.products.create_product(params).await?;
    info!(id = %product.id, "Product created");
    respond(
        StatusCode::CREATED,
        Envelope::success("product created", product),
    )
}

/// PUT /api/products/:id
///
/// Partial update: fields missing from the body keep their current value.
#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<ProductUpdate>, JsonRejection>,
) -> ApiResult<Product> {
    let id = parse_id(&raw_id)?;
    let Json(update) = payload?;
    validate_update(&update)?;
    let product = state.products.update_product(id, update).await?;
    respond(StatusCode::OK, Envelope::success("product updated", product))
}

/// DELETE /api/products/:id
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<()> {
    let id = parse_id(&raw_id)?;
    state.products.delete_product(id).await?;
    respond(StatusCode::OK, Envelope::ok("product deleted"))
}
