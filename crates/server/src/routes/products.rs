use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use models::product;
use sea_orm::TransactionTrait;
use service::errors::{Cause, RepositoryError, ServiceError};
use service::products::{self, ProductBody, SeaOrmProductRepository};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

fn txn_failed(message: &'static str, e: sea_orm::DbErr) -> ServiceError {
    ServiceError::internal(message, Cause::Repository(RepositoryError::Db(e)))
}

#[utoipa::path(
    get, path = "/products", tag = "products",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ProductDoc]),
        (status = 500, description = "Unable to get products")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<product::Model>>, JsonApiError> {
    let repo = SeaOrmProductRepository::new(state.db.as_ref());
    let rows = products::list_products(&repo, &state.request_token()).await?;
    info!(count = rows.len(), "list products");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProductDoc),
        (status = 400, description = "Invalid product id"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Unable to get product")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<product::Model>, JsonApiError> {
    let Path(id) = id?;
    let repo = SeaOrmProductRepository::new(state.db.as_ref());
    let found = products::get_product(&repo, &state.request_token(), id).await?;
    Ok(Json(found))
}

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = crate::openapi::ProductBodyDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductDoc),
        (status = 400, description = "Invalid price or malformed payload"),
        (status = 500, description = "Unable to create product")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    input: Result<Json<ProductBody>, JsonRejection>,
) -> Result<(StatusCode, Json<product::Model>), JsonApiError> {
    let Json(input) = input?;
    let repo = SeaOrmProductRepository::new(state.db.as_ref());
    let created = products::create_product(&repo, &state.request_token(), &input).await?;
    info!(id = created.id, name = %created.name, "created product");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Lookup and write share one transaction; an error drops it, which rolls back.
#[utoipa::path(
    put, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = crate::openapi::ProductBodyDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProductDoc),
        (status = 400, description = "Invalid price or malformed payload"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Unable to update product")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    input: Result<Json<ProductBody>, JsonRejection>,
) -> Result<Json<product::Model>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = input?;
    const FAILED: &str = "Unable to update product";
    let txn = state.db.begin().await.map_err(|e| txn_failed(FAILED, e))?;
    let updated = {
        let repo = SeaOrmProductRepository::new(&txn);
        products::update_product(&repo, &state.request_token(), id, &input).await?
    };
    txn.commit().await.map_err(|e| txn_failed(FAILED, e))?;
    info!(id, "updated product");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid product id"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Unable to delete product")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    const FAILED: &str = "Unable to delete product";
    let txn = state.db.begin().await.map_err(|e| txn_failed(FAILED, e))?;
    {
        let repo = SeaOrmProductRepository::new(&txn);
        products::delete_product(&repo, &state.request_token(), id).await?;
    }
    txn.commit().await.map_err(|e| txn_failed(FAILED, e))?;
    info!(id, "deleted product");
    Ok(StatusCode::NO_CONTENT)
}
