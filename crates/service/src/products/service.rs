//! The five product operations.
//!
//! Every operation receives the storage executor and the caller's cancellation
//! token. Each storage call is raced against the token; a cancelled call is an
//! `Internal` failure like any other storage failure. No operation opens a
//! transaction; pass a transaction-backed repository when lookup-then-write must
//! be atomic.

use std::future::Future;

use models::product::{self, normalize_description};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use super::domain::{NewProduct, ProductBody};
use super::price::price_from_units;
use super::repository::ProductRepository;
use crate::errors::{Cause, RepositoryError, ServiceError};

async fn cancellable<T, F>(cancel: &CancellationToken, call: F) -> Result<T, Cause>
where
    F: Future<Output = Result<T, RepositoryError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Cause::Cancelled),
        res = call => res.map_err(Cause::from),
    }
}

async fn find_existing<R>(repo: &R, cancel: &CancellationToken, id: i32) -> Result<product::Model, ServiceError>
where
    R: ProductRepository + ?Sized,
{
    match cancellable(cancel, repo.find_by_id(id)).await {
        Ok(Some(p)) => Ok(p),
        Ok(None) => Err(ServiceError::not_found("Product not found", Cause::Missing(id))),
        Err(e) => Err(ServiceError::internal("Unable to get product", e)),
    }
}

/// List every product in storage order.
#[instrument(skip_all)]
pub async fn list_products<R>(repo: &R, cancel: &CancellationToken) -> Result<Vec<product::Model>, ServiceError>
where
    R: ProductRepository + ?Sized,
{
    let rows = cancellable(cancel, repo.list_all())
        .await
        .map_err(|e| ServiceError::internal("Unable to get products", e))?;
    debug!(count = rows.len(), "products listed");
    Ok(rows)
}

/// Get a product by id.
#[instrument(skip(repo, cancel))]
pub async fn get_product<R>(repo: &R, cancel: &CancellationToken, id: i32) -> Result<product::Model, ServiceError>
where
    R: ProductRepository + ?Sized,
{
    find_existing(repo, cancel, id).await
}

/// Validate the body and insert a new product; storage assigns the id.
///
/// # Examples
/// ```
/// use service::products::{create_product, ProductBody, repository::mock::MockProductRepository};
/// use tokio_util::sync::CancellationToken;
/// let repo = MockProductRepository::default();
/// let body = ProductBody { name: "Widget".into(), description: Some(String::new()), price: 10 };
/// let created = tokio_test::block_on(create_product(&repo, &CancellationToken::new(), &body)).unwrap();
/// assert_eq!(created.id, 1);
/// assert_eq!(created.description, None);
/// ```
#[instrument(skip(repo, cancel, body), fields(name = %body.name, price = body.price))]
pub async fn create_product<R>(repo: &R, cancel: &CancellationToken, body: &ProductBody) -> Result<product::Model, ServiceError>
where
    R: ProductRepository + ?Sized,
{
    let price = price_from_units(body.price)?;
    let new = NewProduct {
        name: body.name.clone(),
        description: normalize_description(body.description.clone()),
        price,
    };
    let created = cancellable(cancel, repo.insert(new))
        .await
        .map_err(|e| ServiceError::internal("Unable to create product", e))?;
    info!(id = created.id, "product_created");
    Ok(created)
}

/// Replace name, description and price of an existing product.
#[instrument(skip(repo, cancel, body), fields(name = %body.name, price = body.price))]
pub async fn update_product<R>(
    repo: &R,
    cancel: &CancellationToken,
    id: i32,
    body: &ProductBody,
) -> Result<product::Model, ServiceError>
where
    R: ProductRepository + ?Sized,
{
    let mut existing = find_existing(repo, cancel, id).await?;
    let price = price_from_units(body.price)?;

    existing.name = body.name.clone();
    existing.description = normalize_description(body.description.clone());
    existing.price = price;

    let updated = cancellable(cancel, repo.update(existing))
        .await
        .map_err(|e| ServiceError::internal("Unable to update product", e))?;
    info!(id = updated.id, "product_updated");
    Ok(updated)
}

/// Permanently remove a product.
#[instrument(skip(repo, cancel))]
pub async fn delete_product<R>(repo: &R, cancel: &CancellationToken, id: i32) -> Result<(), ServiceError>
where
    R: ProductRepository + ?Sized,
{
    let existing = find_existing(repo, cancel, id).await?;
    cancellable(cancel, repo.delete(existing))
        .await
        .map_err(|e| ServiceError::internal("Unable to delete product", e))?;
    info!(id, "product_deleted");
    Ok(())
}
