use async_trait::async_trait;
use models::product;

use super::domain::NewProduct;
use crate::errors::RepositoryError;

/// Storage port for products.
///
/// One call is one storage round trip. Absence on lookup is `Ok(None)`, never an error.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<product::Model>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<product::Model>, RepositoryError>;
    async fn insert(&self, new: NewProduct) -> Result<product::Model, RepositoryError>;
    /// Persist every mutable column of `product`.
    async fn update(&self, product: product::Model) -> Result<product::Model, RepositoryError>;
    async fn delete(&self, product: product::Model) -> Result<(), RepositoryError>;
}

/// In-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i32, product::Model>,
        last_id: i32,
        writes: usize,
    }

    #[derive(Default)]
    pub struct MockProductRepository {
        table: Mutex<Table>,
        unavailable: AtomicBool,
    }

    impl MockProductRepository {
        /// Make every subsequent call fail as if the database were down.
        pub fn set_unavailable(&self, down: bool) { self.unavailable.store(down, Ordering::SeqCst); }

        /// Number of successful insert/update/delete calls so far.
        pub fn writes(&self) -> usize { self.table.lock().unwrap().writes }

        pub fn rows(&self) -> Vec<product::Model> { self.table.lock().unwrap().rows.values().cloned().collect() }

        fn check(&self) -> Result<(), RepositoryError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(RepositoryError::Unavailable("mock storage offline".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn list_all(&self) -> Result<Vec<product::Model>, RepositoryError> {
            self.check()?;
            Ok(self.rows())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<product::Model>, RepositoryError> {
            self.check()?;
            Ok(self.table.lock().unwrap().rows.get(&id).cloned())
        }

        async fn insert(&self, new: NewProduct) -> Result<product::Model, RepositoryError> {
            self.check()?;
            let mut t = self.table.lock().unwrap();
            t.last_id += 1;
            let row = product::Model { id: t.last_id, name: new.name, description: new.description, price: new.price };
            t.rows.insert(row.id, row.clone());
            t.writes += 1;
            Ok(row)
        }

        async fn update(&self, product: product::Model) -> Result<product::Model, RepositoryError> {
            self.check()?;
            let mut t = self.table.lock().unwrap();
            let Some(slot) = t.rows.get_mut(&product.id) else {
                return Err(RepositoryError::Db(sea_orm::DbErr::RecordNotUpdated));
            };
            *slot = product.clone();
            t.writes += 1;
            Ok(product)
        }

        async fn delete(&self, product: product::Model) -> Result<(), RepositoryError> {
            self.check()?;
            let mut t = self.table.lock().unwrap();
            if t.rows.remove(&product.id).is_none() {
                return Err(RepositoryError::Db(sea_orm::DbErr::RecordNotFound(format!("product {}", product.id))));
            }
            t.writes += 1;
            Ok(())
        }
    }
}
