use async_trait::async_trait;
use models::product;
use sea_orm::{ActiveModelTrait, ActiveValue::{NotSet, Set, Unchanged}, ConnectionTrait, DbErr, EntityTrait};

use crate::errors::RepositoryError;
use crate::products::domain::NewProduct;
use crate::products::repository::ProductRepository;

/// SeaORM-backed repository over any executor: a pooled `DatabaseConnection`
/// or an open `DatabaseTransaction`.
pub struct SeaOrmProductRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> SeaOrmProductRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self { Self { conn } }
}

#[async_trait]
impl<'a, C> ProductRepository for SeaOrmProductRepository<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn list_all(&self) -> Result<Vec<product::Model>, RepositoryError> {
        Ok(product::Entity::find().all(self.conn).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<product::Model>, RepositoryError> {
        Ok(product::Entity::find_by_id(id).one(self.conn).await?)
    }

    async fn insert(&self, new: NewProduct) -> Result<product::Model, RepositoryError> {
        let am = product::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            description: Set(new.description),
            price: Set(new.price),
        };
        Ok(am.insert(self.conn).await?)
    }

    async fn update(&self, p: product::Model) -> Result<product::Model, RepositoryError> {
        let am = product::ActiveModel {
            id: Unchanged(p.id),
            name: Set(p.name),
            description: Set(p.description),
            price: Set(p.price),
        };
        Ok(am.update(self.conn).await?)
    }

    async fn delete(&self, p: product::Model) -> Result<(), RepositoryError> {
        let res = product::Entity::delete_by_id(p.id).exec(self.conn).await?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("product {}", p.id)).into());
        }
        Ok(())
    }
}


#[cfg(test)]
mod db_tests {
    use super::*;
    use crate::products::{create_product, delete_product, get_product, update_product, ProductBody};
    use crate::test_support::get_db;
    use sea_orm::TransactionTrait;
    use tokio_util::sync::CancellationToken;

    #[tokio::test]
    async fn crud_inside_a_rolled_back_transaction() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };
        let txn = db.begin().await?;
        let repo = SeaOrmProductRepository::new(&txn);
        let cancel = CancellationToken::new();

        let body = ProductBody { name: "Widget".into(), description: Some(String::new()), price: 10 };
        let created = create_product(&repo, &cancel, &body).await?;
        assert_eq!(created.description, None);
        assert_eq!(get_product(&repo, &cancel, created.id).await?, created);

        let body = ProductBody { name: "Widget2".into(), description: Some("d".into()), price: 20 };
        let updated = update_product(&repo, &cancel, created.id, &body).await?;
        assert_eq!(updated.name, "Widget2");
        assert_eq!(updated.price, rust_decimal::Decimal::from(20));

        delete_product(&repo, &cancel, created.id).await?;
        assert!(get_product(&repo, &cancel, created.id).await.is_err());

        txn.rollback().await?;
        Ok(())
    }
}
