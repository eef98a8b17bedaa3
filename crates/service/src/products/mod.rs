//! Product catalogue: domain types, storage port, and the five CRUD operations.

pub mod domain;
pub mod price;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{NewProduct, ProductBody};
pub use repo::seaorm::SeaOrmProductRepository;
pub use repository::ProductRepository;
pub use service::{create_product, delete_product, get_product, list_products, update_product};
