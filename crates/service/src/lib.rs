//! Service layer for the product catalogue.
//! - Validates request payloads and converts prices to exact decimals.
//! - Talks to storage only through the `ProductRepository` port.
//! - Classifies every failure into a single `ServiceError`.

pub mod errors;
pub mod products;
#[cfg(test)]
pub mod test_support;
