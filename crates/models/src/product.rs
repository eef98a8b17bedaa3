use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors;

/// Scale of the `price` column; stored prices always carry this many fractional digits.
pub const PRICE_SCALE: u32 = 4;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((24, 4)))")]
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_price(units: i64) -> Result<(), errors::ModelError> {
    if units < 0 {
        return Err(errors::ModelError::Validation("invalid price".into()));
    }
    Ok(())
}

/// Empty text collapses to `None` so a stored description is never `Some("")`.
pub fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_price_is_rejected() {
        assert!(validate_price(-1).is_err());
        assert!(validate_price(i64::MIN).is_err());
    }

    #[test]
    fn zero_and_positive_prices_pass() {
        assert!(validate_price(0).is_ok());
        assert!(validate_price(i64::MAX).is_ok());
    }

    #[test]
    fn empty_description_becomes_absent() {
        assert_eq!(normalize_description(Some(String::new())), None);
        assert_eq!(normalize_description(None), None);
        assert_eq!(normalize_description(Some("d".into())), Some("d".to_string()));
    }

    #[test]
    fn whitespace_description_is_kept_verbatim() {
        assert_eq!(normalize_description(Some(" ".into())), Some(" ".to_string()));
    }
}
