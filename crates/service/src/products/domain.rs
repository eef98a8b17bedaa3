use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request payload for create and update.
///
/// `description` may be missing, `null` or `""`; all three mean "no description".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductBody {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: i64,
}

/// Validated values ready to be inserted; storage assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_is_optional_on_the_wire() {
        let body: ProductBody = serde_json::from_str(r#"{"name":"Widget","price":10}"#).unwrap();
        assert_eq!(body.description, None);
        let body: ProductBody = serde_json::from_str(r#"{"name":"Widget","description":null,"price":10}"#).unwrap();
        assert_eq!(body.description, None);
    }

    #[test]
    fn fractional_price_is_rejected_by_the_payload() {
        let res = serde_json::from_str::<ProductBody>(r#"{"name":"Widget","price":10.5}"#);
        assert!(res.is_err());
    }
}
