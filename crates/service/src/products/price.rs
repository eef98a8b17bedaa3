//! Integer price units to exact column decimals, without a float intermediate.

use models::product::{validate_price, PRICE_SCALE};
use rust_decimal::Decimal;

use crate::errors::{Cause, ServiceError};

/// Validate and convert a payload price.
///
/// Negative units and malformed literals are `BadRequest`; a value that cannot be
/// represented at the column scale is `Internal`.
pub fn price_from_units(units: i64) -> Result<Decimal, ServiceError> {
    validate_price(units).map_err(|e| ServiceError::bad_request("Price cannot be negative", e.into()))?;

    let parsed = Decimal::from_str_exact(&units.to_string())
        .map_err(|e| ServiceError::bad_request("Invalid price format", Cause::PriceFormat(e)))?;

    let widen = 10_i128.pow(PRICE_SCALE.saturating_sub(parsed.scale()));
    let mantissa = parsed.mantissa().saturating_mul(widen);
    Decimal::try_from_i128_with_scale(mantissa, PRICE_SCALE.max(parsed.scale()))
        .map_err(|e| ServiceError::internal("Failed to convert price to decimal", Cause::PriceConstruction(e)))
}
