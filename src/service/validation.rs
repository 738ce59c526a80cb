//! Input validation for new menu entries.

use crate::error::AppError;
use serde_json::{Map, Value};

pub const MIN_PRICE: i64 = 1;
pub const MAX_PRICE: i64 = 30;

/// Message returned when the price falls outside `MIN_PRICE..=MAX_PRICE`.
pub const PRICE_ERROR: &str = "validation errors";

/// Keys accepted by `POST /restaurant_pizzas`, in the order they are checked.
const FIELDS: [&str; 3] = ["price", "pizza_id", "restaurant_id"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

impl NewRestaurantPizza {
    /// Build from a request body, failing on the first problem found:
    /// missing key, unknown key, non-integer value, then price range.
    pub fn from_json(body: Value) -> Result<Self, AppError> {
        let map = match body {
            Value::Object(m) => m,
            _ => return Err(AppError::BadRequest("body must be a JSON object".into())),
        };
        if let Some(missing) = FIELDS.iter().find(|f| !map.contains_key(**f)) {
            return Err(AppError::MissingKey((*missing).to_string()));
        }
        if let Some(unknown) = map.keys().find(|k| !FIELDS.contains(&k.as_str())) {
            return Err(AppError::BadRequest(format!("Unknown key: '{}'", unknown)));
        }
        let input = Self {
            price: price_field(&map)?,
            pizza_id: integer_field(&map, "pizza_id")?,
            restaurant_id: integer_field(&map, "restaurant_id")?,
        };
        validate_price(input.price)?;
        Ok(input)
    }
}

pub fn validate_price(price: i64) -> Result<(), AppError> {
    if !(MIN_PRICE..=MAX_PRICE).contains(&price) {
        return Err(AppError::validation(PRICE_ERROR));
    }
    Ok(())
}

/// Integral numbers outside `i64` (including integral floats such as `1e20`)
/// are still integers, so they fail the range check rather than the type check.
fn price_field(map: &Map<String, Value>) -> Result<i64, AppError> {
    let Some(Value::Number(n)) = map.get("price") else {
        return integer_field(map, "price");
    };
    if let Some(price) = n.as_i64() {
        return Ok(price);
    }
    if n.is_u64() {
        return Err(AppError::validation(PRICE_ERROR));
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => {
            if f >= i64::MIN as f64 && f < i64::MAX as f64 {
                Ok(f as i64)
            } else {
                Err(AppError::validation(PRICE_ERROR))
            }
        }
        _ => integer_field(map, "price"),
    }
}

fn integer_field(map: &Map<String, Value>, key: &str) -> Result<i64, AppError> {
    map.get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| AppError::BadRequest(format!("{} must be an integer", key)))
}
