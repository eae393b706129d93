//! Request-shape checks applied before a payload reaches the store.

use super::error::ApiError;
use crate::model::{ProductCreate, ProductId, ProductUpdate};

/// Parses the `:id` path segment.
///
/// Anything that is not an integer is a bad request. An integer no product can carry
/// (negative, or past `u32::MAX`) is simply not found.
pub fn parse_id(raw: &str) -> Result<ProductId, ApiError> {
    let number: i64 = raw
        .parse()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))?;
    u32::try_from(number)
        .map(ProductId)
        .map_err(|_| ApiError::NotFound(number))
}

fn require_text(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_price(price: f64) -> Result<(), ApiError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ApiError::Validation(format!(
            "price must be greater than 0, got {price}"
        )));
    }
    Ok(())
}

/// `name` and `category` non-empty, `price > 0`. `stock >= 0` holds by type.
pub fn validate_create(params: &ProductCreate) -> Result<(), ApiError> {
    require_text("name", &params.name)?;
    require_text("category", &params.category)?;
    require_price(params.price)
}

/// Same rules as [`validate_create`], applied only to the fields that are present.
pub fn validate_update(update: &ProductUpdate) -> Result<(), ApiError> {
    if let Some(name) = &update.name {
        require_text("name", name)?;
    }
    if let Some(category) = &update.category {
        require_text("category", category)?;
    }
    if let Some(price) = update.price {
        require_price(price)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ProductCreate {
        ProductCreate {
            name: "测试商品".to_string(),
            description: String::new(),
            price: 99.99,
            stock: 0,
            category: "测试分类".to_string(),
        }
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("6").unwrap(), ProductId(6));
        assert!(matches!(parse_id("abc"), Err(ApiError::InvalidId(raw)) if raw == "abc"));
        assert_eq!(parse_id("+1").unwrap(), ProductId(1));
        assert!(matches!(parse_id("1.5"), Err(ApiError::InvalidId(_))));
        assert!(matches!(parse_id(""), Err(ApiError::InvalidId(_))));
    }

    #[test]
    fn test_parse_id_out_of_range_is_not_found() {
        assert!(matches!(parse_id("-1"), Err(ApiError::NotFound(-1))));
        assert!(matches!(
            parse_id("4294967296"),
            Err(ApiError::NotFound(4_294_967_296))
        ));
        assert!(matches!(
            parse_id("99999999999999999999"),
            Err(ApiError::InvalidId(_))
        ));
    }

    #[test]
    fn test_create_accepts_zero_stock_and_empty_description() {
        assert!(validate_create(&valid()).is_ok());
    }

    #[test]
    fn test_create_rejects_bad_values() {
        let mut params = valid();
        params.price = 0.0;
        assert!(validate_create(&params).is_err());

        let mut params = valid();
        params.name = "  ".to_string();
        assert!(validate_create(&params).is_err());

        let mut params = valid();
        params.category = String::new();
        assert!(validate_create(&params).is_err());
    }

    #[test]
    fn test_update_checks_only_present_fields() {
        assert!(validate_update(&ProductUpdate::default()).is_ok());

        let update = ProductUpdate {
            description: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_update(&update).is_ok());

        let update = ProductUpdate {
            price: Some(-3.0),
            ..Default::default()
        };
        assert!(validate_update(&update).is_err());
    }
}
