//! Request validation for item payloads.

use crate::error::AppError;
use crate::model::{CreateItemRequest, ItemChanges, NewItem, UpdateItemRequest};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and price are required";

pub struct RequestValidator;

impl RequestValidator {
    /// Name and price must be present; name must not be blank.
    pub fn validate_create(body: CreateItemRequest) -> Result<NewItem, AppError> {
        let (name, price) = match (body.name, body.price) {
            (Some(name), Some(price)) if !name.trim().is_empty() => (name, price),
            _ => return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.into())),
        };
        validate_price(price)?;
        Ok(NewItem {
            name,
            description: normalize_description(body.description),
            price,
        })
    }

    /// Only fields present in the body are checked.
    pub fn validate_update(body: UpdateItemRequest) -> Result<ItemChanges, AppError> {
        if let Some(name) = &body.name {
            if name.trim().is_empty() {
                return Err(AppError::Validation("name must not be empty".into()));
            }
        }
        if let Some(price) = body.price {
            validate_price(price)?;
        }
        Ok(ItemChanges {
            name: body.name,
            description: body.description.map(normalize_description),
            price: body.price,
        })
    }
}

fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() {
        return Err(AppError::Validation("price must be a finite number".into()));
    }
    Ok(())
}

/// Empty descriptions are stored as null.
fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: Option<&str>, description: Option<&str>, price: Option<f64>) -> CreateItemRequest {
        CreateItemRequest {
            name: name.map(String::from),
            description: description.map(String::from),
            price,
        }
    }

    #[test]
    fn accepts_name_and_price() {
        let item = RequestValidator::validate_create(create(Some("Pen"), None, Some(1.5))).unwrap();
        assert_eq!(item.name, "Pen");
        assert_eq!(item.price, 1.5);
        assert!(item.description.is_none());
    }

    #[test]
    fn rejects_missing_name_or_price() {
        for body in [
            create(None, None, Some(1.0)),
            create(Some("Pen"), None, None),
            create(Some("   "), None, Some(1.0)),
        ] {
            let err = RequestValidator::validate_create(body).unwrap_err();
            assert!(matches!(err, AppError::Validation(ref m) if m == REQUIRED_FIELDS_MESSAGE));
        }
    }

    #[test]
    fn zero_price_is_valid() {
        assert!(RequestValidator::validate_create(create(Some("Free"), None, Some(0.0))).is_ok());
    }

    #[test]
    fn empty_description_becomes_null() {
        let item = RequestValidator::validate_create(create(Some("Pen"), Some(""), Some(1.0))).unwrap();
        assert!(item.description.is_none());

        let changes = RequestValidator::validate_update(UpdateItemRequest {
            description: Some(Some(String::new())),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(changes.description, Some(None));
    }

    #[test]
    fn partial_update_checks_only_supplied_fields() {
        let changes = RequestValidator::validate_update(UpdateItemRequest {
            price: Some(2.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(changes.price, Some(2.0));
        assert!(changes.name.is_none());
        assert!(changes.description.is_none());

        let err = RequestValidator::validate_update(UpdateItemRequest {
            name: Some(String::new()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
