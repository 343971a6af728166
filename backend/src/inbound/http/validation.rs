//! Shared validation helpers for inbound HTTP adapters.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::domain::{CostCategory, Error, TripStatus};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidUuid,
    InvalidDate,
    InvalidAmount,
    InvalidStatus,
    InvalidCategory,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidAmount => "invalid_amount",
            ErrorCode::InvalidStatus => "invalid_status",
            ErrorCode::InvalidCategory => "invalid_category",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }

    fn with_index(self, code: ErrorCode, index: usize, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "index": index,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a valid UUID"))
        .with_value(ErrorCode::InvalidUuid, value)
}

pub(crate) fn parse_uuid(value: String, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(&value).map_err(|_| invalid_uuid_error(field, &value))
}

/// Parse a wizard date in `YYYY-MM-DD` form.
pub(crate) fn parse_date(value: String, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
        let field = field.as_str();
        ValidationError::new(field, format!("{field} must be a YYYY-MM-DD date"))
            .with_value(ErrorCode::InvalidDate, value)
    })
}

/// Convert a JSON number into an exact decimal amount.
///
/// Rejects NaN and infinities; the builder rejects negative amounts later
/// with field-level context of its own.
pub(crate) fn parse_amount(value: f64, field: FieldName) -> Result<Decimal, Error> {
    Decimal::try_from(value).map_err(|_| {
        let field = field.as_str();
        ValidationError::new(field, format!("{field} must be a finite number"))
            .with_value(ErrorCode::InvalidAmount, value.to_string())
    })
}

/// Parse an indexed amount from a list payload, preserving the position in
/// the error details.
pub(crate) fn parse_amount_at(value: f64, field: FieldName, index: usize) -> Result<Decimal, Error> {
    Decimal::try_from(value).map_err(|_| {
        let field = field.as_str();
        ValidationError::new(field, format!("{field} must contain finite numbers")).with_index(
            ErrorCode::InvalidAmount,
            index,
            value.to_string(),
        )
    })
}

pub(crate) fn parse_status(value: String, field: FieldName) -> Result<TripStatus, Error> {
    value.parse().map_err(|_| {
        let field = field.as_str();
        ValidationError::new(
            field,
            format!("{field} must be draft, published, completed, or cancelled"),
        )
        .with_value(ErrorCode::InvalidStatus, value)
    })
}

pub(crate) fn parse_category(
    value: String,
    field: FieldName,
    index: usize,
) -> Result<CostCategory, Error> {
    value.parse().map_err(|_| {
        let field = field.as_str();
        ValidationError::new(
            field,
            format!("{field} must be accommodation, transportation, or activities"),
        )
        .with_index(ErrorCode::InvalidCategory, index, value)
    })
}
