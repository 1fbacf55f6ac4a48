//! Request payload primitives.
//!
//! Browsers send form values as strings, so payload fields accept either a
//! JSON scalar or its string spelling. Everything is normalized here before
//! reaching a service.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use thiserror::Error;

use crate::domain::ErrorKind;

/// Request conversion errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0} must be a number")]
    InvalidNumber(&'static str),

    #[error("{0} must be true or false")]
    InvalidBool(&'static str),

    #[error("{0} is not a valid status")]
    InvalidStatus(&'static str),
}

impl RequestError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

/// A boolean sent as `true` or `"true"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseBool {
    Bool(bool),
    Text(String),
}

impl LooseBool {
    pub(crate) fn parse(&self, field: &'static str) -> Result<bool, RequestError> {
        match self {
            Self::Bool(value) => Ok(*value),
            Self::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(RequestError::InvalidBool(field)),
            },
        }
    }
}

/// A number sent as `4`, `4.5` or `"4.5"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(Number),
    Text(String),
}

impl LooseNumber {
    fn text(&self) -> String {
        match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.trim().to_string(),
        }
    }

    /// A blank string counts as absent.
    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }

    pub(crate) fn parse_u32(&self, field: &'static str) -> Result<u32, RequestError> {
        u32::from_str(&self.text()).map_err(|_| RequestError::InvalidNumber(field))
    }

    pub(crate) fn parse_decimal(&self, field: &'static str) -> Result<Decimal, RequestError> {
        let text = self.text();

        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|_| RequestError::InvalidNumber(field))
    }
}

/// Returns the trimmed value, or `MissingField` when absent or blank.
pub(crate) fn required(value: Option<String>, field: &'static str) -> Result<String, RequestError> {
    optional(value).ok_or(RequestError::MissingField(field))
}

/// Trims the value; blank strings become `None`.
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Trims a patch value, keeping blanks so the service can reject them.
pub(crate) fn patch(value: Option<String>) -> Option<String> {
    value.map(|text| text.trim().to_string())
}

pub(crate) fn optional_u32(
    value: Option<&LooseNumber>,
    field: &'static str,
) -> Result<Option<u32>, RequestError> {
    value
        .filter(|number| !number.is_blank())
        .map(|number| number.parse_u32(field))
        .transpose()
}

pub(crate) fn optional_decimal(
    value: Option<&LooseNumber>,
    field: &'static str,
) -> Result<Option<Decimal>, RequestError> {
    value
        .filter(|number| !number.is_blank())
        .map(|number| number.parse_decimal(field))
        .transpose()
}

pub(crate) fn optional_bool(
    value: Option<&LooseBool>,
    field: &'static str,
) -> Result<Option<bool>, RequestError> {
    value.map(|flag| flag.parse(field)).transpose()
}
