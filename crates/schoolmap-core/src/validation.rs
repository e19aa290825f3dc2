//! Input validation gates for the two service operations.
//!
//! Both gates are pure predicates over raw request material: they either
//! produce a normalized value or an [`Error::Validation`] carrying the exact
//! message the HTTP layer forwards to the caller. Coordinates may arrive as
//! JSON numbers or numeric strings; either form is accepted as long as it
//! parses to a finite number. A present, parseable **zero** is always valid —
//! presence is checked explicitly, never through truthiness.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::school::NewSchool;

/// Rejection message when any add-school field is absent or null.
pub const MSG_MISSING_FIELDS: &str = "Missing Fields";

/// Rejection message when an add-school field has the wrong type or is empty.
pub const MSG_INVALID_FIELDS: &str = "Invalid field types or empty values";

/// Rejection message for bad list-schools query parameters.
pub const MSG_INVALID_COORDINATES: &str = "Invalid or missing latitude/longitude parameters";

/// Validates a raw add-school JSON body and normalizes it into a [`NewSchool`].
///
/// # Errors
///
/// Returns [`Error::Validation`] when a field is absent or null
/// ([`MSG_MISSING_FIELDS`]), or when `name`/`address` are not non-empty text
/// or `latitude`/`longitude` do not parse as finite numbers
/// ([`MSG_INVALID_FIELDS`]).
pub fn parse_add_school(body: &Value) -> Result<NewSchool> {
    let name = field(body, "name")?;
    let address = field(body, "address")?;
    let latitude = field(body, "latitude")?;
    let longitude = field(body, "longitude")?;

    let name = text_field(name)?;
    let address = text_field(address)?;
    let latitude = numeric_field(latitude)?;
    let longitude = numeric_field(longitude)?;

    Ok(NewSchool {
        name,
        address,
        latitude,
        longitude,
    })
}

/// Validates list-schools query parameters into a reference [`Coordinate`].
///
/// # Errors
///
/// Returns [`Error::Validation`] with [`MSG_INVALID_COORDINATES`] when either
/// parameter is absent or does not parse as a finite number.
pub fn parse_list_query(latitude: Option<&str>, longitude: Option<&str>) -> Result<Coordinate> {
    let parse = |raw: Option<&str>| -> Result<f64> {
        raw.and_then(parse_finite)
            .ok_or_else(|| Error::validation(MSG_INVALID_COORDINATES))
    };

    Ok(Coordinate::new(parse(latitude)?, parse(longitude)?))
}

fn field<'a>(body: &'a Value, name: &str) -> Result<&'a Value> {
    match body.get(name) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(Error::validation(MSG_MISSING_FIELDS)),
    }
}

fn text_field(value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| Error::validation(MSG_INVALID_FIELDS))
}

fn numeric_field(value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => parse_finite(s),
        _ => None,
    };

    parsed.ok_or_else(|| Error::validation(MSG_INVALID_FIELDS))
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}
