//! Body-metric form submission.

use std::collections::HashMap;
use std::fmt;

use crate::domain::AppError;

pub const WEIGHT: &str = "weight";
pub const HEIGHT_FEET: &str = "height_feet";
pub const HEIGHT_INCHES: &str = "height_inches";
pub const AGE: &str = "age";
pub const GENDER: &str = "gender";
pub const HEALTH_ISSUE: &str = "health_issue";

/// A numeric form value.
///
/// Checked to be a number, but kept as the submitted text so the prompt
/// repeats exactly what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormNumber {
    raw: String,
}

impl FormNumber {
    /// Parse a submitted value. Accepts finite, non-negative decimals.
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidField { field, reason: "must not be empty".into() });
        }

        let value: f64 = trimmed.parse().map_err(|_| AppError::InvalidField {
            field,
            reason: format!("'{}' is not a number", trimmed),
        })?;

        if !value.is_finite() || value < 0.0 {
            return Err(AppError::InvalidField {
                field,
                reason: format!("'{}' must be a non-negative number", trimmed),
            });
        }

        Ok(Self { raw: trimmed.to_string() })
    }
}

impl fmt::Display for FormNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// The six fields collected by the prompt form. Lives for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    pub weight: FormNumber,
    pub height_feet: FormNumber,
    pub height_inches: FormNumber,
    pub age: FormNumber,
    pub gender: String,
    pub health_issue: String,
}

impl FormInput {
    /// Build from submitted key/value pairs.
    ///
    /// Fields are checked in form order and the first problem is reported.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, AppError> {
        Ok(Self {
            weight: FormNumber::parse(WEIGHT, required(fields, WEIGHT)?)?,
            height_feet: FormNumber::parse(HEIGHT_FEET, required(fields, HEIGHT_FEET)?)?,
            height_inches: FormNumber::parse(HEIGHT_INCHES, required(fields, HEIGHT_INCHES)?)?,
            age: FormNumber::parse(AGE, required(fields, AGE)?)?,
            gender: required_text(fields, GENDER)?,
            health_issue: required_text(fields, HEALTH_ISSUE)?,
        })
    }
}

fn required<'a>(
    fields: &'a HashMap<String, String>,
    field: &'static str,
) -> Result<&'a str, AppError> {
    fields.get(field).map(String::as_str).ok_or(AppError::MissingField { field })
}

fn required_text(fields: &HashMap<String, String>, field: &'static str) -> Result<String, AppError> {
    let value = required(fields, field)?.trim();
    if value.is_empty() {
        return Err(AppError::MissingField { field });
    }
    Ok(value.to_string())
}
