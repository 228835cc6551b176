use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A fully typed projection request.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Starting balance
    pub principal: f64,

    /// Annual interest rate in percent (e.g., 5.0 for 5%)
    pub annual_rate: f64,

    /// Duration in whole years
    pub years: u32,

    /// Fixed amount added at the start of every month
    #[serde(default)]
    pub monthly_addition: f64,
}

impl CalculationRequest {
    pub fn new(principal: f64, annual_rate: f64, years: u32, monthly_addition: f64) -> Self {
        Self {
            principal,
            annual_rate,
            years,
            monthly_addition,
        }
    }

    /// Total number of compounding months.
    #[must_use]
    pub fn months(&self) -> u64 {
        u64::from(self.years) * 12
    }
}

/// A loosely typed scalar as it arrives on the wire: a JSON number or a
/// numeric string such as `"1500.50"`. Booleans count as 1 and 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl From<f64> for NumericInput {
    fn from(v: f64) -> Self {
        NumericInput::Number(v)
    }
}

impl From<bool> for NumericInput {
    fn from(v: bool) -> Self {
        NumericInput::Bool(v)
    }
}

impl From<&str> for NumericInput {
    fn from(v: &str) -> Self {
        NumericInput::Text(v.to_string())
    }
}

/// Request body as received by the request endpoint.
///
/// Every key is optional and defaults to 0. Values are coerced into a
/// [`CalculationRequest`] by [`RawCalculationRequest::coerce`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawCalculationRequest {
    #[serde(default)]
    pub principal: Option<NumericInput>,

    #[serde(default)]
    pub annual_rate: Option<NumericInput>,

    #[serde(default)]
    pub years: Option<NumericInput>,

    #[serde(default)]
    pub monthly_addition: Option<NumericInput>,
}

impl RawCalculationRequest {
    /// Parse a request body. Only a JSON object is accepted; arrays and
    /// scalars are rejected even where serde could map them onto the fields.
    pub fn from_json(body: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(CoreError::InvalidInput(format!(
                "request body must be a JSON object, got {}",
                json_kind(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Convert wire values into a typed request.
    ///
    /// Reals accept numbers, booleans (1/0) and numeric strings, where `_`
    /// may separate digits. `years` truncates fractional numbers toward zero
    /// but rejects fractional strings and negatives.
    pub fn coerce(&self) -> Result<CalculationRequest, CoreError> {
        Ok(CalculationRequest {
            principal: coerce_real("principal", self.principal.as_ref())?,
            annual_rate: coerce_real("annual_rate", self.annual_rate.as_ref())?,
            years: coerce_years(self.years.as_ref())?,
            monthly_addition: coerce_real("monthly_addition", self.monthly_addition.as_ref())?,
        })
    }
}

fn coerce_real(field: &str, input: Option<&NumericInput>) -> Result<f64, CoreError> {
    let value = match input {
        None => return Ok(0.0),
        Some(NumericInput::Number(v)) => *v,
        Some(NumericInput::Bool(b)) => f64::from(u8::from(*b)),
        Some(NumericInput::Text(s)) => strip_digit_separators(s.trim())
            .and_then(|t| t.parse::<f64>().ok())
            .ok_or_else(|| CoreError::InvalidInput(format!("{field} is not a number: {s:?}")))?,
    };

    if !value.is_finite() {
        return Err(CoreError::InvalidInput(format!(
            "{field} must be finite, got {value}"
        )));
    }
    Ok(value)
}

fn coerce_years(input: Option<&NumericInput>) -> Result<u32, CoreError> {
    let whole: i64 = match input {
        None => return Ok(0),
        Some(NumericInput::Number(v)) => {
            if !v.is_finite() {
                return Err(CoreError::InvalidInput(format!(
                    "years must be finite, got {v}"
                )));
            }
            // Saturating cast; out-of-range values are caught below.
            v.trunc() as i64
        }
        Some(NumericInput::Bool(b)) => i64::from(*b),
        Some(NumericInput::Text(s)) => strip_digit_separators(s.trim())
            .and_then(|t| t.parse::<i64>().ok())
            .ok_or_else(|| CoreError::InvalidInput(format!("years is not an integer: {s:?}")))?,
    };

    if whole < 0 {
        return Err(CoreError::InvalidInput(format!(
            "years must not be negative, got {whole}"
        )));
    }
    u32::try_from(whole)
        .map_err(|_| CoreError::InvalidInput(format!("years is too large: {whole}")))
}

/// Drop `_` digit separators (`"1_000"`). An underscore is only valid with a
/// digit on both sides; anything else makes the whole literal invalid.
fn strip_digit_separators(s: &str) -> Option<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let prev_digit = i > 0 && chars[i - 1].is_ascii_digit();
        let next_digit = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
        if !(prev_digit && next_digit) {
            return None;
        }
    }
    Some(out)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
