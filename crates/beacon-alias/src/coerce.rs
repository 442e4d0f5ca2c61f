//! Value coercion applied on the way from caller values to wire values.

use beacon_core::errors::AliasError;
use beacon_core::{ParamValue, Value};

/// Target type of a wire parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coercer {
    Text,
    Integer,
    Float,
}

impl Coercer {
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
        }
    }

    /// Coerce `value` for wire parameter `param`.
    pub fn apply(self, param: &str, value: &Value) -> Result<ParamValue, AliasError> {
        match self {
            Self::Text => Ok(ParamValue::Text(value.to_string())),
            Self::Integer => to_integer(value)
                .map(ParamValue::Int)
                .ok_or_else(|| self.failure(param, value)),
            Self::Float => to_float(value)
                .map(ParamValue::Float)
                .ok_or_else(|| self.failure(param, value)),
        }
    }

    fn failure(self, param: &str, value: &Value) -> AliasError {
        AliasError::CoercionFailed {
            param: param.to_string(),
            value: value.to_string(),
            expected: self.name(),
        }
    }
}

fn to_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Int(i) => Some(*i),
        // Truncates toward zero.
        Value::Float(x) if x.is_finite() && x.abs() < 9.2e18 => Some(x.trunc() as i64),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Int(i) => Some(*i as f64),
        Value::Float(x) => Some(*x),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Text(s) => s.trim().parse().ok(),
        Value::Timestamp(_) => None,
    }
}
