//! Positional argument schemas per hit type.

use beacon_core::{HitType, Value};

use crate::hit::Arg;

/// Type a positional slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Text,
    Integer,
}

impl Expected {
    fn accepts(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::Text, Value::Text(_)) | (Self::Integer, Value::Int(_))
        )
    }
}

const PAGEVIEW: &[(Expected, &str)] = &[(Expected::Text, "dp")];

const EVENT: &[(Expected, &str)] = &[
    (Expected::Text, "ec"),
    (Expected::Text, "ea"),
    (Expected::Text, "el"),
    (Expected::Integer, "ev"),
];

const SOCIAL: &[(Expected, &str)] = &[
    (Expected::Text, "sn"),
    (Expected::Text, "sa"),
    (Expected::Text, "st"),
];

const TIMING: &[(Expected, &str)] = &[
    (Expected::Text, "utc"),
    (Expected::Text, "utv"),
    (Expected::Text, "utt"),
    (Expected::Text, "utl"),
];

/// Ordered `(expected type, wire code)` slots for `hit_type`. Empty for
/// hit types that take no positional values.
pub fn schema(hit_type: HitType) -> &'static [(Expected, &'static str)] {
    match hit_type {
        HitType::Pageview => PAGEVIEW,
        HitType::Event => EVENT,
        HitType::Social => SOCIAL,
        HitType::Timing => TIMING,
        _ => &[],
    }
}

/// Pair positional arguments with schema slots.
///
/// Every slot consumes exactly one argument. An argument of the wrong type
/// (a mapping included) is dropped without shifting later slots.
pub fn positional_values(hit_type: HitType, args: &[Arg]) -> Vec<(&'static str, &Value)> {
    schema(hit_type)
        .iter()
        .zip(args)
        .filter_map(|((expected, code), arg)| match arg {
            Arg::Value(value) if expected.accepts(value) => Some((*code, value)),
            _ => None,
        })
        .collect()
}
