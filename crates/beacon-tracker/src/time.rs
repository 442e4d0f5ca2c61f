//! Unix time conversions and queue-time derivation.

use beacon_core::errors::TimeError;
use beacon_core::Value;
use chrono::{DateTime, Local, TimeZone, Utc};

/// Build a local timestamp from Unix seconds plus a millisecond part.
/// Resolution is one microsecond.
pub fn from_unix(seconds: f64, milliseconds: f64) -> Result<DateTime<Local>, TimeError> {
    let total = seconds + milliseconds * 0.001;
    let micros = (total * 1_000_000.0).round();
    if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
        return Err(TimeError::OutOfRange {
            seconds: total.to_string(),
        });
    }
    DateTime::from_timestamp_micros(micros as i64)
        .map(|utc| utc.with_timezone(&Local))
        .ok_or_else(|| TimeError::OutOfRange {
            seconds: total.to_string(),
        })
}

/// Seconds since the epoch, with the sub-second part as a fraction.
pub fn to_unix<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> f64 {
    timestamp.timestamp() as f64 + f64::from(timestamp.timestamp_subsec_nanos()) / 1e9
}

pub fn to_unix_value(value: &Value) -> Result<f64, TimeError> {
    match value {
        Value::Timestamp(ts) => Ok(to_unix(ts)),
        other => Err(TimeError::NotATimestamp {
            found: other.kind(),
        }),
    }
}

pub fn now_unix() -> f64 {
    to_unix(&Utc::now())
}

/// Milliseconds elapsed between `base` and `now` (the current time when
/// `None`). `base` is Unix seconds or an absolute timestamp.
pub fn milliseconds_offset(base: &Value, now: Option<f64>) -> Result<f64, TimeError> {
    let base = match base {
        Value::Int(seconds) => *seconds as f64,
        Value::Float(seconds) => *seconds,
        other => to_unix_value(other)?,
    };
    let now = now.unwrap_or_else(now_unix);
    Ok((now - base) * 1000.0)
}

/// Queue time in whole milliseconds for a hit that happened at `when`.
pub fn hit_time(when: &Value, now: Option<f64>) -> Result<i64, TimeError> {
    milliseconds_offset(when, now).map(|offset| offset as i64)
}

/// Queue time in whole milliseconds for a hit `age` seconds old.
pub fn hit_age(age: &Value) -> Result<i64, TimeError> {
    match age {
        Value::Int(seconds) => Ok(seconds.saturating_mul(1000)),
        Value::Float(seconds) => Ok((seconds * 1000.0) as i64),
        other => Err(TimeError::InvalidAge {
            found: other.kind(),
        }),
    }
}
