//! The closed set of hit types accepted by the collection endpoint.

use std::fmt;
use std::str::FromStr;

use crate::errors::TrackerError;

/// Kind of hit, sent as the `t` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitType {
    Pageview,
    Event,
    Social,
    Screenview,
    Transaction,
    Item,
    Exception,
    Timing,
}

impl HitType {
    /// Every accepted hit type, in protocol documentation order.
    pub const ALL: [HitType; 8] = [
        Self::Pageview,
        Self::Event,
        Self::Social,
        Self::Screenview,
        Self::Transaction,
        Self::Item,
        Self::Exception,
        Self::Timing,
    ];

    /// Wire name of the hit type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pageview => "pageview",
            Self::Event => "event",
            Self::Social => "social",
            Self::Screenview => "screenview",
            Self::Transaction => "transaction",
            Self::Item => "item",
            Self::Exception => "exception",
            Self::Timing => "timing",
        }
    }
}

impl fmt::Display for HitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HitType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TrackerError::UnsupportedHitType {
                hit_type: s.to_string(),
            })
    }
}
