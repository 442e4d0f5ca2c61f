/// Time conversion errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("expected an absolute timestamp, got {found}")]
    NotATimestamp { found: &'static str },

    #[error("hit age must be a number of seconds, got {found}")]
    InvalidAge { found: &'static str },

    #[error("unix time {seconds} is outside the representable range")]
    OutOfRange { seconds: String },
}
