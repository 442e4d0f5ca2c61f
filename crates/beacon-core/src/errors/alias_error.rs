/// Parameter alias resolution errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AliasError {
    #[error("parameter '{name}' is not recognized")]
    UnknownParameter { name: String },

    #[error("cannot coerce {value:?} for parameter '{param}' to {expected}")]
    CoercionFailed {
        param: String,
        value: String,
        expected: &'static str,
    },
}

impl AliasError {
    /// Whether this error only means the name is unregistered.
    pub fn is_unknown_parameter(&self) -> bool {
        matches!(self, Self::UnknownParameter { .. })
    }
}
