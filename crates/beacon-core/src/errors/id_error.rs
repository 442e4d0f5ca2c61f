/// Client identifier generation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("identifier basis must be text or absent, got {found}")]
    UnsupportedBasis { found: &'static str },
}
