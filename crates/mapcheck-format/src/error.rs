/// Errors that can occur while resolving format names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The name does not match any known type tag.
    #[error("unknown type tag: {0}")]
    UnknownTypeTag(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
