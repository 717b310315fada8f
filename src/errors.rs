use thiserror::Error;

/// Errors raised by the checked tree operations.
///
/// The plain recursion schemes never fail on their own. These variants only
/// appear where a caller opts into a checked operation (bounded unfold,
/// arity checks) or loads [`Settings`](crate::config::Settings).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("unfold exceeded the maximum depth of {limit}")]
    DepthExceeded { limit: usize },

    #[error("expected exactly {expected} children, found {found}")]
    Arity { expected: usize, found: usize },

    #[error("config error: {message}")]
    Config { message: String },
}

pub type TreeResult<T> = Result<T, TreeError>;
