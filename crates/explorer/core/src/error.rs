//! Common error infrastructure for explorer-core.
//!
//! Domain errors (e.g. [`crate::MoveError`]) live next to the operations that
//! raise them and implement [`ExplorerError`] for uniform classification.
//! Every failure here is local to the explorer and none of them are fatal to
//! the host.

/// Severity level of an error, used for categorization and handling strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// The request was fine but the world did not allow it right now.
    ///
    /// Examples: cursor already at the map edge
    Recoverable,

    /// The request itself was malformed or had nothing to act on.
    ///
    /// Examples: direction outside the rotation range, no player and no cursor
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for explorer errors.
pub trait ExplorerError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
