//! Error types for the holiday-rules workspace.
//!
//! All fallible operations return the single `thiserror`-derived [`Error`]
//! defined here. The `ensure!` macro is a shorthand for precondition
//! early returns.

use thiserror::Error;

use crate::RuleId;

/// The top-level error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The rule catalog could not supply its rules.
    #[error("rule catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// A catalog rule has fields inconsistent with its declared type.
    #[error("malformed rule {id}: {reason}")]
    MalformedRule {
        /// Identifier of the offending rule.
        id: RuleId,
        /// What is wrong with it.
        reason: String,
    },

    /// Invalid calendar date or date arithmetic out of range.
    #[error("date error: {0}")]
    Date(String),

    /// Text could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

impl Error {
    /// Build a [`Error::MalformedRule`].
    pub fn malformed(id: RuleId, reason: impl Into<String>) -> Self {
        Error::MalformedRule {
            id,
            reason: reason.into(),
        }
    }
}

/// Shorthand `Result` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hr_core::{ensure, errors::Error};
/// fn positive(x: i32) -> hr_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
