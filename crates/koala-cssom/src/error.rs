//! Errors surfaced by the CSSOM layer.

use thiserror::Error;

/// Errors returned to callers of a [`ResolvedStyleDeclaration`](crate::ResolvedStyleDeclaration).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CssomError {
    /// [WebIDL § 2.8.1 `NoModificationAllowedError`](https://webidl.spec.whatwg.org/#nomodificationallowederror)
    ///
    /// "The object can not be modified."
    #[error("NoModificationAllowedError: {0}")]
    NoModificationAllowed(&'static str),

    /// The name does not match any property the engine knows.
    #[error("unknown CSS property '{0}'")]
    UnknownProperty(String),
}

/// The style engine could not compute a style for an element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("style computation failed: {reason}")]
pub struct StyleComputeError {
    /// Why the computation failed.
    pub reason: String,
}

impl StyleComputeError {
    /// Create an error with a human-readable reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
