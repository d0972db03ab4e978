/// Convenience result type used across svgtween.
pub type TweenResult<T> = Result<T, TweenError>;

/// Top-level error taxonomy used by tweening APIs.
///
/// Every failure is synchronous and non-retryable: all operations are pure
/// computations over in-memory trees and strings, so an error leaves no
/// partially mutated state behind.
#[derive(thiserror::Error, Debug)]
pub enum TweenError {
    /// Malformed path mini-language input.
    #[error("path parse error: {0}")]
    Parse(String),

    /// Two paths whose command sequences cannot be reconciled.
    #[error("path shape error: {0}")]
    Shape(String),

    /// Internal consistency violation (a logic bug, not bad user input).
    #[error("integrity error: {0}")]
    Integrity(String),

    /// Incompatible keyframe data, such as mixed dimension units.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TweenError {
    /// Build a [`TweenError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`TweenError::Shape`] value.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Build a [`TweenError::Integrity`] value.
    pub fn integrity(msg: impl Into<String>) -> Self {
        Self::Integrity(msg.into())
    }

    /// Build a [`TweenError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
