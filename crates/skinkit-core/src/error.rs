//! Error types for the skinning engines.
//!
//! Everything here is a caller bug: a string that should name one of the
//! closed enums did not. Config overlay problems are reported as
//! [`ConfigWarning`](crate::config::ConfigWarning) values instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkinError {
    /// Not one of `default`, `hover`, `pressed`, `disabled`.
    #[error("invalid interaction state '{0}' (expected default, hover, pressed or disabled)")]
    InvalidState(String),

    /// Not one of `left`, `right`, `up`, `down`.
    #[error("invalid side '{0}' (expected left, right, up or down)")]
    InvalidSide(String),

    /// No built-in default table exists for this control type.
    #[error("unknown control type '{0}'")]
    UnknownControlType(String),

    #[error("invalid scrollbar type '{0}' (expected rectangular or rounded)")]
    InvalidScrollbarType(String),

    #[error("invalid cursor '{0}'")]
    InvalidCursor(String),
}

/// Result type for skinning operations
pub type Result<T> = std::result::Result<T, SkinError>;
