//! Common error infrastructure for sim-core.
//!
//! Simulation operations never fail: invalid requests are absorbed and
//! reported through return values (`0`, `false`, `None`). Errors only exist at
//! construction boundaries (building actors, spawning them, validating config).
//! Domain-specific errors (`ActorError`, `SpawnError`, `ConfigError`) live in
//! their respective modules and implement [`GameError`].

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Temporary conditions that may succeed later
/// - **Validation**: Invalid input that should be rejected without retry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry later or with an alternative request.
    ///
    /// Examples: actor capacity reached
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: zero-sized actor, negative turn duration
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }
}

/// Common trait for all sim-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
