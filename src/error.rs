//! Error types for remote invocation.
//!
//! The façade has a single failure type, [`InvokeError`]. The invocation
//! primitive decides which variant it produces; the façade forwards it
//! untouched.

use std::time::Duration;

use serde_json::Value;

/// Result type for invocation operations.
pub type Result<T> = std::result::Result<T, InvokeError>;

/// Failure of a single remote invocation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvokeError {
    /// The remote side rejected the call. The payload is carried verbatim.
    #[error("invocation rejected: {0}")]
    Rejected(Value),

    /// The boundary itself failed before the remote side produced a result.
    #[error("transport error: {0}")]
    Transport(String),

    /// The call did not settle within the configured deadline.
    #[error("command `{command}` timed out after {after:?}")]
    Timeout { command: String, after: Duration },

    /// An argument could not be converted to a wire value.
    #[error("failed to encode argument `{param}`: {message}")]
    Encode { param: String, message: String },

    /// Two declared parameters map to the same wire key.
    #[error("argument `{param}` collides with an earlier argument sent as `{key}`")]
    DuplicateArgument { param: String, key: String },

    /// The resolved wire value does not match the declared result type.
    #[error("failed to decode result of `{command}`: {message}")]
    Decode { command: String, message: String },
}

impl InvokeError {
    /// Build a rejection carrying the given payload.
    pub fn rejected(payload: impl Into<Value>) -> Self {
        InvokeError::Rejected(payload.into())
    }

    /// Build a transport failure.
    pub fn transport(message: impl Into<String>) -> Self {
        InvokeError::Transport(message.into())
    }

    /// Rejection a host produces for a command it does not know.
    pub fn command_not_found(command: &str) -> Self {
        InvokeError::Rejected(Value::String(format!("command {command} not found")))
    }

    /// Returns the error message.
    ///
    /// String payloads are returned without JSON quoting.
    pub fn message(&self) -> String {
        match self {
            InvokeError::Rejected(Value::String(s)) => s.clone(),
            InvokeError::Rejected(v) => v.to_string(),
            InvokeError::Transport(msg) => msg.clone(),
            InvokeError::Timeout { .. } => self.to_string(),
            InvokeError::Encode { message, .. } => message.clone(),
            InvokeError::DuplicateArgument { .. } => self.to_string(),
            InvokeError::Decode { message, .. } => message.clone(),
        }
    }

    /// Returns the rejection payload if the remote side rejected the call.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            InvokeError::Rejected(v) => Some(v),
            _ => None,
        }
    }

    /// Returns true if the remote side rejected the call.
    pub fn is_rejected(&self) -> bool {
        matches!(self, InvokeError::Rejected(_))
    }

    /// Returns true if the call timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, InvokeError::Timeout { .. })
    }

    /// Returns true if repeating the call may succeed.
    ///
    /// Only boundary failures qualify. A rejection came from the remote
    /// operation itself and repeating it is not known to be safe.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            InvokeError::Transport(_) | InvokeError::Timeout { .. }
        )
    }
}
