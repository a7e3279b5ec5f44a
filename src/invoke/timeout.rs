//! Deadline layer for any invoker.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use super::Invoke;
use crate::descriptor::Args;
use crate::error::{InvokeError, Result};

/// Wrapper that fails calls which do not settle within a deadline.
///
/// The inner call is dropped when the deadline passes, which cancels it on
/// this side of the boundary. Whether the remote side stops is up to the
/// inner invoker.
///
/// # Example
///
/// ```ignore
/// let invoker = Timeout::new(host, Duration::from_secs(5));
/// let commands = SampleCommands::new(invoker);
/// ```
pub struct Timeout<I> {
    inner: I,
    after: Duration,
}

impl<I> Timeout<I> {
    pub fn new(inner: I, after: Duration) -> Self {
        Self { inner, after }
    }

    pub fn deadline(&self) -> Duration {
        self.after
    }

    pub fn inner(&self) -> &I {
        &self.inner
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

#[async_trait]
impl<I: Invoke> Invoke for Timeout<I> {
    async fn invoke(&self, command: &str, args: Option<Args>) -> Result<Value> {
        match tokio::time::timeout(self.after, self.inner.invoke(command, args)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(%command, after = ?self.after, "invocation timed out");
                Err(InvokeError::Timeout {
                    command: command.to_string(),
                    after: self.after,
                })
            }
        }
    }
}
