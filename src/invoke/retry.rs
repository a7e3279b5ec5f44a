//! Retry layer for any invoker.
//!
//! Uses `backon` for exponential backoff with jitter. Only failures that
//! [`InvokeError::is_retryable`] classifies as boundary failures are
//! repeated; rejections from the remote operation surface on first sight.

use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use serde_json::Value;
use tracing::warn;

use super::Invoke;
use crate::descriptor::Args;
use crate::error::{InvokeError, Result};

/// Standard backoff for invocation retries.
///
/// - Min delay: 50ms
/// - Max delay: 2s
/// - Max attempts: 5
/// - Jitter enabled
pub fn default_backoff() -> ExponentialBuilder {
    ExponentialBuilder::default()
        .with_min_delay(Duration::from_millis(50))
        .with_max_delay(Duration::from_secs(2))
        .with_max_times(5)
        .with_jitter()
}

/// Wrapper that retries retryable failures of the inner invoker.
///
/// Each attempt sends the same command name and arguments.
pub struct Retry<I> {
    inner: I,
    backoff: ExponentialBuilder,
}

impl<I> Retry<I> {
    /// Wrap with [`default_backoff`].
    pub fn new(inner: I) -> Self {
        Self::with_backoff(inner, default_backoff())
    }

    pub fn with_backoff(inner: I, backoff: ExponentialBuilder) -> Self {
        Self { inner, backoff }
    }

    pub fn inner(&self) -> &I {
        &self.inner
    }
}

#[async_trait]
impl<I: Invoke> Invoke for Retry<I> {
    #[tracing::instrument(name = "invoke.retry", skip_all, fields(%command))]
    async fn invoke(&self, command: &str, args: Option<Args>) -> Result<Value> {
        (|| self.inner.invoke(command, args.clone()))
            .retry(self.backoff.clone())
            .when(|e: &InvokeError| e.is_retryable())
            .notify(|e: &InvokeError, delay: Duration| {
                warn!(error = %e, ?delay, "retrying invocation");
            })
            .await
    }
}
