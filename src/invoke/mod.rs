//! The invocation primitive the façade delegates to.
//!
//! [`Invoke`] is the single seam between typed façade code and whatever
//! actually carries a command across the boundary. Hosts inject an
//! implementation; tests inject [`MockInvoker`].
//!
//! Layers ([`Timeout`], [`Retry`]) wrap any invoker to add policy without
//! touching the façade.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::descriptor::Args;
use crate::error::Result;

mod local;
mod mock;
mod retry;
mod timeout;

pub use local::LocalInvoker;
pub use mock::MockInvoker;
pub use retry::{default_backoff, Retry};
pub use timeout::Timeout;

/// Performs one cross-boundary call.
///
/// `args` is `None` for commands declared without parameters. The returned
/// value is the raw resolved payload; rejections carry their payload in
/// [`InvokeError::Rejected`](crate::InvokeError::Rejected).
#[async_trait]
pub trait Invoke: Send + Sync {
    async fn invoke(&self, command: &str, args: Option<Args>) -> Result<Value>;
}

#[async_trait]
impl<T: Invoke + ?Sized> Invoke for Arc<T> {
    async fn invoke(&self, command: &str, args: Option<Args>) -> Result<Value> {
        (**self).invoke(command, args).await
    }
}

#[async_trait]
impl<T: Invoke + ?Sized> Invoke for Box<T> {
    async fn invoke(&self, command: &str, args: Option<Args>) -> Result<Value> {
        (**self).invoke(command, args).await
    }
}

/// Invoker backed by a host-supplied async function.
pub struct FnInvoker<F> {
    f: F,
}

/// Adapt an async closure into an [`Invoke`] implementation.
///
/// # Example
///
/// ```
/// use invoke_facade::invoke::{from_fn, Invoke};
/// use serde_json::json;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let invoker = from_fn(|command, _args| async move { Ok(json!(command)) });
/// assert_eq!(invoker.invoke("ping", None).await.unwrap(), json!("ping"));
/// # }
/// ```
pub fn from_fn<F, Fut>(f: F) -> FnInvoker<F>
where
    F: Fn(String, Option<Args>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value>> + Send,
{
    FnInvoker { f }
}

#[async_trait]
impl<F, Fut> Invoke for FnInvoker<F>
where
    F: Fn(String, Option<Args>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value>> + Send,
{
    async fn invoke(&self, command: &str, args: Option<Args>) -> Result<Value> {
        (self.f)(command.to_string(), args).await
    }
}
