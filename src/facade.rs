//! Typed invocation façade.
//!
//! [`Facade`] forwards a [`CommandDescriptor`] to the injected invoker and
//! hands back what the invoker produced. It validates nothing, recovers from
//! nothing and keeps no state between calls. Generated façades (see
//! [`facade!`](crate::facade!)) are thin wrappers over it.
//!
//! # Example
//!
//! ```ignore
//! use invoke_facade::{CommandDescriptor, Facade, LocalInvoker};
//!
//! let facade = Facade::new(LocalInvoker::new().on("ping", |_| async { Ok(json!("pong")) }));
//! let pong: String = facade.call(CommandDescriptor::new("ping")).await?;
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::descriptor::CommandDescriptor;
use crate::error::{InvokeError, Result};
use crate::invoke::Invoke;

/// Forwards descriptors to a shared invoker.
///
/// Cloning is cheap; clones share the invoker.
pub struct Facade<I: ?Sized> {
    invoker: Arc<I>,
}

impl<I: ?Sized> Clone for Facade<I> {
    fn clone(&self) -> Self {
        Self {
            invoker: Arc::clone(&self.invoker),
        }
    }
}

impl<I: Invoke> Facade<I> {
    /// Create a façade owning `invoker`.
    pub fn new(invoker: I) -> Self {
        Self {
            invoker: Arc::new(invoker),
        }
    }
}

impl<I: Invoke + ?Sized> Facade<I> {
    /// Create a façade over a shared (possibly type-erased) invoker.
    pub fn from_arc(invoker: Arc<I>) -> Self {
        Self { invoker }
    }

    /// The injected invoker.
    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    /// Forward `descriptor` and return the resolved value unchanged.
    pub async fn call_raw(&self, descriptor: CommandDescriptor) -> Result<Value> {
        let (command, args) = descriptor.into_parts();
        debug!(%command, has_args = args.is_some(), "invoking");
        self.invoker.invoke(&command, args).await
    }

    /// Forward `descriptor` and decode the resolved value as `R`.
    ///
    /// Decoding is strict: a value of the wrong shape is a
    /// [`InvokeError::Decode`], never a coerced value. Failures from the
    /// invoker are returned as they came.
    #[tracing::instrument(name = "facade.call", skip_all, fields(command = %descriptor.name()))]
    pub async fn call<R: DeserializeOwned>(&self, descriptor: CommandDescriptor) -> Result<R> {
        let command = descriptor.name().to_string();
        let value = self.call_raw(descriptor).await?;
        serde_json::from_value(value).map_err(|e| InvokeError::Decode {
            command,
            message: e.to_string(),
        })
    }
}
