//! In-process host for commands.
//!
//! Routes each invocation to the handler registered under its exact command
//! name, the way a host runtime dispatches commands to their implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! let host = LocalInvoker::new()
//!     .on("hello_world", |args| async move {
//!         let name = args.and_then(|a| a.get("myName").cloned());
//!         Ok(json!(format!("Hello, {}!", name.unwrap_or_default())))
//!     })
//!     .on("goodbye_world", |_| async { Ok(json!("Goodbye!")) });
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::Value;
use tracing::{debug, warn};

use super::Invoke;
use crate::descriptor::Args;
use crate::error::{InvokeError, Result};

/// Command handler function type.
type Handler = Arc<dyn Fn(Option<Args>) -> BoxFuture<'static, Result<Value>> + Send + Sync>;

/// Invoker that serves registered handlers in the current process.
#[derive(Clone, Default)]
pub struct LocalInvoker {
    handlers: HashMap<String, Handler>,
}

impl LocalInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for `command`, replacing any earlier one.
    pub fn on<F, Fut>(mut self, command: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Option<Args>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        let handler: Handler = Arc::new(move |args: Option<Args>| handler(args).boxed());
        self.handlers.insert(command.into(), handler);
        self
    }

    /// Names of the registered commands, sorted.
    pub fn commands(&self) -> Vec<String> {
        let mut names: Vec<_> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn handles(&self, command: &str) -> bool {
        self.handlers.contains_key(command)
    }
}

impl std::fmt::Debug for LocalInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalInvoker")
            .field("commands", &self.commands())
            .finish()
    }
}

#[async_trait]
impl Invoke for LocalInvoker {
    async fn invoke(&self, command: &str, args: Option<Args>) -> Result<Value> {
        let Some(handler) = self.handlers.get(command) else {
            warn!(%command, "no handler registered");
            return Err(InvokeError::command_not_found(command));
        };

        debug!(%command, "dispatching to local handler");
        handler(args).await
    }
}
