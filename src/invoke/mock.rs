//! Mock invoker for testing.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::Invoke;
use crate::descriptor::{Args, CommandDescriptor};
use crate::error::{InvokeError, Result};

#[derive(Debug, Clone)]
struct Scripted {
    result: Result<Value>,
    delay: Option<Duration>,
}

/// Mock invoker for testing.
///
/// Records every call and answers from per-command scripts in FIFO order.
/// Commands without a script get the fallback result, or are rejected as
/// unknown when no fallback is set.
#[derive(Debug, Default)]
pub struct MockInvoker {
    calls: RwLock<Vec<CommandDescriptor>>,
    scripts: RwLock<HashMap<String, VecDeque<Scripted>>>,
    fallback: RwLock<Option<Result<Value>>>,
}

impl MockInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result for the next call to `command`.
    pub async fn respond(&self, command: &str, result: Result<Value>) {
        self.push(command, result, None).await;
    }

    /// Queue a result that is delivered only after `delay`.
    pub async fn respond_after(&self, command: &str, delay: Duration, result: Result<Value>) {
        self.push(command, result, Some(delay)).await;
    }

    /// Result for any call without a queued script.
    pub async fn set_fallback(&self, result: Result<Value>) {
        *self.fallback.write().await = Some(result);
    }

    /// All calls received so far, in arrival order.
    pub async fn calls(&self) -> Vec<CommandDescriptor> {
        self.calls.read().await.clone()
    }

    /// Calls received for one command.
    pub async fn calls_to(&self, command: &str) -> Vec<CommandDescriptor> {
        self.calls
            .read()
            .await
            .iter()
            .filter(|c| c.name() == command)
            .cloned()
            .collect()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    async fn push(&self, command: &str, result: Result<Value>, delay: Option<Duration>) {
        self.scripts
            .write()
            .await
            .entry(command.to_string())
            .or_default()
            .push_back(Scripted { result, delay });
    }
}

#[async_trait]
impl Invoke for MockInvoker {
    async fn invoke(&self, command: &str, args: Option<Args>) -> Result<Value> {
        self.calls
            .write()
            .await
            .push(CommandDescriptor::with_args(command, args));

        let scripted = self
            .scripts
            .write()
            .await
            .get_mut(command)
            .and_then(VecDeque::pop_front);

        match scripted {
            Some(Scripted { result, delay }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => match self.fallback.read().await.clone() {
                Some(result) => result,
                None => Err(InvokeError::command_not_found(command)),
            },
        }
    }
}
