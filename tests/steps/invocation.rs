//! Invocation step definitions.

use std::sync::Arc;
use std::time::Duration;

use cucumber::{given, then, when, World};
use serde_json::Value;

use invoke_facade::commands::SampleCommands;
use invoke_facade::{InvokeError, MockInvoker};

/// Test context for invocation scenarios.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct InvocationWorld {
    mock: Arc<MockInvoker>,
    outcomes: Vec<(String, Result<Value, InvokeError>)>,
}

impl InvocationWorld {
    fn new() -> Self {
        Self {
            mock: Arc::new(MockInvoker::new()),
            outcomes: Vec::new(),
        }
    }

    fn commands(&self) -> SampleCommands<MockInvoker> {
        SampleCommands::from_arc(Arc::clone(&self.mock))
    }

    fn record(&mut self, command: &str, outcome: Result<Value, InvokeError>) {
        self.outcomes.push((command.to_string(), outcome));
    }

    fn outcome(&self, command: &str) -> &Result<Value, InvokeError> {
        self.outcomes
            .iter()
            .find(|(name, _)| name == command)
            .map(|(_, outcome)| outcome)
            .unwrap_or_else(|| panic!("no outcome recorded for {command}"))
    }
}

fn parse_json(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|e| panic!("invalid JSON {raw}: {e}"))
}

// --- Given steps ---

#[given(regex = r#"^the primitive resolves "([a-z_]+)" with (.+)$"#)]
async fn given_resolves(world: &mut InvocationWorld, command: String, value: String) {
    world.mock.respond(&command, Ok(parse_json(&value))).await;
}

#[given(regex = r#"^the primitive rejects "([a-z_]+)" with (.+)$"#)]
async fn given_rejects(world: &mut InvocationWorld, command: String, payload: String) {
    world
        .mock
        .respond(&command, Err(InvokeError::Rejected(parse_json(&payload))))
        .await;
}

#[given(regex = r#"^"([a-z_]+)" resolves with (.+) after (\d+) ms$"#)]
async fn given_resolves_after(world: &mut InvocationWorld, command: String, value: String, ms: u64) {
    world
        .mock
        .respond_after(&command, Duration::from_millis(ms), Ok(parse_json(&value)))
        .await;
}

#[given(regex = r#"^"([a-z_]+)" rejects with (.+) after (\d+) ms$"#)]
async fn given_rejects_after(
    world: &mut InvocationWorld,
    command: String,
    payload: String,
    ms: u64,
) {
    world
        .mock
        .respond_after(
            &command,
            Duration::from_millis(ms),
            Err(InvokeError::Rejected(parse_json(&payload))),
        )
        .await;
}

// --- When steps ---

#[when(expr = "I call hello_world with {string}")]
async fn call_hello_world(world: &mut InvocationWorld, name: String) {
    let outcome = world.commands().hello_world(&name).await.map(Value::String);
    world.record("hello_world", outcome);
}

#[when("I call goodbye_world")]
async fn call_goodbye_world(world: &mut InvocationWorld) {
    let outcome = world.commands().goodbye_world().await.map(Value::String);
    world.record("goodbye_world", outcome);
}

#[when("I call some_struct")]
async fn call_some_struct(world: &mut InvocationWorld) {
    let outcome = world
        .commands()
        .some_struct()
        .await
        .map(|record| serde_json::to_value(record).unwrap());
    world.record("some_struct", outcome);
}

#[when(expr = "I call hello_world with {string} and goodbye_world concurrently")]
async fn call_concurrently(world: &mut InvocationWorld, name: String) {
    let commands = world.commands();
    let (hello, goodbye) = tokio::join!(commands.hello_world(&name), commands.goodbye_world());

    world.record("hello_world", hello.map(Value::String));
    world.record("goodbye_world", goodbye.map(Value::String));
}

// --- Then steps ---

#[then(expr = "the primitive received {int} call(s)")]
async fn then_call_count(world: &mut InvocationWorld, count: usize) {
    assert_eq!(world.mock.call_count().await, count);
}

#[then(expr = "call {int} targeted {string}")]
async fn then_call_targeted(world: &mut InvocationWorld, index: usize, command: String) {
    let calls = world.mock.calls().await;
    assert_eq!(calls[index - 1].name(), command);
}

#[then(regex = r"^call (\d+) carried arguments (.+)$")]
async fn then_call_arguments(world: &mut InvocationWorld, index: usize, args: String) {
    let calls = world.mock.calls().await;
    let sent = calls[index - 1].args().cloned().map(Value::Object);
    assert_eq!(sent, Some(parse_json(&args)));
}

#[then(expr = "call {int} carried no arguments")]
async fn then_call_no_arguments(world: &mut InvocationWorld, index: usize) {
    let calls = world.mock.calls().await;
    assert!(calls[index - 1].args().is_none());
}

#[then(regex = r#"^"([a-z_]+)" resolved to (.+)$"#)]
async fn then_resolved(world: &mut InvocationWorld, command: String, value: String) {
    match world.outcome(&command) {
        Ok(resolved) => assert_eq!(resolved, &parse_json(&value)),
        Err(e) => panic!("{command} failed: {e}"),
    }
}

#[then(regex = r#"^"([a-z_]+)" rejected with (.+)$"#)]
async fn then_rejected(world: &mut InvocationWorld, command: String, payload: String) {
    match world.outcome(&command) {
        Ok(value) => panic!("{command} resolved to {value}"),
        Err(e) => assert_eq!(e, &InvokeError::Rejected(parse_json(&payload))),
    }
}
