//! Sample command table.
//!
//! Three commands exercising each result kind: a parameterised command
//! resolving to a string, a parameterless one resolving to a string, and a
//! parameterless one resolving to a structured record.

use serde::{Deserialize, Serialize};
use serde_json::json;
use specta::Type;

use crate::error::InvokeError;
use crate::invoke::LocalInvoker;

/// Structured record returned by `some_struct`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct MyStruct {
    pub some_field: String,
}

crate::facade! {
    /// Typed façade over the sample commands.
    pub struct SampleCommands => fn sample_commands;

    fn hello_world(my_name: &str) -> String;
    fn goodbye_world() -> String;
    fn some_struct() -> MyStruct;
}

/// In-process host serving the sample commands.
pub fn sample_host() -> LocalInvoker {
    LocalInvoker::new()
        .on("hello_world", |args| async move {
            let Some(name) = args
                .as_ref()
                .and_then(|a| a.get("myName"))
                .and_then(|v| v.as_str())
            else {
                return Err(InvokeError::rejected("missing argument myName"));
            };
            Ok(json!(format!("Hello, {name}! This greeting came from Rust.")))
        })
        .on("goodbye_world", |_| async {
            Ok(json!("Goodbye from Rust!"))
        })
        .on("some_struct", |_| async {
            let record = MyStruct {
                some_field: "Hello World".to_string(),
            };
            serde_json::to_value(record).map_err(|e| InvokeError::transport(e.to_string()))
        })
}
