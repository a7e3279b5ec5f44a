//! invoke-facade - typed remote-invocation façade
//!
//! Exposes remote commands as typed async functions that forward a command
//! name and named arguments to a single injected invocation primitive, and
//! return whatever that primitive produces.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use invoke_facade::commands::{sample_host, SampleCommands};
//!
//! let commands = SampleCommands::new(sample_host());
//! let greeting = commands.hello_world("Ada").await?;
//! let record = commands.some_struct().await?;
//! ```
//!
//! # Mocking for Tests
//!
//! Inject [`MockInvoker`] to record calls and script results:
//!
//! ```rust,ignore
//! let mock = MockInvoker::new();
//! mock.respond("goodbye_world", Err(InvokeError::rejected("boom"))).await;
//!
//! let commands = SampleCommands::new(mock);
//! assert!(commands.goodbye_world().await.is_err());
//! ```

mod macros;

pub mod bindings;
pub mod commands;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod facade;
pub mod invoke;
pub mod utils;

pub use descriptor::{Args, CommandDescriptor, CommandSpec, CommandTable, ParamSpec};
pub use error::{InvokeError, Result};
pub use facade::Facade;
pub use invoke::{from_fn, Invoke, LocalInvoker, MockInvoker};
pub use specta;
