//! Command descriptors and the declarative command table.
//!
//! A [`CommandDescriptor`] is what one invocation sends across the boundary.
//! A [`CommandSpec`] is one row of a command table: the fixed name, declared
//! parameters and result type of a remote operation, reflected through
//! `specta` so generated clients see the same shapes serde puts on the wire.

use heck::ToLowerCamelCase;
use serde::Serialize;
use serde_json::{map::Entry, Map, Value};
use specta::{DataType, DefOpts, Type, TypeDefs};

use crate::error::{InvokeError, Result};

/// Named-argument payload sent with a command.
pub type Args = Map<String, Value>;

/// Wire key for a declared parameter name (`my_name` -> `myName`).
pub fn wire_name(param: &str) -> String {
    param.to_lower_camel_case()
}

/// Reference datatype of `T`, registering every named type it reaches in
/// `types`.
pub fn datatype<T: Type>(types: &mut TypeDefs) -> std::result::Result<DataType, specta::ExportError> {
    T::reference(
        DefOpts {
            parent_inline: false,
            type_map: types,
        },
        &[],
    )
}

/// A single invocation: command name plus optional named arguments.
///
/// The argument mapping stays `None` until the first argument is added, so
/// parameterless commands send no mapping at all.
///
/// # Example
///
/// ```
/// use invoke_facade::CommandDescriptor;
///
/// let descriptor = CommandDescriptor::new("hello_world")
///     .arg("my_name", "Ada")
///     .unwrap();
/// assert_eq!(descriptor.name(), "hello_world");
/// assert_eq!(descriptor.args().unwrap()["myName"], "Ada");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandDescriptor {
    name: String,
    args: Option<Args>,
}

impl CommandDescriptor {
    /// Create a descriptor with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: None,
        }
    }

    /// Create a descriptor from an already-built argument mapping.
    pub fn with_args(name: impl Into<String>, args: Option<Args>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Add an argument under the wire form of its declared parameter name.
    ///
    /// Fails if an earlier argument already went out under the same key.
    pub fn arg(mut self, param: &str, value: impl Serialize) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(|e| InvokeError::Encode {
            param: param.to_string(),
            message: e.to_string(),
        })?;

        match self.args.get_or_insert_with(Map::new).entry(wire_name(param)) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(taken) => {
                return Err(InvokeError::DuplicateArgument {
                    param: param.to_string(),
                    key: taken.key().clone(),
                });
            }
        }
        Ok(self)
    }

    /// Command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Argument mapping, if any argument was supplied.
    pub fn args(&self) -> Option<&Args> {
        self.args.as_ref()
    }

    /// Split into name and arguments.
    pub fn into_parts(self) -> (String, Option<Args>) {
        (self.name, self.args)
    }
}

/// A declared parameter of a remote operation.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    /// Declared (Rust) name.
    pub name: String,
    /// Reflected argument type.
    pub ty: DataType,
}

impl ParamSpec {
    /// Key this parameter is sent under.
    pub fn wire_name(&self) -> String {
        wire_name(&self.name)
    }
}

/// One row of a command table.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Remote command name, sent byte-for-byte.
    pub name: String,
    /// Declared parameters in positional order.
    pub params: Vec<ParamSpec>,
    /// Reflected type of the resolved value.
    pub result: DataType,
    /// Documentation lines.
    pub docs: Vec<String>,
}

impl CommandSpec {
    /// Create a spec with no parameters.
    pub fn new(name: impl Into<String>, result: DataType) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            result,
            docs: Vec::new(),
        }
    }

    /// Append a declared parameter.
    pub fn param(mut self, name: impl Into<String>, ty: DataType) -> Self {
        self.params.push(ParamSpec {
            name: name.into(),
            ty,
        });
        self
    }

    /// Append a documentation line. Leading whitespace left by `///` is trimmed.
    pub fn doc(mut self, line: &str) -> Self {
        self.docs.push(line.strip_prefix(' ').unwrap_or(line).to_string());
        self
    }

    /// Exported function name in generated bindings (`hello_world` -> `helloWorld`).
    pub fn binding_name(&self) -> String {
        self.name.to_lower_camel_case()
    }
}

/// A command table: every command plus the named types their signatures
/// reach.
#[derive(Debug)]
pub struct CommandTable {
    pub commands: Vec<CommandSpec>,
    pub types: TypeDefs,
}

impl CommandTable {
    pub fn new(commands: Vec<CommandSpec>, types: TypeDefs) -> Self {
        Self { commands, types }
    }

    /// Command names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name.as_str()).collect()
    }
}
