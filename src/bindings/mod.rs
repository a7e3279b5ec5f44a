//! Client binding generation.
//!
//! Renders a command table into a TypeScript or JavaScript module exposing
//! one function per command, each forwarding to the host's invocation
//! primitive under the command's exact name. The argument object uses the
//! same wire keys as [`CommandDescriptor::arg`](crate::CommandDescriptor::arg),
//! so generated clients and Rust façades are interchangeable. Types are
//! rendered through `specta::ts`, so serde attributes on records are honoured.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use specta::ts::{ExportConfiguration, TsExportError};
use tracing::info;

use crate::config::BindingsConfig;
use crate::descriptor::CommandTable;

pub mod js;
pub mod ts;

/// First line of every generated module.
pub const DO_NOT_EDIT: &str =
    "// This file was generated by invoke-facade. Do not edit this file manually.";

/// Header written before the module when none is configured.
pub const DEFAULT_HEADER: &str = "/* eslint-disable */\n";

/// Host primitive the generated module calls by default.
pub const DEFAULT_INVOKE_GLOBAL: &str = "window.__TAURI_INVOKE__";

/// Errors produced while generating bindings.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("command `{0}` is declared more than once")]
    DuplicateCommand(String),

    #[error("command `{command}` declares more than one parameter sent as `{param}`")]
    DuplicateParam { command: String, param: String },

    #[error("invoke global `{0}` must be an identifier or `window.<identifier>`")]
    InvalidInvokeGlobal(String),

    #[error("type reflection failed: {0}")]
    Reflect(#[from] specta::ExportError),

    #[error("type export failed: {0}")]
    Type(#[from] TsExportError),
}

/// Output language of generated bindings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "ts")]
    TypeScript,
    #[serde(alias = "js")]
    JavaScript,
}

impl Language {
    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }
}

/// Host primitive the generated module binds to `invoke`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeGlobal<'a> {
    /// `window.<member>`, typed by augmenting `Window`.
    WindowMember(&'a str),
    /// A bare identifier, typed by an ambient function declaration.
    Function(&'a str),
}

impl<'a> InvokeGlobal<'a> {
    /// Parse a configured global. Anything other than an identifier or
    /// `window.<identifier>` cannot be declared and is refused.
    pub fn parse(global: &'a str) -> Result<Self, ExportError> {
        match global.strip_prefix("window.") {
            Some(member) if is_identifier(member) => Ok(InvokeGlobal::WindowMember(member)),
            None if is_identifier(global) => Ok(InvokeGlobal::Function(global)),
            _ => Err(ExportError::InvalidInvokeGlobal(global.to_string())),
        }
    }

    /// Expression the module assigns to `invoke`.
    pub fn expression(&self) -> String {
        match self {
            InvokeGlobal::WindowMember(member) => format!("window.{member}"),
            InvokeGlobal::Function(name) => name.to_string(),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Check a table for duplicate commands and for parameters that collide on
/// the wire.
pub fn validate(table: &CommandTable) -> Result<(), ExportError> {
    let mut names = HashSet::new();
    for command in &table.commands {
        if !names.insert(command.name.as_str()) {
            return Err(ExportError::DuplicateCommand(command.name.clone()));
        }

        let mut keys = HashSet::new();
        for param in &command.params {
            let key = param.wire_name();
            if !keys.insert(key.clone()) {
                return Err(ExportError::DuplicateParam {
                    command: command.name.clone(),
                    param: key,
                });
            }
        }
    }
    Ok(())
}

/// Render `table` as a module in `language`.
pub fn render(
    table: &CommandTable,
    language: Language,
    invoke_global: &str,
) -> Result<String, ExportError> {
    validate(table)?;
    let global = InvokeGlobal::parse(invoke_global)?;
    let cfg = ExportConfiguration::default();

    let rendered = match language {
        Language::TypeScript => ts::render(table, global, &cfg)?,
        Language::JavaScript => js::render(table, global, &cfg)?,
    };
    Ok(rendered)
}

/// Render and write bindings as configured. Returns the written path.
///
/// Parent directories of the output path are created as needed.
pub fn export(table: &CommandTable, config: &BindingsConfig) -> Result<PathBuf, ExportError> {
    let rendered = render(table, config.language, &config.invoke_global)?;
    let header = config.header.as_deref().unwrap_or(DEFAULT_HEADER);

    let path = config.output.clone();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&path, format!("{header}{rendered}"))?;

    info!(
        path = %path.display(),
        language = ?config.language,
        commands = table.commands.len(),
        "bindings written"
    );
    Ok(path)
}

/// Argument object passed to `invoke`, with its leading comma.
///
/// Parameterless commands pass no object at all.
pub(crate) fn arg_usages(keys: &[String]) -> String {
    if keys.is_empty() {
        return String::new();
    }
    format!(", {{ {} }}", keys.join(", "))
}

/// Join non-empty sections with blank lines and end with a newline.
pub(crate) fn assemble(sections: &[String]) -> String {
    let mut module = sections
        .iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n");
    module.push('\n');
    module
}

#[cfg(test)]
mod tests;
