//! JavaScript bindings with JSDoc type annotations.

use indoc::formatdoc;
use specta::ts::{self, ExportConfiguration, TsExportError};

use super::{arg_usages, assemble, InvokeGlobal, DO_NOT_EDIT};
use crate::descriptor::{CommandSpec, CommandTable};

pub fn globals(global: InvokeGlobal<'_>) -> String {
    format!("const invoke = {};", global.expression())
}

/// One exported function per command, typed through JSDoc.
pub fn render_functions(
    commands: &[CommandSpec],
    cfg: &ExportConfiguration,
) -> Result<String, TsExportError> {
    commands
        .iter()
        .map(|command| {
            let name = &command.name;
            let binding = command.binding_name();

            let arg_list = command
                .params
                .iter()
                .map(|p| p.wire_name())
                .collect::<Vec<_>>();
            let arg_defs = arg_list.join(", ");
            let arg_usages = arg_usages(&arg_list);
            let ret_type = ts::datatype(cfg, &command.result)?;

            let jsdoc = {
                let params = command
                    .params
                    .iter()
                    .map(|p| {
                        ts::datatype(cfg, &p.ty)
                            .map(|ty| format!("@param {{ {ty} }} {}", p.wire_name()))
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                let lines = command
                    .docs
                    .iter()
                    .cloned()
                    .chain(params)
                    .chain([format!("@returns {{ Promise<{ret_type}> }}")])
                    .collect::<Vec<_>>();
                ts::js_doc(&lines.iter().map(String::as_str).collect::<Vec<_>>())
            };

            Ok(formatdoc! {
                r#"
                {jsdoc}export function {binding}({arg_defs}) {{
                    return invoke("{name}"{arg_usages})
                }}"#
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(|v| v.join("\n\n"))
}

/// Full module: notice, globals, then functions.
pub fn render(
    table: &CommandTable,
    global: InvokeGlobal<'_>,
    cfg: &ExportConfiguration,
) -> Result<String, TsExportError> {
    Ok(assemble(&[
        DO_NOT_EDIT.to_string(),
        globals(global),
        render_functions(&table.commands, cfg)?,
    ]))
}
