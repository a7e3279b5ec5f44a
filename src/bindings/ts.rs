//! TypeScript bindings.

use indoc::formatdoc;
use specta::ts::{self, ExportConfiguration, TsExportError};

use super::{arg_usages, assemble, InvokeGlobal, DO_NOT_EDIT};
use crate::descriptor::{CommandSpec, CommandTable};

/// Declarations that type the host primitive, then bind it to `invoke`.
pub fn globals(global: InvokeGlobal<'_>) -> String {
    let expression = global.expression();
    match global {
        InvokeGlobal::WindowMember(member) => formatdoc! {
            r#"
            declare global {{
                interface Window {{
                    {member}<T>(cmd: string, args?: Record<string, unknown>): Promise<T>;
                }}
            }}

            const invoke = {expression};"#
        },
        InvokeGlobal::Function(name) => formatdoc! {
            r#"
            declare function {name}<T>(cmd: string, args?: Record<string, unknown>): Promise<T>;

            const invoke = {expression};"#
        },
    }
}

/// One exported function per command.
pub fn render_functions(
    commands: &[CommandSpec],
    cfg: &ExportConfiguration,
) -> Result<String, TsExportError> {
    commands
        .iter()
        .map(|command| {
            let name = &command.name;
            let binding = command.binding_name();
            let docs = command.docs.iter().map(String::as_str).collect::<Vec<_>>();
            let docs = ts::js_doc(&docs);

            let arg_defs = command
                .params
                .iter()
                .map(|p| ts::datatype(cfg, &p.ty).map(|ty| format!("{}: {}", p.wire_name(), ty)))
                .collect::<Result<Vec<_>, _>>()?
                .join(", ");
            let keys = command.params.iter().map(|p| p.wire_name()).collect::<Vec<_>>();
            let arg_usages = arg_usages(&keys);
            let ret_type = ts::datatype(cfg, &command.result)?;

            Ok(formatdoc! {
                r#"
                {docs}export function {binding}({arg_defs}) {{
                    return invoke<{ret_type}>("{name}"{arg_usages})
                }}"#
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(|v| v.join("\n\n"))
}

/// Full module: notice, globals, functions, then dependant types.
pub fn render(
    table: &CommandTable,
    global: InvokeGlobal<'_>,
    cfg: &ExportConfiguration,
) -> Result<String, TsExportError> {
    let functions = render_functions(&table.commands, cfg)?;

    let dependant_types = table
        .types
        .values()
        .filter_map(|v| v.as_ref())
        .map(|v| ts::export_datatype(cfg, v))
        .collect::<Result<Vec<_>, _>>()?
        .join("\n");

    Ok(assemble(&[
        DO_NOT_EDIT.to_string(),
        globals(global),
        functions,
        dependant_types,
    ]))
}
