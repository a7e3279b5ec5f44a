use super::*;
use crate::commands::sample_commands;
use crate::descriptor::{datatype, CommandSpec};
use indoc::indoc;
use serde::{Deserialize, Serialize};
use specta::TypeDefs;

#[derive(Serialize, Deserialize, specta::Type)]
#[serde(rename_all = "camelCase")]
struct Renamed {
    some_field: String,
}

crate::facade! {
    struct Misc => fn misc_commands;

    /// Checks the host is alive.
    fn ping() -> ();
    fn move_to(pos_x: i32, pos_y: Option<i32>) -> ();
    fn renamed() -> Renamed;
}

crate::facade! {
    struct Wide => fn wide_commands;

    fn total() -> i64;
}

fn sample() -> CommandTable {
    sample_commands().unwrap()
}

#[test]
fn test_typescript_sample_module() {
    let rendered = render(&sample(), Language::TypeScript, DEFAULT_INVOKE_GLOBAL).unwrap();

    let expected = indoc! {r#"
        // This file was generated by invoke-facade. Do not edit this file manually.

        declare global {
            interface Window {
                __TAURI_INVOKE__<T>(cmd: string, args?: Record<string, unknown>): Promise<T>;
            }
        }

        const invoke = window.__TAURI_INVOKE__;

        export function helloWorld(myName: string) {
            return invoke<string>("hello_world", { myName })
        }

        export function goodbyeWorld() {
            return invoke<string>("goodbye_world")
        }

        export function someStruct() {
            return invoke<MyStruct>("some_struct")
        }

    "#};

    assert!(rendered.starts_with(expected), "{rendered}");
    assert!(rendered.contains("export type MyStruct = { some_field: string }"));
    assert!(rendered.ends_with('\n'));
}

#[test]
fn test_javascript_sample_module() {
    let rendered = render(&sample(), Language::JavaScript, DEFAULT_INVOKE_GLOBAL).unwrap();

    let expected = indoc! {r#"
        // This file was generated by invoke-facade. Do not edit this file manually.

        const invoke = window.__TAURI_INVOKE__;

        /**
         * @param { string } myName
         * @returns { Promise<string> }
         */
        export function helloWorld(myName) {
            return invoke("hello_world", { myName })
        }

        /**
         * @returns { Promise<string> }
         */
        export function goodbyeWorld() {
            return invoke("goodbye_world")
        }

        /**
         * @returns { Promise<MyStruct> }
         */
        export function someStruct() {
            return invoke("some_struct")
        }
    "#};

    assert_eq!(rendered, expected);
}

#[test]
fn test_docs_rendered_before_function() {
    let table = misc_commands().unwrap();

    let rendered = ts::render_functions(&table.commands[..1], &ExportConfiguration::default()).unwrap();
    assert_eq!(
        rendered,
        "/**\n * Checks the host is alive.\n */\nexport function ping() {\n    return invoke<null>(\"ping\")\n}"
    );
}

#[test]
fn test_record_types_follow_serde_attributes() {
    let wire = serde_json::to_value(Renamed {
        some_field: "v".to_string(),
    })
    .unwrap();
    assert_eq!(wire, serde_json::json!({ "someField": "v" }));

    let rendered = render(&misc_commands().unwrap(), Language::TypeScript, DEFAULT_INVOKE_GLOBAL).unwrap();
    assert!(rendered.contains("someField: string"), "{rendered}");
    assert!(!rendered.contains("some_field"));
}

#[test]
fn test_bigint_types_refused() {
    let err = render(&wide_commands().unwrap(), Language::TypeScript, DEFAULT_INVOKE_GLOBAL).unwrap_err();
    assert!(matches!(err, ExportError::Type(_)));
}

#[test]
fn test_multiple_params_use_wire_names() {
    let table = misc_commands().unwrap();

    let rendered = js::render_functions(&table.commands, &ExportConfiguration::default()).unwrap();
    assert!(rendered.contains("export function moveTo(posX, posY) {"));
    assert!(rendered.contains(r#"return invoke("move_to", { posX, posY })"#));
    assert!(rendered.contains("@param { number | null } posY"));
}

#[test]
fn test_duplicate_command_rejected() {
    let mut types = TypeDefs::default();
    let unit = datatype::<()>(&mut types).unwrap();
    let table = CommandTable::new(
        vec![
            CommandSpec::new("ping", unit.clone()),
            CommandSpec::new("ping", unit),
        ],
        types,
    );

    let err = render(&table, Language::TypeScript, DEFAULT_INVOKE_GLOBAL).unwrap_err();
    assert!(matches!(err, ExportError::DuplicateCommand(name) if name == "ping"));
}

#[test]
fn test_colliding_param_wire_names_rejected() {
    let mut types = TypeDefs::default();
    let number = datatype::<i32>(&mut types).unwrap();
    let unit = datatype::<()>(&mut types).unwrap();
    let table = CommandTable::new(
        vec![CommandSpec::new("x", unit)
            .param("my_name", number.clone())
            .param("myName", number)],
        types,
    );

    for language in [Language::TypeScript, Language::JavaScript] {
        let err = render(&table, language, DEFAULT_INVOKE_GLOBAL).unwrap_err();
        assert!(matches!(
            err,
            ExportError::DuplicateParam { ref command, ref param } if command == "x" && param == "myName"
        ));
    }
}

#[test]
fn test_invoke_global_forms() {
    assert_eq!(
        InvokeGlobal::parse("window.__TAURI_INVOKE__").unwrap(),
        InvokeGlobal::WindowMember("__TAURI_INVOKE__")
    );
    assert_eq!(
        InvokeGlobal::parse("hostInvoke").unwrap(),
        InvokeGlobal::Function("hostInvoke")
    );

    let globals = ts::globals(InvokeGlobal::Function("hostInvoke"));
    assert!(globals.starts_with("declare function hostInvoke<T>("));
    assert!(globals.ends_with("const invoke = hostInvoke;"));
    assert_eq!(
        js::globals(InvokeGlobal::Function("hostInvoke")),
        "const invoke = hostInvoke;"
    );
}

#[test]
fn test_undeclarable_invoke_global_rejected() {
    for global in ["window.__TAURI__.invoke", "a.b", "window.", "", "1invoke"] {
        let err = render(&sample(), Language::TypeScript, global).unwrap_err();
        assert!(
            matches!(err, ExportError::InvalidInvokeGlobal(ref g) if g == global),
            "{global}"
        );
    }
}

#[test]
fn test_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = BindingsConfig {
        language: Language::JavaScript,
        output: dir.path().join("nested/bindings.js"),
        header: Some("// header\n".to_string()),
        ..BindingsConfig::default()
    };

    let path = export(&sample(), &config).unwrap();
    let written = std::fs::read_to_string(path).unwrap();

    assert!(written.starts_with("// header\n// This file was generated by invoke-facade."));
    assert!(written.contains("export function someStruct()"));
}

#[test]
fn test_export_refuses_invalid_global_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let config = BindingsConfig {
        output: dir.path().join("bindings.ts"),
        invoke_global: "window.__TAURI__.invoke".to_string(),
        ..BindingsConfig::default()
    };

    assert!(export(&sample(), &config).is_err());
    assert!(!config.output.exists());
}

#[test]
fn test_export_default_header() {
    let dir = tempfile::tempdir().unwrap();
    let config = BindingsConfig {
        output: dir.path().join("bindings.ts"),
        ..BindingsConfig::default()
    };

    let path = export(&sample(), &config).unwrap();
    let written = std::fs::read_to_string(path).unwrap();

    assert!(written.starts_with(DEFAULT_HEADER));
}

#[test]
fn test_language_extension() {
    assert_eq!(Language::TypeScript.extension(), "ts");
    assert_eq!(Language::JavaScript.extension(), "js");
}
