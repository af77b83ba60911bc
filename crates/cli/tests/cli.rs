//! Integration tests for the `ifacegen` command line.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;

use ifacegen_cli::run_cli;
use tempfile::TempDir;

const WIDGET_JSON: &str = r#"[
  {
    "namespace": "Acme",
    "name": "Widget",
    "declarations": [
      {
        "kind": "class",
        "importScopes": [{"imports": ["using System;"]}, {"imports": ["using System;"]}]
      }
    ],
    "members": [
      {"kind": "property", "name": "Name", "type": {"name": "string", "nullable": true},
       "hasPublicGetter": true, "hasPublicSetter": true}
    ]
  },
  {
    "namespace": "Acme",
    "name": "Point",
    "declarations": [{"kind": "struct"}]
  }
]"#;

const GADGET_YAML: &str = "\
namespace: Acme
name: Gadget
declarations:
  - kind: class
members:
  - kind: event
    name: Fired
    handlerType:
      name: EventHandler
";

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_generate_writes_one_file_per_class() {
    let dir = TempDir::new().unwrap();
    let json = write(dir.path(), "widget.json", WIDGET_JSON);
    let yaml = write(dir.path(), "gadget.yaml", GADGET_YAML);
    let out = dir.path().join("out");

    let code = run_cli([
        "ifacegen",
        "generate",
        json.as_str(),
        yaml.as_str(),
        "--out-dir",
        out.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);

    let widget = fs::read_to_string(out.join("Acme.IWidget.g.cs")).unwrap();
    assert!(widget.starts_with("using System;\nusing System;\n\n#nullable enable\n"));
    assert!(widget.contains("string? Name { get; set; }"));

    let gadget = fs::read_to_string(out.join("Acme.IGadget.g.cs")).unwrap();
    assert!(gadget.contains("event EventHandler Fired;"));

    // Structs are skipped silently
    assert!(!out.join("Acme.IPoint.g.cs").exists());
}

#[test]
fn test_generate_applies_flag_overrides() {
    let dir = TempDir::new().unwrap();
    let json = write(dir.path(), "widget.json", WIDGET_JSON);
    let out = dir.path().join("out");

    let code = run_cli([
        "ifacegen",
        "generate",
        json.as_str(),
        "--out-dir",
        out.to_str().unwrap(),
        "--dedup-imports",
        "--no-nullable-directive",
        "--indent",
        "2",
    ]);
    assert_eq!(code, 0);

    let widget = fs::read_to_string(out.join("Acme.IWidget.g.cs")).unwrap();
    assert!(widget.starts_with("using System;\n\nnamespace Acme\n{\n  public partial interface IWidget\n"));
    assert!(!widget.contains("#nullable"));
}

#[test]
fn test_generate_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let json = write(dir.path(), "widget.json", WIDGET_JSON);
    let config = write(dir.path(), "ifacegen.toml", "dedup-imports = true\n");
    let out = dir.path().join("out");

    let code = run_cli([
        "ifacegen",
        "generate",
        json.as_str(),
        "--config",
        config.as_str(),
        "--out-dir",
        out.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);

    let widget = fs::read_to_string(out.join("Acme.IWidget.g.cs")).unwrap();
    assert!(widget.starts_with("using System;\n\n#nullable enable\n"));
}

#[test]
fn test_same_class_name_in_two_namespaces() {
    let dir = TempDir::new().unwrap();
    let json = write(
        dir.path(),
        "widgets.json",
        r#"[
  {"namespace": "Acme.A", "name": "Widget", "declarations": [{"kind": "class"}]},
  {"namespace": "Acme.B", "name": "Widget", "declarations": [{"kind": "class"}]},
  {"name": "Widget", "declarations": [{"kind": "class"}]}
]"#,
    );
    let out = dir.path().join("out");

    let code = run_cli([
        "ifacegen",
        "generate",
        json.as_str(),
        "--out-dir",
        out.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);

    let a = fs::read_to_string(out.join("Acme.A.IWidget.g.cs")).unwrap();
    assert!(a.contains("namespace Acme.A\n"));
    let b = fs::read_to_string(out.join("Acme.B.IWidget.g.cs")).unwrap();
    assert!(b.contains("namespace Acme.B\n"));
    let global = fs::read_to_string(out.join("IWidget.g.cs")).unwrap();
    assert!(global.starts_with("public partial interface IWidget\n"));
}

#[test]
fn test_duplicate_output_file_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let first = write(dir.path(), "first.json", WIDGET_JSON);
    let second = write(dir.path(), "second.json", WIDGET_JSON);
    let out = dir.path().join("out");

    let code = run_cli([
        "ifacegen",
        "generate",
        first.as_str(),
        second.as_str(),
        "--out-dir",
        out.to_str().unwrap(),
    ]);
    assert_eq!(code, 1);
    assert!(!out.join("Acme.IWidget.g.cs").exists());
}

#[test]
fn test_oversized_indent_rejected() {
    let dir = TempDir::new().unwrap();
    let json = write(dir.path(), "widget.json", WIDGET_JSON);
    assert_ne!(
        run_cli([
            "ifacegen",
            "generate",
            json.as_str(),
            "--indent",
            "18446744073709551615"
        ]),
        0
    );

    let config = write(dir.path(), "ifacegen.toml", "indent = 100000\n");
    assert_eq!(
        run_cli([
            "ifacegen",
            "generate",
            json.as_str(),
            "--config",
            config.as_str()
        ]),
        1
    );
}

#[test]
fn test_generate_fails_on_bad_input() {
    let dir = TempDir::new().unwrap();
    let bad = write(dir.path(), "broken.json", "{ not json");
    assert_eq!(run_cli(["ifacegen", "generate", bad.as_str()]), 1);

    let unsupported = write(dir.path(), "widget.xml", "<widget/>");
    assert_eq!(run_cli(["ifacegen", "generate", unsupported.as_str()]), 1);
}

#[test]
fn test_generate_fails_on_invalid_config() {
    let dir = TempDir::new().unwrap();
    let json = write(dir.path(), "widget.json", WIDGET_JSON);
    let config = write(dir.path(), "ifacegen.toml", "indent = \"wide\"\n");
    assert_eq!(
        run_cli([
            "ifacegen",
            "generate",
            json.as_str(),
            "--config",
            config.as_str()
        ]),
        1
    );
}

#[test]
fn test_generate_requires_inputs() {
    assert_ne!(run_cli(["ifacegen", "generate"]), 0);
}

#[test]
fn test_config_command() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "ifacegen.toml", "indent = 2\n");
    assert_eq!(run_cli(["ifacegen", "config", "--config", config.as_str()]), 0);
}
