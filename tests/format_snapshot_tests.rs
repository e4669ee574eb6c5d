//! Inline snapshot tests for formatter output and error messages
//!
//! Review changes: `cargo insta review`

use std::fs;
use std::path::Path;

use gidl::parser::parse_source;
use gidl::{FormatConfig, format_source, format_source_with_config};

fn load_fixture(kind: &str, name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(kind)
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path.display()))
}

#[test]
fn test_format_clutter() {
    let formatted = format_source(&load_fixture("valid", "clutter.gidl")).expect("format failed");
    insta::assert_snapshot!(formatted, @r#"
    @version(1)
    module Clutter {
        @doc("Base class of everything that can be drawn")
        interface Actor {
            readonly string name;
            float opacity;
            writeonly bool reactive;
            void show();
            void hide();
            void set_position(float x, float y);
            @deprecated
            void set_position(int x, int y);
        }

        interface Stage {
            string title;
            @transfer(full)
            Actor get_key_focus();
        }
    }

    module Cogl {
        interface Texture {
            readonly int width;
            readonly int height;
            @default(-1.5)
            float bias;
        }
    }
    "#);
}

#[test]
fn test_valid_fixtures_format_idempotently() {
    insta::glob!("fixtures/valid/*.gidl", |path| {
        let source = fs::read_to_string(path).unwrap();
        let formatted = format_source(&source).expect("format failed");
        assert_eq!(format_source(&formatted).expect("reformat failed"), formatted, "{}", path.display());
    });
}

#[test]
fn test_format_empty_blocks() {
    let formatted = format_source(&load_fixture("valid", "empty.gidl")).expect("format failed");
    insta::assert_snapshot!(formatted, @r"
    module Empty {}

    module Hollow {
        interface Nothing {}
    }
    ");
}

#[test]
fn test_format_compact_config() {
    let config = FormatConfig::new()
        .with_indent_width(2)
        .with_blank_lines_between_decls(0)
        .with_explicit_readwrite(true);
    let source = r#"module M { interface A { int x; readonly int y; @doc("a \"quoted\" word") void f(); } interface B {} }"#;
    let formatted = format_source_with_config(source, config).expect("format failed");
    insta::assert_snapshot!(formatted, @r#"
    module M {
      interface A {
        readwrite int x;
        readonly int y;
        @doc("a \"quoted\" word")
        void f();
      }
      interface B {}
    }
    "#);
}

#[test]
fn test_error_messages() {
    let names = [
        "dangling_annotation.gidl",
        "duplicate_attribute.gidl",
        "duplicate_module.gidl",
        "trailing_input.gidl",
        "unterminated_string.gidl",
        "visibility_on_method.gidl",
    ];
    let messages: Vec<String> = names
        .iter()
        .map(|name| {
            let err = parse_source(&load_fixture("invalid", name)).expect_err("fixture should fail");
            format!("{name}:{}: {err}", err.span())
        })
        .collect();

    insta::assert_snapshot!(messages.join("\n"), @r#"
    dangling_annotation.gidl:4:5: dangling annotation: expected a declaration after the annotation, found '}'
    duplicate_attribute.gidl:4:13: duplicate attribute name: expected a unique attribute name, found attribute 'x'
    duplicate_module.gidl:2:11: duplicate module name: expected a unique module name, found module 'M'
    trailing_input.gidl:2:1: unexpected trailing input: expected 'module' declaration or end of input, found keyword 'interface'
    unterminated_string.gidl:2:10: unterminated string literal '"never closed'
    visibility_on_method.gidl:3:9: visibility modifier on method: expected an attribute declaration after the visibility modifier, found method 'close'
    "#);
}
