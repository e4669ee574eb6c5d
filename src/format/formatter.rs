//! Core formatting logic for GIDL sources
//!
//! Walks the declaration model and emits canonical source text.
//!
//! ## Notes
//! - Members are printed in declaration order, attributes and methods interleaved as written.
//! - Comments are not part of the model and are therefore not printed.

use gidl_core::lang::keywords::{self, KeywordId};
use gidl_syntax::ast::{Annotated, Annotation, Attribute, Interface, MemberRef, Method, Module, Visibility};

use super::config::FormatConfig;
use super::writer::FormatWriter;

/// Formatter that renders a declaration model back to source text
pub struct Formatter {
    writer: FormatWriter,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            writer: FormatWriter::new(config),
        }
    }

    /// Format a list of modules and return the formatted source
    pub fn format(mut self, modules: &[Module]) -> String {
        for (i, module) in modules.iter().enumerate() {
            if i > 0 {
                self.blank_lines();
            }
            self.format_module(module);
        }
        self.writer.finish()
    }

    fn blank_lines(&mut self) {
        let count = self.writer.config().blank_lines_between_decls;
        self.writer.blank_lines(count);
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn format_annotations(&mut self, annotations: &[Annotation]) {
        for annotation in annotations {
            self.writer.writeln(&annotation.to_string());
        }
    }

    fn format_module(&mut self, module: &Module) {
        self.format_annotations(module.annotations());
        if module.interfaces().is_empty() {
            self.writer.writeln(&format!("{} {} {{}}", keywords::as_str(KeywordId::Module), module.name()));
            return;
        }

        self.writer.writeln(&format!("{} {} {{", keywords::as_str(KeywordId::Module), module.name()));
        self.writer.indent();
        for (i, interface) in module.interfaces().iter().enumerate() {
            if i > 0 {
                self.blank_lines();
            }
            self.format_interface(interface);
        }
        self.writer.dedent();
        self.writer.writeln("}");
    }

    fn format_interface(&mut self, interface: &Interface) {
        self.format_annotations(interface.annotations());
        if interface.is_empty() {
            self.writer
                .writeln(&format!("{} {} {{}}", keywords::as_str(KeywordId::Interface), interface.name()));
            return;
        }

        self.writer
            .writeln(&format!("{} {} {{", keywords::as_str(KeywordId::Interface), interface.name()));
        self.writer.indent();
        for member in interface.members() {
            match member {
                MemberRef::Attribute(attribute) => self.format_attribute(attribute),
                MemberRef::Method(method) => self.format_method(method),
            }
        }
        self.writer.dedent();
        self.writer.writeln("}");
    }

    // ========================================================================
    // Members
    // ========================================================================

    fn format_attribute(&mut self, attribute: &Attribute) {
        self.format_annotations(attribute.annotations());
        let visibility = attribute.visibility();
        if visibility != Visibility::ReadWrite || self.writer.config().explicit_readwrite {
            self.writer.write(&visibility.to_string());
            self.writer.write(" ");
        }
        self.writer.writeln(&format!("{} {};", attribute.ty(), attribute.name()));
    }

    fn format_method(&mut self, method: &Method) {
        self.format_annotations(method.annotations());
        self.writer.writeln(&format!("{method};"));
    }
}
