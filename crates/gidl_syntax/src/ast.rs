//! Declaration model for GIDL
//!
//! This module defines the in-memory tree produced by the parser:
//! `Module` → `Interface` → {`Attribute`, `Method`(`Parameter`*)}, with `Annotation`s attachable to
//! modules, interfaces, attributes and methods.
//!
//! ## Notes
//! - The model is immutable once built: fields are private and only read-only accessors are exposed.
//! - Declaration order inside every collection is preserved exactly as written in the source.
//! - Type references are opaque identifiers at this layer; resolving them is a later pass.

use std::fmt;

use gidl_core::lang::keywords::{self, KeywordId};

/// Source location span.
///
/// `start`/`end` are byte offsets into the source; `line` and `column` are the 1-based position of
/// `start` (columns count characters, not bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Merge two spans into one covering both. Line/column follow whichever span starts first.
    pub fn merge(self, other: Span) -> Span {
        let first = if self.start <= other.start { self } else { other };
        Span {
            start: first.start,
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }

    /// Length of this span in bytes.
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Identifier (module/interface/member/parameter names and type references)
pub type Ident = String;

// ============================================================================
// Annotations
// ============================================================================

/// Untyped literal carried by a valued annotation such as `@default("x")`.
///
/// ## Notes
/// - Numbers keep their source spelling; interpreting them is up to the consumer.
/// - `Word` is a bare identifier value (e.g. `@transfer(full)`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AnnotationValue {
    String(String),
    Number(String),
    Word(String),
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationValue::String(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        '\r' => f.write_str("\\r")?,
                        '\0' => f.write_str("\\0")?,
                        _ => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")
            }
            AnnotationValue::Number(n) => f.write_str(n),
            AnnotationValue::Word(w) => f.write_str(w),
        }
    }
}

/// Free-form metadata tag: `@deprecated` (flag) or `@default("x")` (valued).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Annotation {
    name: Ident,
    value: Option<AnnotationValue>,
    span: Span,
}

impl Annotation {
    pub fn new(name: impl Into<Ident>, value: Option<AnnotationValue>, span: Span) -> Self {
        Self {
            name: name.into(),
            value,
            span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` for flag-style annotations.
    pub fn value(&self) -> Option<&AnnotationValue> {
        self.value.as_ref()
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if let Some(value) = &self.value {
            write!(f, "({value})")?;
        }
        Ok(())
    }
}

/// Read access to the annotations attached to a declaration.
pub trait Annotated {
    /// Annotations in source order.
    fn annotations(&self) -> &[Annotation];

    /// First annotation with the given name.
    fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations().iter().find(|a| a.name() == name)
    }

    fn has_annotation(&self, name: &str) -> bool {
        self.annotation(name).is_some()
    }
}

// ============================================================================
// Attributes
// ============================================================================

/// Whether an attribute may be read, written, or both.
///
/// Encoded as a two-bit flag set (`Readable = 1`, `Writable = 2`, `ReadWrite = 3`). The empty set is
/// deliberately unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Visibility {
    Readable = 1,
    Writable = 2,
    #[default]
    ReadWrite = 3,
}

impl Visibility {
    const READABLE_BIT: u8 = 1;
    const WRITABLE_BIT: u8 = 2;

    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a flag set; `None` for `0` ("neither") and for unknown bits.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            1 => Some(Visibility::Readable),
            2 => Some(Visibility::Writable),
            3 => Some(Visibility::ReadWrite),
            _ => None,
        }
    }

    pub const fn is_readable(self) -> bool {
        self.bits() & Self::READABLE_BIT != 0
    }

    pub const fn is_writable(self) -> bool {
        self.bits() & Self::WRITABLE_BIT != 0
    }

    /// The modifier keyword spelling this visibility in source.
    pub const fn keyword(self) -> KeywordId {
        match self {
            Visibility::Readable => KeywordId::Readonly,
            Visibility::Writable => KeywordId::Writeonly,
            Visibility::ReadWrite => KeywordId::Readwrite,
        }
    }

    /// Map a modifier keyword to a visibility; `None` for non-modifier keywords.
    pub const fn from_keyword(id: KeywordId) -> Option<Self> {
        match id {
            KeywordId::Readonly => Some(Visibility::Readable),
            KeywordId::Writeonly => Some(Visibility::Writable),
            KeywordId::Readwrite => Some(Visibility::ReadWrite),
            KeywordId::Module | KeywordId::Interface => None,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(keywords::as_str(self.keyword()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attribute {
    name: Ident,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    ty: Ident,
    visibility: Visibility,
    annotations: Vec<Annotation>,
    span: Span,
}

impl Attribute {
    pub fn new(
        name: impl Into<Ident>,
        ty: impl Into<Ident>,
        visibility: Visibility,
        annotations: Vec<Annotation>,
        span: Span,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            visibility,
            annotations,
            span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type reference (unresolved).
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_readable(&self) -> bool {
        self.visibility.is_readable()
    }

    pub fn is_writable(&self) -> bool {
        self.visibility.is_writable()
    }

    /// Span of the attribute name.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl Annotated for Attribute {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.visibility, self.ty, self.name)
    }
}

// ============================================================================
// Methods
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Parameter {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    ty: Ident,
    name: Ident,
    span: Span,
}

impl Parameter {
    pub fn new(ty: impl Into<Ident>, name: impl Into<Ident>, span: Span) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            span,
        }
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// A method declaration. Names are not unique: overloads are kept side by side in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Method {
    return_type: Ident,
    name: Ident,
    parameters: Vec<Parameter>,
    annotations: Vec<Annotation>,
    span: Span,
}

impl Method {
    pub fn new(
        return_type: impl Into<Ident>,
        name: impl Into<Ident>,
        parameters: Vec<Parameter>,
        annotations: Vec<Annotation>,
        span: Span,
    ) -> Self {
        Self {
            return_type: return_type.into(),
            name: name.into(),
            parameters,
            annotations,
            span,
        }
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters in positional order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Ordered parameter types, i.e. the part of the signature overloads differ by.
    pub fn parameter_types(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(Parameter::ty)
    }

    /// Span of the method name.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl Annotated for Method {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.return_type, self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str(")")
    }
}

// ============================================================================
// Interfaces and modules
// ============================================================================

/// An interface member as produced by the parser, before it is stored on its [`Interface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Attribute(Attribute),
    Method(Method),
}

/// Which member list the next declaration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum MemberKind {
    Attribute,
    Method,
}

/// A borrowed interface member, as yielded by [`Interface::members`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRef<'a> {
    Attribute(&'a Attribute),
    Method(&'a Method),
}

impl<'a> MemberRef<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            MemberRef::Attribute(a) => a.name(),
            MemberRef::Method(m) => m.name(),
        }
    }

    pub fn kind(&self) -> MemberKind {
        match self {
            MemberRef::Attribute(_) => MemberKind::Attribute,
            MemberRef::Method(_) => MemberKind::Method,
        }
    }
}

/// An interface: attributes and methods, each list in declaration order.
///
/// ## Notes
/// - `order` records how the two lists interleave in the source, so [`Interface::members`] can
///   replay the declarations exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interface {
    name: Ident,
    attributes: Vec<Attribute>,
    methods: Vec<Method>,
    order: Vec<MemberKind>,
    annotations: Vec<Annotation>,
    span: Span,
}

impl Interface {
    /// Build an interface whose attributes all precede its methods.
    pub fn new(
        name: impl Into<Ident>,
        attributes: Vec<Attribute>,
        methods: Vec<Method>,
        annotations: Vec<Annotation>,
        span: Span,
    ) -> Self {
        let order = std::iter::repeat_n(MemberKind::Attribute, attributes.len())
            .chain(std::iter::repeat_n(MemberKind::Method, methods.len()))
            .collect();
        Self {
            name: name.into(),
            attributes,
            methods,
            order,
            annotations,
            span,
        }
    }

    /// Build an interface from members in declaration order.
    pub fn from_members(
        name: impl Into<Ident>,
        members: impl IntoIterator<Item = Member>,
        annotations: Vec<Annotation>,
        span: Span,
    ) -> Self {
        let mut attributes = Vec::new();
        let mut methods = Vec::new();
        let mut order = Vec::new();
        for member in members {
            match member {
                Member::Attribute(attribute) => {
                    attributes.push(attribute);
                    order.push(MemberKind::Attribute);
                }
                Member::Method(method) => {
                    methods.push(method);
                    order.push(MemberKind::Method);
                }
            }
        }
        Self {
            name: name.into(),
            attributes,
            methods,
            order,
            annotations,
            span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Attributes and methods interleaved as they were declared.
    pub fn members(&self) -> impl Iterator<Item = MemberRef<'_>> + '_ {
        let mut attributes = self.attributes.iter();
        let mut methods = self.methods.iter();
        self.order.iter().filter_map(move |kind| match kind {
            MemberKind::Attribute => attributes.next().map(MemberRef::Attribute),
            MemberKind::Method => methods.next().map(MemberRef::Method),
        })
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    /// All overloads sharing `name`, in declaration order.
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Method> + 'a {
        self.methods.iter().filter(move |m| m.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Span of the interface name.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl Annotated for Interface {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Module {
    name: Ident,
    interfaces: Vec<Interface>,
    annotations: Vec<Annotation>,
    span: Span,
}

impl Module {
    pub fn new(name: impl Into<Ident>, interfaces: Vec<Interface>, annotations: Vec<Annotation>, span: Span) -> Self {
        Self {
            name: name.into(),
            interfaces,
            annotations,
            span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Interfaces in declaration order.
    pub fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    pub fn interface(&self, name: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|i| i.name() == name)
    }

    /// Span of the module name.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl Annotated for Module {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_bits() {
        assert_eq!(Visibility::Readable.bits(), 1);
        assert_eq!(Visibility::Writable.bits(), 2);
        assert_eq!(Visibility::ReadWrite.bits(), 3);
        assert_eq!(Visibility::default(), Visibility::ReadWrite);

        assert!(Visibility::Readable.is_readable());
        assert!(!Visibility::Readable.is_writable());
        assert!(!Visibility::Writable.is_readable());
        assert!(Visibility::Writable.is_writable());
        assert!(Visibility::ReadWrite.is_readable() && Visibility::ReadWrite.is_writable());
    }

    #[test]
    fn test_visibility_rejects_empty_flag_set() {
        assert_eq!(Visibility::from_bits(0), None);
        assert_eq!(Visibility::from_bits(4), None);
        for v in [Visibility::Readable, Visibility::Writable, Visibility::ReadWrite] {
            assert_eq!(Visibility::from_bits(v.bits()), Some(v));
            assert_eq!(Visibility::from_keyword(v.keyword()), Some(v));
        }
        assert_eq!(Visibility::from_keyword(KeywordId::Module), None);
    }

    #[test]
    fn test_annotation_value_display_escapes() {
        let value = AnnotationValue::String("say \"hi\"\n".to_string());
        assert_eq!(value.to_string(), r#""say \"hi\"\n""#);
        let ann = Annotation::new("since", Some(AnnotationValue::Number("2".into())), Span::default());
        assert_eq!(ann.to_string(), "@since(2)");
        assert_eq!(Annotation::new("deprecated", None, Span::default()).to_string(), "@deprecated");
    }

    #[test]
    fn test_method_display_and_overload_lookup() {
        let span = Span::default();
        let a = Method::new(
            "void",
            "set",
            vec![Parameter::new("int", "v", span)],
            Vec::new(),
            span,
        );
        let b = Method::new(
            "void",
            "set",
            vec![Parameter::new("string", "v", span)],
            Vec::new(),
            span,
        );
        assert_eq!(a.to_string(), "void set(int v)");

        let iface = Interface::new("I", Vec::new(), vec![a, b], Vec::new(), span);
        let types: Vec<Vec<&str>> = iface.methods_named("set").map(|m| m.parameter_types().collect()).collect();
        assert_eq!(types, vec![vec!["int"], vec!["string"]]);
        assert!(iface.attribute("set").is_none());
    }

    #[test]
    fn test_members_replay_declaration_order() {
        let span = Span::default();
        let attribute = |name: &str| Member::Attribute(Attribute::new(name, "int", Visibility::default(), Vec::new(), span));
        let method = |name: &str| Member::Method(Method::new("void", name, Vec::new(), Vec::new(), span));

        let iface = Interface::from_members(
            "I",
            vec![method("f"), attribute("x"), method("g"), attribute("y")],
            Vec::new(),
            span,
        );
        let names: Vec<&str> = iface.members().map(|m| m.name()).collect();
        assert_eq!(names, ["f", "x", "g", "y"]);
        assert_eq!(iface.attributes().len(), 2);
        assert_eq!(iface.methods()[1].name(), "g");

        let kinds: Vec<MemberKind> = Interface::new("J", Vec::new(), Vec::new(), Vec::new(), span)
            .members()
            .map(|m| m.kind())
            .collect();
        assert!(kinds.is_empty());
    }

    #[test]
    fn test_span_merge_keeps_earliest_position() {
        let a = Span::new(10, 12, 2, 3);
        let b = Span::new(4, 6, 1, 5);
        let merged = a.merge(b);
        assert_eq!(merged, Span::new(4, 12, 1, 5));
        assert_eq!(merged.len(), 8);
        assert_eq!(merged.to_string(), "1:5");
    }

    #[test]
    fn test_model_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Module>();
        assert_send_sync::<Interface>();
    }
}
