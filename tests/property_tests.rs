//! Property-based tests for the GIDL front end
//!
//! These tests use proptest to generate well-formed sources from a small model description and
//! check that parsing recovers that model, that formatting round-trips, and that arbitrary text
//! never panics the lexer or parser.

use gidl::ast::{Annotated, Annotation, AnnotationValue, MemberRef, Module, Span, Visibility};
use gidl::format_source;
use gidl::parser::parse_source;
use proptest::prelude::*;

// =============================================================================
// Generated models
// =============================================================================

#[derive(Debug, Clone)]
enum GenMember {
    Attribute {
        visibility: Option<Visibility>,
        ty: String,
        annotations: Vec<Annotation>,
    },
    Method {
        return_type: String,
        params: Vec<(String, String)>,
        annotations: Vec<Annotation>,
    },
}

/// modules → interfaces → members
type GenProgram = Vec<Vec<Vec<GenMember>>>;

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,7}".prop_filter("Not a keyword", |s| gidl_core::lang::keywords::from_str(s).is_none())
}

fn annotation_strategy() -> impl Strategy<Value = Annotation> {
    let value = prop_oneof![
        "[ -~\t\n]{0,8}".prop_map(AnnotationValue::String),
        "-?[0-9]{1,3}(\\.[0-9]{1,2})?".prop_map(AnnotationValue::Number),
        ident_strategy().prop_map(AnnotationValue::Word),
    ];
    (ident_strategy(), prop::option::of(value)).prop_map(|(name, value)| Annotation::new(name, value, Span::default()))
}

fn member_strategy() -> impl Strategy<Value = GenMember> {
    let annotations = || prop::collection::vec(annotation_strategy(), 0..3);
    let visibility = prop::option::of(prop::sample::select(vec![
        Visibility::Readable,
        Visibility::Writable,
        Visibility::ReadWrite,
    ]));
    prop_oneof![
        (visibility, ident_strategy(), annotations()).prop_map(|(visibility, ty, annotations)| {
            GenMember::Attribute {
                visibility,
                ty,
                annotations,
            }
        }),
        (
            ident_strategy(),
            prop::collection::vec((ident_strategy(), ident_strategy()), 0..4),
            annotations()
        )
            .prop_map(|(return_type, params, annotations)| GenMember::Method {
                return_type,
                params,
                annotations,
            }),
    ]
}

fn program_strategy() -> impl Strategy<Value = GenProgram> {
    prop::collection::vec(
        prop::collection::vec(prop::collection::vec(member_strategy(), 0..6), 0..4),
        0..4,
    )
}

/// Render a generated program; `sep` is the whitespace placed between tokens.
fn render(program: &GenProgram, sep: &str) -> String {
    let annotations = |out: &mut String, annotations: &[Annotation]| {
        for a in annotations {
            out.push_str(&a.to_string());
            out.push_str(sep);
        }
    };

    let mut out = String::new();
    for (m, interfaces) in program.iter().enumerate() {
        out.push_str(&format!("module{sep}M{m}{sep}{{{sep}"));
        for (i, members) in interfaces.iter().enumerate() {
            out.push_str(&format!("interface{sep}I{i}{sep}{{{sep}"));
            for (k, member) in members.iter().enumerate() {
                match member {
                    GenMember::Attribute {
                        visibility,
                        ty,
                        annotations: anns,
                    } => {
                        annotations(&mut out, anns);
                        if let Some(v) = visibility {
                            out.push_str(&format!("{v}{sep}"));
                        }
                        out.push_str(&format!("{ty}{sep}a{k};{sep}"));
                    }
                    GenMember::Method {
                        return_type,
                        params,
                        annotations: anns,
                    } => {
                        annotations(&mut out, anns);
                        let params: Vec<String> = params.iter().map(|(t, n)| format!("{t}{sep}{n}")).collect();
                        // Alternate names so overloads appear.
                        out.push_str(&format!(
                            "{return_type}{sep}m{}({}){sep};{sep}",
                            k % 2,
                            params.join(&format!(",{sep}"))
                        ));
                    }
                }
            }
            out.push_str(&format!("}}{sep}"));
        }
        out.push_str(&format!("}}{sep}"));
    }
    out
}

fn annotation_pairs(annotations: &[Annotation]) -> Vec<(String, Option<AnnotationValue>)> {
    annotations
        .iter()
        .map(|a| (a.name().to_string(), a.value().cloned()))
        .collect()
}

fn assert_matches_program(modules: &[Module], program: &GenProgram) -> Result<(), TestCaseError> {
    prop_assert_eq!(modules.len(), program.len());
    for (module, interfaces) in modules.iter().zip(program) {
        prop_assert_eq!(module.interfaces().len(), interfaces.len());
        for (interface, members) in module.interfaces().iter().zip(interfaces) {
            let mut parsed_members = interface.members();
            for member in members {
                let parsed = parsed_members.next().ok_or_else(|| TestCaseError::fail("missing member"))?;
                match (member, parsed) {
                    (
                        GenMember::Attribute {
                            visibility,
                            ty,
                            annotations,
                        },
                        MemberRef::Attribute(attr),
                    ) => {
                        prop_assert_eq!(attr.ty(), ty.as_str());
                        prop_assert_eq!(attr.visibility(), visibility.unwrap_or_default());
                        prop_assert_eq!(annotation_pairs(attr.annotations()), annotation_pairs(annotations));
                    }
                    (
                        GenMember::Method {
                            return_type,
                            params,
                            annotations,
                        },
                        MemberRef::Method(method),
                    ) => {
                        prop_assert_eq!(method.return_type(), return_type.as_str());
                        let parsed: Vec<(&str, &str)> = method.parameters().iter().map(|p| (p.ty(), p.name())).collect();
                        let expected: Vec<(&str, &str)> = params.iter().map(|(t, n)| (t.as_str(), n.as_str())).collect();
                        prop_assert_eq!(parsed, expected);
                        prop_assert_eq!(annotation_pairs(method.annotations()), annotation_pairs(annotations));
                    }
                    (_, other) => {
                        return Err(TestCaseError::fail(format!("member out of order: {}", other.name())));
                    }
                }
            }
            prop_assert!(parsed_members.next().is_none());
        }
    }
    Ok(())
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Property: a generated program parses back into the model it was rendered from.
    #[test]
    fn generated_programs_parse_to_their_model(program in program_strategy()) {
        let source = render(&program, " ");
        let modules = parse_source(&source).map_err(|e| TestCaseError::fail(format!("{e}\n{source}")))?;
        assert_matches_program(&modules, &program)?;
    }

    /// Property: whitespace layout does not change the model, only the spans.
    #[test]
    fn layout_does_not_change_model(program in program_strategy()) {
        let compact = parse_source(&render(&program, " ")).unwrap();
        let spread = parse_source(&render(&program, "\n\t  ")).unwrap();
        assert_matches_program(&spread, &program)?;
        prop_assert_eq!(compact.len(), spread.len());
    }

    /// Property: formatting round-trips the model and is idempotent.
    #[test]
    fn format_round_trip(program in program_strategy()) {
        let source = render(&program, " ");
        let formatted = format_source(&source).unwrap();
        let reparsed = parse_source(&formatted).unwrap();
        assert_matches_program(&reparsed, &program)?;
        prop_assert_eq!(format_source(&formatted).unwrap(), formatted);
    }

    /// Property: arbitrary input never panics; it either parses or reports one error with a
    /// span inside the source.
    #[test]
    fn arbitrary_input_never_panics(source in "[a-z{}();,@\"\\\\/*0-9. \n-]{0,80}|\\PC{0,40}") {
        match parse_source(&source) {
            Ok(_) => {}
            Err(err) => {
                let span = err.span();
                prop_assert!(span.start <= span.end);
                prop_assert!(span.end <= source.len());
                prop_assert!(span.line >= 1 && span.column >= 1);
            }
        }
    }

    /// Property: identifiers survive lexing unchanged.
    #[test]
    fn identifiers_survive_lexing(ident in ident_strategy()) {
        let tokens = gidl::lexer::lex(&ident).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].kind, &gidl::lexer::TokenKind::Ident(ident.clone()));
    }
}
