//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;

use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource};
use thiserror::Error;

use crate::format::{format_diff, format_source};
use gidl_syntax::ast::{Annotated, Annotation, MemberRef, Module, Span};
use gidl_syntax::diagnostics::SyntaxError;
use gidl_syntax::{lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during parsing.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

// ============================================================================
// Loading
// ============================================================================

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot access file '{}': {source}", path.display())]
    Access { path: PathBuf, source: io::Error },

    #[error("Source file '{}' is too large ({size} bytes, max {max} bytes)", path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Error reading file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
}

impl From<LoadError> for CliError {
    fn from(err: LoadError) -> Self {
        CliError::failure(err.to_string())
    }
}

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(path: &Path) -> Result<String, LoadError> {
    let metadata = fs::metadata(path).map_err(|source| LoadError::Access {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_SOURCE_SIZE,
        });
    }

    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Parsing
// ============================================================================

/// A successfully parsed source file.
#[derive(Debug)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub modules: Vec<Module>,
}

/// Why a file produced no model.
#[derive(Debug, Error)]
pub enum FileError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("{}: {error}", path.display())]
    Syntax {
        path: PathBuf,
        source_text: String,
        error: SyntaxError,
    },

    #[error("parser thread for '{}' panicked", path.display())]
    Panicked { path: PathBuf },
}

impl FileError {
    /// User-facing report: a source-annotated diagnostic for syntax errors, the message otherwise.
    pub fn render(&self) -> String {
        match self {
            FileError::Syntax {
                path,
                source_text,
                error,
            } => render_diagnostic(&path.display().to_string(), source_text, error.clone()),
            FileError::Load(_) | FileError::Panicked { .. } => self.to_string(),
        }
    }
}

impl From<FileError> for CliError {
    fn from(err: FileError) -> Self {
        CliError::failure(err.render().trim_end())
    }
}

/// Render a syntax error as a compiler-style report with the offending source lines.
pub fn render_diagnostic(file_name: &str, source: &str, error: SyntaxError) -> String {
    let report = miette::Report::new(error).with_source_code(NamedSource::new(file_name, source.to_string()));
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());

    let mut out = String::new();
    if handler.render_report(&mut out, &*report).is_err() {
        // Fall back to the one-line message.
        out = format!("{file_name}: {report}");
    }
    out
}

/// Load and parse a single file.
pub fn parse_file(path: &Path) -> Result<ParsedFile, FileError> {
    let source = read_source(path)?;
    match parser::parse_source(&source) {
        Ok(modules) => {
            tracing::debug!(path = %path.display(), modules = modules.len(), "parsed file");
            Ok(ParsedFile {
                path: path.to_path_buf(),
                modules,
            })
        }
        Err(error) => Err(FileError::Syntax {
            path: path.to_path_buf(),
            source_text: source,
            error,
        }),
    }
}

/// Parse many files in parallel, returning one result per path in input order.
///
/// Each worker thread owns a contiguous chunk of the paths and parses them one after another;
/// every parse builds its own token stream and model, so the workers share nothing mutable.
pub fn parse_files(paths: &[PathBuf]) -> Vec<Result<ParsedFile, FileError>> {
    let workers = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
        .min(paths.len())
        .max(1);
    let chunk_size = paths.len().div_ceil(workers).max(1);
    tracing::info!(files = paths.len(), workers, "parsing files");

    thread::scope(|scope| {
        let handles: Vec<_> = paths
            .chunks(chunk_size)
            .map(|chunk| (chunk, scope.spawn(move || chunk.iter().map(|p| parse_file(p)).collect::<Vec<_>>())))
            .collect();

        handles
            .into_iter()
            .flat_map(|(chunk, handle)| match handle.join() {
                Ok(results) => results,
                Err(_) => chunk
                    .iter()
                    .map(|path| Err(FileError::Panicked { path: path.clone() }))
                    .collect(),
            })
            .collect()
    })
}

// ============================================================================
// Commands
// ============================================================================

/// Parse every file and report each failure.
pub fn check_files(paths: &[PathBuf]) -> CliResult<ExitCode> {
    let results = parse_files(paths);
    let mut failed = 0usize;

    for result in &results {
        match result {
            Ok(parsed) => println!("ok: {} ({} module(s))", parsed.path.display(), parsed.modules.len()),
            Err(err) => {
                failed += 1;
                eprintln!("{}", err.render());
            }
        }
    }

    if failed > 0 {
        return Err(CliError::failure(format!(
            "{failed} of {} file(s) failed to parse",
            results.len()
        )));
    }
    println!("✓ {} file(s) parsed", results.len());
    Ok(ExitCode::SUCCESS)
}

/// Print the model of a file as a tree or as JSON.
pub fn dump_file(path: &Path, json: bool) -> CliResult<ExitCode> {
    let parsed = parse_file(path)?;
    if json {
        let out = serde_json::to_string_pretty(&parsed.modules)
            .map_err(|e| CliError::failure(format!("Error serializing model: {e}")))?;
        println!("{out}");
    } else {
        print!("{}", dump_tree(&parsed.modules));
    }
    Ok(ExitCode::SUCCESS)
}

/// Indented, human-readable view of a model, one declaration per line with its position.
///
/// Members are listed in declaration order.
pub fn dump_tree(modules: &[Module]) -> String {
    fn line(out: &mut String, depth: usize, head: &str, annotations: &[Annotation], span: Span) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(head);
        for annotation in annotations {
            out.push(' ');
            out.push_str(&annotation.to_string());
        }
        out.push_str(&format!(" [{span}]\n"));
    }

    let mut out = String::new();
    for module in modules {
        let head = format!("module {}", module.name());
        line(&mut out, 0, &head, module.annotations(), module.span());

        for interface in module.interfaces() {
            let head = format!("interface {}", interface.name());
            line(&mut out, 1, &head, interface.annotations(), interface.span());

            for member in interface.members() {
                match member {
                    MemberRef::Attribute(attribute) => {
                        let head = format!("attribute {attribute}");
                        line(&mut out, 2, &head, attribute.annotations(), attribute.span());
                    }
                    MemberRef::Method(method) => {
                        let head = format!("method {method}");
                        line(&mut out, 2, &head, method.annotations(), method.span());
                    }
                }
            }
        }
    }
    out
}

/// Tokenize and print the token stream.
pub fn lex_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let tokens = lexer::lex(&source).map_err(|error| {
        CliError::failure(render_diagnostic(&path.display().to_string(), &source, error.into()).trim_end())
    })?;

    for tok in &tokens {
        println!("{}\t{}", tok.span, tok.kind);
    }
    Ok(ExitCode::SUCCESS)
}

/// Format GIDL source files.
///
/// Files that contain comments are skipped in every mode: comments are not part of the model, so
/// formatting would drop them, and `--check` must agree with what a rewrite would do.
pub fn format_files(paths: &[PathBuf], check_mode: bool, diff_mode: bool) -> CliResult<ExitCode> {
    let mut needs_formatting = 0usize;
    let mut formatted_count = 0usize;
    let mut skipped_count = 0usize;
    let mut error_count = 0usize;

    for path in paths {
        let source = match read_source(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{e}");
                error_count += 1;
                continue;
            }
        };

        let formatted = match format_source(&source) {
            Ok(formatted) => formatted,
            Err(error) => {
                eprintln!("{}", render_diagnostic(&path.display().to_string(), &source, error));
                error_count += 1;
                continue;
            }
        };
        if lexer::comments(&source).is_ok_and(|c| !c.is_empty()) {
            eprintln!("Skipped {}: formatting would remove its comments", path.display());
            skipped_count += 1;
            continue;
        }
        if source == formatted {
            continue;
        }
        needs_formatting += 1;

        if diff_mode {
            println!("--- {}", path.display());
            if let Ok(Some(diff)) = format_diff(&source) {
                print!("{diff}");
            }
            println!();
        }

        if check_mode {
            println!("Would reformat: {}", path.display());
        } else if !diff_mode {
            if let Err(e) = fs::write(path, &formatted) {
                eprintln!("Error writing {}: {}", path.display(), e);
                error_count += 1;
            } else {
                println!("Formatted: {}", path.display());
                formatted_count += 1;
            }
        }
    }

    if check_mode || diff_mode {
        if needs_formatting > 0 {
            let msg = if diff_mode { "need formatting" } else { "would be reformatted" };
            return Err(CliError::failure(format!("\n{needs_formatting} file(s) {msg}")));
        }
        if error_count == 0 {
            println!(
                "✓ {} file(s) already formatted, {skipped_count} skipped",
                paths.len() - skipped_count
            );
        }
    } else {
        println!(
            "\n✓ {formatted_count} file(s) formatted, {skipped_count} skipped, {error_count} error(s)"
        );
    }

    if error_count > 0 {
        return Err(CliError::new("", ExitCode::FAILURE));
    }
    Ok(ExitCode::SUCCESS)
}
