//! Lexical check command.
//!
//! Lexes every input, renders the collected diagnostics against their
//! source lines and fails when any lexical error was found.
//!
//! Malformed UTF-8 ends a source the same way it ends a streamed one in the
//! tokens command: the valid prefix is lexed and the rest is dropped with a
//! warning.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use collc_lex::Lexer;
use collc_util::{Diagnostic, Handler, SourceMap};
use tracing::{debug, info, warn};

use crate::commands::input_path;
use crate::error::{DriverError, Result};

/// Display name used for standard input.
const STDIN_NAME: &str = "<stdin>";

/// Arguments for the check command.
#[derive(Debug)]
pub struct CheckArgs {
    /// Source files; standard input when empty.
    pub files: Vec<PathBuf>,
    /// Maximum number of diagnostics rendered; 0 means no limit.
    pub max_errors: usize,
}

/// Run the check command.
///
/// # Returns
/// * `Err(DriverError::LexicalErrors)` - if any input has a lexical error
pub fn run_check(args: CheckArgs) -> Result<()> {
    let handler = Handler::new();
    let mut sources = SourceMap::new();

    if args.files.is_empty() {
        check_source(&mut sources, &handler, STDIN_NAME, read_stdin()?);
    } else {
        for path in &args.files {
            match input_path(Some(path.as_path())) {
                Some(path) => {
                    let name = path.display().to_string();
                    let content = read_file(path)?;
                    check_source(&mut sources, &handler, &name, decode_source(&name, content));
                },
                None => check_source(&mut sources, &handler, STDIN_NAME, read_stdin()?),
            }
        }
    }

    report(&sources, &handler.diagnostics(), args.max_errors, &mut io::stderr().lock())?;

    let errors = handler.error_count();
    if errors > 0 {
        return Err(DriverError::LexicalErrors(errors));
    }
    info!(files = sources.len(), "no lexical errors");
    Ok(())
}

/// Registers `content` under `name` and lexes it to the end.
fn check_source(sources: &mut SourceMap, handler: &Handler, name: &str, content: String) {
    let file_id = sources.add_file(name, content.as_str());
    let count = Lexer::for_str(&content, handler)
        .with_file_id(file_id)
        .count();
    debug!(file = name, tokens = count, "lexed source");
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| DriverError::ReadSource {
        path: path.to_path_buf(),
        source,
    })
}

fn read_stdin() -> Result<String> {
    let mut content = Vec::new();
    io::stdin().read_to_end(&mut content)?;
    Ok(decode_source(STDIN_NAME, content))
}

/// Decodes `bytes` as UTF-8, keeping only the prefix before the first
/// malformed sequence.
fn decode_source(name: &str, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(err) => {
            let valid = err.utf8_error().valid_up_to();
            warn!(file = name, offset = valid, "invalid UTF-8 in source, treating as end of input");
            let mut bytes = err.into_bytes();
            bytes.truncate(valid);
            String::from_utf8(bytes).unwrap_or_default()
        },
    }
}

/// Writes rendered diagnostics to `out`, at most `max_errors` of them
/// unless `max_errors` is 0.
fn report<W: Write>(
    sources: &SourceMap,
    diagnostics: &[Diagnostic],
    max_errors: usize,
    out: &mut W,
) -> Result<()> {
    let limit = if max_errors == 0 {
        diagnostics.len()
    } else {
        max_errors.min(diagnostics.len())
    };

    for diagnostic in &diagnostics[..limit] {
        writeln!(out, "{}\n", sources.render(diagnostic))?;
    }

    let hidden = diagnostics.len() - limit;
    if hidden > 0 {
        writeln!(out, "note: {} more diagnostic(s) not shown", hidden)?;
    }
    Ok(())
}
