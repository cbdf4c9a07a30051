//! Token dump command.
//!
//! Streams a source file (or standard input) through the lexer and prints
//! every token as it is produced.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use collc_lex::{CharSource, Lexer, Token};
use collc_util::Handler;
use tracing::debug;

use crate::commands::input_path;
use crate::config::OutputFormat;
use crate::error::{DriverError, Result};

/// Arguments for the tokens command.
#[derive(Debug)]
pub struct TokensArgs {
    /// Source file; standard input when `None` or `-`.
    pub file: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Print the final end-of-input token.
    pub include_eof: bool,
}

/// Run the tokens command.
///
/// Lexical errors show up as `ERROR` tokens in the dump; they do not make
/// the command fail.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let handler = Handler::new();
    let mut out = BufWriter::new(io::stdout().lock());

    let count = match input_path(args.file.as_deref()) {
        Some(path) => {
            let file = File::open(path).map_err(|source| DriverError::ReadSource {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(path = %path.display(), "lexing file");
            write_tokens(Lexer::for_reader(file, &handler), &args, &mut out)?
        },
        None => {
            debug!("lexing standard input");
            write_tokens(Lexer::for_reader(io::stdin().lock(), &handler), &args, &mut out)?
        },
    };

    out.flush()?;
    debug!(
        tokens = count,
        errors = handler.error_count(),
        "token dump finished"
    );
    Ok(())
}

/// Writes every token from `lexer` to `out`, returning how many were written.
fn write_tokens<S: CharSource, W: Write>(
    mut lexer: Lexer<'_, S>,
    args: &TokensArgs,
    out: &mut W,
) -> Result<usize> {
    let mut count = 0;
    loop {
        let token = lexer.next_token();
        let eof = token.is_eof();
        if !eof || args.include_eof {
            write_token(&token, args.format, out)?;
            count += 1;
        }
        if eof {
            return Ok(count);
        }
    }
}

fn write_token<W: Write>(token: &Token, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(
            out,
            "{}:{}\t{}\t{}",
            token.line(),
            token.column(),
            token.kind(),
            token.text().escape_debug()
        )?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, token)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
