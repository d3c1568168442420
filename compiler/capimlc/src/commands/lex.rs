//! `capiml lex`: tokenize a file and print one line per token.

use std::io::{self, Write};

use capiml_lexer_core::{Lexer, Span, TokenKind};

use crate::input::{LoadError, SourceFile};


/// Options for the `lex` command, parsed from the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Keep scanning past `Unexpected` tokens instead of stopping at the
    /// first one.
    pub keep_going: bool,
    /// Append each token's byte span to its line.
    pub show_spans: bool,
}

impl LexOptions {
    /// Apply one command-line flag. Returns `false` for flags `lex` does
    /// not know.
    pub fn apply_flag(&mut self, flag: &str) -> bool {
        match flag {
            "--keep-going" | "-k" => self.keep_going = true,
            "--spans" => self.show_spans = true,
            _ => return false,
        }
        true
    }
}

/// What a `lex` run produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexSummary {
    /// Token lines written.
    pub printed: usize,
    /// Spans of every `Unexpected` token seen, in source order.
    pub unexpected: Vec<Span>,
}

impl LexSummary {
    pub fn has_errors(&self) -> bool {
        !self.unexpected.is_empty()
    }
}

/// Failure of the `lex` command as a whole.
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Write the token stream of `file` to `out`.
///
/// Without `keep_going` this stops at the first terminal token (`End` or
/// `Unexpected`) and does not print it, so one bad character truncates the
/// listing. With `keep_going` every token before `End` is printed.
pub fn write_tokens<W: Write>(
    out: &mut W,
    file: &SourceFile,
    options: LexOptions,
) -> io::Result<LexSummary> {
    let mut lexer = Lexer::new(file.buffer().cursor());
    let mut summary = LexSummary::default();

    loop {
        let tok = lexer.next_token();
        tracing::trace!(kind = %tok.kind(), span = %tok.span(), "token");

        if tok.is(TokenKind::Unexpected) {
            summary.unexpected.push(tok.span());
        }
        if tok.is(TokenKind::End) || (!options.keep_going && tok.kind().is_terminal()) {
            break;
        }

        write!(out, "{:>12} |{}|", tok.kind(), tok.lexeme())?;
        if options.show_spans {
            write!(out, " @ {}", tok.span())?;
        }
        writeln!(out)?;
        summary.printed += 1;
    }

    tracing::debug!(
        printed = summary.printed,
        unexpected = summary.unexpected.len(),
        "lexed file"
    );
    Ok(summary)
}

/// Load `path`, print its tokens to stdout, and report problems to stderr.
pub fn lex_file(path: &str, options: LexOptions) -> Result<LexSummary, LexError> {
    let file = SourceFile::load(path)?;

    for issue in file.buffer().encoding_issues() {
        let (line, col) = file.line_col(issue.pos);
        eprintln!(
            "warning: {path}:{line}:{col}: {}",
            issue.kind.description()
        );
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let summary = write_tokens(&mut out, &file, options)?;
    out.flush()?;

    if options.keep_going {
        let source = file.buffer().as_bytes();
        for span in &summary.unexpected {
            let (line, col) = file.line_col(span.start);
            let text = String::from_utf8_lossy(&source[span.to_range()]);
            eprintln!("error: {path}:{line}:{col}: unexpected character {text:?}");
        }
    }

    Ok(summary)
}
