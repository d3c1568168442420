//! Hand-written CAPIML lexer.
//!
//! The lexer runs over a sentinel-terminated [`Cursor`] and produces one
//! [`Token`] per call with no heap allocation and no backtracking.
//!
//! # Design
//!
//! Whitespace is skipped first, then the main dispatch classifies the byte
//! under the cursor with range patterns. Each arm calls a focused method that
//! advances the cursor and returns the token. The sentinel byte (`0x00`)
//! dispatches to `end()`.
//!
//! Malformed input never produces an `Err`: an unrecognized character is an
//! `Unexpected` token, and strings left open at a newline or end of input
//! are still `String` tokens.

use crate::cursor::Cursor;
use crate::token::{Span, Token, TokenKind};
use crate::SourceBuffer;


/// Pure, allocation-free CAPIML lexer.
///
/// The only state is the cursor, so a lexer can be paused between calls or
/// cloned to resume scanning later from the same point.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer from a cursor, usually `SourceBuffer::cursor()`.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Current byte offset into the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next token.
    ///
    /// Returns `End` with an empty lexeme once the source is exhausted.
    /// Subsequent calls after `End` continue to return `End` without moving.
    pub fn next_token(&mut self) -> Token<'a> {
        self.cursor.eat_whitespace();
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 if self.cursor.is_eof() => self.end(),
            b'a'..=b'z' | b'A'..=b'Z' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            quote @ (b'"' | b'\'') => self.string(quote),
            b'#' => self.comment(),
            b'-' => self.atom(start, TokenKind::Minus),
            b':' => self.atom(start, TokenKind::Colon),
            b'[' => self.atom(start, TokenKind::LeftSquare),
            b']' => self.atom(start, TokenKind::RightSquare),
            b'{' => self.atom(start, TokenKind::LeftCurly),
            b'}' => self.atom(start, TokenKind::RightCurly),
            _ => self.unexpected(start),
        }
    }

    // ─── Helpers ───────────────────────────────────────────────────

    #[inline]
    fn token_from(&self, kind: TokenKind, start: u32) -> Token<'a> {
        let end = self.cursor.pos();
        Token::new(kind, Span::new(start, end), self.cursor.slice(start, end))
    }

    fn end(&self) -> Token<'a> {
        Token::new(TokenKind::End, Span::point(self.cursor.pos()), "")
    }

    /// Single-byte token: advance one byte and emit `kind`.
    fn atom(&mut self, start: u32, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        self.token_from(kind, start)
    }

    /// Anything the dispatch does not recognize, including interior nulls.
    ///
    /// Consumes a whole UTF-8 character so the lexeme stays valid `&str`.
    fn unexpected(&mut self, start: u32) -> Token<'a> {
        self.cursor.advance_char();
        self.token_from(TokenKind::Unexpected, start)
    }

    // ─── Identifiers & Numbers ─────────────────────────────────────

    fn identifier(&mut self, start: u32) -> Token<'a> {
        self.cursor.advance(); // leading letter, already validated
        self.cursor.eat_while(is_ident_continue);
        self.token_from(TokenKind::Identifier, start)
    }

    /// Plain decimal digits: no sign, no fraction, no exponent.
    fn number(&mut self, start: u32) -> Token<'a> {
        self.cursor.advance();
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.token_from(TokenKind::Number, start)
    }

    // ─── Strings & Comments ────────────────────────────────────────

    /// `"..."` or `'...'`. Quotes are excluded from the lexeme.
    ///
    /// Stops at the matching quote, a newline, or end of input. Only the
    /// matching quote is consumed; an unterminated string is still a
    /// `String` token.
    fn string(&mut self, quote: u8) -> Token<'a> {
        self.cursor.advance(); // opening quote
        let start = self.cursor.pos();
        let stop = self.cursor.skip_to_string_end(quote);
        let tok = self.token_from(TokenKind::String, start);
        if stop == quote {
            self.cursor.advance();
        }
        tok
    }

    /// `#` through end of line. The `#` is excluded and the newline is left
    /// for the whitespace skipper.
    fn comment(&mut self) -> Token<'a> {
        self.cursor.advance(); // '#'
        let start = self.cursor.pos();
        self.cursor.eat_until_newline_or_eof();
        self.token_from(TokenKind::Comment, start)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields every token before `End`, including `Unexpected` ones.
    fn next(&mut self) -> Option<Token<'a>> {
        let tok = self.next_token();
        if tok.is(TokenKind::End) {
            None
        } else {
            Some(tok)
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Letters, digits, and `_` may follow the first letter of an identifier.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Scan a whole buffer, collecting every token before `End`.
///
/// Keeps going past `Unexpected` tokens; use [`Lexer::next_token`] directly
/// to stop at the first one.
pub fn tokenize(buf: &SourceBuffer) -> Vec<Token<'_>> {
    Lexer::new(buf.cursor()).collect()
}
