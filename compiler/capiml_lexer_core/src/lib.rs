//! Low-level tokenizer for CAPIML.
//!
//! Turns raw CAPIML text into a flat stream of classified [`Token`]s. The
//! scanner runs over a sentinel-terminated [`SourceBuffer`] with a single
//! forward-only [`Cursor`], and every token's lexeme is a borrowed slice of
//! that buffer: no allocation happens while scanning.
//!
//! ```
//! use capiml_lexer_core::{Lexer, SourceBuffer, TokenKind};
//!
//! let buf = SourceBuffer::new("key: 42");
//! let mut lexer = Lexer::new(buf.cursor());
//!
//! let key = lexer.next_token();
//! assert_eq!(key.kind(), TokenKind::Identifier);
//! assert_eq!(key.lexeme(), "key");
//! assert!(lexer.next_token().is(TokenKind::Colon));
//! assert_eq!(lexer.next_token().lexeme(), "42");
//! assert!(lexer.next_token().is(TokenKind::End));
//! ```
//!
//! There is no parser here. Bracket balance, nesting, and escape sequences
//! are left to whatever consumes the token stream.

mod cursor;
mod lexer;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use lexer::{tokenize, Lexer};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use token::{Span, Token, TokenKind};
