//! Token kinds and the borrowed token value the lexer produces.

use std::fmt;

#[cfg(test)]
mod tests;

/// Token kind for CAPIML.
///
/// Closed set. `End` and `Unexpected` are the terminal kinds: a consumer
/// that follows the default policy stops at either one.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `[A-Za-z][A-Za-z0-9_]*`
    Identifier,
    /// `:`
    Colon,
    /// `-`, always on its own (never part of a number).
    Minus,
    /// `[0-9]+`
    Number,
    /// `#` through end of line; the lexeme excludes the `#`.
    Comment,
    /// Reserved. The lexer never produces it: `#` always starts a `Comment`.
    Hash,
    /// `"..."` or `'...'`; the lexeme excludes the quotes.
    String,
    /// `[`
    LeftSquare,
    /// `]`
    RightSquare,
    /// `{`
    LeftCurly,
    /// `}`
    RightCurly,
    /// Input exhausted. Zero-length lexeme at the end of the source.
    End,
    /// Unrecognized leading character; the lexeme is that one character.
    Unexpected,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 13] = [
        TokenKind::Identifier,
        TokenKind::Colon,
        TokenKind::Minus,
        TokenKind::Number,
        TokenKind::Comment,
        TokenKind::Hash,
        TokenKind::String,
        TokenKind::LeftSquare,
        TokenKind::RightSquare,
        TokenKind::LeftCurly,
        TokenKind::RightCurly,
        TokenKind::End,
        TokenKind::Unexpected,
    ];

    /// Human-readable name, as printed by the diagnostic driver.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Colon => "Colon",
            TokenKind::Minus => "Minus",
            TokenKind::Number => "Number",
            TokenKind::Comment => "Comment",
            TokenKind::Hash => "Hash",
            TokenKind::String => "String",
            TokenKind::LeftSquare => "LeftSquare",
            TokenKind::RightSquare => "RightSquare",
            TokenKind::LeftCurly => "LeftCurly",
            TokenKind::RightCurly => "RightCurly",
            TokenKind::End => "End",
            TokenKind::Unexpected => "Unexpected",
        }
    }

    /// The fixed lexeme for single-character atoms, `None` for kinds whose
    /// lexeme depends on the source.
    pub fn atom_lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Colon => Some(":"),
            TokenKind::Minus => Some("-"),
            TokenKind::LeftSquare => Some("["),
            TokenKind::RightSquare => Some("]"),
            TokenKind::LeftCurly => Some("{"),
            TokenKind::RightCurly => Some("}"),
            TokenKind::Identifier
            | TokenKind::Number
            | TokenKind::Comment
            | TokenKind::Hash
            | TokenKind::String
            | TokenKind::End
            | TokenKind::Unexpected => None,
        }
    }

    /// `End` or `Unexpected`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, TokenKind::End | TokenKind::Unexpected)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment flags work: the driver prints `{:>12}`.
        f.pad(self.name())
    }
}

/// Byte range `[start, end)` in the source.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a point span (zero-length).
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A classified slice of the source.
///
/// The lexeme is borrowed from the [`SourceBuffer`](crate::SourceBuffer),
/// so a token cannot outlive the buffer it was scanned from. For `String`
/// and `Comment` the span covers the lexeme only, not the quotes or `#`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    kind: TokenKind,
    span: Span,
    lexeme: &'a str,
}

impl<'a> Token<'a> {
    #[inline]
    pub(crate) fn new(kind: TokenKind, span: Span, lexeme: &'a str) -> Self {
        debug_assert_eq!(span.len() as usize, lexeme.len());
        Token { kind, span, lexeme }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// The exact source text this token covers.
    #[inline]
    pub fn lexeme(&self) -> &'a str {
        self.lexeme
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn is_not(&self, kind: TokenKind) -> bool {
        self.kind != kind
    }

    /// Returns `true` if this token's kind is any of `kinds`.
    #[inline]
    pub fn is_one_of(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) @ {}", self.kind, self.lexeme, self.span)
    }
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);
