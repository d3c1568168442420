//! Command handlers for the `capiml` CLI.
//!
//! Each submodule implements one command. Handlers return their outcome to
//! `main.rs`, which owns printing top-level errors and the exit status.

mod lex;

pub use lex::{lex_file, write_tokens, LexError, LexOptions, LexSummary};
