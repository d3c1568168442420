//! CAPIML driver.
//!
//! Loads CAPIML files into sentinel-terminated buffers and runs the
//! tokenizer from `capiml_lexer_core` over them.
//!
//! ```text
//! path ──► SourceFile::load ──► SourceBuffer ──► Lexer ──► token lines
//!                │
//!                └──► LoadError (missing, unreadable, not UTF-8)
//! ```

pub mod commands;
pub mod input;

pub use commands::{lex_file, write_tokens, LexError, LexOptions, LexSummary};
pub use input::{LoadError, SourceFile};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=capimlc=debug` or `RUST_LOG=capimlc=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        }
    });
}
