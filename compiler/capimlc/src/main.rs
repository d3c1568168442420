//! CAPIML command-line driver.

use capimlc::{init_tracing, lex_file, LexOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let mut options = LexOptions::default();
            let mut path = None;

            for arg in args.iter().skip(2) {
                if options.apply_flag(arg) {
                    continue;
                }
                if arg.starts_with('-') {
                    eprintln!("error: unknown option '{arg}'");
                    eprintln!("Usage: capiml lex <file.capiml> [--keep-going] [--spans]");
                    std::process::exit(1);
                }
                if path.is_none() {
                    path = Some(arg.as_str());
                }
            }

            let Some(path) = path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: capiml lex <file.capiml> [--keep-going] [--spans]");
                std::process::exit(1);
            };

            match lex_file(path, options) {
                Ok(summary) => {
                    if options.keep_going && summary.has_errors() {
                        eprintln!(
                            "error: {} unexpected character(s) in '{path}'",
                            summary.unexpected.len()
                        );
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("capiml {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare path is shorthand for `lex <path>`.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("capiml"))
            {
                if let Err(e) = lex_file(command, LexOptions::default()) {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("CAPIML tokenizer");
    println!();
    println!("Usage: capiml <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.capiml>    Tokenize a file and print one token per line");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --keep-going, -k     Continue past unexpected characters and report them all");
    println!("  --spans              Show the byte span of each token");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable debug tracing (e.g. RUST_LOG=capimlc=debug)");
    println!();
    println!("Examples:");
    println!("  capiml lex cfg.capiml");
    println!("  capiml lex cfg.capiml --spans");
    println!("  capiml lex cfg.capiml --keep-going   # exit 1 if anything was unexpected");
    println!("  capiml cfg.capiml                    # shorthand for `lex`");
}
