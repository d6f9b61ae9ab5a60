use std::{fs, process::ExitCode};

use clap::Parser;
use sprig::{
    Options, interpret,
    interpreter::evaluator::ConsoleBridge,
    io::ConsoleSink,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// sprig is a small scripting language with first-class functions and
/// lexical closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as the path of a script file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Print the scanned tokens before running.
    #[arg(short, long)]
    tokens: bool,

    /// Print the syntax tree before running.
    #[arg(short, long)]
    ast: bool,

    /// Render diagnostics without ANSI colors.
    #[arg(long)]
    no_color: bool,

    contents: String,
}

/// Installs a stderr logger when `SPRIG_LOG` or `RUST_LOG` is set.
fn init_tracing() {
    let filter = std::env::var("SPRIG_LOG").or_else(|_| std::env::var("RUST_LOG"));
    if let Ok(filter) = filter {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::new(filter))
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let options = Options { dump_tokens: args.tokens,
                            dump_ast:    args.ast, };
    let mut sink = ConsoleSink::new(!args.no_color);
    let mut bridge = ConsoleBridge;

    if interpret(&script, &options, &mut sink, &mut bridge) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
