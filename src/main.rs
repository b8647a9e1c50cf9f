use std::fs;

use clap::Parser;
use rpncalc::get_result;

/// rpncalc evaluates arithmetic expressions in reverse polish notation, for
/// example `3 4 + 2 *`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpncalc to read the expression from a file.
    #[arg(short, long)]
    file: bool,

    /// Prints the numeric kind (integer or float) after the result.
    #[arg(short = 'k', long)]
    show_kind: bool,

    contents: String,
}

/// Installs a stderr logger when `RUST_LOG` is set, e.g. `RUST_LOG=rpncalc=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();

    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match get_result(&expression) {
        Ok(value) if args.show_kind => println!("{value} ({})", value.kind()),
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
