use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use clap::Parser;
use romana::{
    Options,
    driver::{report, run},
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// romana evaluates arithmetic written in Roman numerals, one expression per
/// line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single expression instead of reading lines.
    #[arg(short, long, conflicts_with = "file")]
    expression: Option<String>,

    /// Reads expressions from a file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Rejects numerals that are not written in canonical form.
    #[arg(long)]
    strict: bool,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();
    let options = Options { strict_numerals: args.strict };
    let mut stdout = io::stdout().lock();

    let written = if let Some(expression) = &args.expression {
        report(expression, &mut stdout, &options)
    } else {
        let input: Box<dyn BufRead> = match &args.file {
            Some(path) => match File::open(path) {
                Ok(file) => Box::new(BufReader::new(file)),
                Err(e) => {
                    eprintln!("Failed to read the input file '{}': {e}", path.display());
                    std::process::exit(1);
                },
            },
            None => Box::new(io::stdin().lock()),
        };
        run(input, &mut stdout, &options)
    };

    if let Err(e) = written {
        warn!(error = %e, "failed to write output");
    }
}
