use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hinner::render::OutputFormat;
use hinner::repl::{Repl, print_outcome};
use hinner::session::Session;

/// Build the semantic tree and the type tree of small lambda expressions
#[derive(Parser, Debug)]
#[command(name = "hinner")]
#[command(about = "Semantic and type trees for a small lambda calculus", long_about = None)]
struct Args {
    /// Expressions or type declarations to check in order; starts the REPL when empty
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// How trees are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Dot)]
    format: OutputFormat,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.inputs.is_empty() {
        let mut repl = Repl::new(args.format)?;
        return repl.run();
    }

    let mut session = Session::new();
    let mut rejected = false;
    for input in &args.inputs {
        if args.format == OutputFormat::Dot {
            println!("> {}", input);
        }
        let result = session.submit(input);
        rejected |= result.is_err();
        print_outcome(&result, session.symbols(), args.format)?;
    }

    if rejected {
        std::process::exit(1);
    }
    Ok(())
}
