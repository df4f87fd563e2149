use clap::{ArgAction, Parser};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use self::analyze::AnalyzeArg;

mod analyze;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(flatten)]
    analyze: AnalyzeArg,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);
    analyze::run(&args.analyze)
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
