//! Command-line player for TreeTalk dialogue trees.

mod play;

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "treetalk",
    about = "Walk a TreeTalk dialogue document in the terminal",
    version
)]
struct Cli {
    /// Document file to play
    file: PathBuf,

    /// Node to start at
    #[arg(short, long, default_value = tt_core::sentinel::START)]
    start: String,

    /// Directory relative include paths are resolved against
    #[arg(long, default_value = ".")]
    include_root: PathBuf,

    /// Log node visits and include merges to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprint!("{e}");
            process::exit(1);
        }
    };

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if !cli.file.is_file() {
        eprintln!("error: cannot find: {}", cli.file.display());
        eprintln!("{}", Cli::command().render_usage());
        process::exit(1);
    }

    let config = tt_core::TalkConfig::new()
        .with_start(cli.start)
        .with_include_root(cli.include_root);

    if let Err(e) = play::run(&cli.file, &config) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
