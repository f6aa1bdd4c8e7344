use clap::{Parser, Subcommand};
use unitool::commands;
use unitool::engine::UcdEngine;
use unitool::{Result, ToolError};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // Help and version requests exit 0; every other parse failure
            // (missing command, unknown command, wrong arity) exits 1.
            let _ = error.print();
            let code = if error.use_stderr() { 1 } else { 0 };
            std::process::exit(code);
        }
    };
    if let Err(error) = init_tracing().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    let engine = UcdEngine::new();
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    match cli.command {
        Command::Dump => commands::dump(&engine, stdin, stdout),
        Command::Info => commands::info(&engine, stdin, stdout),
        Command::Transform(args) => commands::transform(&engine, &args.spec, stdin, stdout),
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Inspect and transform the Unicode text arriving on stdin."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show terse information about characters.
    Dump,
    /// Show detailed information about characters.
    Info,
    /// Apply a named transform to the character stream.
    Transform(TransformArgs),
}

#[derive(clap::Args)]
struct TransformArgs {
    /// Transform specification, e.g. "NFC", "Latin-ASCII", or "NFD; Lower".
    spec: String,
}
