//! `hello-args` entry-point: parse arguments, build the greeting, print it.

use hello_args::cli::parse_command_line;
use hello_args::error::Result;
use hello_args::message::{build_plan, print_plan};
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_command_line(&args)?;
    let plan = build_plan(&command)?;
    print_plan(&plan)?;
    Ok(())
}
