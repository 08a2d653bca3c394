use clap::Parser;
use env_logger::Env;
use log::info;

mod cli;
mod error;
mod filter;
mod pipeline;
mod policy;
mod tiling;

use cli::Args;
use error::Result;
use policy::FilterRegistry;

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let registry = FilterRegistry::default();
    pipeline::run(&args.input, &args.output, &args.filter_type, &registry)?;

    info!("Done");
    Ok(())
}
