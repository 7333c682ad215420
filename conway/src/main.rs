// main.rs - Entry point: parse arguments, run the simulation, report failures

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use conway::{Args, Config};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Program failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::parse();
    log::debug!("running with {args:?}");

    let config = Config::try_from(args).context("invalid configuration")?;
    conway::run(&config, io::stdout().lock())
}
