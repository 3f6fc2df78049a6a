use anyhow::Result;
use log::debug;
use std::{env::args_os, process::exit};
use with_direnv::{Config, exit_code, relay};

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or_default();

    let config = Config::from_env()?;
    debug!("{config:?}");

    // Every argument after our own name belongs to the relayed command, including ones that look
    // like options.
    let status = relay().config(config).args(args_os().skip(1)).status()?;

    exit(exit_code(status));
}
