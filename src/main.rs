use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use services::settings::resolve_settings;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;
    log::debug!("settings: {:?}", settings);

    commands::handle_runtime_commands(&cli, settings)
}
