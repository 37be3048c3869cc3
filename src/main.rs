mod api;
mod app;
mod cli;
mod config;
mod consts;
mod error;
mod events;
mod output;
mod query;
mod view;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();

    let config = if cli.debug {
        Config::load()
    } else {
        Config::load_quiet()
    };
    let cli = cli.with_config(&config);

    let code = app::run(&cli, &config);
    if code != 0 {
        std::process::exit(code);
    }
}
