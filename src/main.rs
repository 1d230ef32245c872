mod app;
mod cli;
mod commands;
mod config;
mod editor;
mod error;
mod prompt;
mod template;
mod ui;
mod validation;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use config::{ConfigStore, default_config_dir};
use template::TemplateFiles;
use ui::{configure_theme, detect_theme_kind_from_env, print_error, print_success};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level());
    configure_theme(detect_theme_kind_from_env());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env("GOGI_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => default_config_dir().context("could not determine home directory")?,
    };
    let store = ConfigStore::in_dir(&config_dir);

    if cli
        .args
        .first()
        .is_some_and(|arg| arg.eq_ignore_ascii_case(commands::INIT))
    {
        store.init()?;
        return print_success(
            &mut std::io::stdout(),
            &format!("configuration initialized at {}", store.path().display()),
        );
    }

    let config = store.load()?;
    let cwd = env::current_dir().context("could not get current working directory")?;
    let mut app = App::new(config, store, TemplateFiles::new(config_dir), cwd)
        .assume_yes(cli.yes)
        .strict(cli.strict);

    if cli.args.is_empty() {
        app.quick()
    } else {
        app.dispatch(&cli.args)
    }
}
