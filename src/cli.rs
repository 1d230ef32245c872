use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "gogi - manage your own gitignore templates",
    after_help = "Run `gogi help` for the list of commands. With no command, \
                  gogi generates .gitignore from your base template."
)]
pub struct Cli {
    /// Directory holding gogi.json and the template files
    #[arg(long, env = "GOGI_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Answer yes to every confirmation for this run
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Fail on unknown commands instead of printing a hint
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command followed by its arguments, e.g. `generate rust --force`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub args: Vec<String>,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
