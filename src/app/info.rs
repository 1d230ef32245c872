use anyhow::Result;
use std::io::Write;

use super::{App, Args};
use crate::commands::{self, ALIASES, COMMANDS};
use crate::error::GogiError;

impl App {
    /// Lists every command, or the usage line of one.
    pub(super) fn help(&mut self, args: &[String]) -> Result<()> {
        let args = Args::parse(args, &[], 1)?;
        if let Some(token) = args.first() {
            let name = commands::resolve(token);
            let spec = commands::lookup(&name).ok_or(GogiError::UnknownCommand(name))?;
            return self.line(&format!("{}: {}", spec.name, spec.usage));
        }

        let width = COMMANDS.iter().map(|spec| spec.name.len()).max().unwrap_or(0);
        for spec in COMMANDS {
            writeln!(self.out, "{:>width$}: {}", spec.name, spec.description, width = width)?;
        }
        self.hint(
            "\nRun `gogi init` once to set up the configuration. \
             Run `gogi` with no command to generate .gitignore from the base template.",
        )
    }

    pub(super) fn alias(&mut self, args: &[String]) -> Result<()> {
        Args::parse(args, &[], 0)?;
        self.line("the available aliases are")?;
        for (alias, command) in ALIASES {
            writeln!(self.out, "{} -> {}", alias, command.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::{Fixture, error_kind};
    use crate::commands::COMMANDS;
    use crate::error::GogiError;

    #[test]
    fn help_lists_every_command_right_aligned() {
        let mut fx = Fixture::new("");
        fx.run(&["help"]).unwrap();
        let out = fx.out.contents();

        for spec in COMMANDS {
            assert!(out.contains(spec.description), "{} missing", spec.name);
        }
        assert!(out.contains("generate: Generate a .gitignore file"));
        assert!(out.contains("\n    list: List all the templates\n"));
    }

    #[test]
    fn help_mentions_init() {
        let mut fx = Fixture::new("");
        fx.run(&["h"]).unwrap();
        assert!(fx.out.contents().contains("gogi init"));
    }

    #[test]
    fn help_for_alias_prints_usage() {
        let mut fx = Fixture::new("");
        fx.run(&["help", "h"]).unwrap();
        assert!(fx.out.contents().contains("help: gogi help [command]"));

        fx.run(&["h", "R"]).unwrap();
        assert!(fx.out.contents().contains("rename: gogi rename old-name new-name"));
    }

    #[test]
    fn help_for_unknown_command_fails() {
        let mut fx = Fixture::new("");
        let err = fx.run(&["help", "wrong"]).unwrap_err();
        assert!(matches!(error_kind(&err), GogiError::UnknownCommand(name) if name == "wrong"));
    }

    #[test]
    fn alias_prints_mapping() {
        let mut fx = Fixture::new("");
        fx.run(&["alias"]).unwrap();
        let out = fx.out.contents();
        assert!(out.contains("g -> generate"));
        assert!(out.contains("r -> rename"));
        assert!(out.contains("b -> base"));
    }
}
