mod generate;
mod info;
mod manage;
mod settings;

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::commands::{self, Command};
use crate::config::{ConfigStore, Template, TemplateConfig};
use crate::editor::{Launcher, SystemLauncher};
use crate::error::GogiError;
use crate::prompt::{self, CANCELLED_MESSAGE};
use crate::template::TemplateFiles;
use crate::ui::{print_hint, print_success, print_warning};

/// One invocation's view of the template registry, plus everything the
/// command handlers touch: files, the working directory and the terminal.
pub struct App {
    config: TemplateConfig,
    store: ConfigStore,
    files: TemplateFiles,
    cwd: PathBuf,
    assume_yes: bool,
    strict: bool,
    launcher: Box<dyn Launcher>,
    input: Box<dyn BufRead>,
    out: Box<dyn Write>,
}

impl App {
    pub fn new(config: TemplateConfig, store: ConfigStore, files: TemplateFiles, cwd: PathBuf) -> Self {
        Self {
            config,
            store,
            files,
            cwd,
            assume_yes: false,
            strict: false,
            launcher: Box::new(SystemLauncher),
            input: Box::new(io::stdin().lock()),
            out: Box::new(io::stdout()),
        }
    }

    /// Answer yes to every confirmation for this run only.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Treat an unknown command as an error instead of a printed hint.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[cfg(test)]
    fn with_io(mut self, input: Box<dyn BufRead>, out: Box<dyn Write>) -> Self {
        self.input = input;
        self.out = out;
        self
    }

    #[cfg(test)]
    fn with_launcher(mut self, launcher: Box<dyn Launcher>) -> Self {
        self.launcher = launcher;
        self
    }

    /// Routes `args` to the named command. The first token may be an alias
    /// and is matched case-insensitively.
    pub fn dispatch(&mut self, args: &[String]) -> Result<()> {
        let Some((first, rest)) = args.split_first() else {
            return self.line("no command provided. Try `gogi help`");
        };

        let name = commands::resolve(first);
        let Some(spec) = commands::lookup(&name) else {
            if self.strict {
                return Err(GogiError::UnknownCommand(name).into());
            }
            return self.line(&format!("Unknown command: {}. Try `gogi help`", name));
        };

        debug!(command = spec.name, args = ?rest, "dispatching");
        match spec.command {
            Command::Create => self.create(rest),
            Command::Delete => self.delete(rest),
            Command::List => self.list(rest),
            Command::Generate => self.generate(rest),
            Command::Edit => self.edit(rest),
            Command::Append => self.append(rest),
            Command::Rename => self.rename(rest),
            Command::Base => self.base(rest),
            Command::Editor => self.editor(rest),
            Command::Alias => self.alias(rest),
            Command::Help => self.help(rest),
        }
    }

    fn find(&self, name: &str) -> Result<Template> {
        self.config
            .find(name)
            .cloned()
            .ok_or_else(|| GogiError::TemplateNotFound(name.to_string()).into())
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        let auto = self.assume_yes || self.config.default_override;
        prompt::confirm(question, auto, &mut *self.input, &mut *self.out)
    }

    fn save(&self) -> Result<()> {
        self.store.save(&self.config)
    }

    /// Finishes a registry change already applied in memory: runs the file
    /// step, then persists. If the file step fails the registry is restored
    /// to `snapshot` and nothing is saved.
    fn commit<F>(&mut self, snapshot: TemplateConfig, step: F) -> Result<()>
    where
        F: FnOnce(&TemplateFiles) -> Result<()>,
    {
        if let Err(err) = step(&self.files) {
            self.config = snapshot;
            return Err(err);
        }
        self.save()
    }

    fn line(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    fn success(&mut self, message: &str) -> Result<()> {
        print_success(&mut *self.out, message)
    }

    fn hint(&mut self, message: &str) -> Result<()> {
        print_hint(&mut *self.out, message)
    }

    fn cancelled(&mut self) -> Result<()> {
        print_warning(&mut *self.out, CANCELLED_MESSAGE)
    }
}

/// Positional arguments and flags of one command invocation.
struct Args<'a> {
    positional: Vec<&'a str>,
    flags: Vec<&'a str>,
}

impl<'a> Args<'a> {
    /// Splits `args` on a leading `-`, rejecting flags outside `allowed` and
    /// more than `max_positional` positionals.
    fn parse(args: &'a [String], allowed: &[&[&str]], max_positional: usize) -> Result<Self> {
        let mut parsed = Args {
            positional: Vec::new(),
            flags: Vec::new(),
        };

        for arg in args {
            if arg.starts_with('-') {
                let known = allowed
                    .iter()
                    .any(|set| set.iter().any(|flag| flag.eq_ignore_ascii_case(arg)));
                if !known {
                    return Err(GogiError::InvalidArguments(format!("unknown flag '{}'", arg)).into());
                }
                parsed.flags.push(arg.as_str());
            } else {
                parsed.positional.push(arg.as_str());
            }
        }

        if parsed.positional.len() > max_positional {
            return Err(GogiError::InvalidArguments(format!(
                "expected at most {} argument(s), got {}",
                max_positional,
                parsed.positional.len()
            ))
            .into());
        }

        Ok(parsed)
    }

    fn has(&self, set: &[&str]) -> bool {
        self.flags
            .iter()
            .any(|flag| set.iter().any(|known| known.eq_ignore_ascii_case(flag)))
    }

    fn first(&self) -> Option<&'a str> {
        self.positional.first().copied()
    }

    /// The positional at `index`, treating an empty string as missing.
    fn required(&self, index: usize, what: &'static str) -> Result<&'a str> {
        match self.positional.get(index) {
            Some(arg) if !arg.trim().is_empty() => Ok(*arg),
            _ => Err(GogiError::MissingArgument(what).into()),
        }
    }
}
