//! Command registry: the fixed tables the dispatcher routes through.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Create,
    Delete,
    List,
    Generate,
    Edit,
    Append,
    Rename,
    Base,
    Editor,
    Alias,
    Help,
}

pub struct CommandSpec {
    pub command: Command,
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: Command::Create,
        name: "create",
        description: "Create a new template",
        usage: "gogi create template-name [--edit] [--base]",
    },
    CommandSpec {
        command: Command::Delete,
        name: "delete",
        description: "Delete an existing template",
        usage: "gogi delete template-name [--force]",
    },
    CommandSpec {
        command: Command::List,
        name: "list",
        description: "List all the templates",
        usage: "gogi list",
    },
    CommandSpec {
        command: Command::Generate,
        name: "generate",
        description: "Generate a .gitignore file from the given template",
        usage: "gogi generate template-name [--force]",
    },
    CommandSpec {
        command: Command::Edit,
        name: "edit",
        description: "Open an existing template in your editor",
        usage: "gogi edit template-name",
    },
    CommandSpec {
        command: Command::Append,
        name: "append",
        description: "Append a template to an existing .gitignore file",
        usage: "gogi append template-name",
    },
    CommandSpec {
        command: Command::Rename,
        name: "rename",
        description: "Rename an existing template",
        usage: "gogi rename old-name new-name",
    },
    CommandSpec {
        command: Command::Base,
        name: "base",
        description: "Show or set the base template used by `gogi` with no args",
        usage: "gogi base [template-name]",
    },
    CommandSpec {
        command: Command::Editor,
        name: "editor",
        description: "Show or set the editor used for editing templates",
        usage: "gogi editor [editor-name]",
    },
    CommandSpec {
        command: Command::Alias,
        name: "alias",
        description: "Show the list of available command aliases",
        usage: "gogi alias",
    },
    CommandSpec {
        command: Command::Help,
        name: "help",
        description: "Display help message, or help for a specific command",
        usage: "gogi help [command]",
    },
];

pub const ALIASES: &[(&str, Command)] = &[
    ("h", Command::Help),
    ("c", Command::Create),
    ("l", Command::List),
    ("g", Command::Generate),
    ("e", Command::Edit),
    ("d", Command::Delete),
    ("a", Command::Append),
    ("b", Command::Base),
    ("r", Command::Rename),
];

pub const INIT: &str = "init";

pub const FORCE_FLAGS: &[&str] = &["-f", "--f", "--force"];
pub const EDIT_FLAGS: &[&str] = &["-e", "--edit"];
pub const BASE_FLAGS: &[&str] = &["-b", "--base"];
pub const YES_FLAGS: &[&str] = &["-y", "--yes"];

impl Command {
    pub fn spec(self) -> &'static CommandSpec {
        COMMANDS
            .iter()
            .find(|spec| spec.command == self)
            .unwrap_or_else(|| unreachable!("every command has a table entry"))
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

/// Lowercases `token` and maps a short alias to its command name. Anything
/// else passes through unchanged.
pub fn resolve(token: &str) -> String {
    let token = token.to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, command)| command.name().to_string())
        .unwrap_or(token)
}

pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// Words a template may not be named after, since the dispatcher could not
/// tell them apart from a verb or flag.
pub fn is_reserved(word: &str) -> bool {
    let word = word.to_lowercase();
    word == INIT
        || COMMANDS.iter().any(|spec| spec.name == word)
        || ALIASES.iter().any(|(alias, _)| *alias == word)
        || [FORCE_FLAGS, EDIT_FLAGS, BASE_FLAGS, YES_FLAGS]
            .iter()
            .any(|flags| flags.contains(&word.as_str()))
}
