use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Conditions the user can act on, kept apart from plain I/O failures so
/// "it's not there" reads differently from "something broke".
#[derive(Debug, Error)]
pub enum GogiError {
    #[error("no configuration found at {}. Try `gogi init`", .0.display())]
    NotInitialized(PathBuf),

    #[error("configuration already exists at {}", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("could not parse configuration at {}. Try `gogi init`", .path.display())]
    MalformedConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("'{0}' is a reserved word and cannot be used as a template name")]
    ReservedName(String),

    #[error("invalid template name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("template '{0}' not found")]
    TemplateNotFound(String),

    #[error("template '{0}' already exists")]
    TemplateExists(String),

    #[error("no template file found at {}", .0.display())]
    TemplateFileMissing(PathBuf),

    #[error("a file already exists at {}", .0.display())]
    TemplateFileExists(PathBuf),

    #[error("couldn't find a .gitignore file to append to at {}", .0.display())]
    IgnoreFileMissing(PathBuf),

    #[error("no base template is set. Try `gogi base <template>` or `gogi help`")]
    BaseUnset,

    #[error("no editor is set. Try `gogi editor <program>`")]
    EditorUnset,

    #[error("editor `{editor}` exited with {status}")]
    EditorFailed { editor: String, status: ExitStatus },

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("command cancelled by user")]
    Cancelled,
}
