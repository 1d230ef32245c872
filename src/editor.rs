use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::info;

use crate::error::GogiError;

/// Opens a file in an external program and waits for it to exit.
pub trait Launcher {
    fn launch(&self, editor: &str, path: &Path) -> Result<()>;
}

/// Runs the editor as a child process sharing this process's terminal.
///
/// The configured editor may carry its own arguments, e.g. `code --wait`.
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, editor: &str, path: &Path) -> Result<()> {
        let mut parts = editor.split_whitespace();
        let program = parts.next().ok_or(GogiError::EditorUnset)?;

        info!(editor, path = %path.display(), "launching editor");
        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("could not launch editor `{}`", editor))?;

        if !status.success() {
            return Err(GogiError::EditorFailed {
                editor: editor.to_string(),
                status,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn successful_program_is_ok() {
        assert!(SystemLauncher.launch("true", Path::new("x")).is_ok());
    }

    #[test]
    fn failing_program_reports_exit_status() {
        let err = SystemLauncher.launch("false", Path::new("x")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GogiError>(),
            Some(GogiError::EditorFailed { .. })
        ));
    }

    #[test]
    fn missing_program_is_launch_error() {
        let err = SystemLauncher
            .launch("gogi-no-such-editor-binary", Path::new("x"))
            .unwrap_err();
        assert!(err.to_string().contains("could not launch editor"));
    }

    #[test]
    fn blank_editor_is_unset() {
        let err = SystemLauncher.launch("  ", Path::new("x")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GogiError>(),
            Some(GogiError::EditorUnset)
        ));
    }
}
