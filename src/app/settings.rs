use anyhow::Result;
use tracing::info;

use super::{App, Args};
use crate::error::GogiError;

impl App {
    /// Shows the base template, or sets it when a name is given.
    pub(super) fn base(&mut self, args: &[String]) -> Result<()> {
        let args = Args::parse(args, &[], 1)?;
        if args.first().is_none() {
            let base = self.config.base().ok_or(GogiError::BaseUnset)?;
            let message = format!("your current base template is '{}'", base);
            return self.line(&message);
        }

        let name = args.required(0, "template name")?;
        let template = self.find(name)?;
        self.config.base = template.name;
        self.save()?;

        info!(name, "set base template");
        self.success(&format!("base template set to '{}'", name))
    }

    /// Shows the editor, or sets it when one is given.
    pub(super) fn editor(&mut self, args: &[String]) -> Result<()> {
        let args = Args::parse(args, &[], 1)?;
        if args.first().is_none() {
            let message = match self.config.editor() {
                Some(editor) => format!("editor set to '{}'", editor),
                None => "you have not set an editor".to_string(),
            };
            return self.line(&message);
        }

        let editor = args.required(0, "editor name")?;
        self.config.editor = editor.to_string();
        self.save()?;

        info!(editor, "set editor");
        self.success(&format!("editor set to '{}'", editor))
    }
}
