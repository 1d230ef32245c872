use anyhow::Result;
use tracing::{info, warn};

use super::{App, Args};
use crate::commands::FORCE_FLAGS;
use crate::config::Template;
use crate::error::GogiError;
use crate::template::{append_to_ignore, generate_ignore, ignore_exists, ignore_path, template_exists};

impl App {
    pub(super) fn generate(&mut self, args: &[String]) -> Result<()> {
        let args = Args::parse(args, &[FORCE_FLAGS], 1)?;
        let name = args.required(0, "template name")?;
        let template = self.find(name)?;

        let question = "A .gitignore file already exists. Do you want to overwrite it?";
        if self.write_ignore(&template, args.has(FORCE_FLAGS), question)? {
            self.success(&format!("generated .gitignore from template '{}'", name))?;
        }
        Ok(())
    }

    pub(super) fn append(&mut self, args: &[String]) -> Result<()> {
        let args = Args::parse(args, &[], 1)?;
        let name = args.required(0, "template name")?;
        let template = self.find(name)?;
        template_exists(&template.path)?;

        if !ignore_exists(&self.cwd)? {
            return Err(GogiError::IgnoreFileMissing(ignore_path(&self.cwd)).into());
        }
        append_to_ignore(&self.cwd, &template.path)?;

        info!(name, "appended template");
        self.success(&format!("appended template '{}' to .gitignore", name))
    }

    /// Generates `.gitignore` from the base template. This is what running
    /// `gogi` with no command does.
    pub fn quick(&mut self) -> Result<()> {
        let base = self.config.base().ok_or(GogiError::BaseUnset)?.to_string();
        let Some(template) = self.config.find(&base).cloned() else {
            warn!(base = %base, "base template no longer exists, clearing it");
            self.config.base.clear();
            self.save()?;
            return Err(GogiError::TemplateNotFound(base).into());
        };

        let question = "A .gitignore file already exists.\nOverwrite?";
        if self.write_ignore(&template, false, question)? {
            self.success(&format!(
                "created .gitignore from base template '{}'",
                template.name
            ))?;
        }
        Ok(())
    }

    /// Copies `template` over the working directory's `.gitignore`, asking
    /// first if one exists and `force` is off. Returns false when declined.
    fn write_ignore(&mut self, template: &Template, force: bool, question: &str) -> Result<bool> {
        template_exists(&template.path)?;

        if !force && ignore_exists(&self.cwd)? && !self.confirm(question)? {
            self.cancelled()?;
            return Ok(false);
        }

        generate_ignore(&template.path, &self.cwd)?;
        info!(name = %template.name, cwd = %self.cwd.display(), "generated .gitignore");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::{Fixture, error_kind};
    use crate::error::GogiError;
    use std::fs;

    #[test]
    fn generate_copies_template_into_empty_project() {
        let mut fx = Fixture::new("");
        fx.run(&["generate", "test1"]).unwrap();
        assert_eq!(fs::read_to_string(fx.ignore_file()).unwrap(), "target/\n");
    }

    #[test]
    fn generate_unknown_template_fails() {
        let mut fx = Fixture::new("");
        let err = fx.run(&["generate", "wrong"]).unwrap_err();
        assert!(matches!(error_kind(&err), GogiError::TemplateNotFound(_)));
        assert!(!fx.ignore_file().exists());
    }

    #[test]
    fn generate_without_backing_file_fails() {
        let mut fx = Fixture::new("");
        fs::remove_file(fx.template_path("test2")).unwrap();
        let err = fx.run(&["g", "test2"]).unwrap_err();
        assert!(matches!(error_kind(&err), GogiError::TemplateFileMissing(_)));
    }

    #[test]
    fn forced_generate_is_idempotent() {
        let mut fx = Fixture::new("");
        fs::write(fx.ignore_file(), "something else entirely\n").unwrap();

        fx.run(&["generate", "test2", "--force"]).unwrap();
        fx.run(&["generate", "test2", "-f"]).unwrap();
        assert_eq!(fs::read_to_string(fx.ignore_file()).unwrap(), "node_modules/\n");
    }

    #[test]
    fn confirmed_overwrite_replaces_content() {
        let mut fx = Fixture::new("y\n");
        fs::write(fx.ignore_file(), "old\n").unwrap();

        fx.run(&["generate", "test1"]).unwrap();
        assert_eq!(fs::read_to_string(fx.ignore_file()).unwrap(), "target/\n");
        assert!(fx.out.contents().contains("Do you want to overwrite it? [y/n]: "));
    }

    #[test]
    fn declined_overwrite_leaves_target_unchanged() {
        let mut fx = Fixture::new("no\n");
        fs::write(fx.ignore_file(), "keep me\n").unwrap();

        fx.run(&["generate", "test1"]).unwrap();
        assert_eq!(fs::read_to_string(fx.ignore_file()).unwrap(), "keep me\n");
        assert!(fx.out.contents().contains("command cancelled by user"));
    }

    #[test]
    fn default_override_skips_prompt() {
        let mut fx = Fixture::new("");
        fx.app.config.default_override = true;
        fs::write(fx.ignore_file(), "old\n").unwrap();

        fx.run(&["generate", "test1"]).unwrap();
        assert_eq!(fs::read_to_string(fx.ignore_file()).unwrap(), "target/\n");
        assert!(!fx.out.contents().contains("[y/n]"));
    }

    #[test]
    fn append_requires_existing_target() {
        let mut fx = Fixture::new("");
        let err = fx.run(&["append", "test2"]).unwrap_err();
        assert!(matches!(error_kind(&err), GogiError::IgnoreFileMissing(_)));
        assert!(!fx.ignore_file().exists());
    }

    #[test]
    fn append_accumulates_content() {
        let mut fx = Fixture::new("");
        fx.run(&["generate", "test1"]).unwrap();
        fx.run(&["a", "test2"]).unwrap();
        assert_eq!(
            fs::read_to_string(fx.ignore_file()).unwrap(),
            "target/\nnode_modules/\n"
        );
    }

    #[test]
    fn append_unknown_template_fails() {
        let mut fx = Fixture::new("");
        fx.run(&["generate", "test1"]).unwrap();
        let err = fx.run(&["append", "wrong"]).unwrap_err();
        assert!(matches!(error_kind(&err), GogiError::TemplateNotFound(_)));
    }

    #[test]
    fn quick_generates_from_base() {
        let mut fx = Fixture::new("");
        fx.app.quick().unwrap();
        assert_eq!(fs::read_to_string(fx.ignore_file()).unwrap(), "target/\n");
    }

    #[test]
    fn quick_without_base_fails() {
        let mut fx = Fixture::new("");
        fx.app.config.base.clear();
        let err = fx.app.quick().unwrap_err();
        assert!(matches!(error_kind(&err), GogiError::BaseUnset));
    }

    #[test]
    fn quick_clears_dangling_base() {
        let mut fx = Fixture::new("");
        fx.app.config.base = "gone".to_string();

        let err = fx.app.quick().unwrap_err();
        assert!(matches!(error_kind(&err), GogiError::TemplateNotFound(name) if name == "gone"));
        assert_eq!(fx.app.config.base, "");
        assert_eq!(fx.persisted().base, "");
    }

    #[test]
    fn quick_twice_with_decline_is_a_no_op() {
        let mut fx = Fixture::new("n\n");
        fx.run(&["create", "node"]).unwrap();
        fx.run(&["base", "node"]).unwrap();

        fx.app.quick().unwrap();
        assert_eq!(fs::read(fx.ignore_file()).unwrap(), b"");

        fs::write(fx.ignore_file(), "edited by hand\n").unwrap();
        fx.app.quick().unwrap();
        assert_eq!(
            fs::read_to_string(fx.ignore_file()).unwrap(),
            "edited by hand\n"
        );
        assert!(fx.out.contents().contains("command cancelled by user"));
    }

    #[test]
    fn quick_prompt_at_end_of_input_is_cancelled_error() {
        let mut fx = Fixture::new("");
        fs::write(fx.ignore_file(), "keep\n").unwrap();

        let err = fx.app.quick().unwrap_err();
        assert!(matches!(error_kind(&err), GogiError::Cancelled));
        assert_eq!(fs::read_to_string(fx.ignore_file()).unwrap(), "keep\n");
    }
}
