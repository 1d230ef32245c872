use anyhow::Result;
use tracing::info;

use super::{App, Args};
use crate::commands::{BASE_FLAGS, EDIT_FLAGS, FORCE_FLAGS};
use crate::config::Template;
use crate::error::GogiError;
use crate::template::template_exists;
use crate::ui::print_bullet_list;
use crate::validation::validate_template_name;

impl App {
    /// Registers a new template backed by an empty file. `--base` makes it
    /// the base template and `--edit` opens it once it is saved.
    pub(super) fn create(&mut self, args: &[String]) -> Result<()> {
        let args = Args::parse(args, &[EDIT_FLAGS, BASE_FLAGS], 1)?;
        let name = args.first().unwrap_or_default();
        validate_template_name(name)?;
        if self.config.contains(name) {
            return Err(GogiError::TemplateExists(name.to_string()).into());
        }

        let make_base = args.has(BASE_FLAGS);
        let snapshot = self.config.clone();
        self.config.templates.push(Template {
            name: name.to_string(),
            path: self.files.path_for(name),
        });
        if make_base {
            self.config.base = name.to_string();
        }
        self.commit(snapshot, |files| files.create_empty(name).map(drop))?;

        info!(name, "created template");
        self.success(&format!("template '{}' created", name))?;
        if make_base {
            self.success(&format!("base template set to '{}'", name))?;
        }
        if args.has(EDIT_FLAGS) {
            self.open_in_editor(name)?;
        }
        Ok(())
    }

    pub(super) fn delete(&mut self, args: &[String]) -> Result<()> {
        let args = Args::parse(args, &[FORCE_FLAGS], 1)?;
        let name = args.required(0, "template name")?;
        let Some(index) = self.config.index_of(name) else {
            return Err(GogiError::TemplateNotFound(name.to_string()).into());
        };
        let was_base = self.config.base() == Some(name);

        if !args.has(FORCE_FLAGS) {
            let question = if was_base {
                format!(
                    "Are you sure?\n\nTemplate '{}' is currently the base template.",
                    name
                )
            } else {
                format!("Are you sure you want to delete template '{}'?", name)
            };
            if !self.confirm(&question)? {
                return self.cancelled();
            }
        }

        let snapshot = self.config.clone();
        let removed = self.config.templates.remove(index);
        if was_base {
            self.config.base.clear();
        }
        self.commit(snapshot, |files| files.delete(&removed.path))?;

        info!(name, "deleted template");
        if was_base {
            self.success("base template cleared")?;
        }
        self.success(&format!("template '{}' deleted", name))
    }

    /// Renames the entry and its file together, carrying the base along.
    pub(super) fn rename(&mut self, args: &[String]) -> Result<()> {
        let args = Args::parse(args, &[], 2)?;
        let old_name = args.required(0, "template name to rename")?;
        let new_name = args.required(1, "new template name")?;
        validate_template_name(new_name)?;

        let Some(index) = self.config.index_of(old_name) else {
            return Err(GogiError::TemplateNotFound(old_name.to_string()).into());
        };
        if self.config.contains(new_name) {
            return Err(GogiError::TemplateExists(new_name.to_string()).into());
        }

        let was_base = self.config.base() == Some(old_name);
        let snapshot = self.config.clone();
        let from = self.config.templates[index].path.clone();
        let entry = &mut self.config.templates[index];
        entry.name = new_name.to_string();
        entry.path = self.files.path_for(new_name);
        if was_base {
            self.config.base = new_name.to_string();
        }
        self.commit(snapshot, |files| files.rename(&from, new_name).map(drop))?;

        info!(from = old_name, to = new_name, "renamed template");
        if was_base {
            self.success(&format!("base template set to '{}'", new_name))?;
        }
        self.success(&format!("template '{}' renamed to '{}'", old_name, new_name))
    }

    pub(super) fn list(&mut self, args: &[String]) -> Result<()> {
        Args::parse(args, &[], 0)?;
        if self.config.templates.is_empty() {
            self.line("you don't have any templates!")?;
            return self.hint("try `gogi create template-name` to create a new one");
        }

        self.line("Available templates:")?;
        let names: Vec<&str> = self
            .config
            .templates
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        print_bullet_list(&mut *self.out, &names, self.config.base())
    }

    pub(super) fn edit(&mut self, args: &[String]) -> Result<()> {
        let args = Args::parse(args, &[], 1)?;
        let name = args.required(0, "template name")?;
        self.open_in_editor(name)
    }

    fn open_in_editor(&mut self, name: &str) -> Result<()> {
        let template = self.find(name)?;
        let editor = self.config.editor().ok_or(GogiError::EditorUnset)?;
        template_exists(&template.path)?;
        self.launcher.launch(editor, &template.path)
    }
}
