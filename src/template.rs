use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::GogiError;

pub const TEMPLATE_EXTENSION: &str = "gitignore";
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Backing files for templates, all kept flat inside one project directory.
#[derive(Debug, Clone)]
pub struct TemplateFiles {
    dir: PathBuf,
}

impl TemplateFiles {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, TEMPLATE_EXTENSION))
    }

    /// Creates a zero-length template file, truncating any file already there.
    pub fn create_empty(&self, name: &str) -> Result<PathBuf> {
        let path = self.path_for(name);
        File::create(&path)
            .with_context(|| format!("could not create template file {}", path.display()))?;
        debug!(path = %path.display(), "created template file");
        Ok(path)
    }

    /// Removes the file a template entry points at.
    pub fn delete(&self, path: &Path) -> Result<()> {
        template_exists(path)?;
        fs::remove_file(path)
            .with_context(|| format!("could not delete template file {}", path.display()))?;
        debug!(path = %path.display(), "deleted template file");
        Ok(())
    }

    /// Moves a template file to the canonical path for `new_name` and returns
    /// that path. An existing file at the destination is never replaced.
    pub fn rename(&self, from: &Path, new_name: &str) -> Result<PathBuf> {
        let to = self.path_for(new_name);
        template_exists(from)?;
        if fs::symlink_metadata(&to).is_ok() {
            return Err(GogiError::TemplateFileExists(to).into());
        }
        fs::rename(from, &to).with_context(|| {
            format!(
                "could not rename template file {} to {}",
                from.display(),
                to.display()
            )
        })?;
        debug!(from = %from.display(), to = %to.display(), "renamed template file");
        Ok(to)
    }
}

pub fn ignore_path(cwd: &Path) -> PathBuf {
    cwd.join(IGNORE_FILE_NAME)
}

pub fn template_exists(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(GogiError::TemplateFileMissing(path.to_path_buf()).into())
        }
        Err(err) => Err(err).with_context(|| format!("checking template file {}", path.display())),
    }
}

pub fn ignore_exists(cwd: &Path) -> Result<bool> {
    let path = ignore_path(cwd);
    match fs::metadata(&path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err).with_context(|| format!("checking for {}", path.display())),
    }
}

/// Copies the template verbatim over `cwd/.gitignore`.
///
/// The destination is truncated before copying; a failure midway leaves
/// whatever was written so far.
pub fn generate_ignore(template_path: &Path, cwd: &Path) -> Result<()> {
    let mut source = File::open(template_path)
        .with_context(|| format!("unable to open template file {}", template_path.display()))?;

    let target = ignore_path(cwd);
    let mut destination = File::create(&target)
        .with_context(|| format!("unable to create {}", target.display()))?;

    let bytes = io::copy(&mut source, &mut destination)
        .with_context(|| format!("unable to write to {}", target.display()))?;
    debug!(from = %template_path.display(), to = %target.display(), bytes, "generated ignore file");
    Ok(())
}

/// Copies the template verbatim onto the end of `cwd/.gitignore`. No
/// separator is inserted.
pub fn append_to_ignore(cwd: &Path, template_path: &Path) -> Result<()> {
    let mut source = File::open(template_path)
        .with_context(|| format!("unable to open template file {}", template_path.display()))?;

    let target = ignore_path(cwd);
    let mut destination = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&target)
        .with_context(|| format!("unable to open {} for appending", target.display()))?;

    let bytes = io::copy(&mut source, &mut destination)
        .with_context(|| format!("unable to append to {}", target.display()))?;
    debug!(from = %template_path.display(), to = %target.display(), bytes, "appended template");
    Ok(())
}
