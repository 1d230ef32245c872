use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::GogiError;

pub const CONFIG_FILE_NAME: &str = "gogi.json";
pub const DEFAULT_EDITOR: &str = "code";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TemplateConfig {
    #[serde(default)]
    pub editor: String,
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub default_override: bool,
    #[serde(default)]
    pub templates: Vec<Template>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            editor: DEFAULT_EDITOR.to_string(),
            base: String::new(),
            default_override: false,
            templates: Vec::new(),
        }
    }
}

impl TemplateConfig {
    pub fn find(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.templates.iter().position(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// The base template name, or `None` when unset.
    pub fn base(&self) -> Option<&str> {
        if self.base.is_empty() {
            None
        } else {
            Some(&self.base)
        }
    }

    pub fn editor(&self) -> Option<&str> {
        if self.editor.is_empty() {
            None
        } else {
            Some(&self.editor)
        }
    }
}

/// Resolves the directory holding `gogi.json` and the template files.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("gogi"))
}

/// Reads and writes the single JSON configuration file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes a default configuration. Never overwrites an existing one.
    pub fn init(&self) -> Result<()> {
        if self.path.exists() {
            return Err(GogiError::AlreadyInitialized(self.path.clone()).into());
        }
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating config directory at {}", dir.display()))?;
        }
        self.save(&TemplateConfig::default())
            .with_context(|| format!("initializing configuration at {}", self.path.display()))?;
        info!(path = %self.path.display(), "initialized configuration");
        Ok(())
    }

    pub fn load(&self) -> Result<TemplateConfig> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(GogiError::NotInitialized(self.path.clone()).into());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("reading configuration {}", self.path.display()));
            }
        };

        let config = serde_json::from_str::<TemplateConfig>(&content).map_err(|source| {
            GogiError::MalformedConfig {
                path: self.path.clone(),
                source,
            }
        })?;
        debug!(
            path = %self.path.display(),
            templates = config.templates.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Replaces the configuration file through a temp file in the same
    /// directory, so a failed write leaves the previous file intact.
    pub fn save(&self, config: &TemplateConfig) -> Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let content = serde_json::to_string_pretty(config)?;

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("could not save configuration to {}", self.path.display()))?;
        tmp.write_all(content.as_bytes())
            .and_then(|_| tmp.flush())
            .with_context(|| format!("could not save configuration to {}", self.path.display()))?;
        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("could not save configuration to {}", self.path.display()))?;

        debug!(path = %self.path.display(), "saved configuration");
        Ok(())
    }
}
