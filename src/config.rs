//! Configuration loading
//!
//! The config file is a plain `key = value` list (default `~/.somerc`):
//!
//! ```text
//! # where the templates/ tree lives
//! template_root = /home/me/snippets
//! editor = nvim
//! ```
//!
//! Settings resolve in this order, first hit wins:
//! - command line (`--root`)
//! - environment (`SOME_TEMPLATE_ROOT`, `SOME_EDITOR`, `SOME_PAGER`)
//! - config file keys (`template_root`, `editor`, `pager`)
//! - built-in defaults (`.`, `vim`, `less`)

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::{Error, Result};

/// Settings for one invocation, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base directory containing the `templates/` tree
    pub template_root: PathBuf,
    /// Program used by add and edit
    pub editor: String,
    /// Program used by view
    pub pager: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_root: PathBuf::from(DEFAULT_TEMPLATE_ROOT),
            editor: DEFAULT_EDITOR.to_string(),
            pager: DEFAULT_PAGER.to_string(),
        }
    }
}

impl Config {
    /// Build from a parsed config mapping; missing or empty keys keep defaults
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let mut config = Self::default();
        if let Some(root) = non_empty(map.get(KEY_TEMPLATE_ROOT).cloned()) {
            config.template_root = PathBuf::from(root);
        }
        if let Some(editor) = non_empty(map.get(KEY_EDITOR).cloned()) {
            config.editor = editor;
        }
        if let Some(pager) = non_empty(map.get(KEY_PAGER).cloned()) {
            config.pager = pager;
        }
        config
    }

    /// Load the config file, falling back to defaults with a warning when it
    /// cannot be read, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Self {
        let config = match path {
            Some(path) => match load_config(path) {
                Ok(map) => Self::from_map(&map),
                Err(e) => {
                    log::warn!("Could not load config: {}", e);
                    Self::default()
                }
            },
            None => {
                log::warn!("Could not load config: home directory not found");
                Self::default()
            }
        };
        config.with_env()
    }

    /// Apply `SOME_*` environment overrides. Empty values are ignored.
    pub fn with_env(self) -> Self {
        self.with_overrides(
            env_var(ENV_TEMPLATE_ROOT).map(PathBuf::from),
            env_var(ENV_EDITOR),
            env_var(ENV_PAGER),
        )
    }

    /// Replace any setting for which an override is given
    pub fn with_overrides(
        mut self,
        template_root: Option<PathBuf>,
        editor: Option<String>,
        pager: Option<String>,
    ) -> Self {
        if let Some(root) = template_root {
            self.template_root = root;
        }
        if let Some(editor) = editor {
            self.editor = editor;
        }
        if let Some(pager) = pager {
            self.pager = pager;
        }
        self
    }
}

/// Location of the config file: `$SOME_CONFIG`, else `~/.somerc`
pub fn default_config_path() -> Option<PathBuf> {
    env_var(ENV_CONFIG)
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(CONFIG_FILENAME)))
}

/// Read and parse a config file
pub fn load_config(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io("unable to read config", path, e))?;
    Ok(parse_config(&content))
}

/// Parse `key = value` lines.
///
/// Blank lines and lines starting with `#` are skipped. Lines without `=`
/// are skipped with a warning. The split happens at the first `=`, so
/// values may contain `=`.
pub fn parse_config(content: &str) -> HashMap<String, String> {
    let mut config = HashMap::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
            continue;
        }

        match trimmed.split_once('=') {
            Some((key, value)) => {
                config.insert(key.trim().to_string(), value.trim().to_string());
            }
            None => log::warn!("Skipping invalid line: {}", line),
        }
    }

    config
}

fn env_var(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
