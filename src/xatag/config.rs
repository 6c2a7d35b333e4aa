use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tag_dict::TagDict;

const CONFIG_FILENAME: &str = "config.json";
const KNOWN_TAGS_FILENAME: &str = "known_tags.json";

fn default_index_command() -> Vec<String> {
    vec!["recollindex".to_string(), "-i".to_string()]
}

fn default_warn_new_tags() -> bool {
    true
}

/// Configuration for xatag, stored in the platform config dir as
/// config.json.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct XatagConfig {
    /// Command run after mutations to refresh the external search index;
    /// the changed file paths are appended as arguments.
    #[serde(default = "default_index_command")]
    pub index_command: Vec<String>,

    /// Warn when a tag is not in the known-tags registry.
    #[serde(default = "default_warn_new_tags")]
    pub warn_new_tags: bool,

    /// Record unseen tags in the registry instead of warning on every use.
    #[serde(default)]
    pub add_unknown: bool,
}

impl Default for XatagConfig {
    fn default() -> Self {
        Self {
            index_command: default_index_command(),
            warn_new_tags: true,
            add_unknown: false,
        }
    }
}

impl XatagConfig {
    /// Load config from the given directory, or return defaults if not
    /// found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}

/// The platform config directory for xatag.
pub fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("org", "xatag", "xatag").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Load the known-tags registry, or `None` if no registry file exists.
/// Absence is distinct from an empty registry: with no file there is
/// nothing to audit against.
pub fn load_known_tags<P: AsRef<Path>>(config_dir: P) -> Result<Option<TagDict>> {
    let path = config_dir.as_ref().join(KNOWN_TAGS_FILENAME);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

/// Write the registry out, creating the directory if needed.
pub fn save_known_tags<P: AsRef<Path>>(config_dir: P, known: &TagDict) -> Result<()> {
    let config_dir = config_dir.as_ref();
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }
    let content = serde_json::to_string_pretty(known)?;
    fs::write(config_dir.join(KNOWN_TAGS_FILENAME), content)?;
    Ok(())
}

/// Merge new tags into the registry on disk.
pub fn add_known_tags<P: AsRef<Path>>(config_dir: P, new_tags: &TagDict) -> Result<()> {
    let config_dir = config_dir.as_ref();
    let known = load_known_tags(config_dir)?.unwrap_or_default();
    save_known_tags(config_dir, &known.merge(new_tags))
}
