use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::batch::FailurePolicy;
use crate::output::OutputFormat;

const CONFIG_NAME: &str = "boundary-centers";

fn default_id_attribute() -> String {
    "id".to_string()
}
fn default_header() -> bool {
    true
}
fn default_verbose() -> bool {
    false
}

/// Settings read from `boundary-centers.toml`
///
/// Every key is optional; command-line flags take precedence.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub on_error: FailurePolicy,
    #[serde(default = "default_id_attribute")]
    pub id_attribute: String,
    #[serde(default = "default_header")]
    pub header: bool,
    #[serde(default)]
    pub precision: Option<usize>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            format: OutputFormat::default(),
            on_error: FailurePolicy::default(),
            id_attribute: default_id_attribute(),
            header: default_header(),
            precision: None,
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// Load the first readable config from the standard search paths
    pub fn load() -> Option<Self> {
        Self::load_first(&get_config_paths())
    }

    /// Load the first existing candidate that reads and parses
    ///
    /// Candidates that exist but fail either step are logged and skipped.
    fn load_first(candidates: &[PathBuf]) -> Option<Self> {
        candidates
            .iter()
            .filter(|path| path.exists())
            .find_map(|path| {
                let contents = std::fs::read_to_string(path)
                    .inspect_err(|e| {
                        warn!(path = %path.display(), error = %e, "failed to read config file");
                    })
                    .ok()?;
                toml::from_str(&contents)
                    .inspect_err(|e| {
                        warn!(path = %path.display(), error = %e, "failed to parse config file");
                    })
                    .ok()
            })
    }

    /// Load an explicitly requested config file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from(format!("{CONFIG_NAME}.toml")));
    paths.push(PathBuf::from(format!(".{CONFIG_NAME}.toml")));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(CONFIG_NAME).join("config.toml"));
        paths.push(config_dir.join(format!("{CONFIG_NAME}.toml")));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{CONFIG_NAME}.toml")));
        paths.push(home.join(".config").join(CONFIG_NAME).join("config.toml"));
    }

    paths
}
