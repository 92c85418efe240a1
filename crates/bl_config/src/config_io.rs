use std::fs;
use std::path::{Path, PathBuf};

use crate::appearance::AppearanceConfig;

/// Default directory for appearance config files.
pub const CONFIG_DIR: &str = "assets/config";

/// Error type for appearance config I/O.
#[derive(Debug)]
pub enum ConfigIoError {
    Io(std::io::Error),
    Ron(ron::Error),
    RonSpanned(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigIoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::Error> for ConfigIoError {
    fn from(err: ron::Error) -> Self {
        Self::Ron(err)
    }
}

impl From<ron::error::SpannedError> for ConfigIoError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::RonSpanned(err)
    }
}

impl std::fmt::Display for ConfigIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Ron(e) => write!(f, "RON serialization error: {}", e),
            Self::RonSpanned(e) => write!(f, "RON parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigIoError {}

/// Save appearance pools to a RON file.
///
/// # Arguments
/// * `path` - File path to save to
/// * `config` - Appearance pools to save
pub fn save_appearance(path: &Path, config: &AppearanceConfig) -> Result<(), ConfigIoError> {
    let pretty_config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .separate_tuple_members(true);

    let ron_string = ron::ser::to_string_pretty(config, pretty_config)?;
    fs::write(path, ron_string)?;
    Ok(())
}

/// Load appearance pools from a RON file.
///
/// # Arguments
/// * `path` - File path to load from
pub fn load_appearance(path: &Path) -> Result<AppearanceConfig, ConfigIoError> {
    let contents = fs::read_to_string(path)?;
    let config: AppearanceConfig = ron::from_str(&contents)?;
    Ok(config)
}

/// Get the full path for a named appearance config file.
pub fn appearance_path(name: &str) -> PathBuf {
    let sanitized: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    Path::new(CONFIG_DIR).join(format!("{}.ron", sanitized.to_lowercase()))
}
