use serde::Deserialize;
use std::path::PathBuf;

use crate::geometry::DEFAULT_SCALE;

/// Where the canonical file lands when neither CLI nor config says
/// otherwise. Kept for compatibility with the solver harnesses that
/// expect it in the working directory.
pub const DEFAULT_OUTPUT: &str = "real.poly";

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}
fn default_scale_factor() -> f64 {
    DEFAULT_SCALE
}
fn default_rescale() -> bool {
    false
}
fn default_verbose() -> bool {
    false
}

/// Optional `polyprep.toml` settings. CLI flags take precedence over
/// every field here.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
    #[serde(default = "default_rescale")]
    pub rescale: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            scale_factor: default_scale_factor(),
            rescale: default_rescale(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// Search the usual spots and load the first config that parses.
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("polyprep.toml"));
    paths.push(PathBuf::from(".polyprep.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("polyprep").join("config.toml"));
        paths.push(config_dir.join("polyprep.toml"));
    }

    paths
}
