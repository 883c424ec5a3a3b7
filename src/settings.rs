use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;
use snh48live_utils::fs_toml_util::read_toml;

pub const VIDEO_CONFIGS_DIR: &str = "data/video-configs";
pub const THUMBNAILER_PATH: &str = "bin/thumbnail";

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub video_configs_dir: PathBuf,
    pub thumbnailer: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            video_configs_dir: VIDEO_CONFIGS_DIR.into(),
            thumbnailer: THUMBNAILER_PATH.into(),
        }
    }
}

impl Settings {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let settings = read_toml(path)?;
                info!("Loaded settings from {path:?}.");
                Ok(settings)
            }
            None => Ok(Self::default()),
        }
    }
}
