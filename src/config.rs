use crate::transform::Case;
use crate::variate::DEFAULT_DELIMITER;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".strutils.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub split_at: String,
    pub stitch_with: String,
    pub transform: Case,
    pub permutate: bool,
    /// Stitch delimiters used when building variation tables.
    pub stitchers: Vec<String>,
}

/// One config file. Only the keys it actually sets are applied on merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    pub split_at: Option<String>,
    pub stitch_with: Option<String>,
    pub transform: Option<Case>,
    pub permutate: Option<bool>,
    pub stitchers: Option<Vec<String>>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            split_at: DEFAULT_DELIMITER.to_string(),
            stitch_with: DEFAULT_DELIMITER.to_string(),
            transform: Case::default(),
            permutate: true,
            stitchers: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > explicit or local config > global config > defaults
    pub fn load(
        config_path: Option<PathBuf>,
        split_at: Option<String>,
        stitch_with: Option<String>,
        transform: Option<Case>,
        permutate: Option<bool>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        // An explicit file must exist; the local one is optional
        match config_path {
            Some(path) => {
                config = config.merge(ConfigLayer::from_file(&path)?);
            }
            None => {
                let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
                if local_path.exists() {
                    config = config.merge(ConfigLayer::from_file(&local_path)?);
                }
            }
        }

        // Apply CLI overrides
        config = config.merge(ConfigLayer {
            split_at,
            stitch_with,
            transform,
            permutate,
            stitchers: None,
        });

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Defaults with a single file applied on top.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigLayer::from_file(path)?))
    }

    pub fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(split_at) = layer.split_at {
            self.split_at = split_at;
        }
        if let Some(stitch_with) = layer.stitch_with {
            self.stitch_with = stitch_with;
        }
        if let Some(transform) = layer.transform {
            self.transform = transform;
        }
        if let Some(permutate) = layer.permutate {
            self.permutate = permutate;
        }
        if let Some(stitchers) = layer.stitchers {
            self.stitchers = stitchers;
        }
        self
    }

    /// Stitchers for tables, falling back to the single `stitch_with`.
    pub fn table_stitchers(&self) -> Vec<String> {
        if self.stitchers.is_empty() {
            vec![self.stitch_with.clone()]
        } else {
            self.stitchers.clone()
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "strutils").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
