use crate::converter::tokenizer::DigitPolicy;
use crate::CaseStyle;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Style used by `Converter::convert_default`
    #[serde(default)]
    pub style: CaseStyle,

    #[serde(default)]
    pub digits: DigitPolicy,
}

/// One config file; only the keys it sets take part in merging
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigLayer {
    style: Option<CaseStyle>,
    digits: Option<DigitPolicy>,
}

impl ConfigLayer {
    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Load configuration with priority: explicit style > local config > global config > defaults
    pub fn load(style: Option<CaseStyle>) -> Result<Self> {
        Self::load_layers(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            style,
        )
    }

    fn load_layers(global: Option<&Path>, local: &Path, style: Option<CaseStyle>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                log::debug!("loading global config from {}", global_path.display());
                config = config.merge(ConfigLayer::from_file(global_path)?);
            }
        }

        if local.exists() {
            log::debug!("loading local config from {}", local.display());
            config = config.merge(ConfigLayer::from_file(local)?);
        }

        if let Some(style) = style {
            config.style = style;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigLayer::from_file(path)?))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config")
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(style) = layer.style {
            self.style = style;
        }
        if let Some(digits) = layer.digits {
            self.digits = digits;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
