//! Project configuration (icons.yaml).
//!
//! Every field is optional; CLI flags override what is set here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::icon::{ColorVariants, SubsetMap};
use crate::raster::RASTER_SIZES;
use crate::repo::{DEFAULT_PNG_URL, DEFAULT_SVG_URL};

/// The name of the configuration file.
pub const CONFIG_FILENAME: &str = "icons.yaml";

/// Where an icon set is cloned to and from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub path: PathBuf,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SVG repository checkout.
    #[serde(default = "default_svg")]
    pub svg: Source,

    /// PNG repository checkout.
    #[serde(default = "default_png")]
    pub png: Source,

    /// Sizes for SVG output. PNG output always uses the fixed raster sizes.
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,

    /// Extra colors per icon name.
    pub colors: ColorVariants,

    /// Icons to regenerate from an alternate image type after the main pass.
    pub subset: SubsetMap,

    /// Where to write the generation manifest (JSON), if anywhere.
    pub manifest: Option<PathBuf>,

    /// Font file for PNG labels.
    pub font: Option<PathBuf>,

    /// Template image for PNG labels. Defaults to the renamed
    /// `check_box_outline_blank.png` of the PNG checkout.
    pub template: Option<PathBuf>,
}

fn default_svg() -> Source {
    Source {
        path: PathBuf::from("/tmp/icons/material-icons"),
        url: DEFAULT_SVG_URL.to_string(),
    }
}

fn default_png() -> Source {
    Source {
        path: PathBuf::from("/tmp/icons/material-icons-png"),
        url: DEFAULT_PNG_URL.to_string(),
    }
}

fn default_sizes() -> Vec<u32> {
    RASTER_SIZES.to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            svg: default_svg(),
            png: default_png(),
            sizes: default_sizes(),
            colors: ColorVariants::default(),
            subset: SubsetMap::default(),
            manifest: None,
            font: None,
            template: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| IconError::io(path, format!("Failed to read config: {}", e)))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| IconError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;

        if config.sizes.contains(&0) {
            return Err(IconError::Config {
                message: "sizes must be greater than zero".to_string(),
                help: None,
            });
        }

        Ok(config)
    }

    /// Load `explicit` if given, else `icons.yaml` in the current directory
    /// if present, else the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let local = Path::new(CONFIG_FILENAME);
                if local.exists() {
                    Self::load(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| IconError::Config {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    /// Template for PNG labels, resolved against the PNG checkout.
    pub fn label_template(&self) -> PathBuf {
        self.template
            .clone()
            .unwrap_or_else(|| self.png.path.join("renamed").join("check_box_outline_blank.png"))
    }
}
