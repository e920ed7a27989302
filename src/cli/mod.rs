pub mod completions;
pub mod init;
pub mod label;
pub mod png;
pub mod svg;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

/// icongen - Icon set generator
#[derive(Parser, Debug)]
#[command(name = "icongen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync the PNG icon set and generate resized icons
    Png(png::PngArgs),

    /// Sync the SVG icon set and generate recolored, resized icons
    Svg(svg::SvgArgs),

    /// Generate text label icons
    Label(label::LabelArgs),

    /// Write a default icons.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options shared by the generating commands.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Config file (default: ./icons.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Local checkout of the icon repository
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Upstream repository URL
    #[arg(long)]
    pub url: Option<String>,

    /// Write the generation manifest (JSON) here
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl CommonArgs {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::discover(self.config.as_deref())?;
        if let Some(manifest) = &self.manifest {
            config.manifest = Some(manifest.clone());
        }
        Ok(config)
    }
}
