//! Label command implementation.
//!
//! Draws short text labels onto the icon template for protocols and
//! other names that have no icon of their own.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Config;
use crate::error::Result;
use crate::icon::RENAMED_DIR;
use crate::output::{display_path, plural, Printer};
use crate::transfer::ensure_dir;
use crate::{raster, vector};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelFormat {
    #[default]
    Svg,
    Png,
}

/// Generate text label icons
#[derive(Args, Debug)]
pub struct LabelArgs {
    /// Labels to render
    #[arg(required = true)]
    pub labels: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = LabelFormat::Svg)]
    pub format: LabelFormat,

    /// Config file (default: ./icons.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Output root; icons go to <path>/renamed
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Template PNG (png format only)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Font file (png format only)
    #[arg(long)]
    pub font: Option<PathBuf>,
}

pub fn run(args: LabelArgs, printer: &Printer) -> Result<()> {
    let config = Config::discover(args.config.as_deref())?;

    let root = args.path.clone().unwrap_or_else(|| match args.format {
        LabelFormat::Svg => config.svg.path.clone(),
        LabelFormat::Png => config.png.path.clone(),
    });
    ensure_dir(&root.join(RENAMED_DIR))?;

    let template = args.template.clone().unwrap_or_else(|| config.label_template());
    let font = args.font.clone().or_else(|| config.font.clone());

    for label in &args.labels {
        let base = match args.format {
            LabelFormat::Svg => vector::generate_label_icon(&root, label, &config.sizes)?,
            LabelFormat::Png => {
                raster::generate_label_icon(&root, label, &template, font.as_deref())?
            }
        };
        printer.status("Labelled", &format!("{} -> {}", label, display_path(&base)));
    }

    printer.status("Finished", &plural(args.labels.len(), "label", "labels"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_svg_labels() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("icons.yaml");
        fs::write(&config_path, "sizes: [24]\n").unwrap();

        let args = LabelArgs {
            labels: vec!["DNS".to_string(), "TCP/IP".to_string()],
            format: LabelFormat::Svg,
            config: Some(config_path),
            path: Some(dir.path().to_path_buf()),
            template: None,
            font: None,
        };

        run(args, &Printer::new()).unwrap();

        assert!(dir.path().join("renamed/DNS_black24.svg").exists());
        assert!(dir.path().join("renamed/TCPIP.svg").exists());
        assert!(dir.path().join("renamed/TCPIP_black24.svg").exists());
    }
}
