//! Init command implementation.
//!
//! Writes an `icons.yaml` with the default settings filled in.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{IconError, Result};
use crate::output::{display_path, Printer};

/// Write a default icons.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write icons.yaml into
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing icons.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(IconError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let mut yaml = String::from("# icongen configuration\n");
    yaml.push_str(&Config::default().to_yaml()?);
    yaml.push_str("# colors:\n#   star: [red, blue]\n# subset:\n#   home: outline\n");

    fs::write(&config_path, yaml)
        .map_err(|e| IconError::io(&config_path, format!("Failed to write config: {}", e)))?;

    printer.status("Created", &display_path(&config_path));
    Ok(())
}
