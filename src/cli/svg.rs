//! Svg command implementation.
//!
//! Syncs the SVG icon repository and writes one recolored file per
//! size and color, then runs the subset pass if the config has one.

use std::path::Path;

use clap::Args;

use crate::error::{IconError, Result};
use crate::manifest::GenerationManifest;
use crate::output::{display_path, plural, Printer};
use crate::repo::{GitCli, RepoSync};
use crate::vector;

use super::CommonArgs;

/// Sync the SVG icon set and generate recolored, resized icons
#[derive(Args, Debug, Default)]
pub struct SvgArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output sizes, comma separated (overrides the config)
    #[arg(long, value_delimiter = ',')]
    pub sizes: Vec<u32>,

    /// Only run the subset pass (repository must already be present)
    #[arg(long)]
    pub skip_main: bool,
}

pub fn run(args: SvgArgs, printer: &Printer) -> Result<()> {
    run_with(args, &GitCli::new(), printer)
}

pub fn run_with(args: SvgArgs, sync: &dyn RepoSync, printer: &Printer) -> Result<()> {
    let config = args.common.load_config()?;
    let root = args.common.path.clone().unwrap_or_else(|| config.svg.path.clone());
    let url = args.common.url.clone().unwrap_or_else(|| config.svg.url.clone());
    let sizes = if args.sizes.is_empty() { config.sizes.clone() } else { args.sizes.clone() };

    if sizes.contains(&0) {
        return Err(IconError::Config {
            message: "sizes must be greater than zero".to_string(),
            help: None,
        });
    }

    let mut manifest = GenerationManifest::new();
    let mut hook = |base: &Path, color: &str| manifest.record(base, color);

    let mut total = 0;
    if !args.skip_main {
        total += vector::generate_icons(
            &root,
            &url,
            &sizes,
            &config.colors,
            sync,
            printer,
            Some(&mut hook),
        )?
        .len();
    }

    if !config.subset.is_empty() {
        printer.info("Subset", &plural(config.subset.len(), "icon", "icons"));
        total += vector::generate_additional_icons(
            &root,
            &sizes,
            &config.subset,
            printer,
            Some(&mut hook),
        )?
        .len();
    }

    printer.status(
        "Built",
        &format!(
            "{} in {}",
            plural(total, "SVG icon", "SVG icons"),
            printer.cyan(&display_path(&root))
        ),
    );

    if let Some(path) = &config.manifest {
        manifest.save(path)?;
        printer.status("Wrote", &display_path(path));
    }

    Ok(())
}
