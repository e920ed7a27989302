//! Png command implementation.
//!
//! Syncs the PNG icon repository, renames and resizes every icon, then
//! runs the subset pass if the config has one.

use std::path::Path;

use clap::Args;

use crate::error::Result;
use crate::manifest::GenerationManifest;
use crate::output::{display_path, plural, Printer};
use crate::raster;
use crate::repo::{GitCli, RepoSync};

use super::CommonArgs;

/// Sync the PNG icon set and generate resized icons
#[derive(Args, Debug, Default)]
pub struct PngArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only run the subset pass (repository must already be present)
    #[arg(long)]
    pub skip_main: bool,
}

pub fn run(args: PngArgs, printer: &Printer) -> Result<()> {
    run_with(args, &GitCli::new(), printer)
}

pub fn run_with(args: PngArgs, sync: &dyn RepoSync, printer: &Printer) -> Result<()> {
    let config = args.common.load_config()?;
    let root = args.common.path.clone().unwrap_or_else(|| config.png.path.clone());
    let url = args.common.url.clone().unwrap_or_else(|| config.png.url.clone());

    let mut manifest = GenerationManifest::new();
    let mut hook = |base: &Path, color: &str| manifest.record(base, color);

    let mut total = 0;
    if !args.skip_main {
        total += raster::generate_icons(&root, &url, sync, printer, Some(&mut hook))?.len();
    }

    if !config.subset.is_empty() {
        printer.info("Subset", &plural(config.subset.len(), "icon", "icons"));
        total +=
            raster::generate_additional_icons(&root, &config.subset, printer, Some(&mut hook))?
                .len();
    }

    printer.status(
        "Built",
        &format!(
            "{} in {}",
            plural(total, "PNG icon", "PNG icons"),
            printer.cyan(&display_path(&root))
        ),
    );

    if let Some(path) = &config.manifest {
        manifest.save(path)?;
        printer.status("Wrote", &display_path(path));
    }

    Ok(())
}
