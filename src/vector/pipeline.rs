//! SVG pipeline: sync, copy, recolor per color variant, notify.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::icon::{
    icon_dirs, notify, output_name, with_suffix, ColorVariants, Hook, IconRecord, SubsetMap,
    DEFAULT_COLOR, DEFAULT_TAG, RENAMED_DIR,
};
use crate::output::{display_path, plural, Printer};
use crate::repo::{sync_repository, RepoSync};
use crate::transfer::{copy_file, ensure_dir};

use super::recolor::generate_sizes;

/// Sync the SVG repository at `root` and generate every twotone icon.
///
/// Icons listed in `colors` get one output set per listed color; all
/// others are rendered in black. A source that cannot be parsed is
/// reported and skipped; every other failure aborts the run.
pub fn generate_icons(
    root: &Path,
    url: &str,
    sizes: &[u32],
    colors: &ColorVariants,
    sync: &dyn RepoSync,
    printer: &Printer,
    mut hook: Hook<'_>,
) -> Result<Vec<IconRecord>> {
    sync_repository(sync, root, url, printer)?;

    let renamed = root.join(RENAMED_DIR);
    ensure_dir(&renamed)?;

    let mut records = Vec::new();
    for (name, dir) in icon_dirs(&root.join("svg"))? {
        let (source, base, new_path) = stage(&dir, &renamed, &name, None)?;

        let mut outputs = Vec::new();
        for color in colors.colors_for(&name) {
            if let Some(written) = render(&base, &new_path, color, sizes, printer)? {
                outputs.extend(written);
                notify(&mut hook, &base, color);
            }
        }

        records.push(IconRecord {
            name,
            source,
            base,
            outputs,
        });
    }

    printer.status("Finished", &plural(records.len(), "SVG icon", "SVG icons"));
    Ok(records)
}

/// Generate only the icons named in `subset`, in black, from their
/// alternate image type. `home -> outline` copies `svg/home/outline.svg`
/// to `renamed/home_outline.svg`.
pub fn generate_additional_icons(
    root: &Path,
    sizes: &[u32],
    subset: &SubsetMap,
    printer: &Printer,
    mut hook: Hook<'_>,
) -> Result<Vec<IconRecord>> {
    let renamed = root.join(RENAMED_DIR);
    ensure_dir(&renamed)?;

    let mut records = Vec::new();
    for (name, dir) in icon_dirs(&root.join("svg"))? {
        let Some(tag) = subset.tag_for(&name) else {
            continue;
        };

        let (source, base, new_path) = stage(&dir, &renamed, &name, Some(tag))?;

        let mut outputs = Vec::new();
        if let Some(written) = render(&base, &new_path, DEFAULT_COLOR, sizes, printer)? {
            outputs = written;
            notify(&mut hook, &base, DEFAULT_COLOR);
        }

        records.push(IconRecord {
            name: output_name(&name, Some(tag)),
            source,
            base,
            outputs,
        });
    }

    printer.status(
        "Finished",
        &plural(records.len(), "additional SVG icon", "additional SVG icons"),
    );
    Ok(records)
}

/// Copy the upstream file into `renamed/`. Returns (source, base, copy).
fn stage(
    dir: &Path,
    renamed: &Path,
    name: &str,
    tag: Option<&str>,
) -> Result<(PathBuf, PathBuf, PathBuf)> {
    let source = dir.join(format!("{}.svg", tag.unwrap_or(DEFAULT_TAG)));
    let base = renamed.join(output_name(name, tag));
    let new_path = with_suffix(&base, ".svg");

    copy_file(&source, &new_path)?;
    Ok((source, base, new_path))
}

/// Recolor one icon; `None` when the source was skipped.
fn render(
    base: &Path,
    path: &Path,
    color: &str,
    sizes: &[u32],
    printer: &Printer,
) -> Result<Option<Vec<PathBuf>>> {
    match generate_sizes(base, path, color, sizes) {
        Ok(written) => {
            printer.status(
                "Generated",
                &format!(
                    "{} {}",
                    display_path(base),
                    printer.dim(&format!(
                        "({}, {})",
                        color,
                        plural(written.len(), "size", "sizes")
                    ))
                ),
            );
            Ok(Some(written))
        }
        Err(e) if e.is_recoverable() => {
            printer.error("Skipping", &e.to_string());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
