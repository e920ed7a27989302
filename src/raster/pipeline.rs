//! PNG pipeline: sync, rename, resize, notify.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::icon::{
    icon_dirs, notify, output_name, with_suffix, Hook, IconRecord, SubsetMap, DEFAULT_COLOR,
    DEFAULT_TAG, RENAMED_DIR,
};
use crate::output::{display_path, plural, Printer};
use crate::repo::{sync_repository, RepoSync};
use crate::transfer::{ensure_dir, move_file};

use super::resize::generate_sizes;

/// Sync the PNG repository at `root` and generate every twotone icon.
///
/// Each `png/black/<name>/twotone-4x.png` is moved to `renamed/<name>.png`
/// and resized. Any failure aborts the run.
pub fn generate_icons(
    root: &Path,
    url: &str,
    sync: &dyn RepoSync,
    printer: &Printer,
    mut hook: Hook<'_>,
) -> Result<Vec<IconRecord>> {
    sync_repository(sync, root, url, printer)?;

    let renamed = root.join(RENAMED_DIR);
    ensure_dir(&renamed)?;

    let mut records = Vec::new();
    for (name, dir) in icon_dirs(&source_dir(root))? {
        let record = process_icon(&dir, &renamed, &name, None, printer)?;
        notify(&mut hook, &record.base, DEFAULT_COLOR);
        records.push(record);
    }

    printer.status("Finished", &plural(records.len(), "PNG icon", "PNG icons"));
    Ok(records)
}

/// Generate only the icons named in `subset`, each from its own image type.
///
/// Expects the repository to be present already, so run it after
/// [`generate_icons`]. `home -> outline` turns
/// `png/black/home/outline-4x.png` into `renamed/home_outline.png`.
pub fn generate_additional_icons(
    root: &Path,
    subset: &SubsetMap,
    printer: &Printer,
    mut hook: Hook<'_>,
) -> Result<Vec<IconRecord>> {
    let renamed = root.join(RENAMED_DIR);
    ensure_dir(&renamed)?;

    let mut records = Vec::new();
    for (name, dir) in icon_dirs(&source_dir(root))? {
        let Some(tag) = subset.tag_for(&name) else {
            continue;
        };

        let record = process_icon(&dir, &renamed, &name, Some(tag), printer)?;
        notify(&mut hook, &record.base, DEFAULT_COLOR);
        records.push(record);
    }

    printer.status(
        "Finished",
        &plural(records.len(), "additional PNG icon", "additional PNG icons"),
    );
    Ok(records)
}

fn source_dir(root: &Path) -> PathBuf {
    root.join("png").join(DEFAULT_COLOR)
}

fn process_icon(
    dir: &Path,
    renamed: &Path,
    name: &str,
    tag: Option<&str>,
    printer: &Printer,
) -> Result<IconRecord> {
    let source = dir.join(format!("{}-4x.png", tag.unwrap_or(DEFAULT_TAG)));
    let output = output_name(name, tag);
    let base = renamed.join(&output);
    let new_path = with_suffix(&base, ".png");

    move_file(&source, &new_path)?;
    printer.status("Renamed", &format!("{} -> {}", display_path(&source), display_path(&new_path)));

    let outputs = generate_sizes(&base, &new_path)?;

    Ok(IconRecord {
        name: output,
        source,
        base,
        outputs,
    })
}
