//! Icon records, naming and the lookup tables that drive the pipelines.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::{IconError, Result};

/// Directory (under the repository root) that receives all generated files.
pub const RENAMED_DIR: &str = "renamed";

/// Image-type tag used by the main pass.
pub const DEFAULT_TAG: &str = "twotone";

/// Color used when an icon has no entry in the color variant map.
pub const DEFAULT_COLOR: &str = "black";

/// Per-icon observer, called with the renamed base (no extension) and
/// the color that was generated.
pub type Hook<'a> = Option<&'a mut dyn FnMut(&Path, &str)>;

pub(crate) fn notify(hook: &mut Hook<'_>, base: &Path, color: &str) {
    if let Some(hook) = hook {
        (*hook)(base, color);
    }
}

/// One icon produced by a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRecord {
    /// Output name, e.g. `home` or `home_outline`.
    pub name: String,
    /// The upstream file the icon was taken from.
    pub source: PathBuf,
    /// Renamed base path without extension.
    pub base: PathBuf,
    /// Every size/color variant written for this icon.
    pub outputs: Vec<PathBuf>,
}

/// Icon name to the colors it should be rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorVariants(BTreeMap<String, Vec<String>>);

impl ColorVariants {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, colors: Vec<String>) {
        self.0.insert(name.into(), colors);
    }

    /// Colors for `name`, falling back to [`DEFAULT_COLOR`].
    pub fn colors_for(&self, name: &str) -> Vec<&str> {
        match self.0.get(name) {
            Some(colors) => colors.iter().map(String::as_str).collect(),
            None => vec![DEFAULT_COLOR],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for ColorVariants {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Icon name to the alternate image-type tag used by the subset pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubsetMap(BTreeMap<String, String>);

impl SubsetMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, tag: impl Into<String>) {
        self.0.insert(name.into(), tag.into());
    }

    pub fn tag_for(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for SubsetMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Output name for an icon: `home`, or `home_outline` for a subset tag.
pub fn output_name(name: &str, tag: Option<&str>) -> String {
    match tag {
        Some(tag) => format!("{}_{}", name, tag),
        None => name.to_string(),
    }
}

/// Append `suffix` to the last component of `base` without touching
/// extensions: `renamed/home` + `16.png` gives `renamed/home16.png`.
pub fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut s: OsString = base.as_os_str().to_owned();
    s.push(suffix);
    PathBuf::from(s)
}

/// Immediate subdirectories of `dir`, sorted by name.
///
/// Plain files are ignored. An unreadable directory is an error.
pub fn icon_dirs(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry =
            entry.map_err(|e| IconError::io(dir, format!("Failed to read directory: {}", e)))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        dirs.push((name, entry.into_path()));
    }

    Ok(dirs)
}
