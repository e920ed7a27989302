//! Generation manifest: the record of every icon variant a run produced.
//!
//! The CLI feeds this from the per-icon hook and writes it as JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// File name of the renamed base, e.g. `home_outline`.
    pub name: String,
    /// Renamed base path without extension.
    pub base: PathBuf,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationManifest {
    pub icons: Vec<ManifestEntry>,
}

impl GenerationManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hook target: record one generated (base, color) pair.
    pub fn record(&mut self, base: &Path, color: &str) {
        let name = base
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.icons.push(ManifestEntry {
            name,
            base: base.to_path_buf(),
            color: color.to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| IconError::Encode { message: e.to_string() })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json + "\n")
            .map_err(|e| IconError::io(path, format!("Failed to write manifest: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| IconError::io(path, format!("Failed to read manifest: {}", e)))?;

        serde_json::from_str(&content).map_err(|e| IconError::Config {
            message: format!("Invalid manifest {}: {}", path.display(), e),
            help: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_json_snapshot;
    use tempfile::tempdir;

    #[test]
    fn test_record_through_hook() {
        let mut manifest = GenerationManifest::new();
        {
            let mut hook = |base: &Path, color: &str| manifest.record(base, color);
            hook(Path::new("icons/renamed/star"), "red");
            hook(Path::new("icons/renamed/star"), "blue");
            hook(Path::new("icons/renamed/home_outline"), "black");
        }

        assert_json_snapshot!(manifest, @r#"
        {
          "icons": [
            {
              "name": "star",
              "base": "icons/renamed/star",
              "color": "red"
            },
            {
              "name": "star",
              "base": "icons/renamed/star",
              "color": "blue"
            },
            {
              "name": "home_outline",
              "base": "icons/renamed/home_outline",
              "color": "black"
            }
          ]
        }
        "#);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icons.json");

        let mut manifest = GenerationManifest::new();
        manifest.record(&dir.path().join("renamed").join("home"), "black");
        manifest.save(&path).unwrap();

        let loaded = GenerationManifest::load(&path).unwrap();
        assert_eq!(loaded, manifest);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.icons[0].name, "home");
    }
}
