//! Extension manifest icon fragment
//!
//! Mirrors the `"icons"` and `"action.default_icon"` objects of a Chrome
//! extension `manifest.json`, so generated icons can be pasted straight in.
//! Keys are icon sizes, values are paths relative to the extension root.

use anyhow::{Context, Result};
use serde::{Serialize, Serializer};
use std::path::Path;

pub const MANIFEST_FILE: &str = "manifest-icons.json";

/// Largest icon Chrome shows in the toolbar
const TOOLBAR_MAX: u32 = 48;

/// Size to path map, serialized in ascending size order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet(Vec<(u32, String)>);

impl IconSet {
    pub fn insert(&mut self, size: u32, path: String) {
        match self.0.binary_search_by_key(&size, |(s, _)| *s) {
            Ok(i) => self.0[i].1 = path,
            Err(i) => self.0.insert(i, (size, path)),
        }
    }

    pub fn sizes(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().map(|(s, _)| *s)
    }
}

impl Serialize for IconSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(size, path)| (size.to_string(), path)))
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct Action {
    pub default_icon: IconSet,
}

/// Root of the fragment
#[derive(Serialize, Debug, Clone, Default)]
pub struct IconManifest {
    pub icons: IconSet,
    pub action: Action,
}

impl IconManifest {
    /// Build the fragment for icons written as `<prefix>/icon-<size>.png`
    pub fn for_sizes(prefix: &Path, sizes: &[u32]) -> Self {
        let prefix = prefix.to_string_lossy().replace('\\', "/");
        let prefix = prefix.trim_end_matches('/');

        let mut manifest = Self::default();
        for &size in sizes {
            let path = format!("{prefix}/{}", crate::config::icon_file_name(size));
            if size <= TOOLBAR_MAX {
                manifest.action.default_icon.insert(size, path.clone());
            }
            manifest.icons.insert(size, path);
        }
        manifest
    }
}

/// Write the fragment as `manifest-icons.json` into `dir`
pub fn write_manifest(dir: &Path, manifest: &IconManifest) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest).context("Failed to serialize icon manifest")?;
    std::fs::write(dir.join(MANIFEST_FILE), json).context("Failed to write manifest-icons.json")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_serialize_in_numeric_order() {
        let manifest = IconManifest::for_sizes(Path::new("assets/icons"), &[128, 16, 48, 32]);
        let json = serde_json::to_string(&manifest).unwrap();

        let p16 = json.find("\"16\"").unwrap();
        let p32 = json.find("\"32\"").unwrap();
        let p128 = json.find("\"128\"").unwrap();
        assert!(p16 < p32 && p32 < p128, "{json}");
    }

    #[test]
    fn toolbar_icons_exclude_large_sizes() {
        let manifest = IconManifest::for_sizes(Path::new("assets/icons/"), &[16, 32, 48, 128]);
        assert_eq!(manifest.icons.sizes().collect::<Vec<_>>(), [16, 32, 48, 128]);
        assert_eq!(manifest.action.default_icon.sizes().collect::<Vec<_>>(), [16, 32, 48]);

        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["icons"]["128"], "assets/icons/icon-128.png");
        assert_eq!(value["action"]["default_icon"]["16"], "assets/icons/icon-16.png");
        assert!(value["action"]["default_icon"].get("128").is_none());
    }

    #[test]
    fn duplicate_size_keeps_last_path() {
        let mut set = IconSet::default();
        set.insert(16, "a.png".to_string());
        set.insert(16, "b.png".to_string());
        assert_eq!(set, IconSet(vec![(16, "b.png".to_string())]));
    }

    #[test]
    fn writes_valid_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = IconManifest::for_sizes(Path::new("assets/icons"), &[16, 32]);
        write_manifest(dir.path(), &manifest).unwrap();

        let text = std::fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["icons"]["32"], "assets/icons/icon-32.png");
    }
}
