//! `OpenDrive` map file lookup.
//!
//! Engines refer to maps by package paths such as `/Game/Maps/Town01` or, while
//! playing in the editor, by prefixed names such as `UEDPIE_0_Town01`. This
//! module resolves such a name to the matching `.xodr` file somewhere below a
//! content directory and loads its XML text.
//!
//! # Usage
//! ```no_run
//! use vehicle_control_core::{MapLookupConfig, OpenDrive};
//!
//! let lookup = OpenDrive::new(MapLookupConfig {
//!     content_dir: "Unreal/Content".into(),
//!     ..Default::default()
//! });
//! let xml = lookup.load("/Game/Maps/Town01");
//! if xml.is_empty() {
//!     eprintln!("map has no OpenDrive description");
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

/// Prefix the editor adds to map names of play-in-editor worlds.
const PLAY_IN_EDITOR_PREFIX: &str = "UEDPIE_";

/// Where and how map files are searched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLookupConfig {
    /// Root directory searched recursively
    pub content_dir: PathBuf,
    /// File extension of `OpenDrive` files, without the dot
    pub extension: String,
}

impl Default for MapLookupConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("Content"),
            extension: String::from("xodr"),
        }
    }
}

/// Errors from [`OpenDrive::try_load`].
#[derive(Debug, Error)]
pub enum OpenDriveError {
    #[error("no OpenDrive file found for map '{0}'")]
    NotFound(String),

    #[error("failed to read OpenDrive file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Map name to `OpenDrive` file resolver.
#[derive(Debug, Clone, Default)]
pub struct OpenDrive {
    config: MapLookupConfig,
}

impl OpenDrive {
    pub fn new(config: MapLookupConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapLookupConfig {
        &self.config
    }

    /// Reduce an engine map reference to the bare map name.
    ///
    /// Drops the package path, any `.Object` suffix and the play-in-editor
    /// prefix: `/Game/Maps/UEDPIE_0_Town01.Town01` becomes `Town01`.
    pub fn map_base_name(map_name: &str) -> &str {
        let name = map_name.rsplit('/').next().unwrap_or(map_name);
        let name = name.split('.').next().unwrap_or(name);

        if let Some(rest) = name.strip_prefix(PLAY_IN_EDITOR_PREFIX) {
            if let Some((instance, map)) = rest.split_once('_') {
                if !instance.is_empty() && instance.bytes().all(|b| b.is_ascii_digit()) {
                    return map;
                }
            }
        }
        name
    }

    /// Path of the `OpenDrive` file belonging to `map_name`, if one exists.
    pub fn find_path_to_xodr(&self, map_name: &str) -> Option<PathBuf> {
        let file_name = format!("{}.{}", Self::map_base_name(map_name), self.config.extension);
        find_file(&self.config.content_dir, &file_name)
    }

    /// Load the `OpenDrive` XML associated with `map_name`.
    ///
    /// # Errors
    /// Returns [`OpenDriveError::NotFound`] if no matching file exists below the
    /// content directory and [`OpenDriveError::Read`] if it cannot be read.
    pub fn try_load(&self, map_name: &str) -> Result<String, OpenDriveError> {
        let path = self
            .find_path_to_xodr(map_name)
            .ok_or_else(|| OpenDriveError::NotFound(map_name.to_owned()))?;

        info!("Loading OpenDrive file '{}'", path.display());
        fs::read_to_string(&path).map_err(|source| OpenDriveError::Read { path, source })
    }

    /// Load the `OpenDrive` XML associated with `map_name`, or an empty string
    /// if the file is missing or unreadable.
    pub fn load(&self, map_name: &str) -> String {
        match self.try_load(map_name) {
            Ok(xml) => xml,
            Err(err) => {
                warn!("{}", err);
                String::new()
            }
        }
    }
}

/// Depth-first search in sorted order: files of a directory are checked
/// before its subdirectories. Symlinked directories are not followed.
fn find_file(dir: &Path, file_name: &str) -> Option<PathBuf> {
    let mut entries: Vec<(PathBuf, fs::FileType)> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let file_type = entry.file_type().ok()?;
            Some((entry.path(), file_type))
        })
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let direct = entries.iter().find(|(path, file_type)| {
        file_type.is_file() && path.file_name().is_some_and(|name| name == file_name)
    });
    if let Some((path, _)) = direct {
        return Some(path.clone());
    }

    entries
        .iter()
        .filter(|(_, file_type)| file_type.is_dir())
        .find_map(|(path, _)| find_file(path, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempContent {
        root: PathBuf,
    }

    impl TempContent {
        fn new(tag: &str) -> Self {
            let root = std::env::temp_dir().join(format!(
                "vehicle-control-opendrive-{}-{tag}",
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&root);
            fs::create_dir_all(&root).unwrap();
            Self { root }
        }

        fn write(&self, relative: &str, contents: &str) -> PathBuf {
            let path = self.root.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, contents).unwrap();
            path
        }

        fn lookup(&self) -> OpenDrive {
            OpenDrive::new(MapLookupConfig {
                content_dir: self.root.clone(),
                ..Default::default()
            })
        }
    }

    impl Drop for TempContent {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }

    #[test]
    fn test_map_base_name() {
        assert_eq!(OpenDrive::map_base_name("Town01"), "Town01");
        assert_eq!(OpenDrive::map_base_name("/Game/Maps/Town02"), "Town02");
        assert_eq!(OpenDrive::map_base_name("/Game/Maps/Town03.Town03"), "Town03");
        assert_eq!(OpenDrive::map_base_name("UEDPIE_0_Town04"), "Town04");
        assert_eq!(OpenDrive::map_base_name("UEDPIE_12_Town05"), "Town05");
        // Not a play-in-editor prefix without an instance number
        assert_eq!(OpenDrive::map_base_name("UEDPIE_Town06"), "UEDPIE_Town06");
    }

    #[test]
    fn test_finds_nested_file() {
        let content = TempContent::new("nested");
        content.write("Maps/Other/Town01.umap", "binary");
        let expected = content.write("Maps/OpenDrive/Town01.xodr", "<OpenDRIVE/>");

        let lookup = content.lookup();
        assert_eq!(lookup.find_path_to_xodr("/Game/Maps/Town01"), Some(expected));
        assert_eq!(lookup.load("UEDPIE_0_Town01"), "<OpenDRIVE/>");
    }

    #[test]
    fn test_missing_map_loads_empty() {
        let content = TempContent::new("missing");
        content.write("Maps/OpenDrive/Town01.xodr", "<OpenDRIVE/>");

        let lookup = content.lookup();
        assert!(lookup.find_path_to_xodr("Town10").is_none());
        assert_eq!(lookup.load("Town10"), "");
        assert!(matches!(
            lookup.try_load("Town10"),
            Err(OpenDriveError::NotFound(name)) if name == "Town10"
        ));
    }

    #[test]
    fn test_missing_content_dir() {
        let lookup = OpenDrive::new(MapLookupConfig {
            content_dir: PathBuf::from("/definitely/not/a/content/dir"),
            ..Default::default()
        });
        assert_eq!(lookup.load("Town01"), "");
    }
}
