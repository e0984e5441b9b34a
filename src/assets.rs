//! Fixed asset manifest
//!
//! The game reads five images by fixed file name. Decoding is the
//! presenter's job; this module only knows the names and can check that the
//! files are present and readable before a presenter opens them.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::AssetError;
use crate::present::TextureKind;

/// Textures required before any entity is created
#[derive(Debug, Clone)]
pub struct AssetManifest {
    pub root: PathBuf,
    pub textures: Vec<TextureKind>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl AssetManifest {
    pub fn in_dir(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            textures: TextureKind::ALL.to_vec(),
        }
    }

    pub fn path_of(&self, texture: TextureKind) -> PathBuf {
        self.root.join(texture.file_name())
    }

    /// Fail on the first texture that is missing or cannot be opened
    pub fn verify(&self) -> Result<(), AssetError> {
        for &texture in &self.textures {
            let path = self.path_of(texture);
            check_file(texture.file_name(), &path)?;
            log::debug!("Asset ok: {}", path.display());
        }
        log::info!("All {} assets present in {}", self.textures.len(), self.root.display());
        Ok(())
    }
}

fn check_file(name: &'static str, path: &Path) -> Result<(), AssetError> {
    if !path.exists() {
        return Err(AssetError::Missing {
            name,
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(AssetError::Unreadable {
            name,
            reason: "not a regular file".into(),
        });
    }
    File::open(path).map_err(|e| AssetError::Unreadable {
        name,
        reason: e.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "casse-brique-assets-{tag}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_verify_all_present() {
        let dir = scratch_dir("ok");
        for texture in TextureKind::ALL {
            fs::write(dir.join(texture.file_name()), b"img").unwrap();
        }
        assert!(AssetManifest::in_dir(&dir).verify().is_ok());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_verify_reports_missing_file() {
        let dir = scratch_dir("missing");
        for texture in TextureKind::ALL {
            if texture != TextureKind::Victory {
                fs::write(dir.join(texture.file_name()), b"img").unwrap();
            }
        }
        let err = AssetManifest::in_dir(&dir).verify().unwrap_err();
        assert!(matches!(err, AssetError::Missing { name: "Victoire.png", .. }));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_directory_in_place_of_file_is_unreadable() {
        let dir = scratch_dir("dir");
        for texture in TextureKind::ALL {
            if texture == TextureKind::Background {
                fs::create_dir(dir.join(texture.file_name())).unwrap();
            } else {
                fs::write(dir.join(texture.file_name()), b"img").unwrap();
            }
        }
        let err = AssetManifest::in_dir(&dir).verify().unwrap_err();
        assert!(matches!(err, AssetError::Unreadable { name: "background.jpg", .. }));
        fs::remove_dir_all(&dir).unwrap();
    }
}
