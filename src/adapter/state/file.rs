//! File-backed alert-state store.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::warn;

use crate::domain::Asset;
use crate::error::StateError;
use crate::port::AlertStateStore;

/// One flag file per asset, `<dir>/<lowercase-symbol>.txt`, holding the
/// literal text `true` or `false`.
///
/// A missing file or unparseable content reads as `false` (eligible to
/// alert). The directory is created on first write.
pub struct FileAlertStore {
    dir: PathBuf,
}

impl FileAlertStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, asset: Asset) -> PathBuf {
        self.dir.join(format!("{}.txt", asset.key()))
    }
}

impl AlertStateStore for FileAlertStore {
    fn get(&self, asset: Asset) -> Result<bool, StateError> {
        let content = match fs::read_to_string(self.path_for(asset)) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => {
                return Err(StateError::Read {
                    key: asset.key().to_string(),
                    source: e,
                })
            }
        };

        match content.trim().parse::<bool>() {
            Ok(flag) => Ok(flag),
            Err(_) => {
                warn!(
                    asset = asset.key(),
                    content = content.trim(),
                    "Unparseable alert state, treating as not yet alerted"
                );
                Ok(false)
            }
        }
    }

    fn set(&self, asset: Asset, alerted: bool) -> Result<(), StateError> {
        fs::create_dir_all(&self.dir)
            .and_then(|()| {
                fs::write(self.path_for(asset), if alerted { "true" } else { "false" })
            })
            .map_err(|e| StateError::Write {
                key: asset.key().to_string(),
                source: e,
            })
    }
}
