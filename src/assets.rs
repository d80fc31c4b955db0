//! Static asset copying.
//!
//! Each configured source directory is mirrored into the output tree under its
//! `target` subdirectory. Files ending in the output extension are skipped so
//! an asset directory that also holds templates or stray pages can never
//! overwrite a generated page.

use crate::naming::OUTPUT_EXTENSION;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("asset directory not found: {}", .0.display())]
    MissingInput(PathBuf),
    #[error("cannot read assets in {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("cannot copy {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One directory to mirror into the output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetSource {
    /// Directory to copy from.
    pub source: PathBuf,
    /// Subdirectory of the output root to copy into (empty = the root itself).
    #[serde(default)]
    pub target: PathBuf,
    /// Descend into subdirectories; when false only direct files are copied.
    #[serde(default = "default_recursive")]
    pub recursive: bool,
    /// Skip the source quietly when it does not exist.
    #[serde(default)]
    pub optional: bool,
}

fn default_recursive() -> bool {
    true
}

/// Whether a file would be excluded from asset copying.
pub fn is_excluded(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(OUTPUT_EXTENSION))
        .unwrap_or(false)
}

/// Fail on the first non-optional source that is not a directory.
///
/// Runs before anything is written so a bad asset path cannot leave a
/// half-built output tree behind.
pub fn check_sources(assets: &[AssetSource]) -> Result<(), AssetError> {
    match assets.iter().find(|a| !a.optional && !a.source.is_dir()) {
        Some(missing) => Err(AssetError::MissingInput(missing.source.clone())),
        None => Ok(()),
    }
}

/// Copy one asset source into `output_dir`. Returns the number of files copied.
pub fn copy_asset_source(asset: &AssetSource, output_dir: &Path) -> Result<usize, AssetError> {
    if !asset.source.is_dir() {
        if asset.optional {
            debug!(source = %asset.source.display(), "optional asset directory absent");
            return Ok(0);
        }
        return Err(AssetError::MissingInput(asset.source.clone()));
    }
    let dest_root = output_dir.join(&asset.target);
    let copy_err = |from: &Path, to: &Path, source: std::io::Error| AssetError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    let mut walker = WalkDir::new(&asset.source).sort_by_file_name();
    if !asset.recursive {
        walker = walker.max_depth(1);
    }

    let mut copied = 0;
    for entry in walker {
        let entry = entry.map_err(|source| AssetError::Walk {
            path: asset.source.clone(),
            source,
        })?;
        let rel = entry
            .path()
            .strip_prefix(&asset.source)
            .unwrap_or(entry.path());
        let dest = dest_root.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).map_err(|e| copy_err(entry.path(), &dest, e))?;
        } else if !is_excluded(entry.path()) {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(|e| copy_err(entry.path(), &dest, e))?;
            }
            fs::copy(entry.path(), &dest).map_err(|e| copy_err(entry.path(), &dest, e))?;
            debug!(from = %entry.path().display(), to = %dest.display(), "copied asset");
            copied += 1;
        }
    }
    Ok(copied)
}

/// Copy every asset source in order. Stops at the first failure.
pub fn copy_assets(assets: &[AssetSource], output_dir: &Path) -> Result<usize, AssetError> {
    let mut total = 0;
    for asset in assets {
        total += copy_asset_source(asset, output_dir)?;
    }
    Ok(total)
}
