//! Persistence of the site record.
//!
//! One JSON blob on disk holds the whole [`SiteConfig`]. The contract the
//! rest of the tool relies on:
//!
//! - [`load`] always yields a usable record. Absent, unreadable, partial or
//!   corrupt data falls back to the full default record, never to a
//!   field-by-field merge.
//! - [`save`] rewrites the blob after every edit. A crash between an edit
//!   and its save loses that one edit, which is acceptable here.
//!
//! The session tier is deliberately not part of the blob; it is per-run
//! CLI state.

use crate::config::SiteConfig;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read and deserialize the stored record, surfacing every failure.
///
/// [`load`] is the forgiving wrapper; this is the layer underneath for
/// callers that want to distinguish "no store yet" from "store damaged".
pub fn read(path: &Path) -> Result<SiteConfig, StoreError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load the stored record, falling back to the defaults wholesale when the
/// blob is absent or damaged.
pub fn load(path: &Path) -> SiteConfig {
    read(path).unwrap_or_default()
}

/// Persist the record as pretty-printed JSON, creating parent directories
/// as needed.
pub fn save(path: &Path, config: &SiteConfig) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json + "\n")?;
    Ok(())
}
