// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem access: manifest loading and maFile reads.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use mafiles_core::{BoxError, Manifest, ManifestError, RecordSource};
use tracing::debug;

/// Read and parse a `manifest.json`.
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    debug!(path = %path.display(), "loading manifest");
    let contents = std::fs::read(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_slice(&contents)?)
}

/// Reads maFiles from disk.
///
/// By default `filename` is resolved against the manifest's directory. An
/// override path, when set, is read for every fetch regardless of the
/// manifest entry's file name.
#[derive(Debug, Clone)]
pub struct FsRecordSource {
    base_dir: PathBuf,
    override_path: Option<PathBuf>,
}

impl FsRecordSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            override_path: None,
        }
    }

    /// Resolve maFiles next to `manifest_path`.
    pub fn for_manifest(manifest_path: &Path) -> Self {
        let base_dir = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::new(base_dir)
    }

    /// Always read `path`, ignoring the manifest file name.
    pub fn with_override(mut self, path: impl Into<PathBuf>) -> Self {
        self.override_path = Some(path.into());
        self
    }

    /// The path a fetch of `filename` reads.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        match &self.override_path {
            Some(path) => path.clone(),
            None => self.base_dir.join(filename),
        }
    }
}

#[async_trait]
impl RecordSource for FsRecordSource {
    async fn fetch(&self, filename: &str) -> Result<Vec<u8>, BoxError> {
        let path = self.path_for(filename);
        let bytes = tokio::fs::read(&path).await.map_err(|e| -> BoxError {
            format!("{}: {e}", path.display()).into()
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "maFile read");
        Ok(bytes)
    }
}
