use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::error::{HubError, Result};

/// Whether a re-upload of the same file name replaces the stored asset or is
/// given a new distinct name by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Keep the file's original name; re-uploading replaces the asset at a
    /// stable address.
    ReuseName,
    /// Mint a new name even if one with the same file name already exists.
    UniqueName,
}

impl OverwritePolicy {
    pub(crate) fn use_filename(self) -> bool {
        matches!(self, OverwritePolicy::ReuseName)
    }

    pub(crate) fn unique_filename(self) -> bool {
        matches!(self, OverwritePolicy::UniqueName)
    }
}

/// A pending upload: local file, logical namespace at the host, and naming
/// policy.
#[derive(Debug, Clone)]
pub struct AssetUploadRequest {
    pub local_path: PathBuf,
    pub folder: String,
    pub overwrite_policy: OverwritePolicy,
}

impl AssetUploadRequest {
    pub fn new(
        local_path: impl Into<PathBuf>,
        folder: impl Into<String>,
        overwrite_policy: OverwritePolicy,
    ) -> Result<Self> {
        let folder = folder.into();
        if folder.trim().is_empty() {
            return Err(HubError::ConfigError {
                message: "upload folder must not be empty".to_string(),
            });
        }

        Ok(Self {
            local_path: local_path.into(),
            folder,
            overwrite_policy,
        })
    }
}

/// A successfully stored remote asset.
///
/// `public_id` is the only valid key for deleting the asset; the `url` is for
/// retrieval only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub public_id: String,
    pub url: String,
}

/// Result of a delete call. Both variants are successful completions:
/// deleting an asset that is already gone is a no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted,
    NotFound,
}
