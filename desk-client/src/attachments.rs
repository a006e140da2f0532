//! Case attachment storage
//!
//! Attachments live in an explicit store that hands back durable keys;
//! a `CaseDocument.url` is such a key, valid across sessions rather than
//! tied to one.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{ClientError, ClientResult};

/// External collaborator holding attachment bytes.
pub trait AttachmentStore: Send + Sync {
    /// Store `bytes` under a new durable key derived from the content
    /// and the display name.
    fn put(&self, name: &str, bytes: &[u8]) -> ClientResult<String>;

    fn read(&self, key: &str) -> ClientResult<Vec<u8>>;

    fn remove(&self, key: &str) -> ClientResult<()>;
}

/// Filesystem-backed attachment store rooted at one directory.
///
/// Keys are `<16 hex chars of sha256>-<sanitized name>`, so identical
/// uploads of the same file land on the same key.
pub struct FsAttachmentStore {
    root: PathBuf,
}

impl FsAttachmentStore {
    pub fn open(root: impl Into<PathBuf>) -> ClientResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> ClientResult<PathBuf> {
        // Keys are flat file names; anything else is not one of ours.
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(ClientError::Validation(format!(
                "invalid attachment key: {key}"
            )));
        }
        Ok(self.root.join(key))
    }
}

fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "attachment".to_string()
    } else {
        cleaned
    }
}

impl AttachmentStore for FsAttachmentStore {
    fn put(&self, name: &str, bytes: &[u8]) -> ClientResult<String> {
        let digest = Sha256::digest(bytes);
        let key = format!("{}-{}", &hex::encode(digest)[..16], sanitize_name(name));
        let path = self.path_for(&key)?;
        fs::write(&path, bytes)?;
        tracing::debug!(key, size = bytes.len(), "attachment stored");
        Ok(key)
    }

    fn read(&self, key: &str) -> ClientResult<Vec<u8>> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ClientError::NotFound(
                format!("attachment {key} not found"),
            )),
            Err(e) => Err(e.into()),
        }
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ClientError::NotFound(
                format!("attachment {key} not found"),
            )),
            Err(e) => Err(e.into()),
        }
    }
}

impl FsAttachmentStore {
    pub fn root(&self) -> &Path {
        &self.root
    }
}
