use crate::domain::ports::Storage;
use crate::utils::error::{InstallerError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Storage for LocalStorage {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self) -> bool {
        // symlink_metadata so a dangling link still counts as present
        fs::symlink_metadata(&self.root).is_ok()
    }

    fn remove_root(&self) -> Result<()> {
        let metadata = fs::symlink_metadata(&self.root)
            .map_err(|e| InstallerError::filesystem("inspect", &self.root, e))?;

        if metadata.is_dir() {
            fs::remove_dir_all(&self.root)
                .map_err(|e| InstallerError::filesystem("remove directory", &self.root, e))?;
        } else {
            // Plain files and symlinks; a link is removed, never followed.
            fs::remove_file(&self.root)
                .map_err(|e| InstallerError::filesystem("remove", &self.root, e))?;
        }
        Ok(())
    }

    fn create_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .map_err(|e| InstallerError::filesystem("create directory", &self.root, e))
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path)
            .map_err(|e| InstallerError::filesystem("create directory", full_path, e))
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.root.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| InstallerError::filesystem("create directory", parent, e))?;
        }

        fs::write(&full_path, data).map_err(|e| InstallerError::filesystem("write", full_path, e))
    }
}
