use crate::utils::error::Result;
use std::path::Path;

/// Filesystem operations the installer needs, rooted at the target directory.
pub trait Storage {
    fn root(&self) -> &Path;
    fn exists(&self) -> bool;
    fn remove_root(&self) -> Result<()>;
    fn create_root(&self) -> Result<()>;
    fn create_dir(&self, path: &Path) -> Result<()>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn target_dir(&self) -> &str;
    fn force(&self) -> bool;
    fn list_only(&self) -> bool;
    fn report_json(&self) -> bool;
}
