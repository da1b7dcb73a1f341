use serde::Serialize;
use std::path::PathBuf;

/// One entry of the embedded archive, with its path already checked to stay
/// inside the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: PathBuf,
    pub is_dir: bool,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstallReport {
    pub target: PathBuf,
    pub replaced_existing: bool,
    pub files: Vec<PathBuf>,
    pub bytes_written: u64,
    pub next_step: String,
}

#[derive(Debug, Clone)]
pub enum InstallOutcome {
    Installed(InstallReport),
    Listed(Vec<ArchiveEntry>),
}
