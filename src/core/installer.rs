use crate::core::payload::{Payload, EMBEDDED_PAYLOAD};
use crate::core::{ArchiveEntry, ConfigProvider, InstallOutcome, InstallReport, Storage};
use crate::utils::error::{InstallerError, Result};
use path_absolutize::Absolutize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Resolves `dir` against the current working directory and normalises `.`
/// and `..` lexically. Symlinks are not resolved.
pub fn resolve_target(dir: &str) -> Result<PathBuf> {
    Ok(Path::new(dir).absolutize()?.into_owned())
}

pub fn next_step_hint(target: &Path) -> String {
    format!(
        "cd {} && npm install && npm run dev (if desired)",
        target.display()
    )
}

pub struct Installer<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    payload_text: Cow<'static, str>,
}

impl<S: Storage, C: ConfigProvider> Installer<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            payload_text: Cow::Borrowed(EMBEDDED_PAYLOAD),
        }
    }

    /// Replaces the embedded payload, e.g. with a test archive.
    pub fn with_payload(mut self, base64_text: impl Into<Cow<'static, str>>) -> Self {
        self.payload_text = base64_text.into();
        self
    }

    fn progress(&self, message: &str) {
        if !self.config.report_json() {
            println!("{}", message);
        }
    }

    pub fn run(&self) -> Result<InstallOutcome> {
        if self.config.list_only() {
            let entries = Payload::from_base64(&self.payload_text)?.entries()?;
            return Ok(InstallOutcome::Listed(entries));
        }

        let target = self.storage.root().to_path_buf();
        let existed = self.storage.exists();

        if existed && !self.config.force() {
            tracing::debug!("Target {} exists and --force was not given", target.display());
            return Err(InstallerError::TargetExists { path: target });
        }

        // Parse everything before touching the filesystem so a broken payload
        // leaves an existing tree in place.
        self.progress("Decoding payload...");
        let payload = Payload::from_base64(&self.payload_text)?;
        let entries = payload.entries()?;
        tracing::debug!("Payload holds {} entries", entries.len());

        if existed {
            tracing::info!("Removing existing target {}", target.display());
            self.storage.remove_root()?;
        }

        self.storage.create_root()?;
        let (files, bytes_written) = self.extract(&entries)?;

        tracing::info!(
            "Extracted {} files ({} bytes) to {}",
            files.len(),
            bytes_written,
            target.display()
        );

        Ok(InstallOutcome::Installed(InstallReport {
            next_step: next_step_hint(&target),
            target,
            replaced_existing: existed,
            files,
            bytes_written,
        }))
    }

    fn extract(&self, entries: &[ArchiveEntry]) -> Result<(Vec<PathBuf>, u64)> {
        let mut files = Vec::new();
        let mut bytes_written = 0u64;

        for entry in entries {
            if entry.is_dir {
                tracing::debug!("mkdir {}", entry.path.display());
                self.storage.create_dir(&entry.path)?;
            } else {
                tracing::debug!("write {} ({} bytes)", entry.path.display(), entry.data.len());
                self.storage.write_file(&entry.path, &entry.data)?;
                bytes_written += entry.data.len() as u64;
                files.push(entry.path.clone());
            }
        }

        Ok((files, bytes_written))
    }
}
