use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallerError {
    #[error("Target exists: {}", path.display())]
    TargetExists { path: PathBuf },

    #[error("Zip operation failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Payload decode failed: {0}")]
    PayloadDecode(#[from] base64::DecodeError),

    #[error("Archive entry escapes the target directory: {name}")]
    UnsafeEntryPath { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to {action} {}: {source}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserPrecondition,
    FatalIo,
    CorruptPayload,
    Configuration,
}

impl InstallerError {
    pub fn filesystem(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetExists { .. } => ErrorCategory::UserPrecondition,
            Self::Io(_) | Self::Filesystem { .. } => ErrorCategory::FatalIo,
            Self::Zip(_) | Self::PayloadDecode(_) | Self::UnsafeEntryPath { .. } => {
                ErrorCategory::CorruptPayload
            }
            Self::InvalidConfig { .. } => ErrorCategory::Configuration,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::UserPrecondition | ErrorCategory::Configuration => 1,
            ErrorCategory::FatalIo => 2,
            ErrorCategory::CorruptPayload => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::TargetExists { path } => format!("Target exists: {}", path.display()),
            Self::Filesystem { action, path, source } => {
                format!("Could not {} {}: {}", action, path.display(), source)
            }
            Self::Io(e) => format!("Filesystem error: {}", e),
            Self::InvalidConfig { field, reason, .. } => format!("Invalid {}: {}", field, reason),
            Self::Zip(_) | Self::PayloadDecode(_) | Self::UnsafeEntryPath { .. } => {
                format!("The embedded payload is corrupt: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::UserPrecondition => "Use --force to overwrite.",
            ErrorCategory::FatalIo => "Check permissions and free space for the target directory.",
            ErrorCategory::CorruptPayload => "This installer build is broken; obtain a fresh copy.",
            ErrorCategory::Configuration => "Pass a non-empty --dir path.",
        }
    }
}

pub type Result<T> = std::result::Result<T, InstallerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_exists_maps_to_exit_code_one() {
        let err = InstallerError::TargetExists {
            path: PathBuf::from("/tmp/effectgraph"),
        };
        assert_eq!(err.category(), ErrorCategory::UserPrecondition);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.recovery_suggestion(), "Use --force to overwrite.");
        assert!(err.user_friendly_message().contains("/tmp/effectgraph"));
    }

    #[test]
    fn test_filesystem_error_keeps_underlying_message() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = InstallerError::filesystem("write", "/tmp/x/a.txt", source);
        assert_eq!(err.category(), ErrorCategory::FatalIo);
        assert_eq!(err.exit_code(), 2);
        let message = err.to_string();
        assert!(message.contains("write"));
        assert!(message.contains("permission denied"));
    }

    #[test]
    fn test_corrupt_payload_errors() {
        let err = InstallerError::UnsafeEntryPath {
            name: "../evil".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::CorruptPayload);
        assert_eq!(err.exit_code(), 3);

        let err = InstallerError::Zip(zip::result::ZipError::InvalidArchive("bad".into()));
        assert_eq!(err.exit_code(), 3);
    }
}
