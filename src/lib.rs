pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::core::installer::{resolve_target, Installer};
pub use crate::core::payload::{Payload, EMBEDDED_PAYLOAD};
pub use crate::domain::model::{ArchiveEntry, InstallOutcome, InstallReport};
pub use crate::utils::error::{InstallerError, Result};
