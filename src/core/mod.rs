pub mod installer;
pub mod payload;

pub use crate::domain::model::{ArchiveEntry, InstallOutcome, InstallReport};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
