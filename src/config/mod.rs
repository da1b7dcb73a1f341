use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "install-effectgraph")]
#[command(about = "Self-extracting installer for the EffectGraph starter repo")]
#[command(version)]
pub struct CliConfig {
    #[arg(short, long, default_value = "effectgraph", help = "Target directory (default ./effectgraph)")]
    pub dir: String,

    /// Overwrite existing target. The existing directory is deleted
    /// recursively without confirmation.
    #[arg(short, long)]
    pub force: bool,

    #[arg(short, long, help = "List the payload entries without extracting")]
    pub list: bool,

    #[arg(long, help = "Print the install report as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            dir: "effectgraph".to_string(),
            force: false,
            list: false,
            json: false,
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn target_dir(&self) -> &str {
        &self.dir
    }

    fn force(&self) -> bool {
        self.force
    }

    fn list_only(&self) -> bool {
        self.list
    }

    fn report_json(&self) -> bool {
        self.json
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("--dir", &self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["install-effectgraph"]);
        assert_eq!(config.dir, "effectgraph");
        assert!(!config.force);
        assert!(!config.list);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_short_flags() {
        let config = CliConfig::parse_from(["install-effectgraph", "-d", "/tmp/x", "-f"]);
        assert_eq!(config.target_dir(), "/tmp/x");
        assert!(config.force());
    }

    #[test]
    fn test_long_flags() {
        let config =
            CliConfig::parse_from(["install-effectgraph", "--dir", "out", "--force", "--json"]);
        assert_eq!(config.dir, "out");
        assert!(config.force);
        assert!(config.report_json());
    }

    #[test]
    fn test_empty_dir_fails_validation() {
        let config = CliConfig {
            dir: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
