use std::path::Path;

use error::ConfigurationError;
use serde::{Deserialize, Serialize};
pub mod error;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Paging {
    /// Number of messages per page when a request does not specify one.
    #[serde(rename = "default-page-size")]
    pub default_page_size: usize,

    /// Requests asking for more are clamped to this size.
    #[serde(rename = "max-page-size")]
    pub max_page_size: usize,

    /// Upper bound of candidate seq ids examined while assembling a single page, known gaps
    /// included.
    #[serde(rename = "max-scan")]
    pub max_scan: usize,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 100,
            max_scan: 10_000,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub paging: Paging,
}

impl Configuration {
    /// Load configuration from a YAML file and check it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigurationError> {
        let file = std::fs::File::open(path)?;
        let mut configuration: Configuration = serde_yaml::from_reader(file)?;
        configuration.check_and_apply()?;
        Ok(configuration)
    }

    /// Check the configuration.
    pub fn check_and_apply(&mut self) -> Result<(), ConfigurationError> {
        let paging = &self.paging;
        if paging.default_page_size == 0 {
            return Err(ConfigurationError::NotPositive("default-page-size"));
        }

        if paging.max_page_size == 0 {
            return Err(ConfigurationError::NotPositive("max-page-size"));
        }

        if paging.default_page_size > paging.max_page_size {
            return Err(ConfigurationError::DefaultPageSizeTooLarge {
                default: paging.default_page_size,
                max: paging.max_page_size,
            });
        }

        if paging.max_scan < paging.max_page_size {
            return Err(ConfigurationError::MaxScanTooSmall {
                max_scan: paging.max_scan,
                max_page_size: paging.max_page_size,
            });
        }
        Ok(())
    }
}
