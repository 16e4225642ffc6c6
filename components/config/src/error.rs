use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("`{0}` must be positive")]
    NotPositive(&'static str),

    #[error("default-page-size `{default}` exceeds max-page-size `{max}`")]
    DefaultPageSizeTooLarge { default: usize, max: usize },

    #[error("max-scan `{max_scan}` is less than max-page-size `{max_page_size}`")]
    MaxScanTooSmall {
        max_scan: usize,
        max_page_size: usize,
    },

    #[error("An IO error raised")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML configuration")]
    Yaml(#[from] serde_yaml::Error),
}
