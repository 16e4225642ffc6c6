use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Log configuration file `{}` does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("Log configuration `{}` is not a file", .0.display())]
    NotFile(PathBuf),

    #[error("Failed to initialize log4rs: {0}")]
    Log4rs(String),

    #[error("A logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

fn format_record(
    buf: &mut env_logger::fmt::Formatter,
    record: &log::Record,
) -> std::io::Result<()> {
    writeln!(
        buf,
        "{}:{} {} [{}] - {}",
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.level(),
        record.args()
    )
}

/// Install a test logger. Safe to call from every test; only the first call takes effect.
pub fn try_init_log() {
    let _ = env_logger::builder()
        .is_test(true)
        .format(format_record)
        .try_init();
}

/// Initialize logging for binaries.
///
/// With a path, log4rs is configured from that YAML file. Without one, an env_logger honoring
/// `RUST_LOG` is installed.
pub fn init_log(config: Option<&Path>) -> Result<(), LogError> {
    match config {
        Some(path) => {
            if !path.exists() {
                return Err(LogError::NotFound(path.to_path_buf()));
            }
            if !path.is_file() {
                return Err(LogError::NotFile(path.to_path_buf()));
            }
            log4rs::init_file(path, Default::default())
                .map_err(|e| LogError::Log4rs(e.to_string()))?;
            info!("Log initialized from {}", path.display());
        }
        None => {
            env_logger::builder().format(format_record).try_init()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::LogError;

    #[test]
    fn test_init_log() {
        super::try_init_log();
        super::try_init_log();
        log::trace!("Record at trace");
        log::debug!("Record at debug");
        log::info!("Record at info");
        log::warn!("Record at warn");
        log::error!("Record at error");
    }

    #[test]
    fn test_missing_config() {
        let path = std::env::temp_dir().join("ulog-missing").join("log4rs.yaml");
        match super::init_log(Some(&path)) {
            Err(LogError::NotFound(p)) => assert_eq!(path, p),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_config_is_directory() -> Result<(), std::io::Error> {
        let dir = tempfile::tempdir()?;
        match super::init_log(Some(dir.path())) {
            Err(LogError::NotFile(p)) => assert_eq!(dir.path(), p.as_path()),
            other => panic!("Expected NotFile, got {:?}", other),
        }
        Ok(())
    }
}
