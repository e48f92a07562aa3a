use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsboatError {
    #[error("Config directory not found: {} (pass the path explicitly)", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Cache database not found: {} (pass the path explicitly)", .0.display())]
    DatabaseNotFound(PathBuf),

    #[error("Could not read {}: {source}", .path.display())]
    UrlsUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No line for {rssurl} in {}", .path.display())]
    ConfigEntryNotFound { rssurl: String, path: PathBuf },

    #[error("{program} exited with {}", describe_exit(.code))]
    ExternalCommandFailed { program: String, code: Option<i32> },

    #[error("Could not run {program}: {source}")]
    CommandNotRunnable {
        program: String,
        source: std::io::Error,
    },

    #[error("Unsupported platform: {0} (only linux is supported)")]
    UnsupportedPlatform(String),

    #[error("Could not determine home directory")]
    HomeDirNotFound,

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "a signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, NewsboatError>;
