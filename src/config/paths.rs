use std::path::{Path, PathBuf};

use crate::app::{NewsboatError, Result};

const APP_DIR: &str = "newsboat";
const CACHE_FILE: &str = "cache.db";

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(NewsboatError::HomeDirNotFound)
}

/// `~/.config/newsboat`
pub fn default_config_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join(".config").join(APP_DIR))
}

/// `~/.local/share/newsboat/cache.db`
pub fn default_cache_db() -> Result<PathBuf> {
    Ok(home_dir()?
        .join(".local")
        .join("share")
        .join(APP_DIR)
        .join(CACHE_FILE))
}

/// Picks the explicit directory or the default, and requires a directory there.
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let path = match explicit {
        Some(p) => p,
        None => default_config_dir()?,
    };
    require(path, Path::is_dir, NewsboatError::ConfigNotFound)
}

/// Picks the explicit database file or the default, and requires a regular file there.
pub fn resolve_cache_db(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let path = match explicit {
        Some(p) => p,
        None => default_cache_db()?,
    };
    require(path, Path::is_file, NewsboatError::DatabaseNotFound)
}

fn require(
    path: PathBuf,
    present: fn(&Path) -> bool,
    missing: fn(PathBuf) -> NewsboatError,
) -> Result<PathBuf> {
    if present(&path) {
        tracing::debug!(path = %path.display(), "resolved");
        Ok(path)
    } else {
        Err(missing(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_conventional_layout() {
        let config = default_config_dir().unwrap();
        assert!(config.ends_with(".config/newsboat"));

        let db = default_cache_db().unwrap();
        assert!(db.ends_with(".local/share/newsboat/cache.db"));
    }

    #[test]
    fn test_resolve_explicit_existing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("cache.db");
        std::fs::write(&db, b"").unwrap();

        assert_eq!(
            resolve_config_dir(Some(dir.path().to_path_buf())).unwrap(),
            dir.path()
        );
        assert_eq!(resolve_cache_db(Some(db.clone())).unwrap(), db);
    }

    #[test]
    fn test_resolve_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        match resolve_config_dir(Some(missing.clone())) {
            Err(NewsboatError::ConfigNotFound(p)) => assert_eq!(p, missing),
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
        match resolve_cache_db(Some(missing.clone())) {
            Err(NewsboatError::DatabaseNotFound(p)) => assert_eq!(p, missing),
            other => panic!("expected DatabaseNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_wrong_kind_of_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("urls");
        std::fs::write(&file, b"").unwrap();

        // a directory is not a database, a file is not a config directory
        match resolve_cache_db(Some(dir.path().to_path_buf())) {
            Err(NewsboatError::DatabaseNotFound(p)) => assert_eq!(p, dir.path()),
            other => panic!("expected DatabaseNotFound, got {:?}", other),
        }
        match resolve_config_dir(Some(file.clone())) {
            Err(NewsboatError::ConfigNotFound(p)) => assert_eq!(p, file),
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }
}
