#![allow(dead_code)]

use std::path::PathBuf;

use rusqlite::{params, Connection};
use tempfile::TempDir;

const SCHEMA: &str = include_str!("../fixtures/newsboat_schema.sql");

/// A throwaway newsboat installation: `<tmp>/config/urls` and `<tmp>/cache.db`.
pub struct Install {
    pub dir: TempDir,
    pub config_dir: PathBuf,
    pub cache_db: PathBuf,
}

impl Install {
    pub fn new(urls: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("config");
        std::fs::create_dir(&config_dir).unwrap();
        std::fs::write(config_dir.join("urls"), urls).unwrap();

        let cache_db = dir.path().join("cache.db");
        Connection::open(&cache_db)
            .unwrap()
            .execute_batch(SCHEMA)
            .unwrap();

        Self {
            dir,
            config_dir,
            cache_db,
        }
    }

    pub fn conn(&self) -> Connection {
        Connection::open(&self.cache_db).unwrap()
    }

    pub fn add_feed(&self, rssurl: &str, title: &str) {
        self.conn()
            .execute(
                "INSERT INTO rss_feed (rssurl, url, title, lastmodified, is_rtl, etag)
                 VALUES (?1, ?2, ?3, 1700000000, 0, '')",
                params![rssurl, format!("{rssurl}/site"), title],
            )
            .unwrap();
    }

    pub fn add_item(&self, guid: &str, feedurl: &str, unread: bool) {
        self.conn()
            .execute(
                "INSERT INTO rss_item (guid, title, author, url, feedurl, pubDate, content, unread)
                 VALUES (?1, ?2, 'author', ?3, ?4, 1700000000, 'content', ?5)",
                params![
                    guid,
                    format!("Item {guid}"),
                    format!("{feedurl}/{guid}"),
                    feedurl,
                    unread
                ],
            )
            .unwrap();
    }

    pub fn paths(&self) -> (Option<PathBuf>, Option<PathBuf>) {
        (Some(self.config_dir.clone()), Some(self.cache_db.clone()))
    }
}
