use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OpenFlags, Row};

use crate::app::Result;
use crate::config;
use crate::domain::{FeedData, Item};
use crate::store::Store;

const FEED_COLUMNS: &str = "rssurl, url, title, lastmodified, is_rtl, etag";

const ITEM_COLUMNS: &str = "id, guid, title, author, url, feedurl, pubDate, content, unread, \
     enclosure_url, enclosure_type, enqueued, flags, deleted, base";

/// newsboat's `cache.db`, opened read-only for the duration of each call.
#[derive(Debug, Clone)]
pub struct SqliteCache {
    path: PathBuf,
}

impl SqliteCache {
    /// Fails with [`NewsboatError::DatabaseNotFound`](crate::app::NewsboatError::DatabaseNotFound) unless `path` is a file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = config::resolve_cache_db(Some(path.as_ref().to_path_buf()))?;
        Ok(Self { path })
    }

    /// Wraps a path already checked by [`config::resolve_cache_db`].
    pub(crate) fn from_resolved(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(conn)
    }

    fn query_items(&self, filter: &str, args: impl rusqlite::Params) -> Result<Vec<Item>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {ITEM_COLUMNS} FROM rss_item WHERE {filter}"
        ))?;

        let items = stmt
            .query_map(args, Self::row_to_item)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!(filter, count = items.len(), "queried rss_item");
        Ok(items)
    }

    fn row_to_feed_data(row: &Row<'_>) -> rusqlite::Result<FeedData> {
        Ok(FeedData {
            rssurl: row.get(0)?,
            url: row.get(1)?,
            title: row.get(2)?,
            last_modified: row.get(3)?,
            is_rtl: row.get(4)?,
            etag: row.get(5)?,
        })
    }

    fn row_to_item(row: &Row<'_>) -> rusqlite::Result<Item> {
        Ok(Item {
            id: row.get(0)?,
            guid: row.get(1)?,
            title: row.get(2)?,
            author: row.get(3)?,
            url: row.get(4)?,
            feedurl: row.get(5)?,
            pub_date: row.get(6)?,
            content: row.get(7)?,
            unread: row.get(8)?,
            enclosure_url: row.get(9)?,
            enclosure_type: row.get(10)?,
            enqueued: row.get(11)?,
            flags: row.get(12)?,
            deleted: row.get(13)?,
            base: row.get(14)?,
        })
    }
}

impl Store for SqliteCache {
    fn list_feed_data(&self) -> Result<Vec<FeedData>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("SELECT {FEED_COLUMNS} FROM rss_feed"))?;

        let feeds = stmt
            .query_map([], Self::row_to_feed_data)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!(count = feeds.len(), "queried rss_feed");
        Ok(feeds)
    }

    fn list_unread_items(&self) -> Result<Vec<Item>> {
        self.query_items("unread = 1", [])
    }

    fn list_items_for_feed(&self, rssurl: &str) -> Result<Vec<Item>> {
        self.query_items("feedurl = ?1", params![rssurl])
    }

    fn count_unread_for_feed(&self, rssurl: &str) -> Result<i64> {
        let conn = self.connect()?;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM rss_item WHERE feedurl = ?1 AND unread = 1",
            params![rssurl],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
