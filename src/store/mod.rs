pub mod sqlite;

use crate::app::Result;
use crate::domain::{FeedData, Item};

pub use sqlite::SqliteCache;

/// Read-only view of newsboat's cache.
pub trait Store {
    // Feed operations
    fn list_feed_data(&self) -> Result<Vec<FeedData>>;

    // Item operations
    fn list_unread_items(&self) -> Result<Vec<Item>>;
    fn list_items_for_feed(&self, rssurl: &str) -> Result<Vec<Item>>;
    fn count_unread_for_feed(&self, rssurl: &str) -> Result<i64>;
}
