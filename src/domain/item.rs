use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of newsboat's `rss_item` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub guid: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub feedurl: String,
    /// Unix seconds.
    pub pub_date: i64,
    pub content: String,
    pub unread: bool,
    pub enclosure_url: Option<String>,
    pub enclosure_type: Option<String>,
    pub enqueued: bool,
    pub flags: Option<String>,
    pub deleted: bool,
    pub base: String,
}

impl Item {
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.pub_date, 0)
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }
}
