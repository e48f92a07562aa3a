use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of newsboat's `rss_feed` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedData {
    pub rssurl: String,
    pub url: String,
    pub title: String,
    pub last_modified: i64,
    pub is_rtl: bool,
    pub etag: String,
}

impl FeedData {
    /// `lastmodified` as a timestamp; newsboat stores 0 when the server never sent one.
    pub fn last_modified_at(&self) -> Option<DateTime<Utc>> {
        if self.last_modified <= 0 {
            return None;
        }
        DateTime::from_timestamp(self.last_modified, 0)
    }
}

/// Alias and tags taken from a feed's line in the `urls` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfigs {
    pub alias: Option<String>,
    pub tags: Vec<String>,
}

/// A feed as callers see it: database row plus its `urls` overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub rssurl: String,
    pub url: String,
    pub title: String,
    pub last_modified: i64,
    pub is_rtl: bool,
    pub etag: String,
    pub alias: Option<String>,
    pub tags: Vec<String>,
}

impl Feed {
    pub fn from_parts(data: FeedData, configs: FeedConfigs) -> Self {
        Self {
            rssurl: data.rssurl,
            url: data.url,
            title: data.title,
            last_modified: data.last_modified,
            is_rtl: data.is_rtl,
            etag: data.etag,
            alias: configs.alias,
            tags: configs.tags,
        }
    }

    /// Alias if set, then the feed title, then the feed URL.
    pub fn display_name(&self) -> &str {
        if let Some(alias) = self.alias.as_deref() {
            return alias;
        }
        if !self.title.is_empty() {
            return &self.title;
        }
        &self.rssurl
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
