use std::path::{Path, PathBuf};

use crate::app::platform;
use crate::app::{NewsboatError, Result};
use crate::config::{self, UrlsFile};
use crate::domain::{Feed, FeedConfigs, Item};
use crate::reload;
use crate::store::{SqliteCache, Store};

/// What to do with a feed in the cache that has no line in `urls`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingEntryPolicy {
    /// Fail construction with [`NewsboatError::ConfigEntryNotFound`].
    #[default]
    Abort,
    /// Leave the feed out of [`Newsboat::feeds`].
    Skip,
    /// Keep the feed with no alias and no tags.
    Unconfigured,
}

/// Read-only view of a newsboat installation.
///
/// `feeds` and `tags` are a snapshot taken at construction; they do not
/// follow later changes to `urls` or `cache.db`. Item queries always read
/// the database afresh.
#[derive(Debug)]
pub struct Newsboat {
    config_dir: PathBuf,
    cache: SqliteCache,
    feeds: Vec<Feed>,
    tags: Vec<String>,
}

impl Newsboat {
    /// Opens the installation at the given paths, or the default locations.
    pub fn new(config_dir: Option<PathBuf>, cache_db: Option<PathBuf>) -> Result<Self> {
        Self::with_policy(config_dir, cache_db, MissingEntryPolicy::Abort)
    }

    pub fn with_policy(
        config_dir: Option<PathBuf>,
        cache_db: Option<PathBuf>,
        policy: MissingEntryPolicy,
    ) -> Result<Self> {
        platform::ensure_supported()?;

        let config_dir = config::resolve_config_dir(config_dir)?;
        let cache_db = config::resolve_cache_db(cache_db)?;
        let cache = SqliteCache::from_resolved(cache_db);

        let feeds = Self::load_feeds(&cache, &config_dir, policy)?;
        let tags = collect_tags(&feeds);

        tracing::debug!(feeds = feeds.len(), tags = tags.len(), "newsboat loaded");

        Ok(Self {
            config_dir,
            cache,
            feeds,
            tags,
        })
    }

    fn load_feeds(
        cache: &SqliteCache,
        config_dir: &Path,
        policy: MissingEntryPolicy,
    ) -> Result<Vec<Feed>> {
        let rows = cache.list_feed_data()?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        // only read once some feed needs a lookup
        let urls = UrlsFile::load(config_dir)?;
        let mut feeds = Vec::with_capacity(rows.len());

        for data in rows {
            let configs = match urls.lookup(&data.rssurl) {
                Ok(configs) => configs,
                Err(NewsboatError::ConfigEntryNotFound { .. })
                    if policy == MissingEntryPolicy::Skip =>
                {
                    tracing::warn!(rssurl = %data.rssurl, "no urls entry, skipping feed");
                    continue;
                }
                Err(NewsboatError::ConfigEntryNotFound { .. })
                    if policy == MissingEntryPolicy::Unconfigured =>
                {
                    tracing::warn!(rssurl = %data.rssurl, "no urls entry, feed has no alias or tags");
                    FeedConfigs::default()
                }
                Err(e) => return Err(e),
            };
            feeds.push(Feed::from_parts(data, configs));
        }

        Ok(feeds)
    }

    /// Feeds in cache table order.
    pub fn feeds(&self) -> &[Feed] {
        &self.feeds
    }

    /// Distinct tags across all feeds, in first-seen order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn cache_db(&self) -> &Path {
        self.cache.path()
    }

    pub fn feed_by_url(&self, rssurl: &str) -> Option<&Feed> {
        self.feeds.iter().find(|f| f.rssurl == rssurl)
    }

    pub fn feeds_with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Feed> + 'a {
        self.feeds.iter().filter(move |f| f.has_tag(tag))
    }

    pub fn get_all_unread_items(&self) -> Result<Vec<Item>> {
        self.cache.list_unread_items()
    }

    pub fn get_all_items_for_feed(&self, feed: &Feed) -> Result<Vec<Item>> {
        self.get_all_items_for_url(&feed.rssurl)
    }

    /// Items whose `feedurl` equals `rssurl` exactly.
    pub fn get_all_items_for_url(&self, rssurl: &str) -> Result<Vec<Item>> {
        self.cache.list_items_for_feed(rssurl)
    }

    pub fn unread_count(&self, feed: &Feed) -> Result<i64> {
        self.cache.count_unread_for_feed(&feed.rssurl)
    }

    /// Asks newsboat to reload every feed. Independent of any instance.
    pub fn update() -> Result<()> {
        platform::ensure_supported()?;
        reload::reload()
    }
}

fn collect_tags(feeds: &[Feed]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in feeds.iter().flat_map(|f| f.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FeedData;

    fn feed(rssurl: &str, tags: &[&str]) -> Feed {
        Feed::from_parts(
            FeedData {
                rssurl: rssurl.into(),
                url: String::new(),
                title: String::new(),
                last_modified: 0,
                is_rtl: false,
                etag: String::new(),
            },
            FeedConfigs {
                alias: None,
                tags: tags.iter().map(|t| t.to_string()).collect(),
            },
        )
    }

    #[test]
    fn test_collect_tags_first_seen_order() {
        let feeds = vec![
            feed("a", &["news", "tech"]),
            feed("b", &["tech", "rust"]),
            feed("c", &[]),
            feed("d", &["news", "linux"]),
        ];
        assert_eq!(collect_tags(&feeds), vec!["news", "tech", "rust", "linux"]);
    }

    #[test]
    fn test_collect_tags_empty() {
        assert!(collect_tags(&[]).is_empty());
    }

    #[test]
    fn test_default_policy_aborts() {
        assert_eq!(MissingEntryPolicy::default(), MissingEntryPolicy::Abort);
    }
}
