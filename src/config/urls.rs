//! Parser for newsboat's `urls` file.
//!
//! Each subscription is one line: the feed URL followed by optional
//! double-quoted tokens. A token starting with `~` names the feed's alias,
//! every other token is a tag:
//!
//! ```text
//! http://example.com/feed "~myalias" "tech" "news"
//! ```
//!
//! A feed is matched by the first line that contains its URL as a
//! substring, so `http://a/feed` also matches a line for `http://a/feed2`
//! if that line comes first.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::app::{NewsboatError, Result};
use crate::domain::FeedConfigs;

pub const URLS_FILE: &str = "urls";

static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]*)""#).unwrap());

/// The lines of a `urls` file, read once.
#[derive(Debug, Clone)]
pub struct UrlsFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl UrlsFile {
    /// Reads `<config_dir>/urls`.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let path = config_dir.join(URLS_FILE);
        let content = std::fs::read_to_string(&path).map_err(|source| {
            NewsboatError::UrlsUnreadable {
                path: path.clone(),
                source,
            }
        })?;
        tracing::debug!(path = %path.display(), "loaded urls file");
        Ok(Self::parse(path, &content))
    }

    pub fn parse(path: PathBuf, content: &str) -> Self {
        let lines = content.lines().map(str::to_owned).collect();
        Self { path, lines }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Alias and tags from the first non-comment line containing `rssurl`.
    pub fn lookup(&self, rssurl: &str) -> Result<FeedConfigs> {
        self.lines
            .iter()
            .filter(|line| !is_comment(line))
            .find(|line| line.contains(rssurl))
            .map(|line| parse_line(line))
            .ok_or_else(|| NewsboatError::ConfigEntryNotFound {
                rssurl: rssurl.to_string(),
                path: self.path.clone(),
            })
    }
}

/// One-shot lookup of `rssurl` in `<config_dir>/urls`.
pub fn feed_configs(config_dir: &Path, rssurl: &str) -> Result<FeedConfigs> {
    UrlsFile::load(config_dir)?.lookup(rssurl)
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

fn parse_line(line: &str) -> FeedConfigs {
    let mut alias = None;
    let mut tags = Vec::new();

    for token in QUOTED.captures_iter(line).map(|c| c.get(1).map_or("", |m| m.as_str())) {
        if let Some(name) = token.strip_prefix('~') {
            if alias.is_none() && !name.is_empty() {
                alias = Some(name.to_string());
            }
        } else if !token.is_empty() {
            tags.push(token.to_string());
        }
    }

    FeedConfigs { alias, tags }
}
