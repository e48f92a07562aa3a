//! # newsboat-reader
//!
//! Read-only access to the feeds and articles of a local
//! [newsboat](https://newsboat.org) installation.
//!
//! ## Architecture
//!
//! ```text
//! urls file ─┐
//!            ├─→ Newsboat (feeds, tags) ─→ item queries
//! cache.db ──┘
//! ```
//!
//! - [`config`]: default paths and the `urls` file parser (aliases, tags)
//! - [`store`]: queries over newsboat's `cache.db`
//! - [`app`]: the [`Newsboat`] facade, error type, platform check
//! - [`reload`]: `newsboat --execute=reload`
//!
//! Nothing here writes to newsboat's files.
//!
//! ## Quick Start
//!
//! ```no_run
//! use newsboat_reader::Newsboat;
//!
//! # fn main() -> newsboat_reader::Result<()> {
//! let newsboat = Newsboat::new(None, None)?;
//! for feed in newsboat.feeds() {
//!     let items = newsboat.get_all_items_for_feed(feed)?;
//!     println!("{}: {} items", feed.display_name(), items.len());
//! }
//! println!("{} unread", newsboat.get_all_unread_items()?.len());
//! # Ok(())
//! # }
//! ```

/// The [`Newsboat`](app::Newsboat) facade and [`NewsboatError`](app::NewsboatError).
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Config directory / cache path resolution and the `urls` parser.
pub mod config;

/// Record types: [`Feed`](domain::Feed), [`FeedData`](domain::FeedData),
/// [`FeedConfigs`](domain::FeedConfigs), [`Item`](domain::Item).
pub mod domain;

/// Feed reload through the newsboat binary.
pub mod reload;

/// Read-only SQLite access to `cache.db`.
pub mod store;

pub use app::{MissingEntryPolicy, Newsboat, NewsboatError, Result};
pub use domain::{Feed, FeedConfigs, FeedData, Item};
