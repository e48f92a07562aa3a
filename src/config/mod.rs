//! newsboat's on-disk configuration.
//!
//! Paths default to `~/.config/newsboat` (config directory holding `urls`)
//! and `~/.local/share/newsboat/cache.db`. Only the `urls` file is read;
//! newsboat's `config` file is not interpreted.

pub mod paths;
pub mod urls;

pub use paths::{default_cache_db, default_config_dir, resolve_cache_db, resolve_config_dir};
pub use urls::{feed_configs, UrlsFile};
