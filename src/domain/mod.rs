pub mod feed;
pub mod item;

pub use feed::{Feed, FeedConfigs, FeedData};
pub use item::Item;
