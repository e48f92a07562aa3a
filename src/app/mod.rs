pub mod error;
pub mod newsboat;
pub mod platform;

pub use error::{NewsboatError, Result};
pub use newsboat::{MissingEntryPolicy, Newsboat};
