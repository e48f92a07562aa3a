//! Operating system precondition.
//!
//! newsboat keeps its files under XDG-style locations in the user's home
//! directory; only Linux is supported. The check runs once per process.

use std::sync::OnceLock;

use crate::app::{NewsboatError, Result};

const SUPPORTED: &[&str] = &["linux"];

static CHECKED: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Fails with [`NewsboatError::UnsupportedPlatform`] off Linux.
pub fn ensure_supported() -> Result<()> {
    CHECKED
        .get_or_init(|| check(std::env::consts::OS))
        .clone()
        .map_err(NewsboatError::UnsupportedPlatform)
}

fn check(os: &str) -> std::result::Result<(), String> {
    if SUPPORTED.contains(&os) {
        tracing::debug!(os, "platform supported");
        Ok(())
    } else {
        Err(os.to_string())
    }
}
