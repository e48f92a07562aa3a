use std::io::Write;

use serde::Serialize;

use crate::app::{platform, Newsboat, Result};
use crate::domain::Item;
use crate::reload;

fn print_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

pub fn list_feeds<W: Write>(nb: &Newsboat, json: bool, out: &mut W) -> Result<()> {
    if json {
        return print_json(out, nb.feeds());
    }

    if nb.feeds().is_empty() {
        writeln!(out, "No feeds")?;
        return Ok(());
    }

    for feed in nb.feeds() {
        let unread = nb.unread_count(feed)?;
        write!(out, "{} ({} unread)\n  {}", feed.display_name(), unread, feed.rssurl)?;
        if !feed.tags.is_empty() {
            write!(out, "\n  tags: {}", feed.tags.join(", "))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

pub fn list_tags<W: Write>(nb: &Newsboat, json: bool, out: &mut W) -> Result<()> {
    if json {
        return print_json(out, nb.tags());
    }

    if nb.tags().is_empty() {
        writeln!(out, "No tags")?;
        return Ok(());
    }

    for tag in nb.tags() {
        let count = nb.feeds_with_tag(tag).count();
        writeln!(out, "{} ({} feeds)", tag, count)?;
    }

    Ok(())
}

pub fn list_unread<W: Write>(nb: &Newsboat, json: bool, out: &mut W) -> Result<()> {
    let items = nb.get_all_unread_items()?;
    print_items(nb, &items, json, out)
}

pub fn list_feed_items<W: Write>(nb: &Newsboat, rssurl: &str, json: bool, out: &mut W) -> Result<()> {
    let items = nb.get_all_items_for_url(rssurl)?;
    print_items(nb, &items, json, out)
}

fn print_items<W: Write>(nb: &Newsboat, items: &[Item], json: bool, out: &mut W) -> Result<()> {
    if json {
        return print_json(out, items);
    }

    if items.is_empty() {
        writeln!(out, "No items")?;
        return Ok(());
    }

    for item in items {
        let read_marker = if item.unread { "N" } else { " " };

        let date = item
            .published_at()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "          ".to_string());

        let source = nb
            .feed_by_url(&item.feedurl)
            .map(|f| f.display_name())
            .unwrap_or(&item.feedurl);

        writeln!(out, "{} {} [{}] {}", read_marker, date, source, item.display_title())?;
    }

    Ok(())
}

/// Runs `program --execute=reload`; see [`reload::reload_with`].
pub fn reload<W: Write>(program: &str, out: &mut W) -> Result<()> {
    platform::ensure_supported()?;
    reload::reload_with(program)?;
    writeln!(out, "Reload complete")?;
    Ok(())
}
