//! Daily-note creation
//!
//! Generates one dated note under the daily directory, filed as
//! `<daily-dir>/YYYY/MM/YYYYMMDD.md`, with front matter and navigation
//! links to the previous and next day.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, Local, NaiveDate};

use crate::error::{Result, VaultError};

/// Default directory for daily notes, relative to the vault root.
pub const DEFAULT_DAILY_DIR: &str = "06 - Daily";

/// Outcome of a daily-note request.
#[derive(Debug, Clone)]
pub struct DailyNote {
    /// Full path of the note file
    pub path: PathBuf,
    /// False when the note already existed and was left untouched
    pub created: bool,
}

/// Create the daily note for `date` (today when `None`).
///
/// An existing note is never overwritten; the call reports its path and
/// succeeds.
pub fn create_daily_note(root: &Path, daily_dir: &str, date: Option<&str>) -> Result<DailyNote> {
    let date = match date {
        Some(value) => {
            NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| VaultError::InvalidDate {
                value: value.to_string(),
            })?
        }
        None => Local::now().date_naive(),
    };

    let dir = root
        .join(daily_dir)
        .join(date.format("%Y").to_string())
        .join(date.format("%m").to_string());
    let path = dir.join(format!("{}.md", date.format("%Y%m%d")));

    if path.exists() {
        return Ok(DailyNote {
            path,
            created: false,
        });
    }

    fs::create_dir_all(&dir)?;
    fs::write(&path, render_template(date))
        .map_err(|e| VaultError::io_operation("write", path.display(), e))?;

    Ok(DailyNote {
        path,
        created: true,
    })
}

fn render_template(date: NaiveDate) -> String {
    let yesterday = (date - Duration::days(1)).format("%Y-%m-%d");
    let tomorrow = (date + Duration::days(1)).format("%Y-%m-%d");
    let formatted = date.format("%Y-%m-%d");

    format!(
        r#"---
created: {created}
title: "{filename}"
type: daily-note
tags:
  - daily
  - journal
  - {year}
  - {year_month}
aliases:
  - "{formatted}"
related:
  - "[[{yesterday}]]"
  - "[[{tomorrow}]]"
---

# Daily Note - {formatted}

### Journal

### Tasks
- [ ]

# navigate
<< [[{yesterday}]] | **Today** | [[{tomorrow}]] >>
"#,
        created = date.format("%Y-%m-%dT09:00"),
        filename = date.format("%Y%m%d"),
        year = date.format("%Y"),
        year_month = date.format("%Y-%m"),
        formatted = formatted,
        yesterday = yesterday,
        tomorrow = tomorrow,
    )
}
