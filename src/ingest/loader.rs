//! Loading record files into the catalog and the watch stack.
//!
//! Each non-empty line is one record. Lines starting with `#` are comments.
//! Bad records are skipped with a warning unless the settings ask for a
//! strict load.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::config::IngestSettings;
use crate::library::{ShowCatalog, WatchStack};

use super::films::parse_film_record;
use super::record::CsvEntry;
use super::shows::parse_show_record;

/// Summary of a load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records stored or merged
    pub accepted: usize,
    /// Records that could not be used
    pub skipped: usize,
}

impl LoadReport {
    /// Total records seen
    pub fn total(&self) -> usize {
        self.accepted + self.skipped
    }
}

/// Record lines with their 1-based line numbers
fn records<'a>(
    content: &'a str,
    settings: &'a IngestSettings,
) -> impl Iterator<Item = (usize, CsvEntry)> + 'a {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        // The header is the first non-blank line, comment or not
        .skip(usize::from(settings.skip_header))
        .filter(|(_, line)| !line.trim_start().starts_with('#'))
        .map(move |(i, line)| (i + 1, CsvEntry::parse(line, settings.delimiter)))
}

/// Merge every show record of `content` into a new catalog
pub fn load_shows_from_str(
    content: &str,
    settings: &IngestSettings,
) -> Result<(ShowCatalog, LoadReport)> {
    let mut catalog = ShowCatalog::new();
    let mut report = LoadReport::default();

    for (line_no, entry) in records(content, settings) {
        let merged = parse_show_record(&entry)
            .map_err(anyhow::Error::from)
            .and_then(|show| catalog.merge(&show).map_err(anyhow::Error::from));

        match merged {
            Ok(outcome) => {
                debug!(line = line_no, ?outcome, "Show record merged");
                report.accepted += 1;
            }
            Err(e) if settings.strict => {
                return Err(e).with_context(|| format!("Invalid show record at line {}", line_no));
            }
            Err(e) => {
                warn!(line = line_no, error = %e, "Skipping show record");
                report.skipped += 1;
            }
        }
    }

    info!(
        shows = catalog.len(),
        accepted = report.accepted,
        skipped = report.skipped,
        "Show catalog loaded"
    );

    Ok((catalog, report))
}

/// Push every film record of `content` onto a new watch stack.
///
/// A film already in the stack is counted as skipped, even in strict mode.
pub fn load_films_from_str(
    content: &str,
    settings: &IngestSettings,
) -> Result<(WatchStack, LoadReport)> {
    let mut stack = WatchStack::new();
    let mut report = LoadReport::default();

    for (line_no, entry) in records(content, settings) {
        let film = match parse_film_record(&entry) {
            Ok(film) => film,
            Err(e) if settings.strict => {
                return Err(e).with_context(|| format!("Invalid film record at line {}", line_no));
            }
            Err(e) => {
                warn!(line = line_no, error = %e, "Skipping film record");
                report.skipped += 1;
                continue;
            }
        };

        match stack.push(&film) {
            Ok(()) => report.accepted += 1,
            Err(e) => {
                warn!(line = line_no, error = %e, "Film not pushed");
                report.skipped += 1;
            }
        }
    }

    info!(
        films = stack.len(),
        accepted = report.accepted,
        skipped = report.skipped,
        "Watch stack loaded"
    );

    Ok((stack, report))
}

/// Read a show records file
pub async fn load_shows(
    path: &Path,
    settings: &IngestSettings,
) -> Result<(ShowCatalog, LoadReport)> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read show records: {}", path.display()))?;

    load_shows_from_str(&content, settings)
}

/// Read a film records file
pub async fn load_films(
    path: &Path,
    settings: &IngestSettings,
) -> Result<(WatchStack, LoadReport)> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read film records: {}", path.display()))?;

    load_films_from_str(&content, settings)
}
