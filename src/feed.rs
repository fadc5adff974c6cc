//! Batch ingestion of NeoWs documents.
//!
//! Accepts both shapes the service returns:
//! - feed: `near_earth_objects` is an object keyed by date, each value an
//!   array of records
//! - browse: `near_earth_objects` is a plain array of records
//!
//! A bad record does not abort the batch. It is logged and reported in
//! [`FeedReport::rejected`] so the caller can decide what to do with it.

use serde_json::Value;
use tracing::{debug, warn};

use crate::asteroid::record::Cursor;
use crate::asteroid::Asteroid;
use crate::config::ModelConfig;
use crate::error::BodyError;

/// A record that could not be turned into an asteroid.
#[derive(Debug)]
pub struct RejectedRecord {
    /// Date key for feed documents, `None` for browse pages
    pub date: Option<String>,
    /// Position within its date group (or page)
    pub index: usize,
    /// Record `id`, when it could be read
    pub id: Option<String>,
    pub error: BodyError,
}

/// Result of ingesting one document.
#[derive(Debug, Default)]
pub struct FeedReport {
    /// Asteroids in date order, source order within a date
    pub asteroids: Vec<Asteroid>,
    pub rejected: Vec<RejectedRecord>,
}

impl FeedReport {
    pub fn hazardous(&self) -> impl Iterator<Item = &Asteroid> {
        self.asteroids.iter().filter(|a| a.is_hazardous())
    }

    /// Asteroid with the largest impact energy, if any.
    pub fn most_energetic(&self) -> Option<&Asteroid> {
        self.asteroids
            .iter()
            .max_by(|a, b| a.impact_energy().total_cmp(&b.impact_energy()))
    }
}

/// Parse a NeoWs feed or browse document.
///
/// # Errors
/// Only document-level problems fail: invalid JSON, a missing
/// `near_earth_objects` key, or one of the wrong type. Per-record failures
/// end up in [`FeedReport::rejected`].
pub fn parse_feed(text: &str, config: &ModelConfig) -> Result<FeedReport, BodyError> {
    let document: Value = serde_json::from_str(text)?;
    parse_feed_value(&document, config)
}

/// Same as [`parse_feed`] for an already-parsed document.
pub fn parse_feed_value(document: &Value, config: &ModelConfig) -> Result<FeedReport, BodyError> {
    let objects = Cursor::root(document).get("near_earth_objects")?;
    let mut report = FeedReport::default();

    if objects.value().is_array() {
        ingest_group(&mut report, None, &objects, config)?;
    } else {
        let dates = objects
            .value()
            .as_object()
            .ok_or_else(|| BodyError::WrongType {
                field: "near_earth_objects".to_string(),
                expected: "object or array",
            })?;
        let mut keys: Vec<&String> = dates.keys().collect();
        keys.sort();
        for date in keys {
            let group = objects.get(date)?;
            ingest_group(&mut report, Some(date.as_str()), &group, config)?;
        }
    }

    debug!(
        "Ingested {} asteroids, rejected {}",
        report.asteroids.len(),
        report.rejected.len()
    );
    Ok(report)
}

fn ingest_group(
    report: &mut FeedReport,
    date: Option<&str>,
    group: &Cursor<'_>,
    config: &ModelConfig,
) -> Result<(), BodyError> {
    for (index, entry) in group.elements()?.iter().enumerate() {
        match Asteroid::from_record_with(entry.value(), config) {
            Ok(asteroid) => report.asteroids.push(asteroid),
            Err(error) => {
                let id = entry
                    .get("id")
                    .and_then(|id| id.as_str().map(str::to_string))
                    .ok();
                warn!(
                    "Skipping record {} ({}): {}",
                    index,
                    id.as_deref().unwrap_or("unknown id"),
                    error
                );
                report.rejected.push(RejectedRecord {
                    date: date.map(str::to_string),
                    index,
                    id,
                    error,
                });
            }
        }
    }
    Ok(())
}
