//! Common test utilities for integration tests.

#![allow(dead_code)]

use neo_impact::Asteroid;
use serde_json::Value;

/// First sample: 154229 (2002 JN97), not hazardous, one close approach.
pub const SAMPLE_1: &str = include_str!("../data/asteroid_sample1.json");

/// Second sample: 230111 (2001 BE10), hazardous, two close approaches.
pub const SAMPLE_2: &str = include_str!("../data/asteroid_sample2.json");

/// Two-day NeoWs feed with one record lacking `estimated_diameter`.
pub const FEED: &str = include_str!("../data/feed_sample.json");

/// Parse a fixture into a JSON value.
pub fn load_record(text: &str) -> Value {
    serde_json::from_str(text).expect("fixture should be valid JSON")
}

/// Build an asteroid from a fixture.
pub fn load_asteroid(text: &str) -> Asteroid {
    Asteroid::from_record(&load_record(text)).expect("fixture should build an asteroid")
}
