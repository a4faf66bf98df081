//! Layer 6: external corroboration.
//!
//! Passes when the celestial-body data is non-empty or an aircraft list is
//! present, even an empty one: an empty list means the feed answered and
//! simply saw nothing nearby. Satellite and balloon feeds require upstream
//! credentials, so they are optional sources and never affect the outcome.

use crate::models::document::AnalysisDocument;
use crate::models::outcome::{LayerCheck, LayerOutcome};

pub fn validate(document: &AnalysisDocument) -> LayerOutcome {
    let corroboration = document.external_validation.as_ref();

    let celestial_count = corroboration
        .and_then(|c| c.celestial_bodies.as_ref())
        .map_or(0, |bodies| bodies.len());
    let aircraft = corroboration.and_then(|c| c.nearby_aircraft.as_ref());
    let satellites = corroboration.and_then(|c| c.visible_satellites.as_ref());
    let balloons = corroboration.and_then(|c| c.nearby_balloons.as_ref());

    let has_celestial = celestial_count > 0;
    let has_aircraft = aircraft.is_some();
    let passed = has_celestial || has_aircraft;

    let aircraft_line = match aircraft {
        Some(list) => format!("aircraft nearby: {}", list.len()),
        None => "aircraft feed: no response".to_string(),
    };
    let satellites_line = match satellites {
        Some(list) => format!("satellites visible: {}", list.len()),
        None => "satellite feed: not configured".to_string(),
    };
    let balloons_line = match balloons {
        Some(list) => format!("balloons nearby: {}", list.len()),
        None => "balloon feed: not configured".to_string(),
    };

    let checks = vec![
        LayerCheck::new(
            format!("celestial bodies: {celestial_count}"),
            has_celestial,
        ),
        LayerCheck::new(aircraft_line, has_aircraft),
        // Optional sources: recorded for diagnostics, never gate the layer.
        LayerCheck::new(satellites_line, true),
        LayerCheck::new(balloons_line, true),
    ];

    LayerOutcome::new(6, "external corroboration", passed, checks)
}
