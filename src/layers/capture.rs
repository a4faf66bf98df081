//! Layer 1: capture metadata.
//!
//! Requires a geolocation (latitude, longitude), a GPS-derived timestamp,
//! and a capture timestamp. No degraded-mode tolerance: all four must be
//! present. The camera identifier is recorded but informational.

use super::shown;
use crate::models::document::AnalysisDocument;
use crate::models::outcome::{LayerCheck, LayerOutcome};

pub fn validate(document: &AnalysisDocument) -> LayerOutcome {
    let metadata = document.exif_data.as_ref();
    let location = metadata.and_then(|m| m.location.as_ref());

    let latitude = location.and_then(|l| l.latitude);
    let longitude = location.and_then(|l| l.longitude);
    let gps_timestamp = location.and_then(|l| l.gps_time_stamp.as_deref());
    let capture_timestamp = metadata.and_then(|m| m.capture_date.as_deref());
    let camera = metadata.and_then(|m| m.camera.as_deref());

    let passed = latitude.is_some()
        && longitude.is_some()
        && gps_timestamp.is_some()
        && capture_timestamp.is_some();

    let checks = vec![
        LayerCheck::new(
            format!("latitude: {}", shown(latitude.as_ref())),
            latitude.is_some(),
        ),
        LayerCheck::new(
            format!("longitude: {}", shown(longitude.as_ref())),
            longitude.is_some(),
        ),
        LayerCheck::new(
            format!("GPS timestamp: {}", shown(gps_timestamp.as_ref())),
            gps_timestamp.is_some(),
        ),
        LayerCheck::new(
            format!("capture timestamp: {}", shown(capture_timestamp.as_ref())),
            capture_timestamp.is_some(),
        ),
        LayerCheck::new(
            format!("camera identifier: {}", shown(camera.as_ref())),
            camera.is_some(),
        ),
    ];

    LayerOutcome::new(1, "capture metadata", passed, checks)
}
