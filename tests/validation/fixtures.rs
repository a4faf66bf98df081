//! Shared fixture documents.

use serde_json::{json, Value};
use vigil::models::document::AnalysisDocument;

/// A result document with all nine sections complete, as a fully
/// functional pipeline deployment would produce for the New York fixture
/// capture.
pub fn complete_document() -> Value {
    json!({
        "exifData": {
            "location": {
                "latitude": 40.7128,
                "longitude": -74.0060,
                "gpsTimeStamp": "18:30:00"
            },
            "captureDate": "2024-06-01T18:30:00Z",
            "camera": "TestCamera",
            "manipulationScore": 0.08
        },
        "aiAnalysis": {
            "description": "A bright stationary point of light above the skyline, no visible structure.",
            "category": "unidentified light",
            "confidence": 0.72,
            "features": {"detectedObjects": [{"label": "light source"}]}
        },
        "forensicAnalysis": {
            "authenticityScore": 0.95
        },
        "scientificComparison": {
            "totalMatches": 4,
            "bestMatch": {
                "object": {"name": "Venus", "category": "celestial"},
                "similarity": 0.81
            }
        },
        "trainingEnhancement": {
            "matchesFound": 2
        },
        "externalValidation": {
            "celestialBodies": {
                "sun": {"altitude": -8.4},
                "moon": {"altitude": 32.1, "phase": 0.56},
                "venus": {"visible": true}
            },
            "nearbyAircraft": [
                {"callsign": "UAL123", "distance": 11.2}
            ],
            "visibleSatellites": [],
            "nearbyBalloons": []
        },
        "weatherData": {
            "temperature": {"current": 18.5, "unit": "C"},
            "conditions": {"description": "clear sky"},
            "clouds": {"coverage": 5.0},
            "visibility": 10000.0,
            "analysis": {
                "visibility_quality": "excellent",
                "likelihood_of_optical_phenomena": "low"
            }
        },
        "atmosphericComparison": {
            "totalMatches": 3,
            "bestMatch": {
                "phenomenon": {"name": "lenticular cloud", "category": "cloud"},
                "score": 42.0
            },
            "hasStrongMatch": false,
            "topMatches": []
        },
        "confidence": 0.64,
        "recommendations": ["Compare against the aircraft transponder log."]
    })
}

/// The same document with one top-level section removed entirely.
pub fn without(mut document: Value, section: &str) -> Value {
    document
        .as_object_mut()
        .expect("fixture document is an object")
        .remove(section);
    document
}

pub fn decode(document: Value) -> AnalysisDocument {
    serde_json::from_value(document).expect("fixture document decodes")
}
