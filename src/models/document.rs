//! Typed schema for the completed result document.
//!
//! The document is a mapping with up to nine named sections, one per
//! analysis layer, every one of them optional. Each section gets its own
//! struct with every field explicitly optional, so the layer validators can
//! express their presence/absence rules directly instead of probing loose
//! maps with defaults. Null and missing are both tolerated everywhere
//! (`Option` around lists, not bare `Vec`), matching what partially
//! degraded pipelines actually emit.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The terminal result document attached to a completed analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisDocument {
    pub exif_data: Option<CaptureMetadata>,
    pub ai_analysis: Option<VisualClassification>,
    pub forensic_analysis: Option<ForensicFindings>,
    pub scientific_comparison: Option<ReferenceComparison>,
    pub training_enhancement: Option<TrainingEnhancement>,
    pub external_validation: Option<ExternalCorroboration>,
    pub weather_data: Option<WeatherReport>,
    pub atmospheric_comparison: Option<PhenomenonComparison>,
    pub confidence: Option<f64>,
    pub recommendations: Option<Vec<String>>,
}

/// Layer 1: metadata extracted from the capture itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptureMetadata {
    pub location: Option<CaptureLocation>,
    pub capture_date: Option<String>,
    pub camera: Option<String>,
    pub manipulation_score: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptureLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub gps_time_stamp: Option<String>,
}

/// Layer 2: model-generated narrative classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisualClassification {
    pub description: Option<String>,
    pub category: Option<String>,
    pub confidence: Option<f64>,
    pub features: Option<DetectedFeatures>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetectedFeatures {
    pub detected_objects: Option<Vec<Value>>,
}

/// Layer 3: forensic integrity findings. The manipulation score lives in
/// the capture-metadata section; this one carries the authenticity score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForensicFindings {
    pub authenticity_score: Option<f64>,
}

/// Layer 4: comparison against the reference object database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceComparison {
    pub total_matches: Option<u32>,
    pub best_match: Option<ReferenceMatch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceMatch {
    pub object: Option<MatchedObject>,
    pub similarity: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchedObject {
    pub name: Option<String>,
    pub category: Option<String>,
}

/// Layer 5: enhancement from previously confirmed cases, if any exist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainingEnhancement {
    pub matches_found: Option<u32>,
}

/// Layer 6: corroboration from external observation sources. Satellite and
/// balloon feeds require upstream credentials and may be entirely absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalCorroboration {
    pub celestial_bodies: Option<serde_json::Map<String, Value>>,
    pub nearby_aircraft: Option<Vec<Value>>,
    pub visible_satellites: Option<Vec<Value>>,
    pub nearby_balloons: Option<Vec<Value>>,
}

/// Layer 7: weather at the capture location, present only when the weather
/// integration is configured.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeatherReport {
    pub temperature: Option<Temperature>,
    pub conditions: Option<WeatherConditions>,
    pub clouds: Option<CloudCover>,
    pub visibility: Option<f64>,
    pub analysis: Option<WeatherAssessment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Temperature {
    pub current: Option<f64>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeatherConditions {
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudCover {
    pub coverage: Option<f64>,
}

/// Qualitative weather assessment block. Keys are snake_case on the wire,
/// unlike the rest of the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherAssessment {
    pub visibility_quality: Option<String>,
    pub likelihood_of_optical_phenomena: Option<String>,
}

/// Layer 8: comparison against the known-phenomenon catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhenomenonComparison {
    pub total_matches: Option<u32>,
    pub best_match: Option<PhenomenonMatch>,
    pub has_strong_match: Option<bool>,
    pub top_matches: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhenomenonMatch {
    pub phenomenon: Option<PhenomenonInfo>,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhenomenonInfo {
    pub name: Option<String>,
    pub category: Option<String>,
}
