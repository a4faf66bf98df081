//! Layer 7: atmospheric context.
//!
//! The weather integration is optional: when the subsection is entirely
//! absent the layer passes trivially, modeling an unconfigured upstream
//! key. Once the subsection is present there is no tolerance: temperature,
//! condition description, cloud coverage, and the qualitative assessment
//! block must all be there. Visibility is informational.

use super::shown;
use crate::models::document::AnalysisDocument;
use crate::models::outcome::{LayerCheck, LayerOutcome};

const NAME: &str = "atmospheric context";

pub fn validate(document: &AnalysisDocument) -> LayerOutcome {
    let weather = match document.weather_data.as_ref() {
        Some(weather) => weather,
        None => {
            return LayerOutcome::new(
                7,
                NAME,
                true,
                vec![LayerCheck::new(
                    "weather integration not configured; nothing to verify",
                    true,
                )],
            );
        }
    };

    let temperature = weather.temperature.as_ref();
    let conditions = weather.conditions.as_ref().and_then(|c| c.description.as_deref());
    let coverage = weather.clouds.as_ref().and_then(|c| c.coverage);
    let assessment = weather.analysis.as_ref();

    let passed = temperature.is_some()
        && weather.conditions.is_some()
        && weather.clouds.is_some()
        && assessment.is_some();

    let temperature_line = match temperature {
        Some(t) => format!(
            "temperature: {}{}",
            shown(t.current.as_ref()),
            t.unit.as_deref().unwrap_or("")
        ),
        None => "temperature: missing".to_string(),
    };
    let assessment_line = match assessment {
        Some(a) => format!(
            "qualitative assessment present (visibility {})",
            a.visibility_quality.as_deref().unwrap_or("unrated")
        ),
        None => "qualitative assessment: missing".to_string(),
    };

    let checks = vec![
        LayerCheck::new(temperature_line, temperature.is_some()),
        LayerCheck::new(
            format!("conditions: {}", shown(conditions.as_ref())),
            weather.conditions.is_some(),
        ),
        LayerCheck::new(
            format!("cloud coverage: {}", shown(coverage.as_ref())),
            weather.clouds.is_some(),
        ),
        LayerCheck::new(assessment_line, assessment.is_some()),
        LayerCheck::new(
            format!("visibility: {}", shown(weather.visibility.as_ref())),
            true,
        ),
    ];

    LayerOutcome::new(7, NAME, passed, checks)
}
