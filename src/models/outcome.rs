//! Result types for layer validation.

/// One recorded condition inside a layer: a human-readable description and
/// whether it held. Informational conditions are recorded alongside required
/// ones so diagnostics show the full picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerCheck {
    pub description: String,
    pub passed: bool,
}

impl LayerCheck {
    pub fn new(description: impl Into<String>, passed: bool) -> Self {
        Self {
            description: description.into(),
            passed,
        }
    }
}

/// Outcome of validating one analysis layer. Produced exactly once per layer
/// per run; `passed` is derived from the layer's required conditions only,
/// while `checks` preserves every condition that was evaluated.
#[derive(Debug, Clone)]
pub struct LayerOutcome {
    pub layer: u8,
    pub name: &'static str,
    pub passed: bool,
    pub checks: Vec<LayerCheck>,
}

impl LayerOutcome {
    pub fn new(layer: u8, name: &'static str, passed: bool, checks: Vec<LayerCheck>) -> Self {
        Self {
            layer,
            name,
            passed,
            checks,
        }
    }
}

/// Three-way aggregate verdict over the nine layer outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every layer verified.
    Full,
    /// At least the tolerance threshold passed; optional integrations may be
    /// missing. Still counted as overall success.
    Degraded,
    /// Below the tolerance threshold.
    Failed,
}

impl Verdict {
    pub fn is_success(&self) -> bool {
        !matches!(self, Verdict::Failed)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Full => write!(f, "full"),
            Verdict::Degraded => write!(f, "degraded"),
            Verdict::Failed => write!(f, "failed"),
        }
    }
}

/// Aggregate report over one validation run. Always carries exactly nine
/// outcomes, ordered by layer, no matter how many sections the source
/// document contained.
#[derive(Debug)]
pub struct ValidationReport {
    pub outcomes: Vec<LayerOutcome>,
    pub passed_count: usize,
    pub verdict: Verdict,
}
