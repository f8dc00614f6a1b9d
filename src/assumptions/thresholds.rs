//! Narrative selection thresholds
//!
//! The cutoffs are arbitrary UX-tuning values with no cited source; they
//! are kept as named configuration rather than re-derived.

/// Strength cutoffs selecting between the three narrative templates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NarrativeThresholds {
    /// Mean lever strength above which the "high impact" template is used
    pub high: f64,
    /// Strength above which the "moderate impact" template is used
    pub moderate: f64,
}

impl NarrativeThresholds {
    /// Reference thresholds
    pub fn default_pricing() -> Self {
        Self {
            high: 60.0,
            moderate: 30.0,
        }
    }
}

impl Default for NarrativeThresholds {
    fn default() -> Self {
        Self::default_pricing()
    }
}
