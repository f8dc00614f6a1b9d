//! Narrative artifacts derived from projection output
//!
//! Pure string templating over the numeric results: a synthetic newspaper
//! and a three-milestone program timeline. Template selection branches on
//! the aggregate strength via the configured thresholds.

mod newspaper;
mod timeline;

pub use newspaper::{NewsStats, Newspaper, SideStory};
pub use timeline::{Milestone, Timeline};

use crate::assumptions::NarrativeThresholds;
use serde::{Deserialize, Serialize};

/// degC of avoided warming per point of aggregate strength
pub const TEMPERATURE_PER_STRENGTH: f64 = 0.003;

/// Which of the three pre-written narrative templates applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImpactTier {
    High,
    Moderate,
    Low,
}

impl ImpactTier {
    /// Select the tier for an aggregate strength value
    pub fn from_strength(strength: f64, thresholds: &NarrativeThresholds) -> Self {
        if strength > thresholds.high {
            ImpactTier::High
        } else if strength > thresholds.moderate {
            ImpactTier::Moderate
        } else {
            ImpactTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactTier::High => "high",
            ImpactTier::Moderate => "moderate",
            ImpactTier::Low => "low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        let thresholds = NarrativeThresholds::default_pricing();

        assert_eq!(ImpactTier::from_strength(0.0, &thresholds), ImpactTier::Low);
        assert_eq!(ImpactTier::from_strength(30.0, &thresholds), ImpactTier::Low);
        assert_eq!(
            ImpactTier::from_strength(30.1, &thresholds),
            ImpactTier::Moderate
        );
        assert_eq!(
            ImpactTier::from_strength(60.0, &thresholds),
            ImpactTier::Moderate
        );
        assert_eq!(ImpactTier::from_strength(60.1, &thresholds), ImpactTier::High);
        assert_eq!(ImpactTier::from_strength(100.0, &thresholds), ImpactTier::High);
    }
}
