//! Calibration tables: policy costs, carbon efficiency, growth gains, thresholds

mod costs;
mod efficiency;
mod growth;
mod thresholds;
pub mod loader;

pub use costs::{PolicyCosts, MILLIONS_PER_BILLION};
pub use efficiency::{CarbonEfficiency, InvestmentSector};
pub use growth::{
    GrowthModel, AIR_QUALITY_BASELINE, EMISSIONS_BASELINE, JOBS_PER_BILLION,
    JOBS_THOUSANDS_SCALE, TEMPERATURE_BASELINE, TEMPERATURE_DIVISOR, TRANSIT_BASELINE,
    TREE_COVER_BASELINE,
};
pub use loader::{AssumptionsError, LoadedAssumptions};
pub use thresholds::NarrativeThresholds;

use std::path::Path;

/// Container for all calibration tables used by a projection
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub costs: PolicyCosts,
    pub efficiency: CarbonEfficiency,
    pub thresholds: NarrativeThresholds,
}

impl Assumptions {
    /// Create assumptions with the built-in reference constants
    pub fn default_pricing() -> Self {
        Self {
            costs: PolicyCosts::default_pricing(),
            efficiency: CarbonEfficiency::default_pricing(),
            thresholds: NarrativeThresholds::default_pricing(),
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self, AssumptionsError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    ///
    /// Narrative thresholds are not externalized; the built-in constants apply.
    pub fn from_csv_path(path: &Path) -> Result<Self, AssumptionsError> {
        let loaded = LoadedAssumptions::load_from(path)?;

        Ok(Self {
            costs: PolicyCosts::from_loaded(&loaded.policy_costs),
            efficiency: CarbonEfficiency::from_loaded(&loaded.carbon_efficiency),
            thresholds: NarrativeThresholds::default_pricing(),
        })
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_pricing()
    }
}
