//! Core projection engine for yearly impact projections

use super::budget::{BudgetSummary, DEFAULT_BUDGET_CEILING};
use super::records::{ProjectionResult, YearlyRecord};
use crate::assumptions::{
    Assumptions, GrowthModel, AIR_QUALITY_BASELINE, EMISSIONS_BASELINE, JOBS_PER_BILLION,
    JOBS_THOUSANDS_SCALE, TEMPERATURE_BASELINE, TEMPERATURE_DIVISOR, TRANSIT_BASELINE,
    TREE_COVER_BASELINE,
};
use crate::policy::PolicyInputs;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Number of yearly steps; the output has horizon + 1 records
    pub horizon_years: u32,

    /// Calendar year of the first record
    pub start_year: u16,

    /// Budget ceiling, in $B (clamped to the configurable range)
    pub budget_ceiling: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_years: 10,
            start_year: 2026,
            budget_ceiling: DEFAULT_BUDGET_CEILING,
        }
    }
}

/// Main projection engine
///
/// Stateless and referentially transparent: `project` can be re-run with
/// identical inputs at any time and yields bit-identical output.
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    /// Run the projection for an input vector
    pub fn project(&self, inputs: &PolicyInputs) -> ProjectionResult {
        // The UI layer clamps already; clamp again so the engine stays
        // total for out-of-range standalone callers.
        let inputs = inputs.clamped();

        let budget = BudgetSummary::new(&inputs, &self.assumptions.costs, self.config.budget_ceiling);
        let growth = GrowthModel::for_horizon(self.horizon());

        let mut result = ProjectionResult::new(budget, inputs.strength());

        for year_index in 0..=self.horizon() {
            result.add_row(self.compute_year(&inputs, budget.spend, &growth, year_index));
        }

        result
    }

    /// Compute a single yearly record
    ///
    /// Each metric is affine in the growth factor and linear in its lever
    /// subset; no metric reads a prior record.
    pub fn compute_year(
        &self,
        inputs: &PolicyInputs,
        spend: f64,
        growth: &GrowthModel,
        year_index: u32,
    ) -> YearlyRecord {
        let gf = self.growth_factor(year_index);

        let air_levers = (inputs.co2_reduction + inputs.ev_adoption + inputs.tree_plantation) / 3.0;

        YearlyRecord {
            year: self.config.start_year + year_index as u16,
            co2_emissions: (EMISSIONS_BASELINE - inputs.co2_reduction * gf * growth.co2_factor)
                .max(growth.co2_floor),
            air_quality: AIR_QUALITY_BASELINE + air_levers * gf * growth.air_gain,
            ev_adoption: inputs.ev_adoption * gf,
            renewable_energy: inputs.renewable_energy * gf,
            tree_cover: TREE_COVER_BASELINE + inputs.tree_plantation * gf * growth.tree_gain,
            public_transport_usage: TRANSIT_BASELINE
                + inputs.public_transport * gf * growth.transit_gain,
            green_jobs: spend * JOBS_PER_BILLION * gf * JOBS_THOUSANDS_SCALE,
            temperature: TEMPERATURE_BASELINE
                - inputs.total() / TEMPERATURE_DIVISOR * gf * growth.temperature_gain,
        }
    }

    /// Normalized position of a year within the horizon: 0 at start, 1 at end
    pub fn growth_factor(&self, year_index: u32) -> f64 {
        year_index as f64 / self.horizon() as f64
    }

    // Horizon 0 would divide growth_factor by zero
    fn horizon(&self) -> u32 {
        self.config.horizon_years.max(1)
    }

    /// Get reference to the engine's assumptions
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Get reference to the engine's config
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Lever;
    use approx::assert_relative_eq;

    fn engine() -> ProjectionEngine {
        ProjectionEngine::new(Assumptions::default_pricing(), ProjectionConfig::default())
    }

    #[test]
    fn test_projection_length_and_years() {
        let result = engine().project(&PolicyInputs::uniform(50.0));

        assert_eq!(result.records.len(), 11);
        assert_eq!(result.records[0].year, 2026);
        assert_eq!(result.records[10].year, 2036);
    }

    #[test]
    fn test_year_zero_is_baseline_regardless_of_levers() {
        let result = engine().project(&PolicyInputs::uniform(100.0));
        let first = &result.records[0];

        assert_eq!(first.co2_emissions, 100.0);
        assert_eq!(first.air_quality, 50.0);
        assert_eq!(first.ev_adoption, 0.0);
        assert_eq!(first.renewable_energy, 0.0);
        assert_eq!(first.tree_cover, 30.0);
        assert_eq!(first.public_transport_usage, 25.0);
        assert_eq!(first.green_jobs, 0.0);
        assert_eq!(first.temperature, 1.5);
    }

    #[test]
    fn test_final_year_reaches_full_contribution() {
        let inputs = PolicyInputs::new(80.0, 50.0, 40.0, 60.0, 30.0, 0.0, 0.0, 0.0);
        let result = engine().project(&inputs);
        let last = &result.records[10];

        // growth factor is exactly 1 at the final year
        assert_relative_eq!(last.ev_adoption, 80.0);
        assert_relative_eq!(last.renewable_energy, 60.0);
        assert_relative_eq!(last.co2_emissions, 100.0 - 50.0 * 0.9);
        assert_relative_eq!(last.tree_cover, 30.0 + 40.0 * 0.8);
        assert_relative_eq!(last.public_transport_usage, 25.0 + 30.0 * 0.7);
        assert_relative_eq!(
            last.temperature,
            1.5 - inputs.total() / 800.0 * 0.4
        );
    }

    #[test]
    fn test_emissions_floor() {
        let mut inputs = PolicyInputs::default();
        inputs.set(Lever::Co2Reduction, 100.0);

        let result = engine().project(&inputs);
        assert_eq!(result.records[10].co2_emissions, 10.0);
    }

    #[test]
    fn test_idempotent() {
        let inputs = PolicyInputs::new(12.5, 33.0, 47.5, 81.0, 9.0, 66.0, 21.0, 54.0);

        let first = engine().project(&inputs);
        let second = engine().project(&inputs);

        assert_eq!(first, second);
    }

    #[test]
    fn test_all_zero_scenario() {
        let result = engine().project(&PolicyInputs::default());

        assert_eq!(result.budget.spend, 0.0);
        assert_eq!(result.strength, 0.0);
        assert!(!result.budget.over_budget);

        for record in &result.records {
            assert_eq!(record.co2_emissions, 100.0);
            assert_eq!(record.air_quality, 50.0);
            assert_eq!(record.tree_cover, 30.0);
            assert_eq!(record.public_transport_usage, 25.0);
            assert_eq!(record.green_jobs, 0.0);
            assert_eq!(record.temperature, 1.5);
        }
    }

    #[test]
    fn test_all_levers_maxed_exceeds_default_ceiling() {
        let result = engine().project(&PolicyInputs::uniform(100.0));

        assert_relative_eq!(result.budget.spend, 275.0);
        assert!(result.budget.over_budget);
        assert_eq!(result.strength, 100.0);
    }

    #[test]
    fn test_single_lever_isolation() {
        let mut inputs = PolicyInputs::default();
        inputs.set(Lever::TreePlantation, 40.0);

        let result = engine().project(&inputs);

        for (index, record) in result.records.iter().enumerate() {
            let gf = index as f64 / 10.0;

            // Tree cover and the tree-linked share of air quality move
            assert_relative_eq!(record.tree_cover, 30.0 + 40.0 * gf * 0.8);
            assert_relative_eq!(record.air_quality, 50.0 + 40.0 / 3.0 * gf * 0.6);

            // Everything EV/renewable/transit-specific stays at baseline
            assert_eq!(record.ev_adoption, 0.0);
            assert_eq!(record.renewable_energy, 0.0);
            assert_eq!(record.co2_emissions, 100.0);
            assert_eq!(record.public_transport_usage, 25.0);
        }
    }

    #[test]
    fn test_five_year_calibration_selected() {
        let config = ProjectionConfig {
            horizon_years: 5,
            start_year: 2026,
            budget_ceiling: 100.0,
        };
        let engine = ProjectionEngine::new(Assumptions::default_pricing(), config);

        let mut inputs = PolicyInputs::default();
        inputs.set(Lever::Co2Reduction, 100.0);

        let result = engine.project(&inputs);
        assert_eq!(result.records.len(), 6);

        // 5-year calibration: factor 0.8, floor 20
        assert_relative_eq!(result.records[5].co2_emissions, 20.0);
        assert_relative_eq!(result.records[1].co2_emissions, 100.0 - 100.0 * 0.2 * 0.8);
    }
}
