//! Scenario runner for efficient batch projections
//!
//! Pre-loads assumptions once, then allows running many projections with
//! different configurations without re-reading CSV files.

use crate::policy::PolicyInputs;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
use crate::assumptions::{Assumptions, AssumptionsError};

/// Pre-loaded scenario runner for efficient batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
///
/// // Run many projections with different configs
/// for ceiling in [50.0, 100.0, 200.0] {
///     let config = ProjectionConfig { budget_ceiling: ceiling, ..Default::default() };
///     let result = runner.run(&inputs, config);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Pre-loaded base assumptions
    base_assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create runner with default in-memory assumptions
    pub fn new() -> Self {
        Self {
            base_assumptions: Assumptions::default_pricing(),
        }
    }

    /// Create runner by loading assumptions from CSV files
    pub fn from_csv() -> Result<Self, AssumptionsError> {
        Ok(Self {
            base_assumptions: Assumptions::from_csv()?,
        })
    }

    /// Create runner from specific assumptions directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, AssumptionsError> {
        Ok(Self {
            base_assumptions: Assumptions::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            base_assumptions: assumptions,
        }
    }

    /// Run a single projection with the given config
    pub fn run(&self, inputs: &PolicyInputs, config: ProjectionConfig) -> ProjectionResult {
        let engine = ProjectionEngine::new(self.base_assumptions.clone(), config);
        engine.project(inputs)
    }

    /// Run projections for multiple input vectors with the same config
    pub fn run_batch(
        &self,
        inputs: &[PolicyInputs],
        config: ProjectionConfig,
    ) -> Vec<ProjectionResult> {
        let engine = ProjectionEngine::new(self.base_assumptions.clone(), config);
        inputs.iter().map(|i| engine.project(i)).collect()
    }

    /// Run multiple configs for a single input vector
    pub fn run_scenarios(
        &self,
        inputs: &PolicyInputs,
        configs: &[ProjectionConfig],
    ) -> Vec<ProjectionResult> {
        configs
            .iter()
            .map(|config| {
                let engine =
                    ProjectionEngine::new(self.base_assumptions.clone(), config.clone());
                engine.project(inputs)
            })
            .collect()
    }

    /// Get reference to base assumptions for inspection/modification
    pub fn assumptions(&self) -> &Assumptions {
        &self.base_assumptions
    }

    /// Get mutable reference to base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.base_assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_scenarios() {
        let runner = ScenarioRunner::new();
        let inputs = PolicyInputs::uniform(60.0);

        let configs: Vec<_> = [5, 10]
            .iter()
            .map(|&horizon| ProjectionConfig {
                horizon_years: horizon,
                start_year: 2026,
                budget_ceiling: 100.0,
            })
            .collect();

        let results = runner.run_scenarios(&inputs, &configs);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].records.len(), 6);
        assert_eq!(results[1].records.len(), 11);

        // Same inputs, same spend regardless of horizon
        assert_eq!(results[0].budget.spend, results[1].budget.spend);
    }

    #[test]
    fn test_runner_batch() {
        let runner = ScenarioRunner::new();
        let batch = [
            PolicyInputs::default(),
            PolicyInputs::uniform(50.0),
            PolicyInputs::uniform(100.0),
        ];

        let results = runner.run_batch(&batch, ProjectionConfig::default());
        assert_eq!(results.len(), 3);

        // Stronger lever vectors spend more
        assert!(results[2].budget.spend > results[1].budget.spend);
        assert!(results[1].budget.spend > results[0].budget.spend);
    }
}
