//! CSV-based assumption loader
//!
//! Loads the cost and efficiency tables from CSV files in data/assumptions/

use crate::policy::Lever;
use super::efficiency::InvestmentSector;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// Errors raised while loading assumption tables
#[derive(Debug, Error)]
pub enum AssumptionsError {
    #[error("failed to read assumptions file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse assumptions CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to parse value in {file}: {source}")]
    Value {
        file: &'static str,
        source: std::num::ParseFloatError,
    },

    #[error("unknown lever '{0}' in policy_costs.csv")]
    UnknownLever(String),

    #[error("unknown sector '{0}' in carbon_efficiency.csv")]
    UnknownSector(String),
}

/// Load per-lever costs from CSV
/// Returns Vec<(lever, cost_per_point)> in file order
pub fn load_policy_costs(path: &Path) -> Result<Vec<(Lever, f64)>, AssumptionsError> {
    let file = File::open(path.join("policy_costs.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut entries = Vec::new();

    for result in reader.records() {
        let record = result?;
        let lever = Lever::from_key(&record[0])
            .ok_or_else(|| AssumptionsError::UnknownLever(record[0].to_string()))?;
        let cost: f64 = record[1].parse().map_err(|source| AssumptionsError::Value {
            file: "policy_costs.csv",
            source,
        })?;
        entries.push((lever, cost));
    }

    Ok(entries)
}

/// Load per-sector carbon efficiency from CSV
/// Returns Vec<(sector, mt_per_billion)> in file order
pub fn load_carbon_efficiency(
    path: &Path,
) -> Result<Vec<(InvestmentSector, f64)>, AssumptionsError> {
    let file = File::open(path.join("carbon_efficiency.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut entries = Vec::new();

    for result in reader.records() {
        let record = result?;
        let lever = Lever::from_key(&record[0])
            .ok_or_else(|| AssumptionsError::UnknownSector(record[0].to_string()))?;
        let sector = InvestmentSector::ALL
            .into_iter()
            .find(|s| s.lever() == lever)
            .ok_or_else(|| AssumptionsError::UnknownSector(record[0].to_string()))?;
        let factor: f64 = record[1].parse().map_err(|source| AssumptionsError::Value {
            file: "carbon_efficiency.csv",
            source,
        })?;
        entries.push((sector, factor));
    }

    Ok(entries)
}

/// Raw tables loaded from an assumptions directory
pub struct LoadedAssumptions {
    pub policy_costs: Vec<(Lever, f64)>,
    pub carbon_efficiency: Vec<(InvestmentSector, f64)>,
}

impl LoadedAssumptions {
    /// Load all tables from the default path
    pub fn load_default() -> Result<Self, AssumptionsError> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all tables from a specific path
    pub fn load_from(path: &Path) -> Result<Self, AssumptionsError> {
        Ok(Self {
            policy_costs: load_policy_costs(path)?,
            carbon_efficiency: load_carbon_efficiency(path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_assumptions() {
        let result = LoadedAssumptions::load_default();
        assert!(result.is_ok(), "Failed to load assumptions: {:?}", result.err());

        let loaded = result.unwrap();

        assert_eq!(loaded.policy_costs.len(), 8);
        assert!(loaded
            .policy_costs
            .contains(&(Lever::RenewableEnergy, 600.0)));

        assert_eq!(loaded.carbon_efficiency.len(), 4);
        assert!(loaded
            .carbon_efficiency
            .contains(&(InvestmentSector::RenewableInfrastructure, 120.0)));
    }
}
