//! Projection output structures

use super::budget::BudgetSummary;
use crate::assumptions::{AIR_QUALITY_BASELINE, EMISSIONS_BASELINE};
use serde::{Deserialize, Serialize};

/// A single projected year
///
/// Records are independent: each is computed from the inputs and the
/// year's growth factor alone, never from the previous record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyRecord {
    /// Calendar year label
    pub year: u16,

    /// Emissions index (100 = current levels, floored)
    pub co2_emissions: f64,

    /// Air quality index (higher = better)
    pub air_quality: f64,

    /// EV share of the vehicle market, percent
    pub ev_adoption: f64,

    /// Renewable share of the grid, percent
    pub renewable_energy: f64,

    /// Tree cover, percent
    pub tree_cover: f64,

    /// Public transport usage, percent
    pub public_transport_usage: f64,

    /// Green jobs created, thousands
    pub green_jobs: f64,

    /// Temperature rise in degC above pre-industrial
    pub temperature: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Yearly records, ordered by increasing year (horizon + 1 entries)
    pub records: Vec<YearlyRecord>,

    /// Spend against the configured ceiling
    pub budget: BudgetSummary,

    /// Mean lever intensity, in [0, 100]
    pub strength: f64,
}

impl ProjectionResult {
    pub fn new(budget: BudgetSummary, strength: f64) -> Self {
        Self {
            records: Vec::new(),
            budget,
            strength,
        }
    }

    /// Add a yearly record
    pub fn add_row(&mut self, row: YearlyRecord) {
        self.records.push(row);
    }

    /// Get summary statistics over the final projected year
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.records.last();

        ProjectionSummary {
            total_years: self.records.len().saturating_sub(1) as u32,
            spend: self.budget.spend,
            over_budget: self.budget.over_budget,
            strength: self.strength,
            final_temperature: last.map(|r| r.temperature).unwrap_or(0.0),
            final_green_jobs: last.map(|r| r.green_jobs).unwrap_or(0.0),
            co2_reduction_pct: last
                .map(|r| EMISSIONS_BASELINE - r.co2_emissions)
                .unwrap_or(0.0),
            air_quality_gain: last
                .map(|r| r.air_quality - AIR_QUALITY_BASELINE)
                .unwrap_or(0.0),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub total_years: u32,
    pub spend: f64,
    pub over_budget: bool,
    pub strength: f64,
    pub final_temperature: f64,
    pub final_green_jobs: f64,
    pub co2_reduction_pct: f64,
    pub air_quality_gain: f64,
}
