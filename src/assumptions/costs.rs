//! Policy cost table: dollars per percentage point of lever intensity

use crate::policy::{Lever, PolicyInputs};

/// Millions of dollars per $B (spend is reported in billions)
pub const MILLIONS_PER_BILLION: f64 = 1000.0;

/// Immutable cost-per-point table for the eight policy levers
///
/// Unit: $M per percentage point of intensity. Never mutated at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyCosts {
    per_point: [f64; Lever::ALL.len()],
}

impl PolicyCosts {
    /// Reference cost table from the pricing sheet
    pub fn default_pricing() -> Self {
        let mut per_point = [0.0; Lever::ALL.len()];
        for (slot, lever) in per_point.iter_mut().zip(Lever::ALL) {
            *slot = match lever {
                Lever::EvAdoption => 500.0,
                Lever::Co2Reduction => 300.0,
                Lever::TreePlantation => 200.0,
                Lever::RenewableEnergy => 600.0,
                Lever::PublicTransport => 400.0,
                Lever::IndustrialControls => 350.0,
                Lever::GreenBuilding => 250.0,
                Lever::WasteManagement => 150.0,
            };
        }
        Self { per_point }
    }

    /// Create from loaded CSV data; levers absent from the file cost 0
    pub fn from_loaded(entries: &[(Lever, f64)]) -> Self {
        let mut per_point = [0.0; Lever::ALL.len()];
        for &(lever, cost) in entries {
            per_point[lever as usize] = cost;
        }
        Self { per_point }
    }

    /// Cost in $M per percentage point for one lever
    pub fn cost_per_point(&self, lever: Lever) -> f64 {
        self.per_point[lever as usize]
    }

    /// Spend for a single lever at the given intensity, in $B
    pub fn lever_spend(&self, lever: Lever, value: f64) -> f64 {
        value * self.cost_per_point(lever) / MILLIONS_PER_BILLION
    }

    /// Total spend across all levers, in $B
    ///
    /// Purely additive; no rounding until display.
    pub fn total_spend(&self, inputs: &PolicyInputs) -> f64 {
        Lever::ALL
            .iter()
            .map(|&lever| self.lever_spend(lever, inputs.get(lever)))
            .sum()
    }
}

impl Default for PolicyCosts {
    fn default() -> Self {
        Self::default_pricing()
    }
}
