//! Budget math: spend, ceiling comparison, sector allocation, cost-benefit

use crate::assumptions::{CarbonEfficiency, InvestmentSector, PolicyCosts};
use crate::policy::PolicyInputs;
use serde::{Deserialize, Serialize};

/// Default budget ceiling, in $B
pub const DEFAULT_BUDGET_CEILING: f64 = 100.0;

/// Configurable ceiling range, in $B
pub const MIN_BUDGET_CEILING: f64 = 10.0;
pub const MAX_BUDGET_CEILING: f64 = 500.0;

/// Clamp a user-supplied ceiling to the configurable range
pub fn clamp_ceiling(ceiling: f64) -> f64 {
    ceiling.clamp(MIN_BUDGET_CEILING, MAX_BUDGET_CEILING)
}

/// Spend against the configured ceiling
///
/// Derived, never stored: spend is a pure function of the inputs. Being
/// over budget is advisory only; nothing stops an over-budget projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// Total spend across all levers, in $B
    pub spend: f64,

    /// Configured ceiling, in $B
    pub ceiling: f64,

    /// Ceiling minus spend; negative when over budget
    pub remaining: f64,

    /// Spend as a percentage of the ceiling
    pub utilization_pct: f64,

    /// Advisory over-budget flag
    pub over_budget: bool,
}

impl BudgetSummary {
    /// Compute the summary for a given input vector and ceiling
    pub fn new(inputs: &PolicyInputs, costs: &PolicyCosts, ceiling: f64) -> Self {
        let ceiling = clamp_ceiling(ceiling);
        let spend = costs.total_spend(inputs);

        Self {
            spend,
            ceiling,
            remaining: ceiling - spend,
            utilization_pct: spend / ceiling * 100.0,
            over_budget: spend > ceiling,
        }
    }
}

/// Spend share for one tracked investment sector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAllocation {
    pub sector: InvestmentSector,

    /// Sector spend, in $B
    pub spend: f64,

    /// Share of the total tracked-sector spend, percent
    pub share_pct: f64,
}

/// Per-sector spend breakdown for the fiscal allocation view
///
/// Covers the four tracked sectors only; shares are 0 when nothing is
/// allocated.
pub fn sector_allocation(inputs: &PolicyInputs, costs: &PolicyCosts) -> Vec<SectorAllocation> {
    let spends: Vec<f64> = InvestmentSector::ALL
        .iter()
        .map(|sector| {
            let lever = sector.lever();
            costs.lever_spend(lever, inputs.get(lever))
        })
        .collect();

    let total: f64 = spends.iter().sum();

    InvestmentSector::ALL
        .into_iter()
        .zip(spends)
        .map(|(sector, spend)| SectorAllocation {
            sector,
            spend,
            share_pct: if total > 0.0 { spend / total * 100.0 } else { 0.0 },
        })
        .collect()
}

/// Cost and projected abatement for one tracked sector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorBenefit {
    pub sector: InvestmentSector,

    /// Sector spend, in $B
    pub cost: f64,

    /// Projected carbon abatement, in MtCO2
    pub abatement_mt: f64,

    /// MtCO2 per $B; 0 when the sector is unfunded
    pub efficiency: f64,
}

/// Cost-benefit analysis over the tracked sectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBenefit {
    /// Sectors in display order
    pub sectors: Vec<SectorBenefit>,

    /// Total tracked-sector spend, in $B
    pub total_cost: f64,

    /// Total projected abatement, in MtCO2
    pub total_abatement_mt: f64,

    /// Portfolio-level MtCO2 per $B
    pub portfolio_efficiency: f64,
}

impl CostBenefit {
    /// Compute the analysis for a given input vector
    pub fn compute(
        inputs: &PolicyInputs,
        costs: &PolicyCosts,
        efficiency: &CarbonEfficiency,
    ) -> Self {
        let sectors: Vec<SectorBenefit> = InvestmentSector::ALL
            .into_iter()
            .map(|sector| {
                let lever = sector.lever();
                let cost = costs.lever_spend(lever, inputs.get(lever));
                let abatement_mt = cost * efficiency.mt_per_billion(sector);

                SectorBenefit {
                    sector,
                    cost,
                    abatement_mt,
                    efficiency: if cost > 0.0 { abatement_mt / cost } else { 0.0 },
                }
            })
            .collect();

        let total_cost: f64 = sectors.iter().map(|s| s.cost).sum();
        let total_abatement_mt: f64 = sectors.iter().map(|s| s.abatement_mt).sum();

        Self {
            sectors,
            total_cost,
            total_abatement_mt,
            portfolio_efficiency: if total_cost > 0.0 {
                total_abatement_mt / total_cost
            } else {
                0.0
            },
        }
    }

    /// Funded sectors ranked by efficiency, best first
    pub fn ranked(&self) -> Vec<&SectorBenefit> {
        let mut funded: Vec<&SectorBenefit> =
            self.sectors.iter().filter(|s| s.cost > 0.0).collect();
        funded.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));
        funded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_budget_summary_over_budget_advisory() {
        let costs = PolicyCosts::default_pricing();

        let inputs = PolicyInputs::uniform(100.0);
        let summary = BudgetSummary::new(&inputs, &costs, 100.0);

        // 275 > 100: flagged but still fully computed
        assert_relative_eq!(summary.spend, 275.0);
        assert!(summary.over_budget);
        assert_relative_eq!(summary.remaining, -175.0);
        assert_relative_eq!(summary.utilization_pct, 275.0);
    }

    #[test]
    fn test_ceiling_clamped_to_range() {
        let costs = PolicyCosts::default_pricing();
        let inputs = PolicyInputs::default();

        assert_eq!(BudgetSummary::new(&inputs, &costs, 5.0).ceiling, 10.0);
        assert_eq!(BudgetSummary::new(&inputs, &costs, 1000.0).ceiling, 500.0);
        assert_eq!(BudgetSummary::new(&inputs, &costs, 250.0).ceiling, 250.0);
    }

    #[test]
    fn test_sector_allocation_shares() {
        let costs = PolicyCosts::default_pricing();

        let mut inputs = PolicyInputs::default();
        inputs.ev_adoption = 10.0; // 5.0B
        inputs.renewable_energy = 10.0; // 6.0B
        inputs.tree_plantation = 10.0; // 2.0B
        inputs.co2_reduction = 10.0; // 3.0B

        let allocation = sector_allocation(&inputs, &costs);
        assert_eq!(allocation.len(), 4);

        let total: f64 = allocation.iter().map(|a| a.spend).sum();
        assert_relative_eq!(total, 16.0);

        let shares: f64 = allocation.iter().map(|a| a.share_pct).sum();
        assert_relative_eq!(shares, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sector_allocation_empty_budget() {
        let costs = PolicyCosts::default_pricing();
        let allocation = sector_allocation(&PolicyInputs::default(), &costs);

        assert!(allocation.iter().all(|a| a.spend == 0.0));
        assert!(allocation.iter().all(|a| a.share_pct == 0.0));
    }

    #[test]
    fn test_cost_benefit_ranking() {
        let costs = PolicyCosts::default_pricing();
        let efficiency = CarbonEfficiency::default_pricing();

        let inputs = PolicyInputs::uniform(50.0);
        let analysis = CostBenefit::compute(&inputs, &costs, &efficiency);

        // Funded sector efficiency equals the configured factor
        for sector in &analysis.sectors {
            assert_relative_eq!(
                sector.efficiency,
                efficiency.mt_per_billion(sector.sector),
                epsilon = 1e-9
            );
        }

        // Renewable energy has the highest MtCO2/$B and ranks first
        let ranked = analysis.ranked();
        assert_eq!(
            ranked[0].sector,
            InvestmentSector::RenewableInfrastructure
        );
        assert_eq!(ranked.len(), 4);
    }

    #[test]
    fn test_cost_benefit_unfunded() {
        let costs = PolicyCosts::default_pricing();
        let efficiency = CarbonEfficiency::default_pricing();

        let analysis = CostBenefit::compute(&PolicyInputs::default(), &costs, &efficiency);
        assert_eq!(analysis.total_cost, 0.0);
        assert_eq!(analysis.total_abatement_mt, 0.0);
        assert_eq!(analysis.portfolio_efficiency, 0.0);
        assert!(analysis.ranked().is_empty());
    }
}
