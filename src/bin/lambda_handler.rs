//! AWS Lambda handler for running policy projections
//!
//! Accepts a projection request via JSON (all fields optional) and returns
//! the yearly records, budget analysis, and optionally the narrative bundle.

use climate_sim::assumptions::GrowthModel;
use climate_sim::narrative::{Newspaper, Timeline};
use climate_sim::projection::{
    sector_allocation, CostBenefit, ProjectionSummary, SectorAllocation, DEFAULT_BUDGET_CEILING,
};
use climate_sim::{
    Assumptions, BudgetSummary, ImpactTier, PolicyInputs, ProjectionConfig, ProjectionEngine,
    YearlyRecord,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};

/// Input configuration for the projection
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    /// Policy lever intensities (default: all zero)
    #[serde(default)]
    pub policies: PolicyInputs,

    /// Number of yearly steps (default: 10)
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,

    /// First projected calendar year (default: 2026)
    #[serde(default = "default_start_year")]
    pub start_year: u16,

    /// Budget ceiling in $B (default: 100, clamped to 10-500)
    #[serde(default = "default_budget_ceiling")]
    pub budget_ceiling: f64,

    /// Include the generated newspaper in the response
    #[serde(default)]
    pub include_newspaper: bool,

    /// Include the program timeline in the response
    #[serde(default)]
    pub include_timeline: bool,
}

fn default_horizon_years() -> u32 {
    10
}
fn default_start_year() -> u16 {
    2026
}
fn default_budget_ceiling() -> f64 {
    DEFAULT_BUDGET_CEILING
}

/// Full projection response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub summary: ProjectionSummary,
    pub budget: BudgetSummary,
    pub strength: f64,
    pub impact_tier: ImpactTier,
    pub records: Vec<YearlyRecord>,
    pub allocation: Vec<SectorAllocation>,
    pub cost_benefit: CostBenefit,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub newspaper: Option<Newspaper>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
}

async fn handler(event: LambdaEvent<ProjectionRequest>) -> Result<ProjectionResponse, Error> {
    let request = event.payload;

    // Requests arrive from arbitrary callers with no UI-side clamping.
    let inputs = request.policies.clamped();

    let assumptions = Assumptions::default_pricing();
    let config = ProjectionConfig {
        horizon_years: request.horizon_years,
        start_year: request.start_year,
        budget_ceiling: request.budget_ceiling,
    };

    log::info!(
        "projecting {} years, ceiling ${:.0}B, strength {:.1}",
        config.horizon_years,
        config.budget_ceiling,
        inputs.strength()
    );

    let engine = ProjectionEngine::new(assumptions.clone(), config);
    let result = engine.project(&inputs);

    let growth = GrowthModel::for_horizon(request.horizon_years);
    let newspaper = request.include_newspaper.then(|| {
        Newspaper::generate(
            &inputs,
            &result.budget,
            &growth,
            &assumptions.thresholds,
            request.start_year,
        )
    });
    let timeline = request
        .include_timeline
        .then(|| Timeline::generate(&inputs, &result.budget, request.start_year));

    Ok(ProjectionResponse {
        summary: result.summary(),
        budget: result.budget,
        strength: result.strength,
        impact_tier: ImpactTier::from_strength(result.strength, &assumptions.thresholds),
        allocation: sector_allocation(&inputs, &assumptions.costs),
        cost_benefit: CostBenefit::compute(&inputs, &assumptions.costs, &assumptions.efficiency),
        records: result.records,
        newspaper,
        timeline,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
