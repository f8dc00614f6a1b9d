//! Run projections for every scenario in a scenario CSV
//!
//! Outputs a per-scenario summary table for side-by-side comparison

use climate_sim::policy::load_scenarios;
use climate_sim::{Assumptions, ImpactTier, ProjectionConfig, ProjectionEngine};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() {
    env_logger::init();

    let start = Instant::now();
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/scenarios.csv".to_string());

    println!("Loading scenarios from {}...", path);
    let scenarios = load_scenarios(&path).expect("Failed to load scenarios");
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let assumptions = Assumptions::default_pricing();
    let config = ProjectionConfig::default();

    println!("Running projections...");
    let proj_start = Instant::now();

    // Run projections in parallel
    let results: Vec<_> = scenarios
        .par_iter()
        .map(|scenario| {
            let engine = ProjectionEngine::new(assumptions.clone(), config.clone());
            engine.project(&scenario.inputs)
        })
        .collect();

    println!("Projections complete in {:?}", proj_start.elapsed());
    log::info!("projected {} scenarios over {} years", results.len(), config.horizon_years);

    // Print comparison table
    println!("\n{:<20} {:>9} {:>6} {:>9} {:>10} {:>8} {:>9} {:>8}",
        "Scenario", "Spend($B)", "Over", "Strength", "Tier", "CO2(-%)", "Jobs(k)", "TempC");
    println!("{}", "-".repeat(88));

    for (scenario, result) in scenarios.iter().zip(&results) {
        let summary = result.summary();
        let tier = ImpactTier::from_strength(result.strength, &assumptions.thresholds);

        println!("{:<20} {:>9.2} {:>6} {:>9.1} {:>10} {:>8.0} {:>9.1} {:>8.3}",
            scenario.name,
            summary.spend,
            if summary.over_budget { "yes" } else { "no" },
            summary.strength,
            tier.as_str(),
            summary.co2_reduction_pct,
            summary.final_green_jobs,
            summary.final_temperature,
        );
    }

    // Write summary CSV
    let output_path = "scenario_summary.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(file, "Scenario,Spend,Ceiling,OverBudget,Strength,Tier,CO2ReductionPct,AirQualityGain,FinalGreenJobs,FinalTemperature").unwrap();

    for (scenario, result) in scenarios.iter().zip(&results) {
        let summary = result.summary();
        let tier = ImpactTier::from_strength(result.strength, &assumptions.thresholds);

        writeln!(
            file,
            "{},{:.2},{:.0},{},{:.2},{},{:.2},{:.2},{:.2},{:.4}",
            scenario.name,
            summary.spend,
            result.budget.ceiling,
            summary.over_budget,
            summary.strength,
            tier.as_str(),
            summary.co2_reduction_pct,
            summary.air_quality_gain,
            summary.final_green_jobs,
            summary.final_temperature,
        )
        .unwrap();
    }

    println!("\nSummary written to {}", output_path);
    println!("Total time: {:?}", start.elapsed());
}
