//! Climate Sim CLI
//!
//! Command-line interface for running a single policy projection

use anyhow::Context;
use clap::Parser;
use climate_sim::assumptions::GrowthModel;
use climate_sim::narrative::{Newspaper, Timeline};
use climate_sim::projection::{sector_allocation, CostBenefit};
use climate_sim::{
    Assumptions, ExportBundle, ImpactTier, PolicyInputs, ProjectionConfig, ProjectionEngine,
};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "climate_sim", about = "Deterministic climate policy projection")]
struct Cli {
    /// Projection horizon in years
    #[arg(long, default_value_t = 10)]
    horizon: u32,

    /// First projected calendar year
    #[arg(long, default_value_t = 2026)]
    start_year: u16,

    /// Budget ceiling in $B (clamped to 10-500)
    #[arg(long, default_value_t = 100.0)]
    budget: f64,

    /// EV adoption intensity, 0-100
    #[arg(long, default_value_t = 0.0)]
    ev_adoption: f64,

    /// CO2 reduction intensity, 0-100
    #[arg(long, default_value_t = 0.0)]
    co2_reduction: f64,

    /// Tree plantation intensity, 0-100
    #[arg(long, default_value_t = 0.0)]
    tree_plantation: f64,

    /// Renewable energy intensity, 0-100
    #[arg(long, default_value_t = 0.0)]
    renewable_energy: f64,

    /// Public transport intensity, 0-100
    #[arg(long, default_value_t = 0.0)]
    public_transport: f64,

    /// Industrial controls intensity, 0-100
    #[arg(long, default_value_t = 0.0)]
    industrial_controls: f64,

    /// Green building intensity, 0-100
    #[arg(long, default_value_t = 0.0)]
    green_building: f64,

    /// Waste management intensity, 0-100
    #[arg(long, default_value_t = 0.0)]
    waste_management: f64,

    /// Load assumption tables from data/assumptions instead of built-ins
    #[arg(long)]
    from_csv: bool,

    /// Write the yearly records to this CSV file
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// Write the full JSON export bundle to this file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Print the generated newspaper
    #[arg(long)]
    newspaper: bool,

    /// Print the program timeline
    #[arg(long)]
    timeline: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    println!("Climate Sim v0.1.0");
    println!("==================\n");

    let assumptions = if cli.from_csv {
        Assumptions::from_csv().context("loading assumption tables")?
    } else {
        Assumptions::default_pricing()
    };

    let inputs = PolicyInputs::new(
        cli.ev_adoption,
        cli.co2_reduction,
        cli.tree_plantation,
        cli.renewable_energy,
        cli.public_transport,
        cli.industrial_controls,
        cli.green_building,
        cli.waste_management,
    );

    let config = ProjectionConfig {
        horizon_years: cli.horizon,
        start_year: cli.start_year,
        budget_ceiling: cli.budget,
    };

    let engine = ProjectionEngine::new(assumptions.clone(), config);
    let result = engine.project(&inputs);

    // Budget overview
    println!("Budget Overview:");
    println!("  Spent: ${:.2}B / ${:.0}B ({:.1}%)",
        result.budget.spend,
        result.budget.ceiling,
        result.budget.utilization_pct,
    );
    println!("  Remaining: ${:.2}B", result.budget.remaining);
    if result.budget.over_budget {
        println!("  WARNING: over budget");
    }
    println!();

    // Projection table
    println!("Projection Results ({} years):", result.records.len() - 1);
    println!("{:>5} {:>8} {:>8} {:>7} {:>7} {:>7} {:>9} {:>9} {:>7}",
        "Year", "CO2", "AirQ", "EV%", "Renew%", "Tree%", "Transit%", "Jobs(k)", "TempC");
    println!("{}", "-".repeat(75));

    for row in &result.records {
        println!("{:>5} {:>8.2} {:>8.2} {:>7.2} {:>7.2} {:>7.2} {:>9.2} {:>9.1} {:>7.3}",
            row.year,
            row.co2_emissions,
            row.air_quality,
            row.ev_adoption,
            row.renewable_energy,
            row.tree_cover,
            row.public_transport_usage,
            row.green_jobs,
            row.temperature,
        );
    }

    // Summary
    let summary = result.summary();
    let tier = ImpactTier::from_strength(result.strength, &assumptions.thresholds);
    println!("\nSummary:");
    println!("  Strength: {:.1} ({} impact)", result.strength, tier.as_str());
    println!("  CO2 Reduction: -{:.0}%", summary.co2_reduction_pct);
    println!("  Air Quality: +{:.0}%", summary.air_quality_gain);
    println!("  Final Temperature: {:.2}C", summary.final_temperature);
    println!("  Green Jobs: {:.0}K", summary.final_green_jobs);

    // Sector breakdown
    println!("\nFiscal Allocation:");
    for entry in sector_allocation(&inputs, &assumptions.costs) {
        println!("  {:<34} ${:>7.2}B  {:>5.1}%",
            entry.sector.label(),
            entry.spend,
            entry.share_pct,
        );
    }

    let analysis = CostBenefit::compute(&inputs, &assumptions.costs, &assumptions.efficiency);
    if !analysis.ranked().is_empty() {
        println!("\nCost-Benefit (MtCO2/$B):");
        for (rank, sector) in analysis.ranked().iter().enumerate() {
            println!("  #{} {:<34} {:>6.1} ({:.1} MtCO2 for ${:.2}B)",
                rank + 1,
                sector.sector.label(),
                sector.efficiency,
                sector.abatement_mt,
                sector.cost,
            );
        }
        println!("  Portfolio: {:.1} MtCO2/$B, {:.1} MtCO2 total",
            analysis.portfolio_efficiency,
            analysis.total_abatement_mt,
        );
    }

    if cli.newspaper {
        let growth = GrowthModel::for_horizon(cli.horizon);
        let paper = Newspaper::generate(
            &inputs,
            &result.budget,
            &growth,
            &assumptions.thresholds,
            cli.start_year,
        );
        print_newspaper(&paper);
    }

    if cli.timeline {
        let timeline = Timeline::generate(&inputs, &result.budget, cli.start_year);
        print_timeline(&timeline);
    }

    if let Some(path) = &cli.csv_out {
        write_csv(path, &result)?;
        println!("\nYearly records written to: {}", path.display());
    }

    if let Some(path) = &cli.export {
        let bundle = ExportBundle::new(&inputs, &result);
        bundle.write_json(path).context("writing export bundle")?;
        println!("\nExport bundle written to: {}", path.display());
    }

    Ok(())
}

fn write_csv(path: &PathBuf, result: &climate_sim::ProjectionResult) -> anyhow::Result<()> {
    let mut file = File::create(path).context("creating CSV output file")?;

    writeln!(file, "Year,CO2Emissions,AirQuality,EVAdoption,RenewableEnergy,TreeCover,PublicTransportUsage,GreenJobs,Temperature")?;

    for row in &result.records {
        writeln!(file, "{},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
            row.year,
            row.co2_emissions,
            row.air_quality,
            row.ev_adoption,
            row.renewable_energy,
            row.tree_cover,
            row.public_transport_usage,
            row.green_jobs,
            row.temperature,
        )?;
    }

    Ok(())
}

fn print_newspaper(paper: &Newspaper) {
    println!("\n{}", "=".repeat(75));
    println!("{}", paper.headline);
    println!("{}", paper.subheadline);
    println!("{}", "=".repeat(75));
    println!("\n{}\n", paper.main_story);

    println!("BY THE NUMBERS");
    println!("  Temperature Rise: {}", paper.stats.temperature);
    println!("  Green Jobs: {}", paper.stats.jobs);
    println!("  Air Quality: {}", paper.stats.air_quality);
    println!("  Emissions: {}", paper.stats.emissions);

    println!("\nOther Headlines:");
    for headline in &paper.headlines {
        println!("  - {}", headline);
    }

    if !paper.side_stories.is_empty() {
        println!("\nRelated Coverage:");
        for story in &paper.side_stories {
            println!("  {} -- {}", story.title, story.excerpt);
        }
    }

    println!("\n{}", paper.opinion);
}

fn print_timeline(timeline: &Timeline) {
    for milestone in [&timeline.year_one, &timeline.year_five, &timeline.year_ten] {
        println!("\n{}", milestone.title);
        println!("{}", "-".repeat(milestone.title.len()));
        for line in &milestone.impacts {
            println!("  * {}", line);
        }
        println!("  Challenges:");
        for line in &milestone.challenges {
            println!("    - {}", line);
        }
        println!("  Achievements:");
        for line in &milestone.achievements {
            println!("    + {}", line);
        }
    }
}
