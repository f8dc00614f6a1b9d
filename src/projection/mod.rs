pub mod budget;
pub mod engine;
pub mod records;

pub use budget::{
    clamp_ceiling, sector_allocation, BudgetSummary, CostBenefit, SectorAllocation,
    SectorBenefit, DEFAULT_BUDGET_CEILING, MAX_BUDGET_CEILING, MIN_BUDGET_CEILING,
};
pub use engine::{ProjectionConfig, ProjectionEngine};
pub use records::{ProjectionResult, ProjectionSummary, YearlyRecord};
