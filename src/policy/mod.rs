pub mod data;
pub mod loader;

pub use data::{clamp_pct, Lever, PolicyCommand, PolicyInputs, LEVER_COUNT};
pub use loader::{load_scenarios, load_scenarios_from_reader, NamedScenario, ScenarioError};
