//! Load named policy scenarios from CSV

use super::PolicyInputs;
use csv::Reader;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a scenario block
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("scenario row {0} has no name")]
    MissingName(usize),
}

/// Raw CSV row matching the scenario block columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "name")]
    name: String,
    #[serde(rename = "evAdoption", default)]
    ev_adoption: f64,
    #[serde(rename = "co2Reduction", default)]
    co2_reduction: f64,
    #[serde(rename = "treePlantation", default)]
    tree_plantation: f64,
    #[serde(rename = "renewableEnergy", default)]
    renewable_energy: f64,
    #[serde(rename = "publicTransport", default)]
    public_transport: f64,
    #[serde(rename = "industrialControls", default)]
    industrial_controls: f64,
    #[serde(rename = "greenBuilding", default)]
    green_building: f64,
    #[serde(rename = "wasteManagement", default)]
    waste_management: f64,
}

impl CsvRow {
    fn to_scenario(self, index: usize) -> Result<NamedScenario, ScenarioError> {
        if self.name.trim().is_empty() {
            return Err(ScenarioError::MissingName(index + 1));
        }

        // Missing columns deserialize to 0, matching the "absent levers
        // contribute nothing" rule; out-of-range values are clamped here.
        let inputs = PolicyInputs::new(
            self.ev_adoption,
            self.co2_reduction,
            self.tree_plantation,
            self.renewable_energy,
            self.public_transport,
            self.industrial_controls,
            self.green_building,
            self.waste_management,
        );

        Ok(NamedScenario {
            name: self.name,
            inputs,
        })
    }
}

/// A labelled policy input vector from a scenario block
#[derive(Debug, Clone, PartialEq)]
pub struct NamedScenario {
    pub name: String,
    pub inputs: PolicyInputs,
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>, ScenarioError> {
    let mut reader = Reader::from_path(path)?;
    let mut scenarios = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario(index)?);
    }

    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, network stream)
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<NamedScenario>, ScenarioError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for (index, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario(index)?);
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Lever;

    const SAMPLE: &str = "\
name,evAdoption,co2Reduction,treePlantation,renewableEnergy,publicTransport,industrialControls,greenBuilding,wasteManagement
baseline,0,0,0,0,0,0,0,0
aggressive,80,70,60,90,50,40,30,20
reforestation_only,0,0,40,0,0,0,0,0
";

    #[test]
    fn test_load_scenarios() {
        let scenarios = load_scenarios_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 3);

        assert_eq!(scenarios[0].name, "baseline");
        assert_eq!(scenarios[0].inputs.total(), 0.0);

        assert_eq!(scenarios[1].inputs.ev_adoption, 80.0);
        assert_eq!(scenarios[1].inputs.get(Lever::WasteManagement), 20.0);

        assert_eq!(scenarios[2].inputs.tree_plantation, 40.0);
        assert_eq!(scenarios[2].inputs.strength(), 5.0);
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let csv = "\
name,evAdoption,co2Reduction,treePlantation,renewableEnergy,publicTransport,industrialControls,greenBuilding,wasteManagement
wild,250,-30,0,0,0,0,0,0
";
        let scenarios = load_scenarios_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(scenarios[0].inputs.ev_adoption, 100.0);
        assert_eq!(scenarios[0].inputs.co2_reduction, 0.0);
    }

    #[test]
    fn test_missing_name_rejected() {
        let csv = "\
name,evAdoption
,50
";
        let err = load_scenarios_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ScenarioError::MissingName(1)));
    }
}
