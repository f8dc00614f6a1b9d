//! On-demand JSON export of the current inputs and projection
//!
//! No schema versioning; the bundle matches the simulator UI's download
//! format.

use crate::policy::PolicyInputs;
use crate::projection::{BudgetSummary, ProjectionResult, YearlyRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors raised while writing an export bundle
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize export bundle: {0}")]
    Json(#[from] serde_json::Error),
}

/// Exported snapshot of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub policies: PolicyInputs,
    pub chart_data: Vec<YearlyRecord>,
    pub budget: BudgetSummary,
    pub strength: f64,
    pub timestamp: String,
}

impl ExportBundle {
    /// Build a bundle stamped with the current time
    pub fn new(inputs: &PolicyInputs, result: &ProjectionResult) -> Self {
        Self::at(inputs, result, Utc::now())
    }

    /// Build a bundle stamped with an explicit time
    pub fn at(inputs: &PolicyInputs, result: &ProjectionResult, stamp: DateTime<Utc>) -> Self {
        Self {
            policies: *inputs,
            chart_data: result.records.clone(),
            budget: result.budget,
            strength: result.strength,
            timestamp: stamp.to_rfc3339(),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the bundle as JSON to a file
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Assumptions;
    use crate::projection::{ProjectionConfig, ProjectionEngine};
    use chrono::TimeZone;

    #[test]
    fn test_export_round_trip() {
        let inputs = PolicyInputs::uniform(40.0);
        let engine =
            ProjectionEngine::new(Assumptions::default_pricing(), ProjectionConfig::default());
        let result = engine.project(&inputs);

        let stamp = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let bundle = ExportBundle::at(&inputs, &result, stamp);

        let json = bundle.to_json().unwrap();
        assert!(json.contains("\"evAdoption\": 40.0"));
        assert!(json.contains("\"chartData\""));
        assert!(json.contains("\"timestamp\": \"2026-01-15T12:00:00+00:00\""));

        let parsed: ExportBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bundle);
    }
}
