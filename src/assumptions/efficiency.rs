//! Carbon abatement efficiency factors for the tracked investment sectors

use crate::policy::Lever;
use serde::{Deserialize, Serialize};

/// The four policy sectors tracked by the fiscal and cost-benefit views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvestmentSector {
    EvPrograms,
    RenewableInfrastructure,
    Reforestation,
    EmissionCredits,
}

impl InvestmentSector {
    /// All sectors in display order
    pub const ALL: [InvestmentSector; 4] = [
        InvestmentSector::EvPrograms,
        InvestmentSector::RenewableInfrastructure,
        InvestmentSector::Reforestation,
        InvestmentSector::EmissionCredits,
    ];

    /// The policy lever funding this sector
    pub fn lever(&self) -> Lever {
        match self {
            InvestmentSector::EvPrograms => Lever::EvAdoption,
            InvestmentSector::RenewableInfrastructure => Lever::RenewableEnergy,
            InvestmentSector::Reforestation => Lever::TreePlantation,
            InvestmentSector::EmissionCredits => Lever::Co2Reduction,
        }
    }

    /// Display label used by the dashboard reports
    pub fn label(&self) -> &'static str {
        match self {
            InvestmentSector::EvPrograms => "Electric Vehicle Programs",
            InvestmentSector::RenewableInfrastructure => "Renewable Energy Infrastructure",
            InvestmentSector::Reforestation => "Reforestation & Conservation",
            InvestmentSector::EmissionCredits => "Emission Reduction Tax Credits",
        }
    }
}

/// MtCO2 abated per $B invested, by sector
///
/// Hand-tuned display constants, not physical rates.
#[derive(Debug, Clone, PartialEq)]
pub struct CarbonEfficiency {
    mt_per_billion: [f64; InvestmentSector::ALL.len()],
}

impl CarbonEfficiency {
    /// Reference efficiency factors
    pub fn default_pricing() -> Self {
        let mut mt_per_billion = [0.0; InvestmentSector::ALL.len()];
        for (slot, sector) in mt_per_billion.iter_mut().zip(InvestmentSector::ALL) {
            *slot = match sector {
                InvestmentSector::EvPrograms => 85.0,
                InvestmentSector::RenewableInfrastructure => 120.0,
                InvestmentSector::Reforestation => 65.0,
                InvestmentSector::EmissionCredits => 95.0,
            };
        }
        Self { mt_per_billion }
    }

    /// Create from loaded CSV data; sectors absent from the file abate 0
    pub fn from_loaded(entries: &[(InvestmentSector, f64)]) -> Self {
        let mut mt_per_billion = [0.0; InvestmentSector::ALL.len()];
        for &(sector, factor) in entries {
            mt_per_billion[sector as usize] = factor;
        }
        Self { mt_per_billion }
    }

    /// Abatement factor for one sector, in MtCO2 per $B
    pub fn mt_per_billion(&self, sector: InvestmentSector) -> f64 {
        self.mt_per_billion[sector as usize]
    }
}

impl Default for CarbonEfficiency {
    fn default() -> Self {
        Self::default_pricing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pricing_factors() {
        let eff = CarbonEfficiency::default_pricing();
        assert_eq!(eff.mt_per_billion(InvestmentSector::EvPrograms), 85.0);
        assert_eq!(
            eff.mt_per_billion(InvestmentSector::RenewableInfrastructure),
            120.0
        );
        assert_eq!(eff.mt_per_billion(InvestmentSector::Reforestation), 65.0);
        assert_eq!(eff.mt_per_billion(InvestmentSector::EmissionCredits), 95.0);
    }

    #[test]
    fn test_sector_lever_mapping() {
        assert_eq!(InvestmentSector::EvPrograms.lever(), Lever::EvAdoption);
        assert_eq!(
            InvestmentSector::EmissionCredits.lever(),
            Lever::Co2Reduction
        );
    }
}
