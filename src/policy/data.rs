//! Policy lever data structures matching the simulator input format

use serde::{Deserialize, Serialize};

/// Number of policy levers in the input vector
pub const LEVER_COUNT: usize = 8;

/// One of the eight policy categories accepting a 0-100 intensity value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Lever {
    EvAdoption,
    Co2Reduction,
    TreePlantation,
    RenewableEnergy,
    PublicTransport,
    IndustrialControls,
    GreenBuilding,
    WasteManagement,
}

impl Lever {
    /// All levers in canonical input order
    pub const ALL: [Lever; LEVER_COUNT] = [
        Lever::EvAdoption,
        Lever::Co2Reduction,
        Lever::TreePlantation,
        Lever::RenewableEnergy,
        Lever::PublicTransport,
        Lever::IndustrialControls,
        Lever::GreenBuilding,
        Lever::WasteManagement,
    ];

    /// Field name used in CSV headers and JSON exports
    pub fn key(&self) -> &'static str {
        match self {
            Lever::EvAdoption => "evAdoption",
            Lever::Co2Reduction => "co2Reduction",
            Lever::TreePlantation => "treePlantation",
            Lever::RenewableEnergy => "renewableEnergy",
            Lever::PublicTransport => "publicTransport",
            Lever::IndustrialControls => "industrialControls",
            Lever::GreenBuilding => "greenBuilding",
            Lever::WasteManagement => "wasteManagement",
        }
    }

    /// Human-readable label for console output
    pub fn label(&self) -> &'static str {
        match self {
            Lever::EvAdoption => "EV Adoption",
            Lever::Co2Reduction => "CO2 Reduction",
            Lever::TreePlantation => "Tree Plantation",
            Lever::RenewableEnergy => "Renewable Energy",
            Lever::PublicTransport => "Public Transport",
            Lever::IndustrialControls => "Industrial Controls",
            Lever::GreenBuilding => "Green Building",
            Lever::WasteManagement => "Waste Management",
        }
    }

    /// Parse a lever from its CSV/JSON key
    pub fn from_key(key: &str) -> Option<Lever> {
        Lever::ALL.iter().copied().find(|l| l.key() == key)
    }
}

/// Clamp a lever intensity to the valid percentage range
pub fn clamp_pct(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// The full policy input vector: one intensity value per lever
///
/// Values are percentages in [0, 100]. The simulator's input widgets
/// already clamp, but `set` and `clamped` clamp again so out-of-range
/// callers cannot break determinism downstream.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyInputs {
    pub ev_adoption: f64,
    pub co2_reduction: f64,
    pub tree_plantation: f64,
    pub renewable_energy: f64,
    pub public_transport: f64,
    pub industrial_controls: f64,
    pub green_building: f64,
    pub waste_management: f64,
}

impl PolicyInputs {
    /// Create inputs from per-lever values, clamping each to [0, 100]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ev_adoption: f64,
        co2_reduction: f64,
        tree_plantation: f64,
        renewable_energy: f64,
        public_transport: f64,
        industrial_controls: f64,
        green_building: f64,
        waste_management: f64,
    ) -> Self {
        Self {
            ev_adoption,
            co2_reduction,
            tree_plantation,
            renewable_energy,
            public_transport,
            industrial_controls,
            green_building,
            waste_management,
        }
        .clamped()
    }

    /// Inputs with every lever at the same intensity
    pub fn uniform(value: f64) -> Self {
        let v = clamp_pct(value);
        Self {
            ev_adoption: v,
            co2_reduction: v,
            tree_plantation: v,
            renewable_energy: v,
            public_transport: v,
            industrial_controls: v,
            green_building: v,
            waste_management: v,
        }
    }

    /// Get the intensity for a single lever
    pub fn get(&self, lever: Lever) -> f64 {
        match lever {
            Lever::EvAdoption => self.ev_adoption,
            Lever::Co2Reduction => self.co2_reduction,
            Lever::TreePlantation => self.tree_plantation,
            Lever::RenewableEnergy => self.renewable_energy,
            Lever::PublicTransport => self.public_transport,
            Lever::IndustrialControls => self.industrial_controls,
            Lever::GreenBuilding => self.green_building,
            Lever::WasteManagement => self.waste_management,
        }
    }

    /// Set the intensity for a single lever, clamping to [0, 100]
    pub fn set(&mut self, lever: Lever, value: f64) {
        let v = clamp_pct(value);
        match lever {
            Lever::EvAdoption => self.ev_adoption = v,
            Lever::Co2Reduction => self.co2_reduction = v,
            Lever::TreePlantation => self.tree_plantation = v,
            Lever::RenewableEnergy => self.renewable_energy = v,
            Lever::PublicTransport => self.public_transport = v,
            Lever::IndustrialControls => self.industrial_controls = v,
            Lever::GreenBuilding => self.green_building = v,
            Lever::WasteManagement => self.waste_management = v,
        }
    }

    /// Copy with every lever clamped to [0, 100]
    pub fn clamped(mut self) -> Self {
        for lever in Lever::ALL {
            let v = self.get(lever);
            self.set(lever, v);
        }
        self
    }

    /// Sum of all lever intensities
    pub fn total(&self) -> f64 {
        Lever::ALL.iter().map(|&l| self.get(l)).sum()
    }

    /// Mean lever intensity, in [0, 100]
    ///
    /// Drives narrative template selection only.
    pub fn strength(&self) -> f64 {
        self.total() / LEVER_COUNT as f64
    }

    /// Apply a command to this snapshot, returning the updated copy
    ///
    /// The single mutation entry point: callers hold immutable snapshots
    /// and route every change through here.
    pub fn apply(&self, command: PolicyCommand) -> Self {
        let mut next = *self;
        match command {
            PolicyCommand::SetLever { lever, value } => next.set(lever, value),
            PolicyCommand::Reset => next = Self::default(),
            PolicyCommand::ReplaceAll(inputs) => next = inputs.clamped(),
        }
        next
    }
}

/// A single update to the policy input snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PolicyCommand {
    /// Set one lever to a new intensity
    SetLever { lever: Lever, value: f64 },
    /// Zero every lever
    Reset,
    /// Replace the whole vector
    ReplaceAll(PolicyInputs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clamps_range() {
        let mut inputs = PolicyInputs::default();
        inputs.set(Lever::EvAdoption, 150.0);
        assert_eq!(inputs.ev_adoption, 100.0);
        inputs.set(Lever::EvAdoption, -20.0);
        assert_eq!(inputs.ev_adoption, 0.0);
    }

    #[test]
    fn test_strength_is_mean() {
        let inputs = PolicyInputs::uniform(40.0);
        assert_eq!(inputs.strength(), 40.0);

        let mut single = PolicyInputs::default();
        single.set(Lever::TreePlantation, 80.0);
        assert_eq!(single.strength(), 10.0);
    }

    #[test]
    fn test_apply_returns_new_snapshot() {
        let base = PolicyInputs::uniform(50.0);
        let updated = base.apply(PolicyCommand::SetLever {
            lever: Lever::WasteManagement,
            value: 90.0,
        });

        assert_eq!(base.waste_management, 50.0);
        assert_eq!(updated.waste_management, 90.0);

        let reset = updated.apply(PolicyCommand::Reset);
        assert_eq!(reset.total(), 0.0);
    }

    #[test]
    fn test_lever_key_round_trip() {
        for lever in Lever::ALL {
            assert_eq!(Lever::from_key(lever.key()), Some(lever));
        }
        assert_eq!(Lever::from_key("solarPanels"), None);
    }
}
