use serde::{Deserialize, Serialize};

/// Default activation-energy ceiling in eV, from the legacy screening rule
/// "Ea below 0.3 eV qualifies".
pub const DEFAULT_ACTIVATION_ENERGY_MAX: f64 = 0.3;

/// Default conductivity floor in S/cm, chosen to be consistent with the
/// activation-energy ceiling under the default Arrhenius parameters at 300 K.
pub const DEFAULT_CONDUCTIVITY_MIN: f64 = 1e-8;

pub const DEFAULT_MIN_PATHWAY_COUNT: usize = 1;

/// Pass/fail thresholds applied to an already-computed screening result.
///
/// The gate is a pure function over computed values; it never recomputes
/// anything. The same contract is reused with different threshold sets by the
/// later screening stages (stability, interface and mechanical compatibility)
/// that consume this crate's output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreeningCriteria {
    /// Maximum acceptable migration activation energy, in eV.
    pub activation_energy_max: f64,
    /// Minimum acceptable ionic conductivity, in S/cm.
    pub conductivity_min: f64,
    /// Minimum number of extracted conduction pathways.
    pub min_pathway_count: usize,
}

impl Default for ScreeningCriteria {
    fn default() -> Self {
        Self {
            activation_energy_max: DEFAULT_ACTIVATION_ENERGY_MAX,
            conductivity_min: DEFAULT_CONDUCTIVITY_MIN,
            min_pathway_count: DEFAULT_MIN_PATHWAY_COUNT,
        }
    }
}

impl ScreeningCriteria {
    /// A material qualifies iff all three thresholds hold.
    pub fn qualify(
        &self,
        activation_energy_ev: f64,
        conductivity_s_cm: f64,
        pathway_count: usize,
    ) -> bool {
        activation_energy_ev <= self.activation_energy_max
            && conductivity_s_cm >= self.conductivity_min
            && pathway_count >= self.min_pathway_count
    }
}
