use super::config::ScanConfig;
use super::pathways::Pathway;
use serde::Serialize;

/// Boltzmann constant in eV/K.
pub const BOLTZMANN_EV_PER_K: f64 = 8.617e-5;

/// Empirical factor converting the mean bond-valence mismatch barrier into an
/// activation energy in eV. Overridable through
/// [`ScanConfig::scale_factor`](super::config::ScanConfig).
pub const DEFAULT_BARRIER_SCALE: f64 = 0.3;

/// Activation energy reported when no viable pathway exists, in eV.
///
/// High enough that the material fails any sensible screening threshold, but a
/// plain value rather than an error: "no path found" is a result, not a fault.
pub const NO_PATHWAY_ACTIVATION_ENERGY: f64 = 0.5;

/// Number of lowest-bottleneck pathways averaged into the estimate.
pub const MAX_BARRIERS_AVERAGED: usize = 5;

/// The transport estimate derived from a ranked pathway list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransportEstimate {
    /// Estimated migration activation energy in eV.
    pub activation_energy_ev: f64,
    /// Estimated ionic conductivity in S/cm at the configured temperature.
    pub conductivity_s_cm: f64,
}

/// Reduces a pathway list to an activation energy in eV.
///
/// The [`MAX_BARRIERS_AVERAGED`] lowest bottleneck energies are averaged and
/// scaled by `scale_factor`. An empty list returns
/// [`NO_PATHWAY_ACTIVATION_ENERGY`], never an error and never NaN.
pub fn estimate_activation_energy(pathways: &[Pathway], scale_factor: f64) -> f64 {
    if pathways.is_empty() {
        return NO_PATHWAY_ACTIVATION_ENERGY;
    }

    let mut barriers: Vec<f64> = pathways.iter().map(Pathway::bottleneck_energy).collect();
    barriers.sort_by(f64::total_cmp);
    let taken = barriers.len().min(MAX_BARRIERS_AVERAGED);
    let mean_barrier = barriers[..taken].iter().sum::<f64>() / taken as f64;
    mean_barrier * scale_factor
}

/// The Arrhenius relation `sigma = sigma0 * exp(-Ea / (k * T))`.
pub fn arrhenius_conductivity(activation_energy_ev: f64, temperature_k: f64, sigma0: f64) -> f64 {
    sigma0 * (-activation_energy_ev / (BOLTZMANN_EV_PER_K * temperature_k)).exp()
}

/// Produces the full transport estimate for a ranked pathway list.
pub fn estimate(pathways: &[Pathway], config: &ScanConfig) -> TransportEstimate {
    let activation_energy_ev = estimate_activation_energy(pathways, config.scale_factor);
    TransportEstimate {
        activation_energy_ev,
        conductivity_s_cm: arrhenius_conductivity(
            activation_energy_ev,
            config.temperature_k,
            config.sigma0,
        ),
    }
}
