use thiserror::Error;

use super::config::ConfigError;
use crate::core::bv::params::ParamLoadError;
use crate::core::bv::site_energy::SiteEnergyError;
use crate::core::models::lattice::LatticeError;

/// Errors surfaced by the analysis engine and workflows.
///
/// Note what is deliberately *not* here: an empty structure, zero conduction
/// pathways, and out-of-range probe points are all legitimate "material fails
/// screening" outcomes, handled by sentinel energies and empty pathway lists
/// rather than errors.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    InvalidConfiguration {
        #[from]
        source: ConfigError,
    },

    #[error("Site-energy evaluation failed: {source}")]
    SiteEnergy {
        #[from]
        source: SiteEnergyError,
    },

    #[error("Bond-valence parameter table error: {source}")]
    Params {
        #[from]
        source: ParamLoadError,
    },

    #[error("Lattice error: {source}")]
    Lattice {
        #[from]
        source: LatticeError,
    },
}
