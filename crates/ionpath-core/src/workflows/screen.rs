use crate::core::bv::params::BvParamTable;
use crate::core::bv::site_energy::NO_DATA_ENERGY;
use crate::core::models::structure::Structure;
use crate::engine::arrhenius;
use crate::engine::config::ScanConfig;
use crate::engine::error::EngineError;
use crate::engine::gate::ScreeningCriteria;
use crate::engine::pathways::{self, PathwayStrategy};
use crate::engine::scan;
use serde::Serialize;
use tracing::{info, instrument};

/// The flat result record of one material's BVSE analysis.
///
/// Produced once per material and never mutated afterward; downstream screening
/// stages only read it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningRecord {
    /// The material's formula, carried through as an identifier.
    pub formula: String,
    /// Number of mobile-ion sites analyzed (existing atoms or candidates).
    pub mobile_site_count: usize,
    /// Number of extracted conduction pathways.
    pub pathway_count: usize,
    /// Lowest mismatch energy over the analyzed sites.
    pub min_site_energy: f64,
    /// Mean mismatch energy over the analyzed sites.
    pub avg_site_energy: f64,
    /// Estimated migration activation energy in eV.
    pub activation_energy_ev: f64,
    /// Estimated ionic conductivity in S/cm.
    pub conductivity_s_cm: f64,
    /// Whether the material passed the screening gate.
    pub qualified: bool,
}

/// Runs the full BVSE analysis for one material.
///
/// The pipeline is: validate configuration, locate mobile-ion sites, compute
/// per-site mismatch energies, extract conduction pathways with the selected
/// strategy, reduce them to a transport estimate, and apply the screening gate.
///
/// A structure with no viable pathways yields a record with
/// `pathway_count == 0` and the documented default activation energy; that is
/// a legitimate "material rejected" outcome, not an error.
#[instrument(skip_all, fields(formula = %structure.formula()))]
pub fn run(
    structure: &Structure,
    params: &BvParamTable,
    config: &ScanConfig,
    strategy: PathwayStrategy,
    criteria: &ScreeningCriteria,
) -> Result<ScreeningRecord, EngineError> {
    config.validate()?;

    let sites = scan::mobile_sites(structure, config);
    let site_energies = scan::scan_sites(structure, params, config, &sites)?;

    let (min_site_energy, avg_site_energy) = if site_energies.is_empty() {
        (NO_DATA_ENERGY, NO_DATA_ENERGY)
    } else {
        (
            site_energies.iter().copied().fold(f64::INFINITY, f64::min),
            site_energies.iter().sum::<f64>() / site_energies.len() as f64,
        )
    };

    let pathway_list = match strategy {
        PathwayStrategy::Grid => {
            let field = scan::scan_grid(structure, params, config)?;
            pathways::extract_grid_pathways(&field, config.energy_threshold)
        }
        PathwayStrategy::SiteHop => {
            pathways::extract_hop_pathways(structure, params, config, &sites)?
        }
    };

    let estimate = arrhenius::estimate(&pathway_list, config);
    let qualified = criteria.qualify(
        estimate.activation_energy_ev,
        estimate.conductivity_s_cm,
        pathway_list.len(),
    );

    info!(
        sites = sites.len(),
        pathways = pathway_list.len(),
        activation_energy_ev = estimate.activation_energy_ev,
        conductivity_s_cm = estimate.conductivity_s_cm,
        qualified,
        "screening complete"
    );

    Ok(ScreeningRecord {
        formula: structure.formula().to_string(),
        mobile_site_count: sites.len(),
        pathway_count: pathway_list.len(),
        min_site_energy,
        avg_site_energy,
        activation_energy_ev: estimate.activation_energy_ev,
        conductivity_s_cm: estimate.conductivity_s_cm,
        qualified,
    })
}
