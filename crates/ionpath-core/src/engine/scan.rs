use super::config::ScanConfig;
use super::error::EngineError;
use super::field::EnergyField;
use crate::core::bv::params::BvParamTable;
use crate::core::bv::site_energy::SiteEnergyEvaluator;
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use tracing::debug;

/// Fractional step of the fallback candidate-site grid used when a structure
/// carries no mobile-species atoms.
const CANDIDATE_SITE_STEP: f64 = 0.25;

/// Samples the site-energy evaluator over a regular N x N x N fractional grid.
///
/// Sampling covers the closed interval [0, 1] along each axis (grid extent N
/// includes both cell faces), each point converted to Cartesian through the
/// lattice. The scan is fully deterministic: the same structure and
/// configuration always produce the same field. Every returned energy is finite
/// and non-negative (mismatch-energy semantics, with the no-data sentinel for
/// cells out of range of every counter-ion).
pub fn scan_grid(
    structure: &Structure,
    params: &BvParamTable,
    config: &ScanConfig,
) -> Result<EnergyField, EngineError> {
    config.validate()?;
    let evaluator = SiteEnergyEvaluator::new(structure, params, config.site_energy_spec());

    let n = config.grid_resolution;
    let step = |index: usize| {
        if n > 1 {
            index as f64 / (n - 1) as f64
        } else {
            0.0
        }
    };

    let mut energies = Vec::with_capacity(n.pow(3));
    let mut coverage = Vec::with_capacity(n.pow(3));
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                let frac = Point3::new(step(i), step(j), step(k));
                let point = structure.lattice().frac_to_cartesian(&frac);
                let result = evaluator.evaluate(&point)?;
                energies.push(result.energy);
                coverage.push(result.contributions > 0);
            }
        }
    }

    let field = EnergyField::from_raw(n, energies, coverage);
    debug!(
        formula = structure.formula(),
        resolution = n,
        min_energy = field.min_energy(),
        max_energy = field.max_energy(),
        "grid scan complete"
    );
    Ok(field)
}

/// Evaluates the mismatch energy at each of the given candidate sites.
///
/// This is the cheap alternative to a full grid: only existing (or candidate)
/// mobile-ion positions are probed. The output order matches the input order.
pub fn scan_sites(
    structure: &Structure,
    params: &BvParamTable,
    config: &ScanConfig,
    sites: &[Point3<f64>],
) -> Result<Vec<f64>, EngineError> {
    config.validate()?;
    let evaluator = SiteEnergyEvaluator::new(structure, params, config.site_energy_spec());

    let mut energies = Vec::with_capacity(sites.len());
    for site in sites {
        energies.push(evaluator.energy(site)?);
    }
    Ok(energies)
}

/// Locates the mobile-ion sites of a structure.
///
/// Returns the positions of all mobile-species atoms. A structure without any
/// gets a coarse quarter-cell fractional grid of candidate sites instead, so
/// hypothetical host frameworks can still be screened for where the mobile ion
/// *could* sit.
pub fn mobile_sites(structure: &Structure, config: &ScanConfig) -> Vec<Point3<f64>> {
    let sites = structure.positions_of(&config.mobile_species);
    if !sites.is_empty() {
        return sites;
    }

    debug!(
        formula = structure.formula(),
        species = %config.mobile_species,
        "no mobile-species atoms; generating candidate sites"
    );
    let steps = (1.0 / CANDIDATE_SITE_STEP) as usize;
    let mut candidates = Vec::with_capacity(steps.pow(3));
    for i in 0..steps {
        for j in 0..steps {
            for k in 0..steps {
                let frac = Point3::new(
                    i as f64 * CANDIDATE_SITE_STEP,
                    j as f64 * CANDIDATE_SITE_STEP,
                    k as f64 * CANDIDATE_SITE_STEP,
                );
                candidates.push(structure.lattice().frac_to_cartesian(&frac));
            }
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bv::site_energy::NO_DATA_ENERGY;
    use crate::core::models::atom::Atom;
    use crate::core::models::lattice::Lattice;

    fn test_structure(atoms: Vec<Atom>) -> Structure {
        Structure::new("Li2O", atoms, Lattice::cubic(8.0).unwrap())
    }

    fn small_config() -> ScanConfig {
        ScanConfig::builder().grid_resolution(5).build().unwrap()
    }

    #[test]
    fn scan_grid_produces_full_resolution_field() {
        let structure = test_structure(vec![Atom::new("O", Point3::new(4.0, 4.0, 4.0))]);
        let field = scan_grid(&structure, &BvParamTable::new(), &small_config()).unwrap();
        assert_eq!(field.resolution(), 5);
        assert_eq!(field.len(), 125);
    }

    #[test]
    fn scan_grid_energies_are_finite_and_non_negative() {
        let structure = test_structure(vec![
            Atom::new("O", Point3::new(2.0, 2.0, 2.0)),
            Atom::new("O", Point3::new(6.0, 6.0, 6.0)),
        ]);
        let field = scan_grid(&structure, &BvParamTable::new(), &small_config()).unwrap();
        for i in 0..5 {
            for j in 0..5 {
                for k in 0..5 {
                    let e = field.energy_at(i, j, k);
                    assert!(e.is_finite());
                    assert!(e >= 0.0);
                }
            }
        }
    }

    #[test]
    fn scan_grid_is_deterministic() {
        let structure = test_structure(vec![Atom::new("O", Point3::new(3.0, 1.0, 5.0))]);
        let params = BvParamTable::new();
        let config = small_config();
        let first = scan_grid(&structure, &params, &config).unwrap();
        let second = scan_grid(&structure, &params, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn scan_grid_without_counter_ions_is_all_sentinel_and_uncovered() {
        let structure = test_structure(vec![Atom::new("Li", Point3::new(4.0, 4.0, 4.0))]);
        let field = scan_grid(&structure, &BvParamTable::new(), &small_config()).unwrap();
        for i in 0..5 {
            for j in 0..5 {
                for k in 0..5 {
                    assert_eq!(field.energy_at(i, j, k), NO_DATA_ENERGY);
                    assert!(!field.is_covered(i, j, k));
                }
            }
        }
    }

    #[test]
    fn scan_grid_rejects_invalid_configuration_before_computing() {
        let structure = test_structure(Vec::new());
        let config = ScanConfig {
            grid_resolution: 0,
            ..ScanConfig::default()
        };
        let result = scan_grid(&structure, &BvParamTable::new(), &config);
        assert!(matches!(
            result,
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn scan_sites_preserves_input_order() {
        let structure = test_structure(vec![Atom::new("O", Point3::new(1.0, 0.0, 0.0))]);
        let sites = vec![Point3::origin(), Point3::new(4.0, 4.0, 4.0)];
        let energies =
            scan_sites(&structure, &BvParamTable::new(), &small_config(), &sites).unwrap();
        assert_eq!(energies.len(), 2);
        // The first site sits 1 A from the O; the second is out of range.
        assert_ne!(energies[0], NO_DATA_ENERGY);
        assert_eq!(energies[1], NO_DATA_ENERGY);
    }

    #[test]
    fn mobile_sites_returns_existing_mobile_atom_positions() {
        let structure = test_structure(vec![
            Atom::new("Li", Point3::new(1.0, 1.0, 1.0)),
            Atom::new("Li", Point3::new(3.0, 3.0, 3.0)),
            Atom::new("O", Point3::new(2.0, 2.0, 2.0)),
        ]);
        let sites = mobile_sites(&structure, &ScanConfig::default());
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0], Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn mobile_sites_falls_back_to_candidate_grid() {
        let structure = test_structure(vec![Atom::new("O", Point3::new(2.0, 2.0, 2.0))]);
        let sites = mobile_sites(&structure, &ScanConfig::default());
        // Quarter-cell steps in [0, 1) give 4^3 candidates.
        assert_eq!(sites.len(), 64);
    }
}
