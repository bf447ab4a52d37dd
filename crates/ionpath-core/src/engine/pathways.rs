use super::config::ScanConfig;
use super::error::EngineError;
use super::field::EnergyField;
use crate::core::bv::params::BvParamTable;
use crate::core::bv::site_energy::SiteEnergyEvaluator;
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

/// A principal lattice direction of the sampled cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// The two pathway-extraction formulations, selectable per call.
///
/// They stay distinct named strategies rather than one merged algorithm: grid
/// percolation asks whether a low-energy channel spans the cell, while
/// site-hop asks how hard individual site-to-site jumps are. The two can
/// disagree on the same structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathwayStrategy {
    /// Percolation over the full grid-scanned energy field.
    #[default]
    Grid,
    /// Midpoint barriers between pairs of mobile-ion sites.
    SiteHop,
}

impl FromStr for PathwayStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(PathwayStrategy::Grid),
            "site-hop" | "site_hop" | "sitehop" => Ok(PathwayStrategy::SiteHop),
            _ => Err(()),
        }
    }
}

/// One candidate ion-migration pathway, ranked by its bottleneck energy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pathway {
    /// A straight low-energy channel spanning the full cell along one axis.
    Channel {
        axis: Axis,
        /// Mean mismatch energy of the best fully-open line along `axis`.
        bottleneck_energy: f64,
        /// Channel length in grid cells (the grid extent).
        length: usize,
    },
    /// A single hop between two mobile-ion sites.
    Hop {
        /// Index of the start site in the scanned site list.
        start: usize,
        /// Index of the end site in the scanned site list.
        end: usize,
        /// Site separation in Angstroms.
        distance: f64,
        /// Mismatch energy at the hop midpoint.
        bottleneck_energy: f64,
    },
}

impl Pathway {
    #[inline]
    pub fn bottleneck_energy(&self) -> f64 {
        match *self {
            Pathway::Channel {
                bottleneck_energy, ..
            } => bottleneck_energy,
            Pathway::Hop {
                bottleneck_energy, ..
            } => bottleneck_energy,
        }
    }
}

/// Extracts percolating channels from a grid-scanned energy field.
///
/// For each principal direction independently, every straight line of cells
/// along that direction is tested; a line counts as open when all of its cells
/// are covered and below `energy_threshold`. A direction with at least one open
/// line yields one [`Pathway::Channel`] whose bottleneck is the mean energy of
/// the lowest-mean open line found.
///
/// The straight-line criterion is not a 3D flood fill, so winding channels
/// are missed. Zero pathways is a valid, expected outcome.
pub fn extract_grid_pathways(field: &EnergyField, energy_threshold: f64) -> Vec<Pathway> {
    let n = field.resolution();
    if n == 0 {
        return Vec::new();
    }

    let mut pathways = Vec::new();
    for axis in Axis::ALL {
        let mut best_line: Option<f64> = None;

        for u in 0..n {
            for v in 0..n {
                let mut sum = 0.0;
                let mut open = true;
                for t in 0..n {
                    let (i, j, k) = line_cell(axis, t, u, v);
                    if !field.is_open(i, j, k, energy_threshold) {
                        open = false;
                        break;
                    }
                    sum += field.energy_at(i, j, k);
                }
                if open {
                    let mean = sum / n as f64;
                    best_line = Some(match best_line {
                        Some(best) => best.min(mean),
                        None => mean,
                    });
                }
            }
        }

        if let Some(bottleneck_energy) = best_line {
            pathways.push(Pathway::Channel {
                axis,
                bottleneck_energy,
                length: n,
            });
        }
    }

    pathways.sort_by(|a, b| a.bottleneck_energy().total_cmp(&b.bottleneck_energy()));
    debug!(
        threshold = energy_threshold,
        channels = pathways.len(),
        "grid percolation complete"
    );
    pathways
}

/// Extracts single-hop pathways between pairs of mobile-ion sites.
///
/// Every unordered site pair whose separation lies strictly inside the
/// configured hop range produces one [`Pathway::Hop`] whose bottleneck is the
/// mismatch energy at the pair midpoint. Hops are returned sorted ascending by
/// bottleneck energy. A structure without any counter-species atoms reports
/// zero pathways: nothing constrains the landscape, so no hop is credible.
pub fn extract_hop_pathways(
    structure: &Structure,
    params: &BvParamTable,
    config: &ScanConfig,
    sites: &[Point3<f64>],
) -> Result<Vec<Pathway>, EngineError> {
    config.validate()?;

    if structure.atoms_of(&config.counter_species).next().is_none() {
        debug!(
            formula = structure.formula(),
            species = %config.counter_species,
            "no counter-species atoms; reporting zero hop pathways"
        );
        return Ok(Vec::new());
    }

    let evaluator = SiteEnergyEvaluator::new(structure, params, config.site_energy_spec());
    let (min_hop, max_hop) = config.hop_range;

    let mut pathways = Vec::new();
    for (i, start) in sites.iter().enumerate() {
        for (j, end) in sites.iter().enumerate().skip(i + 1) {
            let distance = (end - start).norm();
            if distance <= min_hop || distance >= max_hop {
                continue;
            }
            let midpoint = Point3::from((start.coords + end.coords) / 2.0);
            let bottleneck_energy = evaluator.energy(&midpoint)?;
            pathways.push(Pathway::Hop {
                start: i,
                end: j,
                distance,
                bottleneck_energy,
            });
        }
    }

    pathways.sort_by(|a, b| a.bottleneck_energy().total_cmp(&b.bottleneck_energy()));
    debug!(hops = pathways.len(), "site-hop extraction complete");
    Ok(pathways)
}

#[inline]
fn line_cell(axis: Axis, t: usize, u: usize, v: usize) -> (usize, usize, usize) {
    match axis {
        Axis::X => (t, u, v),
        Axis::Y => (u, t, v),
        Axis::Z => (u, v, t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::lattice::Lattice;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn all_open_grid_reports_exactly_three_directions() {
        let field = EnergyField::uniform(20, 1.0, true);
        let pathways = extract_grid_pathways(&field, 3.0);
        assert_eq!(pathways.len(), 3);
        let axes: Vec<_> = pathways
            .iter()
            .map(|p| match p {
                Pathway::Channel { axis, .. } => *axis,
                other => panic!("unexpected pathway {other:?}"),
            })
            .collect();
        for axis in Axis::ALL {
            assert!(axes.contains(&axis));
        }
        for pathway in &pathways {
            assert!((pathway.bottleneck_energy() - 1.0).abs() < TOLERANCE);
            assert!(matches!(pathway, Pathway::Channel { length: 20, .. }));
        }
    }

    #[test]
    fn all_closed_grid_reports_zero_pathways() {
        let field = EnergyField::uniform(20, 5.0, true);
        assert!(extract_grid_pathways(&field, 3.0).is_empty());
    }

    #[test]
    fn uncovered_cells_never_open_regardless_of_energy() {
        let field = EnergyField::uniform(10, 0.5, false);
        assert!(extract_grid_pathways(&field, 3.0).is_empty());
        assert!(extract_grid_pathways(&field, 1e6).is_empty());
    }

    #[test]
    fn single_open_line_yields_one_channel_with_its_mean_energy() {
        let n = 4;
        let mut energies = vec![10.0; n * n * n];
        let coverage = vec![true; n * n * n];
        // Open one line along x at (j, k) = (1, 2) with varying energies.
        let line_energies = [0.5, 1.0, 1.5, 2.0];
        for (i, &e) in line_energies.iter().enumerate() {
            energies[(i * n + 1) * n + 2] = e;
        }
        let field = EnergyField::from_raw(n, energies, coverage);

        let pathways = extract_grid_pathways(&field, 3.0);
        assert_eq!(pathways.len(), 1);
        match &pathways[0] {
            Pathway::Channel {
                axis,
                bottleneck_energy,
                length,
            } => {
                assert_eq!(*axis, Axis::X);
                assert!((bottleneck_energy - 1.25).abs() < TOLERANCE);
                assert_eq!(*length, n);
            }
            other => panic!("unexpected pathway {other:?}"),
        }
    }

    #[test]
    fn best_line_is_the_lowest_mean_open_line() {
        let n = 3;
        let mut energies = vec![10.0; n * n * n];
        let coverage = vec![true; n * n * n];
        // Two open z-lines: one with mean 2.0, one with mean 1.0.
        for t in 0..n {
            energies[t] = 2.0;
            energies[(n + 1) * n + t] = 1.0;
        }
        let field = EnergyField::from_raw(n, energies, coverage);

        let pathways = extract_grid_pathways(&field, 3.0);
        assert_eq!(pathways.len(), 1);
        assert!((pathways[0].bottleneck_energy() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn raising_threshold_never_decreases_pathway_count() {
        let n = 5;
        let energies: Vec<f64> = (0..n * n * n).map(|v| (v % 7) as f64).collect();
        let field = EnergyField::from_raw(n, energies, vec![true; n * n * n]);

        let mut previous = 0;
        for threshold in [0.5, 1.5, 3.0, 5.0, 8.0] {
            let count = extract_grid_pathways(&field, threshold).len();
            assert!(count >= previous);
            previous = count;
        }
    }

    fn hop_test_structure() -> (Structure, Vec<Point3<f64>>) {
        // Two Li sites 2.0 A apart with one O perpendicular to their midpoint.
        let sites = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)];
        let structure = Structure::new(
            "Li2O",
            vec![
                Atom::new("Li", sites[0]),
                Atom::new("Li", sites[1]),
                Atom::new("O", Point3::new(1.0, 0.3, 0.0)),
            ],
            Lattice::cubic(20.0).unwrap(),
        );
        (structure, sites)
    }

    #[test]
    fn hop_extraction_finds_single_hop_with_midpoint_energy() {
        let (structure, sites) = hop_test_structure();
        let params = BvParamTable::new();
        let config = ScanConfig::default();

        let pathways = extract_hop_pathways(&structure, &params, &config, &sites).unwrap();
        assert_eq!(pathways.len(), 1);

        let evaluator = SiteEnergyEvaluator::new(&structure, &params, config.site_energy_spec());
        let expected = evaluator.energy(&Point3::new(1.0, 0.0, 0.0)).unwrap();
        match &pathways[0] {
            Pathway::Hop {
                start,
                end,
                distance,
                bottleneck_energy,
            } => {
                assert_eq!((*start, *end), (0, 1));
                assert!((distance - 2.0).abs() < TOLERANCE);
                assert!((bottleneck_energy - expected).abs() < TOLERANCE);
            }
            other => panic!("unexpected pathway {other:?}"),
        }
    }

    #[test]
    fn hops_outside_plausible_range_are_rejected() {
        let sites = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),  // 1.0 A: too short
            Point3::new(6.0, 0.0, 0.0),  // 5.0 A from the previous: too long
        ];
        let structure = Structure::new(
            "Li3O",
            vec![Atom::new("O", Point3::new(3.0, 1.0, 0.0))],
            Lattice::cubic(20.0).unwrap(),
        );
        let pathways =
            extract_hop_pathways(&structure, &BvParamTable::new(), &ScanConfig::default(), &sites)
                .unwrap();
        assert!(pathways.is_empty());
    }

    #[test]
    fn hop_extraction_without_counter_species_reports_zero_pathways() {
        let sites = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)];
        let structure = Structure::new(
            "Li2",
            vec![Atom::new("Li", sites[0]), Atom::new("Li", sites[1])],
            Lattice::cubic(20.0).unwrap(),
        );
        let pathways =
            extract_hop_pathways(&structure, &BvParamTable::new(), &ScanConfig::default(), &sites)
                .unwrap();
        assert!(pathways.is_empty());
    }

    #[test]
    fn hops_are_sorted_ascending_by_bottleneck() {
        // Three collinear Li sites; the O sits nearer one midpoint than the other.
        let sites = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
        ];
        let structure = Structure::new(
            "Li3O",
            vec![Atom::new("O", Point3::new(1.0, 1.2, 0.0))],
            Lattice::cubic(20.0).unwrap(),
        );
        let pathways =
            extract_hop_pathways(&structure, &BvParamTable::new(), &ScanConfig::default(), &sites)
                .unwrap();
        assert!(pathways.len() >= 2);
        for pair in pathways.windows(2) {
            assert!(pair[0].bottleneck_energy() <= pair[1].bottleneck_energy());
        }
    }

    #[test]
    fn pathway_strategy_parses_from_str() {
        assert_eq!(PathwayStrategy::from_str("grid"), Ok(PathwayStrategy::Grid));
        assert_eq!(
            PathwayStrategy::from_str("site-hop"),
            Ok(PathwayStrategy::SiteHop)
        );
        assert_eq!(
            PathwayStrategy::from_str("SITE_HOP"),
            Ok(PathwayStrategy::SiteHop)
        );
        assert_eq!(PathwayStrategy::from_str("flood"), Err(()));
    }
}
