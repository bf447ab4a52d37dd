use super::params::BvParamTable;
use super::potential::bond_valence;
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use thiserror::Error;

/// Sentinel mismatch energy reported when no counter-ion is within range.
///
/// Unexplored regions must look unfavorable to the percolation logic rather than
/// free, so the sentinel is high-but-finite instead of zero or infinity.
pub const NO_DATA_ENERGY: f64 = 0.5;

#[derive(Debug, Error, PartialEq)]
pub enum SiteEnergyError {
    #[error("No bond-valence parameters for pair {cation}-{anion}")]
    MissingBondParameter { cation: String, anion: String },
}

/// Policy for counter-ions whose bond-valence pair is absent from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamPolicy {
    /// Skip the counter-ion's contribution (documented degradation).
    #[default]
    Lenient,
    /// Fail the evaluation with [`SiteEnergyError::MissingBondParameter`].
    Strict,
}

/// The parameters a [`SiteEnergyEvaluator`] needs, decoupled from the engine's
/// full scan configuration so the core layer stays self-contained.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteEnergySpec {
    /// The migrating ion species (e.g. "Li").
    pub mobile_species: String,
    /// The counter-ion species summed over (e.g. "O").
    pub counter_species: String,
    /// Formal valence of the mobile ion (+1 for Li⁺).
    pub formal_valence: f64,
    /// Neighbor-search cutoff in Angstroms; contributions beyond it are ignored.
    pub cutoff_radius: f64,
    /// Pairs closer than this are excluded as degenerate self-overlap.
    pub min_pair_distance: f64,
    /// What to do when a pair has no tabulated parameters.
    pub param_policy: ParamPolicy,
}

impl Default for SiteEnergySpec {
    fn default() -> Self {
        Self {
            mobile_species: "Li".to_string(),
            counter_species: "O".to_string(),
            formal_valence: 1.0,
            cutoff_radius: 5.0,
            min_pair_distance: 0.5,
            param_policy: ParamPolicy::default(),
        }
    }
}

/// The outcome of one probe-point evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointEnergy {
    /// Mismatch energy `|bv_sum - formal_valence|`; the sentinel
    /// [`NO_DATA_ENERGY`] when nothing contributed.
    pub energy: f64,
    /// Number of counter-ions that contributed to the bond-valence sum. Zero
    /// marks the energy as the no-data sentinel, which pathway extraction
    /// treats as closed.
    pub contributions: usize,
}

/// Computes the bond-valence mismatch energy of a probe ion at arbitrary points.
///
/// Zero energy means the point exactly satisfies the mobile ion's expected
/// bonding; larger values mean increasingly unfavorable placement. The evaluator
/// borrows the structure and parameter table and holds no mutable state, so one
/// instance may be shared freely across a scan.
pub struct SiteEnergyEvaluator<'a> {
    structure: &'a Structure,
    params: &'a BvParamTable,
    spec: SiteEnergySpec,
}

impl<'a> SiteEnergyEvaluator<'a> {
    pub fn new(structure: &'a Structure, params: &'a BvParamTable, spec: SiteEnergySpec) -> Self {
        Self {
            structure,
            params,
            spec,
        }
    }

    #[inline]
    pub fn spec(&self) -> &SiteEnergySpec {
        &self.spec
    }

    /// Evaluates the mismatch energy at `point`.
    ///
    /// Sums bond-valence contributions from every counter-ion within the cutoff
    /// radius, excluding degenerate pairs closer than the minimum pair distance.
    ///
    /// # Errors
    ///
    /// Returns [`SiteEnergyError::MissingBondParameter`] under
    /// [`ParamPolicy::Strict`] when the (mobile, counter) pair is untabulated;
    /// the lenient policy skips such contributions instead.
    pub fn evaluate(&self, point: &Point3<f64>) -> Result<PointEnergy, SiteEnergyError> {
        let mut bv_sum = 0.0;
        let mut contributions = 0;

        for (atom, dist) in self
            .structure
            .neighbors_within(point, self.spec.cutoff_radius)
        {
            if !atom.is_species(&self.spec.counter_species) {
                continue;
            }
            if dist < self.spec.min_pair_distance {
                continue;
            }

            match self.params.get(&self.spec.mobile_species, &atom.element) {
                Some(param) => {
                    bv_sum += bond_valence(dist, param.r0, param.b);
                    contributions += 1;
                }
                None => match self.spec.param_policy {
                    ParamPolicy::Lenient => continue,
                    ParamPolicy::Strict => {
                        return Err(SiteEnergyError::MissingBondParameter {
                            cation: self.spec.mobile_species.clone(),
                            anion: atom.element.clone(),
                        });
                    }
                },
            }
        }

        if contributions == 0 {
            return Ok(PointEnergy {
                energy: NO_DATA_ENERGY,
                contributions: 0,
            });
        }

        Ok(PointEnergy {
            energy: (bv_sum - self.spec.formal_valence).abs(),
            contributions,
        })
    }

    /// Convenience wrapper returning just the energy.
    pub fn energy(&self, point: &Point3<f64>) -> Result<f64, SiteEnergyError> {
        self.evaluate(point).map(|p| p.energy)
    }
}
