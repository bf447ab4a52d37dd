/// The sampled bond-valence energy landscape over one unit cell.
///
/// An `EnergyField` is a regular N x N x N grid in fractional coordinates,
/// created by [`scan::scan_grid`](super::scan::scan_grid) and consumed by
/// pathway extraction. It is never mutated after population. Alongside each
/// energy the field records *coverage*: whether any counter-ion contributed at
/// that cell. Uncovered cells carry the no-data sentinel energy and must never
/// count as open during percolation, whatever the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyField {
    resolution: usize,
    energies: Vec<f64>,
    coverage: Vec<bool>,
}

impl EnergyField {
    /// Assembles a field from raw scan output. Lengths must equal N³.
    pub(crate) fn from_raw(resolution: usize, energies: Vec<f64>, coverage: Vec<bool>) -> Self {
        debug_assert_eq!(energies.len(), resolution.pow(3));
        debug_assert_eq!(coverage.len(), resolution.pow(3));
        Self {
            resolution,
            energies,
            coverage,
        }
    }

    /// Builds a uniform field, useful for synthetic percolation scenarios.
    pub fn uniform(resolution: usize, energy: f64, covered: bool) -> Self {
        let cells = resolution.pow(3);
        Self {
            resolution,
            energies: vec![energy; cells],
            coverage: vec![covered; cells],
        }
    }

    /// The grid extent N along each axis.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Total number of cells, N³.
    #[inline]
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    #[inline]
    fn index(&self, i: usize, j: usize, k: usize) -> usize {
        (i * self.resolution + j) * self.resolution + k
    }

    /// The mismatch energy at cell (i, j, k).
    #[inline]
    pub fn energy_at(&self, i: usize, j: usize, k: usize) -> f64 {
        self.energies[self.index(i, j, k)]
    }

    /// Whether any counter-ion contributed at cell (i, j, k).
    #[inline]
    pub fn is_covered(&self, i: usize, j: usize, k: usize) -> bool {
        self.coverage[self.index(i, j, k)]
    }

    /// Whether cell (i, j, k) counts as open at the given threshold.
    #[inline]
    pub fn is_open(&self, i: usize, j: usize, k: usize, energy_threshold: f64) -> bool {
        let idx = self.index(i, j, k);
        self.coverage[idx] && self.energies[idx] < energy_threshold
    }

    pub fn min_energy(&self) -> Option<f64> {
        self.energies.iter().copied().reduce(f64::min)
    }

    pub fn max_energy(&self) -> Option<f64> {
        self.energies.iter().copied().reduce(f64::max)
    }

    pub fn mean_energy(&self) -> Option<f64> {
        if self.energies.is_empty() {
            return None;
        }
        Some(self.energies.iter().sum::<f64>() / self.energies.len() as f64)
    }
}
