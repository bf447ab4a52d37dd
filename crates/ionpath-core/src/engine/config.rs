use crate::core::bv::site_energy::{ParamPolicy, SiteEnergySpec};
use thiserror::Error;

pub const DEFAULT_GRID_RESOLUTION: usize = 20;
pub const DEFAULT_ENERGY_THRESHOLD: f64 = 3.0;
pub const DEFAULT_MOBILE_SPECIES: &str = "Li";
pub const DEFAULT_COUNTER_SPECIES: &str = "O";
pub const DEFAULT_FORMAL_VALENCE: f64 = 1.0;
pub const DEFAULT_CUTOFF_RADIUS: f64 = 5.0;
pub const DEFAULT_MIN_PAIR_DISTANCE: f64 = 0.5;
/// Plausible single-hop separation between mobile-ion sites, in Angstroms.
pub const DEFAULT_HOP_RANGE: (f64, f64) = (1.5, 4.0);
pub const DEFAULT_TEMPERATURE_K: f64 = 300.0;
/// Pre-exponential factor of the Arrhenius relation, in S/cm.
pub const DEFAULT_SIGMA0: f64 = 1e-2;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Grid resolution must be at least 1")]
    ZeroGridResolution,
    #[error("{name} must be strictly positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("Hop range is empty or inverted: {min}..{max}")]
    EmptyHopRange { min: f64, max: f64 },
    #[error("{name} must be a non-empty element symbol")]
    EmptySpecies { name: &'static str },
}

/// The full configuration of one BVSE analysis.
///
/// Every numeric constant the engine uses lives here rather than as a literal
/// scattered through the scan and extraction code, so callers can see and
/// override all of them in one place. [`ScanConfig::default`] carries the
/// documented defaults; [`ScanConfig::validate`] rejects non-physical values
/// before any computation begins.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// Grid-mode sampling resolution N (an N x N x N fractional grid).
    pub grid_resolution: usize,
    /// Cells/hops below this mismatch energy count as open for percolation.
    pub energy_threshold: f64,
    /// The migrating ion species.
    pub mobile_species: String,
    /// The counter-ion species the bond-valence sum runs over.
    pub counter_species: String,
    /// Formal valence of the mobile ion.
    pub formal_valence: f64,
    /// Neighbor-search cutoff radius in Angstroms.
    pub cutoff_radius: f64,
    /// Minimum physical pair distance; closer pairs are degenerate overlap.
    pub min_pair_distance: f64,
    /// Inclusive-exclusive bounds on a plausible single hop, in Angstroms.
    pub hop_range: (f64, f64),
    /// Temperature for the Arrhenius conversion, in Kelvin.
    pub temperature_k: f64,
    /// Arrhenius pre-exponential factor, in S/cm.
    pub sigma0: f64,
    /// Empirical factor converting mean bottleneck barriers to eV.
    pub scale_factor: f64,
    /// Policy for counter-ions without tabulated bond-valence parameters.
    pub param_policy: ParamPolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            grid_resolution: DEFAULT_GRID_RESOLUTION,
            energy_threshold: DEFAULT_ENERGY_THRESHOLD,
            mobile_species: DEFAULT_MOBILE_SPECIES.to_string(),
            counter_species: DEFAULT_COUNTER_SPECIES.to_string(),
            formal_valence: DEFAULT_FORMAL_VALENCE,
            cutoff_radius: DEFAULT_CUTOFF_RADIUS,
            min_pair_distance: DEFAULT_MIN_PAIR_DISTANCE,
            hop_range: DEFAULT_HOP_RANGE,
            temperature_k: DEFAULT_TEMPERATURE_K,
            sigma0: DEFAULT_SIGMA0,
            scale_factor: crate::engine::arrhenius::DEFAULT_BARRIER_SCALE,
            param_policy: ParamPolicy::default(),
        }
    }
}

impl ScanConfig {
    /// Rejects non-physical configuration before any computation begins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_resolution == 0 {
            return Err(ConfigError::ZeroGridResolution);
        }
        for (name, value) in [
            ("energy_threshold", self.energy_threshold),
            ("formal_valence", self.formal_valence),
            ("cutoff_radius", self.cutoff_radius),
            ("min_pair_distance", self.min_pair_distance),
            ("temperature_k", self.temperature_k),
            ("sigma0", self.sigma0),
            ("scale_factor", self.scale_factor),
        ] {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.hop_range.0 <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "hop_range.min",
                value: self.hop_range.0,
            });
        }
        if self.hop_range.1 <= self.hop_range.0 {
            return Err(ConfigError::EmptyHopRange {
                min: self.hop_range.0,
                max: self.hop_range.1,
            });
        }
        if self.mobile_species.is_empty() {
            return Err(ConfigError::EmptySpecies {
                name: "mobile_species",
            });
        }
        if self.counter_species.is_empty() {
            return Err(ConfigError::EmptySpecies {
                name: "counter_species",
            });
        }
        Ok(())
    }

    /// The slice of this configuration the site-energy evaluator needs.
    pub fn site_energy_spec(&self) -> SiteEnergySpec {
        SiteEnergySpec {
            mobile_species: self.mobile_species.clone(),
            counter_species: self.counter_species.clone(),
            formal_valence: self.formal_valence,
            cutoff_radius: self.cutoff_radius,
            min_pair_distance: self.min_pair_distance,
            param_policy: self.param_policy,
        }
    }

    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }
}

/// Builder over [`ScanConfig`] starting from the documented defaults.
#[derive(Debug, Default)]
pub struct ScanConfigBuilder {
    config: Option<ScanConfig>,
}

impl ScanConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn config_mut(&mut self) -> &mut ScanConfig {
        self.config.get_or_insert_with(ScanConfig::default)
    }

    pub fn grid_resolution(mut self, n: usize) -> Self {
        self.config_mut().grid_resolution = n;
        self
    }
    pub fn energy_threshold(mut self, threshold: f64) -> Self {
        self.config_mut().energy_threshold = threshold;
        self
    }
    pub fn mobile_species(mut self, species: &str) -> Self {
        self.config_mut().mobile_species = species.to_string();
        self
    }
    pub fn counter_species(mut self, species: &str) -> Self {
        self.config_mut().counter_species = species.to_string();
        self
    }
    pub fn formal_valence(mut self, valence: f64) -> Self {
        self.config_mut().formal_valence = valence;
        self
    }
    pub fn cutoff_radius(mut self, radius: f64) -> Self {
        self.config_mut().cutoff_radius = radius;
        self
    }
    pub fn min_pair_distance(mut self, dist: f64) -> Self {
        self.config_mut().min_pair_distance = dist;
        self
    }
    pub fn hop_range(mut self, min: f64, max: f64) -> Self {
        self.config_mut().hop_range = (min, max);
        self
    }
    pub fn temperature_k(mut self, temperature: f64) -> Self {
        self.config_mut().temperature_k = temperature;
        self
    }
    pub fn sigma0(mut self, sigma0: f64) -> Self {
        self.config_mut().sigma0 = sigma0;
        self
    }
    pub fn scale_factor(mut self, factor: f64) -> Self {
        self.config_mut().scale_factor = factor;
        self
    }
    pub fn param_policy(mut self, policy: ParamPolicy) -> Self {
        self.config_mut().param_policy = policy;
        self
    }

    pub fn build(self) -> Result<ScanConfig, ConfigError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }
}
