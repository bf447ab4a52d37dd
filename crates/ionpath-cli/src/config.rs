use crate::cli::ScreenArgs;
use crate::error::{CliError, Result};
use ionpath::core::bv::site_energy::ParamPolicy;
use ionpath::engine::config::ScanConfig;
use ionpath::engine::gate::ScreeningCriteria;
use serde::Deserialize;
use std::path::Path;

/// The TOML configuration file as written by the user.
///
/// Every field is optional; anything absent falls back to the built-in
/// defaults, and command-line flags override both.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub scan: ScanSection,
    #[serde(default)]
    pub screening: ScreeningSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ScanSection {
    pub grid_resolution: Option<usize>,
    pub energy_threshold: Option<f64>,
    pub mobile_species: Option<String>,
    pub counter_species: Option<String>,
    pub formal_valence: Option<f64>,
    pub cutoff_radius: Option<f64>,
    pub min_pair_distance: Option<f64>,
    pub hop_range: Option<(f64, f64)>,
    pub temperature_k: Option<f64>,
    pub sigma0: Option<f64>,
    pub scale_factor: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ScreeningSection {
    pub activation_energy_max: Option<f64>,
    pub conductivity_min: Option<f64>,
    pub min_pathway_count: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: anyhow::Error::new(e),
        })
    }
}

/// Resolves the effective scan configuration.
///
/// Precedence, lowest to highest: built-in defaults, config file,
/// command-line flags. The merged result is validated as a whole at build
/// time.
pub fn resolve_scan_config(file: &FileConfig, args: &ScreenArgs) -> Result<ScanConfig> {
    let defaults = ScanConfig::default();
    let scan = &file.scan;

    let grid_resolution = args
        .grid_resolution
        .or(scan.grid_resolution)
        .unwrap_or(defaults.grid_resolution);
    let energy_threshold = args
        .energy_threshold
        .or(scan.energy_threshold)
        .unwrap_or(defaults.energy_threshold);
    let mobile_species = args
        .mobile_species
        .as_deref()
        .or(scan.mobile_species.as_deref())
        .unwrap_or(&defaults.mobile_species);
    let counter_species = args
        .counter_species
        .as_deref()
        .or(scan.counter_species.as_deref())
        .unwrap_or(&defaults.counter_species);
    let cutoff_radius = args
        .cutoff
        .or(scan.cutoff_radius)
        .unwrap_or(defaults.cutoff_radius);
    let temperature_k = args
        .temperature
        .or(scan.temperature_k)
        .unwrap_or(defaults.temperature_k);
    let formal_valence = scan.formal_valence.unwrap_or(defaults.formal_valence);
    let min_pair_distance = scan.min_pair_distance.unwrap_or(defaults.min_pair_distance);
    let hop_range = scan.hop_range.unwrap_or(defaults.hop_range);
    let sigma0 = scan.sigma0.unwrap_or(defaults.sigma0);
    let scale_factor = scan.scale_factor.unwrap_or(defaults.scale_factor);
    let param_policy = if args.strict_params {
        ParamPolicy::Strict
    } else {
        ParamPolicy::Lenient
    };

    ScanConfig::builder()
        .grid_resolution(grid_resolution)
        .energy_threshold(energy_threshold)
        .mobile_species(mobile_species)
        .counter_species(counter_species)
        .formal_valence(formal_valence)
        .cutoff_radius(cutoff_radius)
        .min_pair_distance(min_pair_distance)
        .hop_range(hop_range.0, hop_range.1)
        .temperature_k(temperature_k)
        .sigma0(sigma0)
        .scale_factor(scale_factor)
        .param_policy(param_policy)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolves the effective screening gate with the same precedence rules.
pub fn resolve_criteria(file: &FileConfig, args: &ScreenArgs) -> ScreeningCriteria {
    let defaults = ScreeningCriteria::default();
    let screening = &file.screening;

    ScreeningCriteria {
        activation_energy_max: args
            .ea_max
            .or(screening.activation_energy_max)
            .unwrap_or(defaults.activation_energy_max),
        conductivity_min: args
            .sigma_min
            .or(screening.conductivity_min)
            .unwrap_or(defaults.conductivity_min),
        min_pathway_count: screening
            .min_pathway_count
            .unwrap_or(defaults.min_pathway_count),
    }
}
