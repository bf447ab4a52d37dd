//! # Bond-Valence Module
//!
//! This module implements the bond-valence method: the pure pairwise formula, the
//! parameter tables it draws from, and the site-energy evaluator that turns both
//! into a mismatch energy for a probe ion at an arbitrary point in a structure.
//!
//! ## Key Components
//!
//! - [`potential`] - The bond-valence formula `exp((R0 - r) / B)`
//! - [`params`] - Built-in literature parameters plus TOML/CSV extension loading
//! - [`site_energy`] - The [`site_energy::SiteEnergyEvaluator`], summing counter-ion
//!   contributions within a cutoff and reporting `|bv_sum - formal_valence|`
//!
//! ## Usage
//!
//! ```ignore
//! use ionpath::core::bv::params::BvParamTable;
//! use ionpath::core::bv::site_energy::{SiteEnergyEvaluator, SiteEnergySpec};
//!
//! let params = BvParamTable::new();
//! let evaluator = SiteEnergyEvaluator::new(&structure, &params, SiteEnergySpec::default());
//! let point_energy = evaluator.evaluate(&probe_point)?;
//! ```

pub mod params;
pub mod potential;
pub mod site_energy;
