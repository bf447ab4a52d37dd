use crate::error::Result;
use ionpath::core::bv::params::BvParamTable;
use std::path::Path;
use tracing::info;

pub mod params;
pub mod screen;

/// Builds the effective bond-valence parameter table: built-in literature
/// values, shadowed by any user-supplied TOML and CSV files in that order.
pub(crate) fn load_param_table(
    toml_path: Option<&Path>,
    csv_path: Option<&Path>,
) -> Result<BvParamTable> {
    let mut table = BvParamTable::new();
    if let Some(path) = toml_path {
        table.merge_toml(path)?;
        info!(path = %path.display(), "merged TOML bond-valence parameters");
    }
    if let Some(path) = csv_path {
        table.merge_csv(path)?;
        info!(path = %path.display(), "merged CSV bond-valence parameters");
    }
    Ok(table)
}
