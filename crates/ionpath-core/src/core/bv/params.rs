use phf::{Map, phf_map};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// A single cation-anion bond-valence parameter pair.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct BvParam {
    /// Reference bond length R0 in Angstroms.
    pub r0: f64,
    /// Softness parameter B in Angstroms.
    pub b: f64,
}

/// Literature values (Brown & Altermatt) for common lithium-electrolyte
/// chemistries, keyed by the documented `"Cation-Anion"` ordering.
static BUILTIN_PARAMS: Map<&'static str, BvParam> = phf_map! {
    "Li-O" => BvParam { r0: 1.466, b: 0.37 },
    "La-O" => BvParam { r0: 2.172, b: 0.37 },
    "Zr-O" => BvParam { r0: 1.937, b: 0.37 },
    "Ti-O" => BvParam { r0: 1.815, b: 0.37 },
    "Nb-O" => BvParam { r0: 1.911, b: 0.37 },
    "Ta-O" => BvParam { r0: 1.920, b: 0.37 },
};

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Bond-valence parameters for pair {cation}-{anion} must be strictly positive")]
    NonPositiveParameter { cation: String, anion: String },
    #[error("Malformed pair key '{0}': expected the form 'Cation-Anion'")]
    MalformedPairKey(String),
}

#[derive(Debug, Deserialize)]
struct BvParamFile {
    pairs: HashMap<String, BvParam>,
}

#[derive(Debug, Deserialize)]
struct BvParamCsvRow {
    cation: String,
    anion: String,
    r0: f64,
    b: f64,
}

/// Lookup table of bond-valence parameters.
///
/// Lookup is keyed by the documented (cation, anion) ordering only; there is no
/// implicit reverse lookup, so `get("O", "Li")` misses even though `"Li-O"` is a
/// built-in pair. User-supplied entries loaded from TOML or CSV shadow the
/// built-in literature values.
#[derive(Debug, Clone, Default)]
pub struct BvParamTable {
    overrides: HashMap<String, BvParam>,
}

impl BvParamTable {
    /// Creates a table holding only the built-in literature parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the parameters for the `(cation, anion)` pair.
    pub fn get(&self, cation: &str, anion: &str) -> Option<BvParam> {
        let key = format!("{cation}-{anion}");
        self.overrides
            .get(&key)
            .or_else(|| BUILTIN_PARAMS.get(&key))
            .copied()
    }

    /// Adds or replaces the parameters for one pair.
    ///
    /// # Errors
    ///
    /// Returns [`ParamLoadError::NonPositiveParameter`] unless both `r0` and `b`
    /// are strictly positive.
    pub fn insert(&mut self, cation: &str, anion: &str, param: BvParam) -> Result<(), ParamLoadError> {
        if param.r0 <= 0.0 || param.b <= 0.0 {
            return Err(ParamLoadError::NonPositiveParameter {
                cation: cation.to_string(),
                anion: anion.to_string(),
            });
        }
        self.overrides.insert(format!("{cation}-{anion}"), param);
        Ok(())
    }

    /// Merges pair parameters from a TOML file of the form:
    ///
    /// ```toml
    /// [pairs."Na-O"]
    /// r0 = 1.803
    /// b = 0.37
    /// ```
    pub fn merge_toml(&mut self, path: &Path) -> Result<(), ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: BvParamFile = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        for (key, param) in file.pairs {
            let (cation, anion) = split_pair_key(&key)?;
            self.insert(&cation, &anion, param)?;
        }
        Ok(())
    }

    /// Merges pair parameters from a CSV file with a `cation,anion,r0,b` header.
    pub fn merge_csv(&mut self, path: &Path) -> Result<(), ParamLoadError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| ParamLoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        for result in reader.deserialize::<BvParamCsvRow>() {
            let row = result.map_err(|e| ParamLoadError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            self.insert(&row.cation, &row.anion, BvParam { r0: row.r0, b: row.b })?;
        }
        Ok(())
    }

    /// The effective table (built-ins shadowed by overrides), sorted by pair key.
    pub fn entries(&self) -> Vec<(String, BvParam)> {
        let mut merged: HashMap<String, BvParam> = BUILTIN_PARAMS
            .entries()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        for (key, param) in &self.overrides {
            merged.insert(key.clone(), *param);
        }
        let mut entries: Vec<_> = merged.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

fn split_pair_key(key: &str) -> Result<(String, String), ParamLoadError> {
    match key.split_once('-') {
        Some((cation, anion)) if !cation.is_empty() && !anion.is_empty() => {
            Ok((cation.to_string(), anion.to_string()))
        }
        _ => Err(ParamLoadError::MalformedPairKey(key.to_string())),
    }
}
