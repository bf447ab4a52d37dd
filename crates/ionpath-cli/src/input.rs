use crate::error::{CliError, Result};
use ionpath::core::models::atom::Atom;
use ionpath::core::models::lattice::Lattice;
use ionpath::core::models::structure::Structure;
use nalgebra::{Matrix3, Point3, Vector3};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One candidate material as written in an input JSON file.
///
/// A file holds either a single document or an array of them. The lattice can
/// be given as conventional cell parameters or as an explicit matrix whose
/// rows are the lattice vectors in Angstroms.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructureDocument {
    pub formula: String,
    pub lattice: LatticeSpec,
    #[serde(default = "default_periodic")]
    pub periodic: bool,
    pub atoms: Vec<AtomSpec>,
}

fn default_periodic() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LatticeSpec {
    CellParameters {
        a: f64,
        b: f64,
        c: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
    },
    Matrix {
        matrix: [[f64; 3]; 3],
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtomSpec {
    pub element: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl StructureDocument {
    /// Converts the parsed document into an analysis-ready structure.
    pub fn to_structure(&self) -> Result<Structure> {
        let lattice = match &self.lattice {
            LatticeSpec::CellParameters {
                a,
                b,
                c,
                alpha,
                beta,
                gamma,
            } => Lattice::from_cell_parameters(*a, *b, *c, *alpha, *beta, *gamma, self.periodic),
            LatticeSpec::Matrix { matrix } => {
                let columns = [
                    Vector3::new(matrix[0][0], matrix[0][1], matrix[0][2]),
                    Vector3::new(matrix[1][0], matrix[1][1], matrix[1][2]),
                    Vector3::new(matrix[2][0], matrix[2][1], matrix[2][2]),
                ];
                Lattice::from_matrix(Matrix3::from_columns(&columns), self.periodic)
            }
        }
        .map_err(|e| {
            CliError::Argument(format!("structure '{}': invalid lattice: {}", self.formula, e))
        })?;

        let atoms = self
            .atoms
            .iter()
            .map(|spec| Atom::new(&spec.element, Point3::new(spec.x, spec.y, spec.z)))
            .collect();

        Ok(Structure::new(&self.formula, atoms, lattice))
    }
}

/// Loads structure documents from the given files and directories.
///
/// A file may hold one document or an array; a directory contributes every
/// `.json` file directly inside it, in lexicographic order. Input order is
/// preserved so results stay aligned with the command line.
pub fn load_structures(paths: &[PathBuf]) -> Result<Vec<StructureDocument>> {
    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(path)?
                .collect::<std::io::Result<Vec<_>>>()?
                .into_iter()
                .map(|entry| entry.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
                .collect();
            entries.sort();
            debug!(dir = %path.display(), files = entries.len(), "loading structure directory");
            for entry in entries {
                documents.extend(load_file(&entry)?);
            }
        } else {
            documents.extend(load_file(path)?);
        }
    }
    Ok(documents)
}

fn load_file(path: &Path) -> Result<Vec<StructureDocument>> {
    let content = std::fs::read_to_string(path)?;
    let parse_error = |e: serde_json::Error| CliError::FileParsing {
        path: path.to_path_buf(),
        source: anyhow::Error::new(e),
    };

    // A file is either a JSON array of documents or a single one.
    if content.trim_start().starts_with('[') {
        serde_json::from_str(&content).map_err(parse_error)
    } else {
        serde_json::from_str(&content)
            .map(|doc| vec![doc])
            .map_err(parse_error)
    }
}
