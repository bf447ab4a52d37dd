use super::atom::Atom;
use super::lattice::Lattice;
use nalgebra::Point3;

/// A read-only crystal structure: an ordered set of atoms plus the unit cell.
///
/// Structures are produced by an external loader and live for the duration of one
/// material's analysis. The engine never mutates them, which is what makes batch
/// analysis embarrassingly parallel across materials.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    formula: String,
    atoms: Vec<Atom>,
    lattice: Lattice,
}

impl Structure {
    /// Creates a new structure from its already-parsed parts.
    pub fn new(formula: &str, atoms: Vec<Atom>, lattice: Lattice) -> Self {
        Self {
            formula: formula.to_string(),
            atoms,
            lattice,
        }
    }

    /// The chemical formula as given by the loader (identifier only, never parsed).
    #[inline]
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// All atoms in load order.
    #[inline]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// The unit cell.
    #[inline]
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Iterates over all atoms of the requested species.
    ///
    /// A species absent from the structure yields an empty iterator, not an error.
    pub fn atoms_of<'a>(&'a self, element: &'a str) -> impl Iterator<Item = &'a Atom> {
        self.atoms.iter().filter(move |a| a.is_species(element))
    }

    /// Cartesian positions of all atoms of the requested species.
    pub fn positions_of(&self, element: &str) -> Vec<Point3<f64>> {
        self.atoms_of(element).map(|a| a.position).collect()
    }

    /// Finds all atoms within `cutoff` Angstroms of `point`, with their distances.
    ///
    /// Periodic lattices use the minimum-image convention, so a probe near a cell
    /// face still sees atoms across the boundary. Minimum-image distances are exact
    /// only while `cutoff` is below half the shortest cell vector (see
    /// [`Lattice::min_image_displacement`]).
    pub fn neighbors_within(&self, point: &Point3<f64>, cutoff: f64) -> Vec<(&Atom, f64)> {
        let mut neighbors = Vec::new();
        for atom in &self.atoms {
            let disp = self.lattice.min_image_displacement(&(atom.position - point));
            let dist = disp.norm();
            if dist <= cutoff {
                neighbors.push((atom, dist));
            }
        }
        neighbors
    }
}
