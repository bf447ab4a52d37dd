use nalgebra::Point3;

/// Represents a single atom of a loaded crystal structure.
///
/// Positions are Cartesian Angstroms. Atoms are immutable once the owning
/// [`Structure`](super::structure::Structure) has been built; the analysis engine
/// only ever reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The element symbol (e.g. "Li", "O", "Zr").
    pub element: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` with the given element symbol and Cartesian position.
    pub fn new(element: &str, position: Point3<f64>) -> Self {
        Self {
            element: element.to_string(),
            position,
        }
    }

    /// Returns `true` if this atom's element symbol matches `element` exactly.
    ///
    /// Element symbols are case-sensitive: "Li" and "LI" are different species.
    #[inline]
    pub fn is_species(&self, element: &str) -> bool {
        self.element == element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_stores_element_and_position() {
        let atom = Atom::new("Li", Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.element, "Li");
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn is_species_matches_exact_symbol_only() {
        let atom = Atom::new("Li", Point3::origin());
        assert!(atom.is_species("Li"));
        assert!(!atom.is_species("li"));
        assert!(!atom.is_species("La"));
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let atom1 = Atom::new("O", Point3::new(0.5, 0.5, 0.5));
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
