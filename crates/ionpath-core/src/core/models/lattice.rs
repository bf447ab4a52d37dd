use nalgebra::{Matrix3, Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LatticeError {
    #[error("lattice matrix is singular and cannot be inverted")]
    SingularMatrix,
    #[error("cell length must be strictly positive, got {0}")]
    NonPositiveLength(f64),
    #[error("cell angle must lie strictly between 0 and 180 degrees, got {0}")]
    InvalidAngle(f64),
}

/// The unit cell of a crystal structure.
///
/// Lattice vectors **a**, **b**, **c** are the columns of `matrix`, in Angstroms.
/// The inverse is cached at construction so fractional/Cartesian conversion and
/// minimum-image displacement are cheap during grid scans.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    matrix: Matrix3<f64>,
    inverse: Matrix3<f64>,
    periodic: bool,
}

impl Lattice {
    /// Builds a lattice from a column matrix of lattice vectors.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::SingularMatrix`] if the matrix cannot be inverted.
    pub fn from_matrix(matrix: Matrix3<f64>, periodic: bool) -> Result<Self, LatticeError> {
        let inverse = matrix.try_inverse().ok_or(LatticeError::SingularMatrix)?;
        Ok(Self {
            matrix,
            inverse,
            periodic,
        })
    }

    /// Builds a periodic cubic cell of edge length `a` Angstroms.
    pub fn cubic(a: f64) -> Result<Self, LatticeError> {
        if a <= 0.0 {
            return Err(LatticeError::NonPositiveLength(a));
        }
        Self::from_matrix(Matrix3::identity() * a, true)
    }

    /// Builds a lattice from cell lengths (Angstroms) and angles (degrees),
    /// using the conventional orientation with **a** along x and **b** in the
    /// xy-plane.
    pub fn from_cell_parameters(
        a: f64,
        b: f64,
        c: f64,
        alpha_deg: f64,
        beta_deg: f64,
        gamma_deg: f64,
        periodic: bool,
    ) -> Result<Self, LatticeError> {
        for &length in &[a, b, c] {
            if length <= 0.0 {
                return Err(LatticeError::NonPositiveLength(length));
            }
        }
        for &angle in &[alpha_deg, beta_deg, gamma_deg] {
            if angle <= 0.0 || angle >= 180.0 {
                return Err(LatticeError::InvalidAngle(angle));
            }
        }

        let (alpha, beta, gamma) = (
            alpha_deg.to_radians(),
            beta_deg.to_radians(),
            gamma_deg.to_radians(),
        );
        let (cos_a, cos_b, cos_g, sin_g) = (alpha.cos(), beta.cos(), gamma.cos(), gamma.sin());

        let cx = c * cos_b;
        let cy = c * (cos_a - cos_b * cos_g) / sin_g;
        let cz_sq = c * c - cx * cx - cy * cy;
        if cz_sq <= 0.0 {
            return Err(LatticeError::InvalidAngle(alpha_deg));
        }

        let matrix = Matrix3::from_columns(&[
            Vector3::new(a, 0.0, 0.0),
            Vector3::new(b * cos_g, b * sin_g, 0.0),
            Vector3::new(cx, cy, cz_sq.sqrt()),
        ]);
        Self::from_matrix(matrix, periodic)
    }

    /// Whether periodic boundary conditions apply to neighbor queries.
    #[inline]
    pub fn is_periodic(&self) -> bool {
        self.periodic
    }

    /// The column matrix of lattice vectors.
    #[inline]
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Converts fractional coordinates to Cartesian Angstroms.
    #[inline]
    pub fn frac_to_cartesian(&self, frac: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.matrix * frac.coords)
    }

    /// Converts Cartesian Angstroms to fractional coordinates.
    #[inline]
    pub fn cartesian_to_frac(&self, cart: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.inverse * cart.coords)
    }

    /// Maps a Cartesian displacement to its minimum-image equivalent.
    ///
    /// The result is exact only while the relevant cutoff stays below half the
    /// shortest cell vector; beyond that the nearest image may be missed. Non-
    /// periodic lattices return the displacement unchanged.
    pub fn min_image_displacement(&self, disp: &Vector3<f64>) -> Vector3<f64> {
        if !self.periodic {
            return *disp;
        }
        let mut frac = self.inverse * disp;
        frac.apply(|x| *x -= x.round());
        self.matrix * frac
    }

    /// The length of the shortest lattice vector, the bound on minimum-image
    /// validity.
    pub fn shortest_vector(&self) -> f64 {
        (0..3)
            .map(|i| self.matrix.column(i).norm())
            .fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn cubic_lattice_converts_fractional_to_cartesian() {
        let lattice = Lattice::cubic(10.0).unwrap();
        let cart = lattice.frac_to_cartesian(&Point3::new(0.5, 0.25, 1.0));
        assert_eq!(cart, Point3::new(5.0, 2.5, 10.0));
    }

    #[test]
    fn cartesian_to_frac_inverts_frac_to_cartesian() {
        let lattice =
            Lattice::from_cell_parameters(4.0, 5.0, 6.0, 80.0, 95.0, 100.0, true).unwrap();
        let frac = Point3::new(0.3, 0.7, 0.1);
        let roundtrip = lattice.cartesian_to_frac(&lattice.frac_to_cartesian(&frac));
        assert!(approx_eq(frac.x, roundtrip.x));
        assert!(approx_eq(frac.y, roundtrip.y));
        assert!(approx_eq(frac.z, roundtrip.z));
    }

    #[test]
    fn cubic_rejects_non_positive_edge() {
        assert_eq!(
            Lattice::cubic(0.0),
            Err(LatticeError::NonPositiveLength(0.0))
        );
        assert_eq!(
            Lattice::cubic(-2.0),
            Err(LatticeError::NonPositiveLength(-2.0))
        );
    }

    #[test]
    fn from_matrix_rejects_singular_matrix() {
        let result = Lattice::from_matrix(Matrix3::zeros(), true);
        assert_eq!(result, Err(LatticeError::SingularMatrix));
    }

    #[test]
    fn from_cell_parameters_rejects_degenerate_angles() {
        let result = Lattice::from_cell_parameters(4.0, 4.0, 4.0, 0.0, 90.0, 90.0, true);
        assert_eq!(result, Err(LatticeError::InvalidAngle(0.0)));
        let result = Lattice::from_cell_parameters(4.0, 4.0, 4.0, 90.0, 180.0, 90.0, true);
        assert_eq!(result, Err(LatticeError::InvalidAngle(180.0)));
    }

    #[test]
    fn orthorhombic_cell_parameters_give_diagonal_matrix() {
        let lattice =
            Lattice::from_cell_parameters(3.0, 4.0, 5.0, 90.0, 90.0, 90.0, true).unwrap();
        let m = lattice.matrix();
        assert!(approx_eq(m[(0, 0)], 3.0));
        assert!(approx_eq(m[(1, 1)], 4.0));
        assert!(approx_eq(m[(2, 2)], 5.0));
        assert!(approx_eq(m[(0, 1)], 0.0));
        assert!(approx_eq(m[(1, 2)], 0.0));
    }

    #[test]
    fn min_image_wraps_displacement_across_cell_boundary() {
        let lattice = Lattice::cubic(10.0).unwrap();
        let wrapped = lattice.min_image_displacement(&Vector3::new(9.5, 0.0, 0.0));
        assert!(approx_eq(wrapped.x, -0.5));
        assert!(approx_eq(wrapped.norm(), 0.5));
    }

    #[test]
    fn min_image_is_identity_for_non_periodic_lattice() {
        let lattice = Lattice::from_matrix(Matrix3::identity() * 10.0, false).unwrap();
        let disp = Vector3::new(9.5, 0.0, 0.0);
        assert_eq!(lattice.min_image_displacement(&disp), disp);
    }

    #[test]
    fn shortest_vector_returns_minimum_cell_edge() {
        let lattice =
            Lattice::from_cell_parameters(3.0, 4.0, 5.0, 90.0, 90.0, 90.0, true).unwrap();
        assert!(approx_eq(lattice.shortest_vector(), 3.0));
    }
}
