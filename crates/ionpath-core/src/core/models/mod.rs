//! # Core Models Module
//!
//! This module defines the data structures used to represent crystal structures:
//! atoms with Cartesian coordinates, the periodic lattice, and the read-only
//! [`structure::Structure`] that owns both.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom representation with element symbol and position
//! - [`lattice`] - Unit-cell description, fractional/Cartesian conversion, and the
//!   minimum-image convention for periodic distances
//! - [`structure`] - The complete structure with species enumeration and cutoff
//!   neighbor queries
//!
//! Structures are created by an external loader (CIF parsing is out of scope for
//! this crate) and are never mutated by the analysis engine.

pub mod atom;
pub mod lattice;
pub mod structure;
