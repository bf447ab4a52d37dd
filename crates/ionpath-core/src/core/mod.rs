//! # Core Module
//!
//! This module provides the fundamental building blocks for bond-valence site-energy
//! analysis: immutable crystal-structure models and the pure mathematics of the
//! bond-valence method.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Structure Representation** ([`models`]) - Atoms, lattices, and read-only
//!   crystal structures with periodic neighbor queries
//! - **Bond-Valence Method** ([`bv`]) - The bond-valence formula, pairwise parameter
//!   tables, and the site-energy evaluator built on top of them
//!
//! ## Scientific Foundation
//!
//! Bond valence is an empirical measure of bond strength derived from observed bond
//! lengths (Brown & Altermatt). The mismatch between a probe ion's bond-valence sum
//! and its formal valence approximates the potential-energy landscape available to
//! that ion, which is what the rest of the library samples and percolates over.

pub mod bv;
pub mod models;
