//! # IonPath Core Library
//!
//! A bond-valence site-energy (BVSE) engine for screening crystalline solid-state
//! electrolyte candidates. Given a parsed crystal structure, the library builds a
//! three-dimensional mismatch-energy landscape for a mobile ion, extracts percolating
//! low-energy conduction pathways, and converts the pathway bottleneck energies into
//! an estimated migration activation energy and Arrhenius ionic conductivity.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Structure`,
//!   `Lattice`, `Atom`), the pure bond-valence mathematics, parameter tables, and the
//!   site-energy evaluator.
//!
//! - **[`engine`]: The Logic Core.** This layer holds the scan configuration, the
//!   sampled `EnergyField`, pathway extraction for both the grid-percolation and
//!   site-hop strategies, the Arrhenius transport estimator, and the screening gate.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to analyze one material
//!   ([`workflows::screen`]) or a whole batch with per-material error isolation
//!   ([`workflows::batch`]).
//!
//! Everything in the library is deterministic and synchronous: a scan of the same
//! structure with the same configuration always produces the same result, and no
//! component performs I/O apart from explicit parameter-file loading.

pub mod core;
pub mod engine;
pub mod workflows;
