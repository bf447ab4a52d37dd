//! # Engine Module
//!
//! This module implements the BVSE analysis engine: the configuration every scan
//! receives, the sampled energy landscape, conduction-pathway extraction, and the
//! reduction of pathways to transport estimates and a screening decision.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - The [`config::ScanConfig`] carrying every
//!   tunable constant, with builder and up-front validation
//! - **Error Handling** ([`error`]) - The engine-wide [`error::EngineError`]
//! - **Energy Field** ([`field`]) - The immutable N³ grid produced by a scan
//! - **Landscape Scanner** ([`scan`]) - Grid and site sampling of the evaluator
//! - **Pathway Extraction** ([`pathways`]) - Grid-percolation and site-hop
//!   strategies behind one [`pathways::PathwayStrategy`] selector
//! - **Transport Estimation** ([`arrhenius`]) - Bottleneck averaging, the barrier
//!   scale factor, and the Arrhenius conductivity relation
//! - **Screening Gate** ([`gate`]) - Pure pass/fail thresholds over computed values
//!
//! The engine is deterministic and synchronous. Nothing here mutates shared state:
//! each scan reads an immutable structure and writes only its freshly allocated
//! field and pathway list, so callers may run one material per worker without any
//! coordination.

pub mod arrhenius;
pub mod config;
pub mod error;
pub mod field;
pub mod gate;
pub mod pathways;
pub mod scan;
