//! # Workflows Module
//!
//! This module provides the high-level entry points that tie the core models and
//! the analysis engine together into complete screening procedures.
//!
//! ## Architecture
//!
//! - **Screening Workflow** ([`screen`]) - Analyzes one material end to end:
//!   mobile-site discovery, landscape scan, pathway extraction, transport
//!   estimation, and the screening gate, producing one
//!   [`screen::ScreeningRecord`].
//! - **Batch Workflow** ([`batch`]) - Runs the screening workflow over many
//!   structures with a per-material error boundary, so one malformed input never
//!   aborts its siblings.

pub mod batch;
pub mod screen;
