use crate::core::bv::params::BvParamTable;
use crate::core::models::structure::Structure;
use crate::engine::config::ScanConfig;
use crate::engine::error::EngineError;
use crate::engine::gate::ScreeningCriteria;
use crate::engine::pathways::PathwayStrategy;
use crate::workflows::screen::{self, ScreeningRecord};
use tracing::{info, warn};

/// A material whose analysis failed, with the error that stopped it.
#[derive(Debug)]
pub struct BatchFailure {
    pub formula: String,
    pub error: EngineError,
}

/// The aggregate outcome of a batch screening campaign.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Records for every successfully analyzed material, in input order.
    pub records: Vec<ScreeningRecord>,
    /// Materials whose analysis errored, in input order.
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    /// Number of materials that passed the screening gate.
    pub fn qualified_count(&self) -> usize {
        self.records.iter().filter(|r| r.qualified).count()
    }

    /// Number of materials analyzed successfully.
    pub fn total_analyzed(&self) -> usize {
        self.records.len()
    }
}

/// Screens a batch of materials with a shared configuration.
///
/// One material's failure never aborts the campaign: the error is recorded
/// alongside the successes and the run continues with the next material.
pub fn run(
    structures: &[Structure],
    params: &BvParamTable,
    config: &ScanConfig,
    strategy: PathwayStrategy,
    criteria: &ScreeningCriteria,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for structure in structures {
        match screen::run(structure, params, config, strategy, criteria) {
            Ok(record) => outcome.records.push(record),
            Err(error) => {
                warn!(formula = structure.formula(), %error, "material analysis failed");
                outcome.failures.push(BatchFailure {
                    formula: structure.formula().to_string(),
                    error,
                });
            }
        }
    }

    info!(
        analyzed = outcome.total_analyzed(),
        qualified = outcome.qualified_count(),
        failed = outcome.failures.len(),
        "batch screening complete"
    );
    outcome
}
