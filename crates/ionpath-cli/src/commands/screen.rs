use crate::cli::ScreenArgs;
use crate::config::{self, FileConfig};
use crate::error::{CliError, Result};
use crate::{input, report};
use indicatif::{ProgressBar, ProgressStyle};
use ionpath::engine::pathways::PathwayStrategy;
use ionpath::workflows::batch::{BatchFailure, BatchOutcome};
use ionpath::workflows::screen::{self as screen_workflow, ScreeningRecord};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

/// The JSON document the `screen` command emits.
#[derive(Debug, Serialize)]
pub struct ScreenSummary {
    pub total_analyzed: usize,
    pub qualified_count: usize,
    pub qualified_materials: Vec<String>,
    pub results: Vec<ScreeningRecord>,
    pub failures: Vec<FailureEntry>,
}

#[derive(Debug, Serialize)]
pub struct FailureEntry {
    pub formula: String,
    pub error: String,
}

pub fn run(args: ScreenArgs) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let scan_config = config::resolve_scan_config(&file_config, &args)?;
    let criteria = config::resolve_criteria(&file_config, &args);
    let table = super::load_param_table(args.params_toml.as_deref(), args.params_csv.as_deref())?;

    let documents = input::load_structures(&args.input)?;
    if documents.is_empty() {
        return Err(CliError::Argument(
            "no input structures found in the given paths".to_string(),
        ));
    }
    let structures = documents
        .iter()
        .map(|doc| doc.to_structure())
        .collect::<Result<Vec<_>>>()?;

    let strategy: PathwayStrategy = args.strategy.into();
    info!(
        materials = structures.len(),
        ?strategy,
        "starting screening campaign"
    );

    let pb = ProgressBar::new(structures.len() as u64).with_style(bar_style());
    pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
    pb.set_message("Screening");

    let results: Vec<_> = structures
        .par_iter()
        .map(|structure| {
            let result = screen_workflow::run(structure, &table, &scan_config, strategy, &criteria)
                .map_err(|error| (structure.formula().to_string(), error));
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_and_clear();

    let mut outcome = BatchOutcome::default();
    for result in results {
        match result {
            Ok(record) => outcome.records.push(record),
            Err((formula, error)) => {
                warn!(formula, %error, "material analysis failed");
                outcome.failures.push(BatchFailure { formula, error });
            }
        }
    }

    let summary = summarize(outcome);
    let json =
        serde_json::to_string_pretty(&summary).map_err(|e| CliError::Other(e.into()))?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)?;
            info!(path = %path.display(), "wrote screening results");
        }
        None => println!("{json}"),
    }

    if let Some(path) = &args.report {
        report::write_markdown(path, &summary)?;
        info!(path = %path.display(), "wrote Markdown report");
    }

    println!(
        "Screened {} materials: {} qualified, {} failed.",
        summary.total_analyzed,
        summary.qualified_count,
        summary.failures.len()
    );
    Ok(())
}

fn summarize(outcome: BatchOutcome) -> ScreenSummary {
    ScreenSummary {
        total_analyzed: outcome.total_analyzed(),
        qualified_count: outcome.qualified_count(),
        qualified_materials: outcome
            .records
            .iter()
            .filter(|r| r.qualified)
            .map(|r| r.formula.clone())
            .collect(),
        results: outcome.records,
        failures: outcome
            .failures
            .into_iter()
            .map(|f| FailureEntry {
                formula: f.formula,
                error: f.error.to_string(),
            })
            .collect(),
    }
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg:<12} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-")
}
