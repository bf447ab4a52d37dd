use crate::commands::screen::ScreenSummary;
use crate::error::Result;
use std::path::Path;

/// Writes a human-readable Markdown rendition of a screening summary.
pub fn write_markdown(path: &Path, summary: &ScreenSummary) -> Result<()> {
    let mut lines: Vec<String> = vec![
        "# BVSE Screening Report".to_string(),
        String::new(),
        format!("- Materials analyzed: {}", summary.total_analyzed),
        format!(
            "- Qualified: {} ({:.1}%)",
            summary.qualified_count,
            if summary.total_analyzed == 0 {
                0.0
            } else {
                100.0 * summary.qualified_count as f64 / summary.total_analyzed as f64
            }
        ),
        format!("- Failed: {}", summary.failures.len()),
        String::new(),
        "## Results".to_string(),
        String::new(),
        "| Formula | Sites | Pathways | Ea (eV) | Conductivity (S/cm) | Qualified |".to_string(),
        "|---|---|---|---|---|---|".to_string(),
    ];

    for record in &summary.results {
        lines.push(format!(
            "| {} | {} | {} | {:.3} | {:.3e} | {} |",
            record.formula,
            record.mobile_site_count,
            record.pathway_count,
            record.activation_energy_ev,
            record.conductivity_s_cm,
            if record.qualified { "yes" } else { "no" },
        ));
    }

    if !summary.failures.is_empty() {
        lines.push(String::new());
        lines.push("## Failures".to_string());
        lines.push(String::new());
        for failure in &summary.failures {
            lines.push(format!("- **{}**: {}", failure.formula, failure.error));
        }
    }

    lines.push(String::new());
    std::fs::write(path, lines.join("\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::screen::FailureEntry;
    use ionpath::workflows::screen::ScreeningRecord;

    fn sample_summary() -> ScreenSummary {
        ScreenSummary {
            total_analyzed: 2,
            qualified_count: 1,
            qualified_materials: vec!["Li7La3Zr2O12".to_string()],
            results: vec![
                ScreeningRecord {
                    formula: "Li7La3Zr2O12".to_string(),
                    mobile_site_count: 56,
                    pathway_count: 3,
                    min_site_energy: 0.4,
                    avg_site_energy: 0.9,
                    activation_energy_ev: 0.22,
                    conductivity_s_cm: 2.1e-6,
                    qualified: true,
                },
                ScreeningRecord {
                    formula: "LiNbO3".to_string(),
                    mobile_site_count: 6,
                    pathway_count: 0,
                    min_site_energy: 1.8,
                    avg_site_energy: 2.4,
                    activation_energy_ev: 0.5,
                    conductivity_s_cm: 4.0e-11,
                    qualified: false,
                },
            ],
            failures: vec![FailureEntry {
                formula: "BrokenFile".to_string(),
                error: "site-energy evaluation failed".to_string(),
            }],
        }
    }

    #[test]
    fn report_lists_every_result_and_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("report.md");
        write_markdown(&path, &sample_summary()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("# BVSE Screening Report"));
        assert!(content.contains("Qualified: 1 (50.0%)"));
        assert!(content.contains("| Li7La3Zr2O12 | 56 | 3 | 0.220 |"));
        assert!(content.contains("| LiNbO3 |"));
        assert!(content.contains("- **BrokenFile**: site-energy evaluation failed"));
    }

    #[test]
    fn empty_summary_still_produces_a_valid_report() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("report.md");
        let summary = ScreenSummary {
            total_analyzed: 0,
            qualified_count: 0,
            qualified_materials: Vec::new(),
            results: Vec::new(),
            failures: Vec::new(),
        };
        write_markdown(&path, &summary).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Qualified: 0 (0.0%)"));
        assert!(!content.contains("## Failures"));
    }
}
