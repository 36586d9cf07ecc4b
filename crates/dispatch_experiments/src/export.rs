//! Result export to CSV and JSON.

use std::fs::File;

use dispatch_core::matching::SelectionPolicyKind;

use crate::metrics::ScenarioResult;

fn policy_label(policy: SelectionPolicyKind) -> &'static str {
    match policy {
        SelectionPolicyKind::Nearest => "nearest",
        SelectionPolicyKind::BestEfficiency => "best_efficiency",
    }
}

/// Write results as a CSV table, one row per scenario.
pub fn export_to_csv(
    results: &[ScenarioResult],
    file: File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record([
        "run_id",
        "seed",
        "fleet_size",
        "request_count",
        "policy",
        "matched",
        "unmatched",
        "match_rate",
        "total_revenue",
        "mean_pickup_distance",
    ])?;
    for result in results {
        wtr.write_record([
            result.run_id.to_string(),
            result.seed.to_string(),
            result.fleet_size.to_string(),
            result.request_count.to_string(),
            policy_label(result.policy).to_string(),
            result.matched.to_string(),
            result.unmatched.to_string(),
            format!("{:.4}", result.match_rate()),
            format!("{:.2}", result.total_revenue),
            format!("{:.3}", result.mean_pickup_distance),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write results as pretty-printed JSON.
pub fn export_to_json(
    results: &[ScenarioResult],
    file: File,
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(file, results)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_results() -> Vec<ScenarioResult> {
        vec![ScenarioResult {
            run_id: 0,
            seed: 42,
            fleet_size: 100,
            request_count: 500,
            policy: SelectionPolicyKind::Nearest,
            matched: 480,
            unmatched: 20,
            total_revenue: 12_345.67,
            mean_pickup_distance: 3.21,
        }]
    }

    #[test]
    fn csv_has_a_header_and_one_row_per_result() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("results.csv");
        export_to_csv(&sample_results(), File::create(&path).expect("create")).expect("export");

        let contents = std::fs::read_to_string(&path).expect("read");
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("run_id,seed,fleet_size"));
        assert!(lines[1].contains("nearest"));
    }

    #[test]
    fn json_round_trips_the_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("results.json");
        export_to_json(&sample_results(), File::create(&path).expect("create")).expect("export");

        let contents = std::fs::read_to_string(&path).expect("read");
        let parsed: serde_json::Value = serde_json::from_str(&contents).expect("parse");
        assert_eq!(parsed[0]["matched"], 480);
        assert_eq!(parsed[0]["policy"], "Nearest");
    }
}
