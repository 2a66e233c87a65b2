use crate::error::Result;
use crate::types::report::{EvaluationReport, ProjectData};
use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub fn to_json(reports: &[EvaluationReport]) -> std::result::Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "version": env!("CARGO_PKG_VERSION"),
        "generatedAt": Utc::now().to_rfc3339(),
        "reports": reports,
    }))
}

pub fn results_file_name(compare: bool) -> &'static str {
    if compare {
        "result-compare.json"
    } else {
        "result.json"
    }
}

pub fn merge_into_results(
    folder: &Path,
    report: &EvaluationReport,
    compare: bool,
) -> Result<PathBuf> {
    let path = folder.join(results_file_name(compare));
    let mut results: BTreeMap<String, ProjectData> = match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content)?,
        Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
        Err(e) => return Err(e.into()),
    };
    results.insert(report.library.clone(), ProjectData::from(report));
    fs::write(&path, serde_json::to_string_pretty(&results)?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;
    use tempfile::TempDir;

    #[test]
    fn json_report_contains_scores_and_explanations() {
        let rendered = to_json(&[sample_report("/acme/client")]).expect("json should serialize");
        assert!(rendered.contains("\"overallScore\": 77.5"));
        assert!(rendered.contains("\"averageScore\": 78"));
        assert!(rendered.contains("\"llmExplanation\": \"Some duplicates.\""));
        assert!(rendered.contains("\"generatedAt\""));
    }

    #[test]
    fn merge_into_results_updates_existing_entries() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join("result.json"),
            r#"{ "/other/lib": { "scores": { "question": 10.0 }, "averageScore": 10 } }"#,
        )
        .expect("seed results should write");

        let mut report = sample_report("/acme/client");
        merge_into_results(dir.path(), &report, false).expect("first merge");
        report.results.average_score = 90;
        let path = merge_into_results(dir.path(), &report, false).expect("second merge");

        let merged: BTreeMap<String, ProjectData> =
            serde_json::from_str(&fs::read_to_string(path).expect("read results"))
                .expect("results should parse");
        assert_eq!(merged.len(), 2);
        assert_eq!(merged["/acme/client"].average_score, 90);
        assert_eq!(merged["/other/lib"].average_score, 10);
    }

    #[test]
    fn merge_into_results_fails_on_corrupt_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("result.json"), "not json").expect("write");
        let err = merge_into_results(dir.path(), &sample_report("/acme/client"), false);
        assert!(err.is_err());
    }
}
