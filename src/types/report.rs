use super::scoring::{Score, Scores};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub library: String,
    pub product: String,
    pub scores: Scores,
    pub overall_score: Score,
    pub results: FullResults,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullResults {
    pub average_score: i64,
    pub question_average_score: i64,
    pub question_explanation: String,
    pub llm_average_score: i64,
    pub llm_explanation: String,
    pub formatting_avg_score: i64,
    pub metadata_avg_score: i64,
    pub initialization_avg_score: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub scores: Scores,
    pub average_score: i64,
}

impl From<&EvaluationReport> for ProjectData {
    fn from(report: &EvaluationReport) -> Self {
        Self {
            scores: report.scores.clone(),
            average_score: report.results.average_score,
        }
    }
}

pub fn round_score(score: Score) -> i64 {
    score.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_score_rounds_half_up_for_positive_scores() {
        assert_eq!(round_score(77.5), 78);
        assert_eq!(round_score(77.49), 77);
        assert_eq!(round_score(100.0), 100);
    }
}
