use serde::Serialize;
use std::collections::BTreeMap;

pub type Score = f64;

pub type Scores = BTreeMap<String, Score>;

pub type Weights = BTreeMap<String, f64>;

pub const QUESTION: &str = "question";
pub const LLM: &str = "llm";
pub const FORMATTING: &str = "formatting";
pub const METADATA: &str = "metadata";
pub const INITIALIZATION: &str = "initialization";

pub const METRIC_KEYS: [&str; 5] = [QUESTION, LLM, FORMATTING, METADATA, INITIALIZATION];

pub fn default_weights() -> Weights {
    [
        (QUESTION, 0.8),
        (LLM, 0.05),
        (FORMATTING, 0.05),
        (METADATA, 0.025),
        (INITIALIZATION, 0.025),
    ]
    .into_iter()
    .map(|(key, weight)| (key.to_string(), weight))
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub average_score: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextAnalysis {
    pub formatting: DimensionScore,
    pub metadata: DimensionScore,
    pub initialization: DimensionScore,
}
