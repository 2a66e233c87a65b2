pub mod aggregate;
pub mod dimensions;
pub mod predicates;

use crate::error::{EvalError, Result};
use crate::snippet::{self, SnippetRecord};
use crate::types::scoring::{DimensionScore, TextAnalysis};
use dimensions::{Dimension, PredicateSet};
use predicates::Predicate;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticEvaluator {
    predicate_set: PredicateSet,
}

impl StaticEvaluator {
    pub fn new(predicate_set: PredicateSet) -> Self {
        Self { predicate_set }
    }

    pub fn predicate_set(&self) -> PredicateSet {
        self.predicate_set
    }

    pub fn formatting(&self, document: &str) -> Result<DimensionScore> {
        self.dimension(document, Dimension::Formatting)
    }

    pub fn metadata(&self, document: &str) -> Result<DimensionScore> {
        self.dimension(document, Dimension::Metadata)
    }

    pub fn initialization(&self, document: &str) -> Result<DimensionScore> {
        self.dimension(document, Dimension::Initialization)
    }

    pub fn dimension(&self, document: &str, dimension: Dimension) -> Result<DimensionScore> {
        self.score_records(&snippet::split(document), dimension)
    }

    /// Share of records, scaled to `0..=100`, on which none of the
    /// dimension's predicates fire.
    pub fn score_records(
        &self,
        records: &[SnippetRecord<'_>],
        dimension: Dimension,
    ) -> Result<DimensionScore> {
        if records.is_empty() {
            return Err(EvalError::EmptyDocument {
                dimension: dimension.to_string(),
            });
        }

        let predicates = self.predicate_set.predicates(dimension);
        let flagged = records
            .iter()
            .filter(|record| predicates.iter().any(|predicate| predicate.check(**record)))
            .count();
        let total = records.len();
        debug!(%dimension, total, flagged, "scored static dimension");

        Ok(DimensionScore {
            average_score: ((total - flagged) as f64 / total as f64) * 100.0,
        })
    }

    pub fn run_text_analysis(&self, document: &str) -> Result<TextAnalysis> {
        let records = snippet::split(document);
        Ok(TextAnalysis {
            formatting: self.score_records(&records, Dimension::Formatting)?,
            metadata: self.score_records(&records, Dimension::Metadata)?,
            initialization: self.score_records(&records, Dimension::Initialization)?,
        })
    }
}

pub fn formatting(document: &str) -> Result<DimensionScore> {
    StaticEvaluator::default().formatting(document)
}

pub fn metadata(document: &str) -> Result<DimensionScore> {
    StaticEvaluator::default().metadata(document)
}

pub fn initialization(document: &str) -> Result<DimensionScore> {
    StaticEvaluator::default().initialization(document)
}

pub fn run_text_analysis(document: &str) -> Result<TextAnalysis> {
    StaticEvaluator::default().run_text_analysis(document)
}

#[derive(Debug, Clone, Serialize)]
pub struct SnippetFlags {
    pub index: usize,
    pub title: String,
    pub flags: Vec<Predicate>,
}

pub fn flag_snippets(document: &str, only: Option<Predicate>) -> Vec<SnippetFlags> {
    snippet::split(document)
        .into_iter()
        .enumerate()
        .map(|(index, record)| SnippetFlags {
            index,
            title: record.title().to_string(),
            flags: Predicate::ALL
                .into_iter()
                .filter(|predicate| only.map_or(true, |wanted| wanted == *predicate))
                .filter(|predicate| predicate.check(record))
                .collect(),
        })
        .collect()
}
