use crate::analyze::aggregate::combine;
use crate::analyze::StaticEvaluator;
use crate::error::Result;
use crate::library::{check_same_product, identify_product};
use crate::types::config::EvalConfig;
use crate::types::report::{round_score, EvaluationReport, FullResults};
use crate::types::scoring::{Scores, FORMATTING, INITIALIZATION, LLM, METADATA, QUESTION};
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct GradeOutput {
    pub score: f64,
    pub explanation: String,
}

/// Source of the model-graded metrics: how well the library's context
/// answers developer questions, and how a model rates the snippets.
pub trait ExternalGrader {
    fn question(&self, library: &str, product: &str) -> Result<GradeOutput>;
    fn llm(&self, library: &str, document: &str) -> Result<GradeOutput>;
}

#[derive(Debug, Clone)]
pub struct FixedGrades {
    pub question: GradeOutput,
    pub llm: GradeOutput,
}

impl ExternalGrader for FixedGrades {
    fn question(&self, _library: &str, _product: &str) -> Result<GradeOutput> {
        Ok(self.question.clone())
    }

    fn llm(&self, _library: &str, _document: &str) -> Result<GradeOutput> {
        Ok(self.llm.clone())
    }
}

pub struct LibraryInput<'a> {
    pub library: &'a str,
    pub document: &'a str,
    pub grader: &'a dyn ExternalGrader,
}

pub fn evaluate_library(input: &LibraryInput<'_>, config: &EvalConfig) -> Result<EvaluationReport> {
    let product = identify_product(input.library);
    score_library(input, product, config)
}

pub fn compare_libraries(
    first: &LibraryInput<'_>,
    second: &LibraryInput<'_>,
    config: &EvalConfig,
) -> Result<Vec<EvaluationReport>> {
    let products = [first.library, second.library]
        .map(identify_product)
        .to_vec();
    let product = check_same_product(&products)?;
    info!(%product, first = first.library, second = second.library, "comparing libraries");

    [first, second]
        .into_iter()
        .map(|input| score_library(input, product.clone(), config))
        .collect()
}

fn score_library(
    input: &LibraryInput<'_>,
    product: String,
    config: &EvalConfig,
) -> Result<EvaluationReport> {
    let question = input.grader.question(input.library, &product)?;
    let llm = input.grader.llm(input.library, input.document)?;
    let analysis =
        StaticEvaluator::new(config.predicate_set()).run_text_analysis(input.document)?;

    let scores: Scores = [
        (QUESTION, question.score),
        (LLM, llm.score),
        (FORMATTING, analysis.formatting.average_score),
        (METADATA, analysis.metadata.average_score),
        (INITIALIZATION, analysis.initialization.average_score),
    ]
    .into_iter()
    .map(|(metric, score)| (metric.to_string(), score))
    .collect();

    let overall_score = combine(&scores, &config.weights())?;
    info!(
        library = input.library,
        %product,
        overall_score,
        "evaluated library"
    );

    let results = FullResults {
        average_score: round_score(overall_score),
        question_average_score: round_score(question.score),
        question_explanation: question.explanation,
        llm_average_score: round_score(llm.score),
        llm_explanation: llm.explanation,
        formatting_avg_score: round_score(analysis.formatting.average_score),
        metadata_avg_score: round_score(analysis.metadata.average_score),
        initialization_avg_score: round_score(analysis.initialization.average_score),
    };

    Ok(EvaluationReport {
        library: input.library.to_string(),
        product,
        scores,
        overall_score,
        results,
    })
}
