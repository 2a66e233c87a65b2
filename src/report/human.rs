use super::StaticEntry;
use crate::types::report::EvaluationReport;

pub fn to_text(report: &EvaluationReport) -> String {
    let results = &report.results;
    let sections: [(&str, String); 8] = [
        ("Average Score", results.average_score.to_string()),
        ("Questions Score", results.question_average_score.to_string()),
        ("Questions Explanation", results.question_explanation.clone()),
        ("LLM Score", results.llm_average_score.to_string()),
        ("LLM Explanation", results.llm_explanation.clone()),
        ("Formatting Score", results.formatting_avg_score.to_string()),
        ("Project Metadata Score", results.metadata_avg_score.to_string()),
        ("Initialization Score", results.initialization_avg_score.to_string()),
    ];

    sections
        .iter()
        .flat_map(|(heading, value)| [format!("== {heading} =="), value.clone()])
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `result[-compare]-<library>.txt`, with `/`, `.` and `_` in the library
/// replaced by `-`.
pub fn file_name(library: &str, compare: bool) -> String {
    let slug = library
        .chars()
        .map(|ch| if matches!(ch, '/' | '.' | '_') { '-' } else { ch })
        .collect::<String>()
        .to_lowercase();
    format!(
        "result{}-{slug}.txt",
        if compare { "-compare" } else { "" }
    )
}

pub fn static_to_text(entries: &[StaticEntry]) -> String {
    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!("== {} ({} snippets) ==\n", entry.path, entry.snippets));
        output.push_str(&format!(
            "formatting: {:.2}\nmetadata: {:.2}\ninitialization: {:.2}\n\n",
            entry.analysis.formatting.average_score,
            entry.analysis.metadata.average_score,
            entry.analysis.initialization.average_score
        ));
    }
    output.trim_end().to_string()
}
