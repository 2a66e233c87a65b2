use super::StaticEntry;
use crate::types::report::EvaluationReport;

pub fn to_markdown(reports: &[EvaluationReport]) -> String {
    let mut output = String::new();
    output.push_str("# Snippet Evaluation Report\n\n");

    for report in reports {
        let results = &report.results;
        output.push_str(&format!("## {}\n\n", report.library));
        output.push_str(&format!("Product: `{}`\n\n", report.product));
        output.push_str(&format!(
            "Overall score: {} ({:.3})\n\n",
            results.average_score, report.overall_score
        ));
        output.push_str("### Metric Scores\n\n");
        for (metric, score) in &report.scores {
            output.push_str(&format!("- {metric}: {score:.2}\n"));
        }
        output.push('\n');

        output.push_str("### Explanations\n\n");
        output.push_str(&format!("- question: {}\n", results.question_explanation));
        output.push_str(&format!("- llm: {}\n\n", results.llm_explanation));
    }

    output
}

pub fn static_to_markdown(entries: &[StaticEntry]) -> String {
    let mut output = String::new();
    output.push_str("# Static Snippet Metrics\n\n");
    output.push_str("| file | snippets | formatting | metadata | initialization |\n");
    output.push_str("|---|---|---|---|---|\n");
    for entry in entries {
        output.push_str(&format!(
            "| {} | {} | {:.2} | {:.2} | {:.2} |\n",
            entry.path,
            entry.snippets,
            entry.analysis.formatting.average_score,
            entry.analysis.metadata.average_score,
            entry.analysis.initialization.average_score
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&[sample_report("/acme/client")]);
        assert!(rendered.contains("# Snippet Evaluation Report"));
        assert!(rendered.contains("## /acme/client"));
        assert!(rendered.contains("Overall score: 78 (77.500)"));
        assert!(rendered.contains("- formatting: 100.00"));
        assert!(rendered.contains("### Explanations"));
    }

    #[test]
    fn static_markdown_renders_table_header_without_entries() {
        let rendered = static_to_markdown(&[]);
        assert!(rendered.contains("| file | snippets |"));
        assert_eq!(rendered.lines().count(), 4);
    }
}
