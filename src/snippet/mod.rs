pub mod field;

use field::{Field, FieldValue};

pub const SNIPPET_DELIMITER: &str =
    "\n----------------------------------------\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetRecord<'a> {
    text: &'a str,
}

impl<'a> SnippetRecord<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    pub fn field(&self, field: Field) -> FieldValue<'a> {
        field::access(*self, field)
    }

    pub fn title(&self) -> &'a str {
        field::line_value(*self, Field::Title)
    }

    pub fn source(&self) -> &'a str {
        field::line_value(*self, Field::Source)
    }

    pub fn language_segments(&self) -> Vec<&'a str> {
        field::segments(*self, Field::Language)
    }

    pub fn code_segments(&self) -> Vec<&'a str> {
        field::segments(*self, Field::Code)
    }
}

/// Splits a raw snippet document on [`SNIPPET_DELIMITER`]. Always yields at
/// least one record; an empty document yields a single empty record.
pub fn split(document: &str) -> Vec<SnippetRecord<'_>> {
    document
        .split(SNIPPET_DELIMITER)
        .map(SnippetRecord::new)
        .collect()
}
