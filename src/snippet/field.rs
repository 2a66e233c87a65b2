use super::SnippetRecord;
use crate::error::{EvalError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Source,
    Language,
    Code,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Description,
        Field::Source,
        Field::Language,
        Field::Code,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::Description => "DESCRIPTION",
            Self::Source => "SOURCE",
            Self::Language => "LANGUAGE",
            Self::Code => "CODE",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Self::Title => "TITLE:",
            Self::Description => "DESCRIPTION:",
            Self::Source => "SOURCE:",
            Self::Language => "LANGUAGE:",
            Self::Code => "CODE:",
        }
    }

    pub fn is_multi_valued(self) -> bool {
        matches!(self, Self::Language | Self::Code)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = EvalError;

    fn from_str(value: &str) -> Result<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == value)
            .ok_or_else(|| EvalError::InvalidField(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Single(&'a str),
    Multi(Vec<&'a str>),
}

impl<'a> FieldValue<'a> {
    pub fn as_single(&self) -> Option<&'a str> {
        match self {
            Self::Single(value) => Some(*value),
            Self::Multi(_) => None,
        }
    }

    pub fn segments(&self) -> Option<&[&'a str]> {
        match self {
            Self::Single(_) => None,
            Self::Multi(segments) => Some(segments.as_slice()),
        }
    }
}

pub fn access(record: SnippetRecord<'_>, field: Field) -> FieldValue<'_> {
    if field.is_multi_valued() {
        FieldValue::Multi(segments(record, field))
    } else {
        FieldValue::Single(line_value(record, field))
    }
}

pub fn access_named<'a>(record: SnippetRecord<'a>, name: &str) -> Result<FieldValue<'a>> {
    let field = name.parse::<Field>()?;
    Ok(access(record, field))
}

/// First line whose trimmed start carries the field marker, with the marker
/// and surrounding whitespace removed. Later occurrences are ignored.
pub(crate) fn line_value(record: SnippetRecord<'_>, field: Field) -> &str {
    let marker = field.marker();
    record
        .as_str()
        .lines()
        .find_map(|line| line.trim_start().strip_prefix(marker))
        .map(str::trim)
        .unwrap_or("")
}

/// Everything after each occurrence of the field marker. The text before the
/// first marker is dropped, so an absent field yields no segments.
pub(crate) fn segments(record: SnippetRecord<'_>, field: Field) -> Vec<&str> {
    record.as_str().split(field.marker()).skip(1).collect()
}
