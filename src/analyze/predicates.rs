//! Boolean checks over a single snippet. Each returns `true` when the quality
//! problem it names is present. Absent fields never count as a problem.

use crate::error::{EvalError, Result};
use crate::snippet::field::Field;
use crate::snippet::SnippetRecord;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const FENCE: &str = "```";
const MIN_CODE_TOKENS: usize = 5;
const UNORDERED_LIST_MARKERS: [&str; 4] = ["◯", "•", "☐", "□"];
const CITATION_FORMATS: [&str; 6] = ["bibtex", "biblatex", "ris", "mods", "marc", "csl json"];
const DIRECTORY_KEYWORDS: [&str; 4] = ["directory", "structure", "workflow", "filesystem"];
const TREE_SYMBOLS: [&str; 3] = ["├", "└", "|-"];
const IMPORT_KEYWORDS: [&str; 2] = ["import", "importing"];
const INSTALL_KEYWORDS: [&str; 4] = ["install", "initialize", "initializing", "installation"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    Incomplete,
    CodeTooShort,
    MultipleCode,
    LanguageIsDescription,
    ContainsList,
    Citation,
    LicenseInfo,
    DirectoryStructure,
    Imports,
    Installs,
}

impl Predicate {
    pub const ALL: [Predicate; 10] = [
        Predicate::Incomplete,
        Predicate::CodeTooShort,
        Predicate::MultipleCode,
        Predicate::LanguageIsDescription,
        Predicate::ContainsList,
        Predicate::Citation,
        Predicate::LicenseInfo,
        Predicate::DirectoryStructure,
        Predicate::Imports,
        Predicate::Installs,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::CodeTooShort => "code_too_short",
            Self::MultipleCode => "multiple_code",
            Self::LanguageIsDescription => "language_is_description",
            Self::ContainsList => "contains_list",
            Self::Citation => "citation",
            Self::LicenseInfo => "license_info",
            Self::DirectoryStructure => "directory_structure",
            Self::Imports => "imports",
            Self::Installs => "installs",
        }
    }

    pub fn check(self, record: SnippetRecord<'_>) -> bool {
        match self {
            Self::Incomplete => incomplete(record),
            Self::CodeTooShort => code_too_short(record),
            Self::MultipleCode => multiple_code(record),
            Self::LanguageIsDescription => language_is_description(record),
            Self::ContainsList => contains_list(record),
            Self::Citation => citation(record),
            Self::LicenseInfo => license_info(record),
            Self::DirectoryStructure => directory_structure(record),
            Self::Imports => imports(record),
            Self::Installs => installs(record),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Predicate {
    type Err = EvalError;

    fn from_str(value: &str) -> Result<Self> {
        Predicate::ALL
            .into_iter()
            .find(|predicate| predicate.id() == value)
            .ok_or_else(|| EvalError::ConfigParse(format!("unknown predicate: {value}")))
    }
}

pub fn incomplete(record: SnippetRecord<'_>) -> bool {
    !Field::ALL
        .iter()
        .all(|field| record.contains(field.marker()))
}

/// Some code block has fewer than five space-separated tokens once fences
/// are removed. Line breaks count as spaces; tabs do not separate tokens.
pub fn code_too_short(record: SnippetRecord<'_>) -> bool {
    record.code_segments().into_iter().any(|segment| {
        let code = trailing_code(segment).replace(FENCE, "");
        let code = code.trim().replace("\r\n", " ").replace('\n', " ");
        code.split(' ')
            .filter(|token| !token.trim().is_empty())
            .count()
            < MIN_CODE_TOKENS
    })
}

pub fn multiple_code(record: SnippetRecord<'_>) -> bool {
    record.as_str().matches(Field::Code.marker()).count() > 1
        || record.as_str().matches(Field::Language.marker()).count() > 1
}

/// The language slot holds prose (several words) or a non-language such as
/// `none` or `console`.
pub fn language_is_description(record: SnippetRecord<'_>) -> bool {
    record.language_segments().into_iter().any(|segment| {
        let language = language_label(segment).trim().to_lowercase();
        language.split(' ').count() > 1
            || language.contains("none")
            || language.contains("console")
    })
}

pub fn contains_list(record: SnippetRecord<'_>) -> bool {
    record.code_segments().into_iter().any(|segment| {
        let code = trailing_code(segment).replace(FENCE, "");
        let code = code.trim();
        let unordered = UNORDERED_LIST_MARKERS
            .iter()
            .any(|marker| code.contains(marker));
        let ordered = code.contains("1. ") && code.contains("2. ");
        unordered || ordered
    })
}

pub fn citation(record: SnippetRecord<'_>) -> bool {
    record.language_segments().into_iter().any(|segment| {
        let language = language_label(segment)
            .trim()
            .replace("\r\n", "")
            .replace('\n', "")
            .to_lowercase();
        CITATION_FORMATS
            .iter()
            .any(|format| language.contains(format))
    })
}

pub fn license_info(record: SnippetRecord<'_>) -> bool {
    record.source().to_lowercase().contains("license")
}

pub fn directory_structure(record: SnippetRecord<'_>) -> bool {
    let title = record.title().to_lowercase();
    if !DIRECTORY_KEYWORDS
        .iter()
        .any(|keyword| title.contains(keyword))
    {
        return false;
    }
    record.code_segments().into_iter().any(|segment| {
        let code = trailing_code(segment).trim();
        TREE_SYMBOLS.iter().any(|symbol| code.contains(symbol))
    })
}

pub fn imports(record: SnippetRecord<'_>) -> bool {
    let title = record.title().to_lowercase();
    if !IMPORT_KEYWORDS.iter().any(|keyword| title.contains(keyword)) {
        return false;
    }
    record.code_segments().into_iter().any(|segment| {
        let code = trailing_code(segment).trim().replace(FENCE, "");
        is_single_line(&code) && !code.contains('/')
    })
}

pub fn installs(record: SnippetRecord<'_>) -> bool {
    let title = record.title().to_lowercase();
    if !INSTALL_KEYWORDS.iter().any(|keyword| title.contains(keyword)) {
        return false;
    }
    record.code_segments().into_iter().any(|segment| {
        let code = trailing_code(segment).trim().replace(FENCE, "");
        is_single_line(&code)
    })
}

fn trailing_code(segment: &str) -> &str {
    segment
        .rsplit(Field::Code.marker())
        .next()
        .unwrap_or(segment)
}

fn language_label(segment: &str) -> &str {
    segment
        .split(Field::Code.marker())
        .next()
        .unwrap_or(segment)
}

fn is_single_line(code: &str) -> bool {
    code.lines().filter(|line| !line.trim().is_empty()).count() == 1
}
