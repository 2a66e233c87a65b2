use super::predicates::Predicate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Formatting,
    Metadata,
    Initialization,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [
        Dimension::Formatting,
        Dimension::Metadata,
        Dimension::Initialization,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Formatting => "formatting",
            Self::Metadata => "metadata",
            Self::Initialization => "initialization",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredicateSet {
    #[default]
    Current,
    /// Earlier revision that also counted `multiple_code` against formatting.
    Legacy,
}

const FORMATTING: &[Predicate] = &[
    Predicate::Incomplete,
    Predicate::CodeTooShort,
    Predicate::LanguageIsDescription,
    Predicate::ContainsList,
];

const FORMATTING_LEGACY: &[Predicate] = &[
    Predicate::Incomplete,
    Predicate::CodeTooShort,
    Predicate::MultipleCode,
    Predicate::LanguageIsDescription,
    Predicate::ContainsList,
];

const METADATA: &[Predicate] = &[
    Predicate::Citation,
    Predicate::LicenseInfo,
    Predicate::DirectoryStructure,
];

const INITIALIZATION: &[Predicate] = &[Predicate::Imports, Predicate::Installs];

impl PredicateSet {
    pub fn predicates(self, dimension: Dimension) -> &'static [Predicate] {
        match (self, dimension) {
            (Self::Current, Dimension::Formatting) => FORMATTING,
            (Self::Legacy, Dimension::Formatting) => FORMATTING_LEGACY,
            (_, Dimension::Metadata) => METADATA,
            (_, Dimension::Initialization) => INITIALIZATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_formatting_excludes_multiple_code() {
        let predicates = PredicateSet::Current.predicates(Dimension::Formatting);
        assert!(!predicates.contains(&Predicate::MultipleCode));
        assert_eq!(predicates.len(), 4);
    }

    #[test]
    fn legacy_formatting_includes_multiple_code() {
        let predicates = PredicateSet::Legacy.predicates(Dimension::Formatting);
        assert!(predicates.contains(&Predicate::MultipleCode));
    }

    #[test]
    fn metadata_and_initialization_are_stable_across_sets() {
        for dimension in [Dimension::Metadata, Dimension::Initialization] {
            assert_eq!(
                PredicateSet::Current.predicates(dimension),
                PredicateSet::Legacy.predicates(dimension)
            );
        }
    }

    #[test]
    fn every_predicate_belongs_to_some_dimension_in_legacy_set() {
        for predicate in Predicate::ALL {
            assert!(
                Dimension::ALL
                    .iter()
                    .any(|dimension| PredicateSet::Legacy
                        .predicates(*dimension)
                        .contains(&predicate)),
                "{predicate} is not scored anywhere"
            );
        }
    }
}
