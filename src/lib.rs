//! Quality scoring for collections of documentation code snippets.
//!
//! A snippet document is split into records, each record is checked by a
//! fixed set of text predicates, and per-dimension ratios are combined with
//! externally produced grades into one weighted score per library.

pub mod analyze;
pub mod config;
pub mod error;
pub mod library;
pub mod pipeline;
pub mod report;
pub mod snippet;
pub mod types;
