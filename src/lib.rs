//! # reident
//!
//! A library for re-identifying individuals in an anonymized disease dataset.
//!
//! Removing names and phone numbers from a dataset does not make it anonymous.
//! Birth year, gender and postal code are each shared by many people, but the
//! combination often singles out one person. When the same three attributes
//! appear in an identified dataset, such as a poll or voter roll, the two can be
//! joined back together.
//!
//! `reident` performs that linkage conservatively. It reports only
//! identifications that are certain given the data.
//!
//! ## Features
//!
//! - **Quasi-identifier uniqueness**: finds the records whose (birth year,
//!   gender, postal code) tuple occurs exactly once in their own dataset
//! - **1-to-1 linkage**: joins only unique records, so a reported pairing is
//!   never one of several candidates
//! - **Duplicate detection**: finds verbatim duplicate rows before they are used
//! - **Query resolution**: reports whether specific people were identified
//!
//! ## Example
//!
//! ```rust
//! use reident::{reidentify, Record};
//!
//! let poll = vec![
//!     Record::poll("Alice", "555-0001", "1", "1", "1980", "F", "N2L6P5"),
//!     Record::poll("Bob", "555-0002", "2", "2", "1980", "F", "N2L6P5"),
//!     Record::poll("Carol", "555-0003", "3", "3", "1975", "M", "N2L7R2"),
//! ];
//! let disease = vec![
//!     Record::disease("1980", "F", "N2L6P5", "Flu"),
//!     Record::disease("1975", "M", "N2L7R2", "AIDS"),
//! ];
//!
//! // Alice and Bob share their quasi-identifiers, so only Carol is re-identified
//! let joined = reidentify(&poll, &disease);
//! assert_eq!(joined.len(), 1);
//! assert_eq!(joined[0].name.as_deref(), Some("Carol"));
//! assert_eq!(joined[0].disease.as_deref(), Some("AIDS"));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Record model and the quasi-identifier key
//! - [`matching`]: Uniqueness filters, the linkage engine and query resolution
//! - [`parsing`]: Delimited-text ingest and egress
//! - [`config`]: Run configuration
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::record::Record;
pub use crate::core::types::*;
pub use matching::engine::{reidentify, LinkageEngine, MatchResult};
pub use matching::query::{resolve_queries, QueryOutcome, QueryResult};
