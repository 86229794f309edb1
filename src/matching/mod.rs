//! Linkage engine: uniqueness filters, the re-identification join, and
//! query resolution.
//!
//! - [`uniqueness`]: quasi-identifier and exact-duplicate filters
//! - [`engine`]: [`LinkageEngine`] pairs quasi-unique records across collections
//! - [`query`]: classify individual people as identified, ambiguous or unmatched
//!
//! ## Algorithm
//!
//! 1. **Filter** each collection down to records whose (birth year, gender,
//!    postal code) tuple occurs exactly once within that collection
//! 2. **Join** the two filtered collections on that tuple
//!
//! Filtering before joining is what makes every pair a 1-to-1 correspondence:
//! a tuple shared by two people, or by two diseases, never produces output.
//!
//! ## Example
//!
//! ```rust
//! use reident::{LinkageEngine, Record};
//!
//! let poll = vec![Record::poll("Carol", "555-0003", "3", "3", "1975", "M", "N2L7R2")];
//! let disease = vec![Record::disease("1975", "M", "N2L7R2", "AIDS")];
//!
//! let matches = LinkageEngine::new(&poll, &disease).find_matches();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].record.disease.as_deref(), Some("AIDS"));
//! ```

pub mod engine;
pub mod query;
pub mod uniqueness;

pub use engine::{reidentify, LinkageEngine, MatchResult};
pub use query::{resolve_queries, QueryOutcome, QueryResult};
pub use uniqueness::{exact_duplicates, unique_by, unique_exact, unique_quasi_identifiers};
