//! Delimited-text ingest and egress.
//!
//! - **Poll rows**: `name, telephone, DD-MM-YYYY, gender, postal_code`
//! - **Disease rows**: `*, *, *, birth_year, gender, postal_code, disease`
//! - **Output rows**: `name, telephone, birth_year, gender, postal_code, disease`
//!
//! Ingest is all-or-nothing: a row with the wrong width or a birth date that
//! does not split into three numeric runs fails the whole read with
//! [`ParseError`], so no record is ever admitted with a missing
//! quasi-identifier.
//!
//! ## Example
//!
//! ```rust
//! use reident::config::SourceOptions;
//! use reident::parsing::poll::parse_poll_text;
//!
//! let records = parse_poll_text(
//!     "Maliyah Fields,519 537 2516,14-12-1970,F,N2L 6P5\n",
//!     &SourceOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(records[0].birth_year.as_deref(), Some("1970"));
//! ```

pub mod delimited;
pub mod disease;
pub mod poll;

pub use delimited::{write_all_fields, write_records, ParseError};
