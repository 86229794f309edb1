//! Core data types.
//!
//! - [`Record`]: one row from the poll or disease dataset, every field optional
//! - [`QuasiKey`]: the (birth year, gender, postal code) linkage key
//! - [`Source`]: which dataset a collection came from
//!
//! ## Record shapes
//!
//! | Field        | Poll | Disease | Re-identified |
//! |--------------|------|---------|---------------|
//! | name         | yes  |         | yes           |
//! | telephone    | yes  |         | yes           |
//! | birth day    | yes  |         |               |
//! | birth month  | yes  |         |               |
//! | birth year   | yes  | yes     | yes           |
//! | gender       | yes  | yes     | yes           |
//! | postal code  | yes  | yes     | yes           |
//! | disease      |      | yes     | yes           |

pub mod record;
pub mod types;

pub use record::Record;
pub use types::{QuasiKey, Source};
