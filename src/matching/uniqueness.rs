use std::collections::HashMap;

use crate::core::record::Record;

/// Keep the records that no *other* entry of `records` is `same` as.
///
/// Self-exclusion is positional: two distinct entries with identical fields
/// are still compared against each other. Input order is preserved.
/// This is the quadratic reference definition; the bucketed filters below
/// must agree with it.
pub fn unique_by<F>(records: &[Record], same: F) -> Vec<&Record>
where
    F: Fn(&Record, &Record) -> bool,
{
    records
        .iter()
        .enumerate()
        .filter(|(i, candidate)| {
            !records
                .iter()
                .enumerate()
                .any(|(j, other)| *i != j && same(*candidate, other))
        })
        .map(|(_, record)| record)
        .collect()
}

/// Records whose (birth year, gender, postal code) tuple occurs exactly once.
///
/// Same output as `unique_by(records, Record::matches)`, in linear time.
/// A record missing any quasi-identifier matches nothing and is kept.
#[must_use]
pub fn unique_quasi_identifiers(records: &[Record]) -> Vec<&Record> {
    unique_quasi_identifier_positions(records)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

/// Input positions of the records [`unique_quasi_identifiers`] keeps
#[must_use]
pub fn unique_quasi_identifier_positions(records: &[Record]) -> Vec<usize> {
    let mut counts = HashMap::with_capacity(records.len());
    for key in records.iter().filter_map(Record::quasi_key) {
        *counts.entry(key).or_insert(0usize) += 1;
    }

    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.quasi_key().map_or(true, |key| counts[&key] == 1))
        .map(|(i, _)| i)
        .collect()
}

/// Records with no verbatim twin anywhere else in `records`.
///
/// Same output as `unique_by(records, |a, b| a == b)`.
#[must_use]
pub fn unique_exact(records: &[Record]) -> Vec<&Record> {
    let counts = exact_counts(records);
    records.iter().filter(|r| counts[r] == 1).collect()
}

/// Every record that has at least one verbatim twin, in input order
#[must_use]
pub fn exact_duplicates(records: &[Record]) -> Vec<&Record> {
    let counts = exact_counts(records);
    records.iter().filter(|r| counts[r] > 1).collect()
}

fn exact_counts(records: &[Record]) -> HashMap<&Record, usize> {
    let mut counts = HashMap::with_capacity(records.len());
    for record in records {
        *counts.entry(record).or_insert(0usize) += 1;
    }
    counts
}
