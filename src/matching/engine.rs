use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::core::record::Record;
use crate::matching::uniqueness::unique_quasi_identifier_positions;

/// One confident re-identification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Position of the identity-bearing record in the poll input
    pub poll_index: usize,

    /// Position of the anonymized record in the disease input
    pub disease_index: usize,

    /// The joined record: poll identity, shared quasi-identifiers, disease
    pub record: Record,
}

/// Links a poll collection against a disease collection
pub struct LinkageEngine<'a> {
    poll: &'a [Record],
    disease: &'a [Record],
}

impl<'a> LinkageEngine<'a> {
    #[must_use]
    pub fn new(poll: &'a [Record], disease: &'a [Record]) -> Self {
        Self { poll, disease }
    }

    /// Pair every quasi-unique poll record with the quasi-unique disease
    /// record sharing its key.
    ///
    /// Uniqueness is applied to each side before joining, so every result is
    /// a 1-to-1 correspondence. Results follow poll order.
    #[must_use]
    pub fn find_matches(&self) -> Vec<MatchResult> {
        let unique_poll = unique_quasi_identifier_positions(self.poll);
        let unique_disease = unique_quasi_identifier_positions(self.disease);

        debug!(
            "{} of {} poll records and {} of {} disease records have unique quasi-identifiers",
            unique_poll.len(),
            self.poll.len(),
            unique_disease.len(),
            self.disease.len()
        );

        // Keys are unique within each side, so each poll record has at most
        // one partner and indexing the disease side keeps nested-loop order.
        let disease_by_key: HashMap<_, _> = unique_disease
            .iter()
            .filter_map(|&i| self.disease[i].quasi_key().map(|key| (key, i)))
            .collect();

        let results: Vec<MatchResult> = unique_poll
            .into_iter()
            .filter_map(|poll_index| {
                let person = &self.poll[poll_index];
                let disease_index = *disease_by_key.get(&person.quasi_key()?)?;
                Some(MatchResult {
                    poll_index,
                    disease_index,
                    record: Record::reidentified(person, &self.disease[disease_index]),
                })
            })
            .collect();

        debug!("Re-identified {} records", results.len());
        results
    }
}

/// Join two collections and return only the re-identified records
#[must_use]
pub fn reidentify(poll: &[Record], disease: &[Record]) -> Vec<Record> {
    LinkageEngine::new(poll, disease)
        .find_matches()
        .into_iter()
        .map(|m| m.record)
        .collect()
}
