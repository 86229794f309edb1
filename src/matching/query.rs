use serde::Serialize;

use crate::core::record::Record;
use crate::matching::engine::{LinkageEngine, MatchResult};

/// What the linkage says about one queried person
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// The person was re-identified with exactly one disease record
    Identified { disease: String },

    /// Not re-identified, but these disease records share the person's
    /// quasi-identifiers (in disease-input order, repeats kept)
    Ambiguous { candidates: Vec<String> },

    /// No disease record shares the person's quasi-identifiers
    Unmatched,
}

impl std::fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identified { disease } => write!(f, "identified: {disease}"),
            Self::Ambiguous { candidates } => {
                write!(f, "ambiguous: {}", candidates.join(" | "))
            }
            Self::Unmatched => write!(f, "unmatched"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub query: Record,
    pub outcome: QueryOutcome,
}

/// Resolve each query person against a poll/disease linkage.
///
/// A query is identified when a re-identified record carries the same name,
/// telephone and quasi-identifiers. No likelihood is attached to ambiguous
/// candidates.
#[must_use]
pub fn resolve_queries(queries: &[Record], poll: &[Record], disease: &[Record]) -> Vec<QueryResult> {
    let matches = LinkageEngine::new(poll, disease).find_matches();

    queries
        .iter()
        .map(|query| QueryResult {
            query: query.clone(),
            outcome: resolve_one(query, &matches, disease),
        })
        .collect()
}

fn resolve_one(query: &Record, matches: &[MatchResult], disease: &[Record]) -> QueryOutcome {
    let identified = matches.iter().find(|m| {
        m.record.name == query.name
            && m.record.telephone == query.telephone
            && m.record.matches(query)
    });
    if let Some(m) = identified {
        return QueryOutcome::Identified {
            disease: m.record.disease.clone().unwrap_or_default(),
        };
    }

    let candidates: Vec<String> = disease
        .iter()
        .filter(|d| d.matches(query))
        .filter_map(|d| d.disease.clone())
        .collect();

    if candidates.is_empty() {
        QueryOutcome::Unmatched
    } else {
        QueryOutcome::Ambiguous { candidates }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (Vec<Record>, Vec<Record>) {
        let poll = vec![
            Record::poll("Alice", "555-0001", "1", "1", "1980", "F", "N2L6P5"),
            Record::poll("Bob", "555-0002", "2", "2", "1980", "F", "N2L6P5"),
            Record::poll("Carol", "555-0003", "3", "3", "1975", "M", "N2L7R2"),
        ];
        let disease = vec![
            Record::disease("1975", "M", "N2L7R2", "AIDS"),
            Record::disease("1980", "F", "N2L6P5", "Flu"),
        ];
        (poll, disease)
    }

    #[test]
    fn test_identified_query() {
        let (poll, disease) = fixtures();
        let queries = vec![poll[2].clone()];
        let results = resolve_queries(&queries, &poll, &disease);
        assert_eq!(
            results[0].outcome,
            QueryOutcome::Identified {
                disease: "AIDS".into()
            }
        );
    }

    #[test]
    fn test_ambiguous_query_lists_candidates() {
        let (poll, disease) = fixtures();
        let queries = vec![poll[0].clone()];
        let results = resolve_queries(&queries, &poll, &disease);
        assert_eq!(
            results[0].outcome,
            QueryOutcome::Ambiguous {
                candidates: vec!["Flu".into()]
            }
        );
    }

    #[test]
    fn test_same_key_different_person_is_not_identified() {
        let (poll, disease) = fixtures();
        let impostor = Record::poll("Dana", "555-0009", "9", "9", "1975", "M", "N2L7R2");
        let results = resolve_queries(&[impostor], &poll, &disease);
        assert_eq!(
            results[0].outcome,
            QueryOutcome::Ambiguous {
                candidates: vec!["AIDS".into()]
            }
        );
    }

    #[test]
    fn test_unmatched_query() {
        let (poll, disease) = fixtures();
        let stranger = Record::poll("Eve", "555-0005", "5", "5", "2001", "F", "K1A0B1");
        let results = resolve_queries(&[stranger], &poll, &disease);
        assert_eq!(results[0].outcome, QueryOutcome::Unmatched);
        assert_eq!(results[0].outcome.to_string(), "unmatched");
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = QueryOutcome::Identified {
            disease: "AIDS".into(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "identified");
        assert_eq!(json["disease"], "AIDS");
    }
}
