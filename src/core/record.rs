use serde::Serialize;

use crate::core::types::QuasiKey;

/// One row from either the poll or the disease dataset.
///
/// Every attribute is optional; `None` is the "no value" marker and is kept
/// distinct from the empty string, which is a legitimate value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,

    /// Day of month; not used for matching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_day: Option<String>,

    /// Month of year; not used for matching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_month: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<String>,

    /// Single-character gender code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Only present on disease-source records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease: Option<String>,
}

impl Record {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        name: Option<String>,
        telephone: Option<String>,
        birth_day: Option<String>,
        birth_month: Option<String>,
        birth_year: Option<String>,
        gender: Option<String>,
        postal_code: Option<String>,
        disease: Option<String>,
    ) -> Self {
        Self {
            name,
            telephone,
            birth_day,
            birth_month,
            birth_year,
            gender,
            postal_code,
            disease,
        }
    }

    /// Build an identity-bearing record as found in the poll dataset
    #[must_use]
    pub fn poll(
        name: impl Into<String>,
        telephone: impl Into<String>,
        birth_day: impl Into<String>,
        birth_month: impl Into<String>,
        birth_year: impl Into<String>,
        gender: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            telephone: Some(telephone.into()),
            birth_day: Some(birth_day.into()),
            birth_month: Some(birth_month.into()),
            birth_year: Some(birth_year.into()),
            gender: Some(gender.into()),
            postal_code: Some(postal_code.into()),
            disease: None,
        }
    }

    /// Build an anonymized record as found in the disease dataset
    #[must_use]
    pub fn disease(
        birth_year: impl Into<String>,
        gender: impl Into<String>,
        postal_code: impl Into<String>,
        disease: impl Into<String>,
    ) -> Self {
        Self {
            birth_year: Some(birth_year.into()),
            gender: Some(gender.into()),
            postal_code: Some(postal_code.into()),
            disease: Some(disease.into()),
            ..Self::default()
        }
    }

    /// The quasi-identifier tuple, or `None` if any of the three is absent
    #[must_use]
    pub fn quasi_key(&self) -> Option<QuasiKey<'_>> {
        Some(QuasiKey {
            birth_year: self.birth_year.as_deref()?,
            gender: self.gender.as_deref()?,
            postal_code: self.postal_code.as_deref()?,
        })
    }

    /// Quasi-identifier match: birth year, gender and postal code all equal.
    ///
    /// Records with an incomplete key match nothing, themselves included.
    #[must_use]
    pub fn matches(&self, other: &Record) -> bool {
        match (self.quasi_key(), other.quasi_key()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Join an identity-bearing record with the disease of a matching record.
    ///
    /// Day and month of birth are dropped.
    #[must_use]
    pub fn reidentified(poll: &Record, disease: &Record) -> Self {
        Self {
            name: poll.name.clone(),
            telephone: poll.telephone.clone(),
            birth_day: None,
            birth_month: None,
            birth_year: poll.birth_year.clone(),
            gender: poll.gender.clone(),
            postal_code: poll.postal_code.clone(),
            disease: disease.disease.clone(),
        }
    }
}

fn fmt_field(value: Option<&String>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("'{v}'"))
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{name: {}, telephone: {}, birth_day: {}, birth_month: {}, birth_year: {}, gender: {}, postal_code: {}, disease: {}}}",
            fmt_field(self.name.as_ref()),
            fmt_field(self.telephone.as_ref()),
            fmt_field(self.birth_day.as_ref()),
            fmt_field(self.birth_month.as_ref()),
            fmt_field(self.birth_year.as_ref()),
            fmt_field(self.gender.as_ref()),
            fmt_field(self.postal_code.as_ref()),
            fmt_field(self.disease.as_ref()),
        )
    }
}
