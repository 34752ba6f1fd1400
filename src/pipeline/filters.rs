use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::record::{DateSpan, Entity};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// `needle` must already be lowercased and non-empty.
pub(in crate::pipeline) fn matches_search<T: Entity>(record: &T, needle: &str) -> bool {
    T::manifest().searchable.iter().any(|name| {
        record
            .field(name)
            .map(|v| v.as_text().to_lowercase().contains(needle))
            .unwrap_or(false)
    })
}

pub(in crate::pipeline) fn matches_field_filters<T: Entity>(
    record: &T,
    filters: &BTreeMap<String, String>,
) -> bool {
    filters
        .iter()
        .filter(|(_, accepted)| !accepted.is_empty())
        .all(|(name, accepted)| {
            record
                .field(name)
                .map(|v| v.as_text() == accepted.as_str())
                .unwrap_or(false)
        })
}

/// Query date bounds, parsed once per filter pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::pipeline) enum DateBounds {
    Unbounded,
    Range {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
    /// A bound was present but not a date; nothing matches.
    Unsatisfiable,
}

impl DateBounds {
    pub(in crate::pipeline) fn from_query(from: Option<&str>, to: Option<&str>) -> Self {
        let from = from.map(str::trim).filter(|s| !s.is_empty());
        let to = to.map(str::trim).filter(|s| !s.is_empty());
        if from.is_none() && to.is_none() {
            return Self::Unbounded;
        }
        let parsed_from = match from {
            Some(raw) => match parse_date(raw) {
                Some(d) => Some(d),
                None => return Self::Unsatisfiable,
            },
            None => None,
        };
        let parsed_to = match to {
            Some(raw) => match parse_date(raw) {
                Some(d) => Some(d),
                None => return Self::Unsatisfiable,
            },
            None => None,
        };
        Self::Range {
            from: parsed_from,
            to: parsed_to,
        }
    }

    pub(in crate::pipeline) fn admits(&self, span: DateSpan<'_>) -> bool {
        match *self {
            Self::Unbounded => true,
            Self::Unsatisfiable => false,
            Self::Range { from, to } => {
                if let Some(from) = from {
                    match parse_date(span.to) {
                        Some(record_to) if record_to >= from => {}
                        _ => return false,
                    }
                }
                if let Some(to) = to {
                    match parse_date(span.from) {
                        Some(record_from) if record_from <= to => {}
                        _ => return false,
                    }
                }
                true
            }
        }
    }
}
