use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::filters::parse_date;
use crate::record::{Entity, FieldValue};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Stable sort by one sortable field. Fields the manifest does not list as
/// sortable leave the order untouched.
pub fn sort<T: Entity>(records: &mut [&T], spec: &SortSpec) {
    if !T::manifest().is_sortable(&spec.field) {
        return;
    }
    records.sort_by(|a, b| {
        let ord = compare_fields(a.field(&spec.field), b.field(&spec.field));
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

fn compare_fields(a: Option<FieldValue<'_>>, b: Option<FieldValue<'_>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        // NaN sorts after every number when ascending.
        (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => x.total_cmp(&y),
        (Some(FieldValue::Date(x)), Some(FieldValue::Date(y))) => {
            parse_date(x).cmp(&parse_date(y))
        }
        (Some(FieldValue::Flag(x)), Some(FieldValue::Flag(y))) => x.cmp(&y),
        (Some(x), Some(y)) => {
            let (x, y) = (x.as_text(), y.as_text());
            x.to_lowercase()
                .cmp(&y.to_lowercase())
                .then_with(|| x.cmp(&y))
        }
    }
}
