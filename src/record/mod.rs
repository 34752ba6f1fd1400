mod invoice;
mod report;
mod user;

use std::borrow::Cow;

use serde::Serialize;

pub use invoice::{Invoice, InvoiceStatus};
pub use report::{Report, ReportStatus, ScheduleFrequency};
pub use user::{User, UserRole, UserStatus};

/// The closed set of record kinds the pipeline knows how to view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Users,
    Invoices,
    Reports,
}

impl RecordKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "users" | "user" => Some(Self::Users),
            "invoices" | "invoice" | "billing" => Some(Self::Invoices),
            "reports" | "report" => Some(Self::Reports),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Invoices => "invoices",
            Self::Reports => "reports",
        }
    }

    pub fn manifest(&self) -> &'static FieldManifest {
        match self {
            Self::Users => User::manifest(),
            Self::Invoices => Invoice::manifest(),
            Self::Reports => Report::manifest(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnFormat {
    Plain,
    Currency,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub field: &'static str,
    pub label: &'static str,
    pub format: ColumnFormat,
}

impl Column {
    pub const fn plain(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            format: ColumnFormat::Plain,
        }
    }

    pub const fn currency(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            format: ColumnFormat::Currency,
        }
    }
}

/// Declares which fields of a record kind take part in search, exact-match
/// filtering, sorting and tabular display.
#[derive(Debug)]
pub struct FieldManifest {
    pub searchable: &'static [&'static str],
    pub filterable: &'static [&'static str],
    pub sortable: &'static [&'static str],
    pub columns: &'static [Column],
}

impl FieldManifest {
    pub fn is_filterable(&self, field: &str) -> bool {
        self.filterable.contains(&field)
    }

    pub fn is_sortable(&self, field: &str) -> bool {
        self.sortable.contains(&field)
    }
}

/// A borrowed view of one field value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    /// Kept as the caller supplied it; parsed only when compared.
    Date(&'a str),
    Flag(bool),
}

impl<'a> FieldValue<'a> {
    pub fn as_text(&self) -> Cow<'a, str> {
        match *self {
            FieldValue::Text(s) | FieldValue::Date(s) => Cow::Borrowed(s),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::Flag(b) => Cow::Borrowed(if b { "true" } else { "false" }),
        }
    }
}

/// The effective date span of a record. Records with a single date use it
/// for both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateSpan<'a> {
    pub from: &'a str,
    pub to: &'a str,
}

impl<'a> DateSpan<'a> {
    pub fn single(date: &'a str) -> Self {
        Self {
            from: date,
            to: date,
        }
    }
}

/// Badge colour of a record's status, used when rendering tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
    Info,
    Neutral,
}

pub trait Entity: Serialize {
    const KIND: RecordKind;

    fn manifest() -> &'static FieldManifest;

    fn id(&self) -> &str;

    /// Looks up a field by its serialized name.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    fn date_span(&self) -> DateSpan<'_>;

    fn tone(&self) -> Tone {
        Tone::Neutral
    }
}
