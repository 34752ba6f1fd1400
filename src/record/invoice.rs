use serde::{Deserialize, Serialize};

use super::{Column, DateSpan, Entity, FieldManifest, FieldValue, RecordKind, Tone};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub date: String,
    pub amount: f64,
    pub plan: String,
    pub status: InvoiceStatus,
}

static INVOICE_MANIFEST: FieldManifest = FieldManifest {
    searchable: &["id", "plan"],
    filterable: &["plan", "status"],
    sortable: &["id", "date", "amount", "plan", "status"],
    columns: &[
        Column::plain("id", "Invoice"),
        Column::plain("date", "Date"),
        Column::currency("amount", "Amount"),
        Column::plain("plan", "Plan"),
        Column::plain("status", "Status"),
    ],
};

impl Entity for Invoice {
    const KIND: RecordKind = RecordKind::Invoices;

    fn manifest() -> &'static FieldManifest {
        &INVOICE_MANIFEST
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(&self.id)),
            "date" => Some(FieldValue::Date(&self.date)),
            "amount" => Some(FieldValue::Number(self.amount)),
            "plan" => Some(FieldValue::Text(&self.plan)),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            _ => None,
        }
    }

    fn date_span(&self) -> DateSpan<'_> {
        DateSpan::single(&self.date)
    }

    fn tone(&self) -> Tone {
        match self.status {
            InvoiceStatus::Paid => Tone::Success,
            InvoiceStatus::Pending => Tone::Warning,
            InvoiceStatus::Overdue => Tone::Error,
        }
    }
}
