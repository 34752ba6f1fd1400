use serde::{Deserialize, Serialize};

use super::{Column, DateSpan, Entity, FieldManifest, FieldValue, RecordKind, Tone};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Ready,
    Generating,
    Failed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Generating => "generating",
            Self::Failed => "failed",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ScheduleFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// A generated or scheduled report. Optional fields serialize as `null` so
/// every report exports the same set of columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub report_type: String,
    #[serde(default)]
    pub category: Option<String>,
    pub date: String,
    #[serde(default)]
    pub date_from: Option<String>,
    #[serde(default)]
    pub date_to: Option<String>,
    pub status: ReportStatus,
    #[serde(default)]
    pub scheduled: Option<bool>,
    #[serde(default)]
    pub schedule_frequency: Option<ScheduleFrequency>,
    #[serde(default)]
    pub email_recipients: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
}

static REPORT_MANIFEST: FieldManifest = FieldManifest {
    searchable: &["name", "type", "category", "description"],
    filterable: &["type", "category", "status", "scheduleFrequency"],
    sortable: &["name", "type", "category", "date", "status"],
    columns: &[
        Column::plain("name", "Name"),
        Column::plain("type", "Type"),
        Column::plain("category", "Category"),
        Column::plain("date", "Date"),
        Column::plain("status", "Status"),
    ],
};

impl Entity for Report {
    const KIND: RecordKind = RecordKind::Reports;

    fn manifest() -> &'static FieldManifest {
        &REPORT_MANIFEST
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(&self.id)),
            "name" => Some(FieldValue::Text(&self.name)),
            "type" => Some(FieldValue::Text(&self.report_type)),
            "category" => self.category.as_deref().map(FieldValue::Text),
            "date" => Some(FieldValue::Date(&self.date)),
            "dateFrom" => self.date_from.as_deref().map(FieldValue::Date),
            "dateTo" => self.date_to.as_deref().map(FieldValue::Date),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "scheduled" => self.scheduled.map(FieldValue::Flag),
            "scheduleFrequency" => self
                .schedule_frequency
                .map(|f| FieldValue::Text(f.as_str())),
            "description" => self.description.as_deref().map(FieldValue::Text),
            _ => None,
        }
    }

    fn date_span(&self) -> DateSpan<'_> {
        DateSpan {
            from: self.date_from.as_deref().unwrap_or(&self.date),
            to: self.date_to.as_deref().unwrap_or(&self.date),
        }
    }

    fn tone(&self) -> Tone {
        match self.status {
            ReportStatus::Ready => Tone::Success,
            ReportStatus::Generating => Tone::Warning,
            ReportStatus::Failed => Tone::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(date_from: Option<&str>, date_to: Option<&str>) -> Report {
        Report {
            id: "r1".to_string(),
            name: "Churn Analysis".to_string(),
            report_type: "Excel".to_string(),
            category: None,
            date: "2024-06-30".to_string(),
            date_from: date_from.map(str::to_string),
            date_to: date_to.map(str::to_string),
            status: ReportStatus::Ready,
            scheduled: None,
            schedule_frequency: None,
            email_recipients: None,
            description: None,
        }
    }

    #[test]
    fn single_date_stands_in_for_missing_ends() {
        let r = report(None, None);
        assert_eq!(r.date_span(), DateSpan::single("2024-06-30"));

        let r = report(Some("2024-06-01"), None);
        assert_eq!(r.date_span().from, "2024-06-01");
        assert_eq!(r.date_span().to, "2024-06-30");
    }

    #[test]
    fn absent_optional_fields_have_no_value() {
        let r = report(None, None);
        assert_eq!(r.field("category"), None);
        assert_eq!(r.field("type"), Some(FieldValue::Text("Excel")));
    }

    #[test]
    fn deserializes_source_shape() {
        let raw = r#"{
            "id": "7",
            "name": "Sales Performance Report",
            "type": "PDF",
            "category": "Sales",
            "date": "2024-06-30",
            "dateFrom": "2024-04-01",
            "dateTo": "2024-06-30",
            "status": "generating",
            "scheduled": false
        }"#;
        let r: Report = serde_json::from_str(raw).unwrap();
        assert_eq!(r.report_type, "PDF");
        assert_eq!(r.status, ReportStatus::Generating);
        assert_eq!(r.date_from.as_deref(), Some("2024-04-01"));
        assert!(r.email_recipients.is_none());
    }
}
