use serde::Serialize;
use serde_json::{Number, Value};
use thiserror::Error;

use crate::record::{Column, Entity};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize records: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode CSV: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    #[error("failed to flush CSV buffer: {source}")]
    Flush {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write export file: {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn number_cell(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    n.as_f64().map(|f| f.to_string()).unwrap_or_default()
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_cell(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(cell).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, ExportError> {
    writer.into_inner().map_err(|e| ExportError::Flush {
        source: e.into_error(),
    })
}

/// Writes records as CSV with one column per serialized field, named and
/// ordered as the first record serializes them. Values are written verbatim:
/// `null` becomes an empty cell and lists are joined with commas.
pub fn export_csv<T: Serialize>(records: &[&T]) -> Result<Vec<u8>, ExportError> {
    let rows = records
        .iter()
        .map(|r| serde_json::to_value(r).map_err(|e| ExportError::Serialize { source: e }))
        .collect::<Result<Vec<Value>, _>>()?;

    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = match first {
        Value::Object(map) => map.keys().cloned().collect(),
        _ => vec!["value".to_string()],
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(&headers)
        .map_err(|e| ExportError::Csv { source: e })?;
    for row in &rows {
        let cells: Vec<String> = match row {
            Value::Object(map) => headers
                .iter()
                .map(|h| map.get(h).map(cell).unwrap_or_default())
                .collect(),
            other => vec![cell(other)],
        };
        writer
            .write_record(&cells)
            .map_err(|e| ExportError::Csv { source: e })?;
    }
    finish(writer)
}

/// Writes the given columns only, headed by their labels.
pub fn export_table_csv<T: Entity>(
    records: &[&T],
    columns: &[Column],
) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(columns.iter().map(|c| c.label))
        .map_err(|e| ExportError::Csv { source: e })?;
    for record in records {
        let cells = columns.iter().map(|c| {
            record
                .field(c.field)
                .map(|v| v.as_text().into_owned())
                .unwrap_or_default()
        });
        writer
            .write_record(cells)
            .map_err(|e| ExportError::Csv { source: e })?;
    }
    finish(writer)
}

pub fn write_file(path: &str, bytes: &[u8]) -> Result<(), ExportError> {
    std::fs::write(path, bytes).map_err(|e| ExportError::Write {
        path: path.to_string(),
        source: e,
    })
}

/// Writes [`export_csv`] of `records` to `path`, returning the row count.
pub fn write_export<T: Serialize>(path: &str, records: &[&T]) -> Result<usize, ExportError> {
    let bytes = export_csv(records)?;
    write_file(path, &bytes)?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Invoice, InvoiceStatus, Report, ReportStatus};

    fn invoice(id: &str, plan: &str) -> Invoice {
        Invoice {
            id: id.to_string(),
            date: "2024-06-01".to_string(),
            amount: 299.0,
            plan: plan.to_string(),
            status: InvoiceStatus::Paid,
        }
    }

    #[test]
    fn header_follows_field_declaration_order() {
        let a = invoice("INV-001", "Pro");
        let out = String::from_utf8(export_csv(&[&a]).unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "id,date,amount,plan,status");
        assert_eq!(lines[1], "INV-001,2024-06-01,299,Pro,paid");
    }

    #[test]
    fn values_with_commas_are_quoted() {
        let a = invoice("INV-002", "Pro, annual");
        let out = String::from_utf8(export_csv(&[&a]).unwrap()).unwrap();
        assert!(out.contains("\"Pro, annual\""));
    }

    #[test]
    fn write_export_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoices.csv");
        let path = path.to_str().unwrap();
        let (a, b) = (invoice("INV-001", "Pro"), invoice("INV-003", "Starter"));

        assert_eq!(write_export(path, &[&a, &b]).unwrap(), 2);
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(
            written.lines().collect::<Vec<_>>(),
            vec![
                "id,date,amount,plan,status",
                "INV-001,2024-06-01,299,Pro,paid",
                "INV-003,2024-06-01,299,Starter,paid",
            ]
        );
    }

    #[test]
    fn write_export_reports_the_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let a = invoice("INV-001", "Pro");
        let err = write_export(path.to_str().unwrap(), &[&a]).unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
        assert!(err.to_string().contains("out.csv"));
    }

    #[test]
    fn empty_input_exports_nothing() {
        let none: Vec<&Invoice> = Vec::new();
        assert!(export_csv(&none).unwrap().is_empty());
    }

    #[test]
    fn optional_and_list_fields_keep_their_columns() {
        let r = Report {
            id: "1".to_string(),
            name: "Weekly Revenue Summary".to_string(),
            report_type: "CSV".to_string(),
            category: None,
            date: "2024-06-30".to_string(),
            date_from: None,
            date_to: None,
            status: ReportStatus::Ready,
            scheduled: Some(true),
            schedule_frequency: None,
            email_recipients: Some(vec![
                "admin@example.com".to_string(),
                "finance@example.com".to_string(),
            ]),
            description: None,
        };
        let out = String::from_utf8(export_csv(&[&r]).unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "id,name,type,category,date,dateFrom,dateTo,status,scheduled,scheduleFrequency,emailRecipients,description"
        );
        assert_eq!(
            lines[1],
            "1,Weekly Revenue Summary,CSV,,2024-06-30,,,ready,true,,\"admin@example.com,finance@example.com\","
        );
    }

    #[test]
    fn table_export_uses_column_labels() {
        let a = invoice("INV-001", "Pro");
        let out = String::from_utf8(export_table_csv(&[&a], Invoice::manifest().columns).unwrap())
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Invoice,Date,Amount,Plan,Status");
        assert_eq!(lines[1], "INV-001,2024-06-01,299,Pro,paid");
    }
}
