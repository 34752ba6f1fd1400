pub mod export;

use colored::Colorize;
use itertools::Itertools;

use crate::pipeline::ViewResult;
use crate::record::{Column, ColumnFormat, Entity, Tone};

pub use export::ExportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" | "table" => Some(Self::Text),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".csv") {
        return Some(OutputFormat::Csv);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

fn format_cell<T: Entity>(record: &T, column: &Column) -> String {
    match record.field(column.field) {
        Some(value) => match column.format {
            ColumnFormat::Plain => value.as_text().into_owned(),
            ColumnFormat::Currency => format!("${}", value.as_text()),
        },
        None => "-".to_string(),
    }
}

fn tint(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Success => text.green().to_string(),
        Tone::Warning => text.yellow().to_string(),
        Tone::Error => text.red().to_string(),
        Tone::Info => text.cyan().to_string(),
        Tone::Neutral => text.to_string(),
    }
}

/// Renders the page as an aligned table followed by a pagination footer.
/// With `color` set, headers are bold and the status column is tinted by
/// the record's tone.
pub fn render_text<T: Entity>(result: &ViewResult<'_, T>, color: bool) -> Vec<u8> {
    let columns = T::manifest().columns;
    let mut out = String::new();

    if result.is_empty() {
        out.push_str("No records match the current filters.\n");
    } else {
        let rows: Vec<Vec<String>> = result
            .items
            .iter()
            .map(|r| columns.iter().map(|c| format_cell(*r, c)).collect())
            .collect();
        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| {
                rows.iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(c.label.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header = columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| {
                let padded = format!("{:<w$}", c.label, w = *w);
                if color {
                    padded.bold().to_string()
                } else {
                    padded
                }
            })
            .join("  ");
        out.push_str(header.trim_end());
        out.push('\n');

        for (record, row) in result.items.iter().zip(&rows) {
            let line = columns
                .iter()
                .zip(row)
                .zip(&widths)
                .map(|((c, value), w)| {
                    let padded = format!("{:<w$}", value, w = *w);
                    if color && c.field == "status" {
                        tint(&padded, record.tone())
                    } else {
                        padded
                    }
                })
                .join("  ");
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "{} · page {}/{}\n",
        result.summary(),
        result.page,
        result.total_pages
    ));
    let mut nav: Vec<String> = Vec::new();
    if result.has_prev() {
        nav.push(format!("prev: --page {}", result.page - 1));
    }
    if result.has_next() {
        nav.push(format!("next: --page {}", result.page + 1));
    }
    if !nav.is_empty() {
        out.push_str(&nav.join("  "));
        out.push('\n');
    }
    out.into_bytes()
}

pub fn render_json<T: Entity>(result: &ViewResult<'_, T>) -> Result<Vec<u8>, ExportError> {
    let mut out =
        serde_json::to_vec_pretty(result).map_err(|e| ExportError::Serialize { source: e })?;
    out.push(b'\n');
    Ok(out)
}

pub fn render_csv<T: Entity>(result: &ViewResult<'_, T>) -> Result<Vec<u8>, ExportError> {
    export::export_table_csv(&result.items, T::manifest().columns)
}
