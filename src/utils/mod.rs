use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::pipeline::parse_date;
use crate::record::FieldManifest;

/// Parses one `FIELD=VALUE` filter. The value may be empty, which clears the
/// filter for that field.
pub fn parse_field_filter(value: &str) -> Result<(String, String), String> {
    let (field, accepted) = value
        .split_once('=')
        .ok_or_else(|| "expected format FIELD=VALUE".to_string())?;
    let field = field.trim();
    if field.is_empty() {
        return Err("field name is empty".to_string());
    }
    Ok((field.to_string(), accepted.trim().to_string()))
}

/// Collects `FIELD=VALUE` filters, rejecting fields the record kind cannot be
/// filtered on. Later entries for the same field win.
pub fn parse_field_filters(
    values: &[String],
    manifest: &FieldManifest,
) -> Result<BTreeMap<String, String>, String> {
    let mut out = BTreeMap::new();
    for raw in values.iter().filter(|v| !v.trim().is_empty()) {
        let (field, accepted) =
            parse_field_filter(raw).map_err(|e| format!("invalid filter '{raw}': {e}"))?;
        if !manifest.is_filterable(&field) {
            return Err(format!(
                "cannot filter on '{field}', expected one of: {}",
                manifest.filterable.join(", ")
            ));
        }
        out.insert(field, accepted);
    }
    Ok(out)
}

pub fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD", value.trim()))
}

pub fn parse_sort_field(value: &str, manifest: &FieldManifest) -> Result<String, String> {
    let field = value.trim();
    if manifest.is_sortable(field) {
        Ok(field.to_string())
    } else {
        Err(format!(
            "cannot sort on '{field}', expected one of: {}",
            manifest.sortable.join(", ")
        ))
    }
}

pub fn log_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v`. A second call
/// is a no-op.
pub fn init_logging(verbose: u8) {
    let level = log_level(verbose);
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
