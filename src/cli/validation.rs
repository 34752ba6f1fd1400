use crate::cli::args::CliArgs;
use crate::output::OutputFormat;
use crate::record::RecordKind;
use crate::sample::DatePreset;

/// Checks the arguments that can be judged without the config file. Checks
/// that depend on the record kind only run when `--kind` is given here; the
/// merged run config repeats them once the kind is known.
pub fn validate(args: &CliArgs) -> Result<(), String> {
    let kind = match args.kind.as_deref() {
        Some(raw) => Some(
            RecordKind::parse(raw)
                .ok_or_else(|| format!("invalid --kind '{raw}', expected users, invoices or reports"))?,
        ),
        None => None,
    };
    if args.data.is_some() && args.sample {
        return Err("--data and --sample are mutually exclusive".to_string());
    }
    if let Some(kind) = kind {
        crate::utils::parse_field_filters(&args.filter, kind.manifest())
            .map_err(|e| format!("invalid --filter: {e}"))?;
        if let Some(raw) = args.sort.as_deref() {
            crate::utils::parse_sort_field(raw, kind.manifest())
                .map_err(|e| format!("invalid --sort: {e}"))?;
        }
    } else {
        for raw in args.filter.iter().filter(|v| !v.trim().is_empty()) {
            crate::utils::parse_field_filter(raw)
                .map_err(|e| format!("invalid --filter '{raw}': {e}"))?;
        }
    }

    let from = match args.from.as_deref() {
        Some(raw) => Some(
            crate::utils::parse_date_arg(raw).map_err(|e| format!("invalid --from: {e}"))?,
        ),
        None => None,
    };
    let to = match args.to.as_deref() {
        Some(raw) => {
            Some(crate::utils::parse_date_arg(raw).map_err(|e| format!("invalid --to: {e}"))?)
        }
        None => None,
    };
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err(format!("invalid date range, --from {from} is after --to {to}"));
        }
    }
    if let Some(raw) = args.range.as_deref() {
        if args.from.is_some() || args.to.is_some() {
            return Err("--range cannot be combined with --from/--to".to_string());
        }
        DatePreset::parse(raw).ok_or_else(|| {
            format!("invalid --range '{raw}', expected last7, last30, last90, this-month or last-month")
        })?;
    }

    if args.page_size == Some(0) {
        return Err("invalid page-size, expected positive integer".to_string());
    }
    if let Some(raw) = args.output_format.as_deref() {
        OutputFormat::parse(raw)
            .ok_or_else(|| format!("invalid --output-format '{raw}', expected text, json or csv"))?;
    }
    Ok(())
}
