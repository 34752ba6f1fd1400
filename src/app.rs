use chrono::NaiveDate;
use clap::{error::ErrorKind, CommandFactory, Parser};
use colored::Colorize;
use itertools::Itertools;
use tracing::{debug, info};

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::dataset::{self, DataSource, Dataset};
use crate::output::{self, export, OutputFormat};
use crate::pipeline::{self, Query, SortDirection, SortSpec, DATE_FORMAT};
use crate::record::{Entity, RecordKind};
use crate::sample::DatePreset;

fn render_custom_help() -> String {
    let cmd = CliArgs::command();
    let mut out = String::new();

    out.push_str(cmd.get_name());
    if let Some(version) = cmd.get_version() {
        out.push(' ');
        out.push_str(version);
    }
    out.push('\n');
    if let Some(about) = cmd.get_about() {
        out.push_str(&format!("{about}\n"));
    }
    if let Some(long_about) = cmd.get_long_about() {
        out.push_str(&format!("\n{long_about}\n"));
    }
    out.push_str(&format!("\nUsage: {} [OPTIONS]\n\n", cmd.get_name()));

    let args: Vec<&clap::Arg> = cmd.get_arguments().filter(|a| !a.is_hide_set()).collect();
    let headings: Vec<&str> = args
        .iter()
        .map(|a| a.get_help_heading().unwrap_or("Options"))
        .unique()
        .collect();

    for heading in headings {
        out.push_str(&format!("{heading}:\n"));
        for arg in args
            .iter()
            .filter(|a| a.get_help_heading().unwrap_or("Options") == heading)
        {
            let mut names: Vec<String> = Vec::new();
            if let Some(short) = arg.get_short() {
                names.push(format!("-{short}"));
            }
            if let Some(long) = arg.get_long() {
                names.push(format!("--{long}"));
            }
            for alias in arg.get_visible_aliases().unwrap_or_default() {
                let rendered = format!("--{alias}");
                if !names.contains(&rendered) {
                    names.push(rendered);
                }
            }
            let mut flags = names.join(", ");
            if arg.get_action().takes_values() {
                let value_name = arg
                    .get_value_names()
                    .and_then(|names| names.first())
                    .map(|name| name.as_str())
                    .unwrap_or("VALUE");
                flags.push_str(&format!(" <{value_name}>"));
            }
            out.push_str(&format!("  {flags}\n"));
            if let Some(help) = arg.get_help() {
                let help = help.to_string();
                if !help.trim().is_empty() {
                    out.push_str(&format!("          {}\n", help.trim()));
                }
            }
            out.push('\n');
        }
    }
    out
}

fn format_kv_line(label: &str, value: &str) {
    eprintln!(":: {:<10}: {}", label, value);
}

#[derive(Clone, Debug)]
struct RunConfig {
    kind: RecordKind,
    source: DataSource,
    query: Query,
    range_label: Option<&'static str>,
    output: Option<String>,
    output_format: OutputFormat,
    export: Option<String>,
    no_color: bool,
    verbose: u8,
}

fn resolve_source(args: &CliArgs, cfg: &ConfigFile, today: NaiveDate) -> DataSource {
    if let Some(path) = args.data.as_ref() {
        return DataSource::FilePath(path.clone());
    }
    if args.sample {
        return DataSource::Sample { today };
    }
    match cfg.data.as_ref() {
        Some(path) if !cfg.sample.unwrap_or(false) => DataSource::FilePath(path.clone()),
        _ => DataSource::Sample { today },
    }
}

fn build_run_config(args: CliArgs, cfg: ConfigFile, today: NaiveDate) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let kind_raw = args
        .kind
        .clone()
        .or(cfg.kind.clone())
        .unwrap_or_else(|| "users".to_string());
    let kind = RecordKind::parse(&kind_raw)
        .ok_or_else(|| format!("invalid kind '{kind_raw}', expected users, invoices or reports"))?;
    let manifest = kind.manifest();

    let source = resolve_source(&args, &cfg, today);

    let field_filters = crate::utils::parse_field_filters(&args.filter, manifest)
        .map_err(|e| format!("invalid --filter: {e}"))?;

    let sort = match args.sort.clone().or(cfg.sort.clone()) {
        Some(raw) => {
            let field = crate::utils::parse_sort_field(&raw, manifest)
                .map_err(|e| format!("invalid sort: {e}"))?;
            let direction = if args.desc || cfg.descending.unwrap_or(false) {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            Some(SortSpec { field, direction })
        }
        None => None,
    };

    let (date_from, date_to, range_label) = match args.range.as_deref() {
        Some(raw) => {
            let preset = DatePreset::parse(raw).ok_or_else(|| format!("invalid --range '{raw}'"))?;
            let (from, to) = preset.resolve(today);
            (
                Some(from.format(DATE_FORMAT).to_string()),
                Some(to.format(DATE_FORMAT).to_string()),
                Some(preset.label()),
            )
        }
        None => (args.from.clone(), args.to.clone(), None),
    };

    let page_size = args
        .page_size
        .or(cfg.page_size)
        .unwrap_or(pipeline::DEFAULT_PAGE_SIZE);
    if page_size == 0 {
        return Err("invalid page_size in config, expected positive integer".to_string());
    }

    let query = Query {
        search_text: args.search.clone().unwrap_or_default(),
        field_filters,
        date_from,
        date_to,
        sort,
        page: args.page.unwrap_or(pipeline::DEFAULT_PAGE),
        page_size,
    };

    let output = args.output.or(cfg.output);
    let output_format = match args.output_format.or(cfg.output_format) {
        Some(raw) => OutputFormat::parse(&raw)
            .ok_or_else(|| format!("invalid output format '{raw}', expected text, json or csv"))?,
        None => output
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or(OutputFormat::Text),
    };

    Ok(RunConfig {
        kind,
        source,
        query,
        range_label,
        output,
        output_format,
        export: args.export.or(cfg.export),
        no_color: args.no_color || cfg.no_color.unwrap_or(false),
        verbose: args.verbose,
    })
}

fn print_run_summary(run: &RunConfig) {
    let source = match &run.source {
        DataSource::FilePath(path) => path.clone(),
        DataSource::Inline(_) => "inline".to_string(),
        DataSource::Sample { today } => format!("sample (today {today})"),
    };
    format_kv_line("Kind", run.kind.as_str());
    format_kv_line("Source", &source);
    if !run.query.search_text.is_empty() {
        format_kv_line("Search", &run.query.search_text);
    }
    let filters = run
        .query
        .field_filters
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{k}={v}"))
        .join(" ");
    if !filters.is_empty() {
        format_kv_line("Filters", &filters);
    }
    if run.query.date_from.is_some() || run.query.date_to.is_some() {
        let range = format!(
            "{} .. {}",
            run.query.date_from.as_deref().unwrap_or("*"),
            run.query.date_to.as_deref().unwrap_or("*")
        );
        match run.range_label {
            Some(label) => format_kv_line("Dates", &format!("{range} ({label})")),
            None => format_kv_line("Dates", &range),
        }
    }
    if let Some(spec) = run.query.sort.as_ref() {
        let direction = match spec.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        format_kv_line("Sort", &format!("{} {direction}", spec.field));
    }
    eprintln!();
}

fn run_view<T: Entity>(records: &[T], run: &RunConfig) -> Result<(), String> {
    let selected = pipeline::select(records, &run.query);
    let result = pipeline::paginate(&selected, run.query.page, run.query.page_size);
    if result.page != run.query.page {
        debug!(requested = run.query.page, shown = result.page, "page clamped");
    }

    let color = !run.no_color && run.output.is_none();
    let rendered = match run.output_format {
        OutputFormat::Text => output::render_text(&result, color),
        OutputFormat::Json => output::render_json(&result).map_err(|e| e.to_string())?,
        OutputFormat::Csv => output::render_csv(&result).map_err(|e| e.to_string())?,
    };

    match run.output.as_deref() {
        Some(path) => {
            let path = config::expand_tilde_string(path);
            export::write_file(&path, &rendered).map_err(|e| e.to_string())?;
            info!(path = %path, rows = result.items.len(), "page written");
        }
        None => {
            use std::io::Write;
            std::io::stdout()
                .write_all(&rendered)
                .map_err(|e| format!("failed to write output: {e}"))?;
        }
    }

    if let Some(path) = run.export.as_deref() {
        let path = config::expand_tilde_string(path);
        let rows = export::write_export(&path, &selected).map_err(|e| e.to_string())?;
        info!(path = %path, rows, "filtered records exported");
        eprintln!("{} {} records to {}", "exported".green(), rows, path);
    }
    Ok(())
}

fn run(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }
    if run.verbose > 0 {
        print_run_summary(&run);
    }

    let dataset = dataset::load_dataset(run.kind, &run.source).map_err(|e| e.to_string())?;
    match &dataset {
        Dataset::Users(records) => run_view(records, &run),
        Dataset::Invoices(records) => run_view(records, &run),
        Dataset::Reports(records) => run_view(records, &run),
    }
}

fn load_user_config(args: &CliArgs) -> Result<ConfigFile, String> {
    match args.config.as_deref() {
        Some(path) => config::load_config(&config::expand_tilde(path), false),
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true),
            None => Ok(ConfigFile::default()),
        },
    }
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp => {
                print!("{}", render_custom_help());
                return Ok(());
            }
            ErrorKind::DisplayVersion => {
                let cmd = CliArgs::command();
                print!("{}", cmd.render_version());
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    crate::utils::init_logging(args.verbose);

    if args.init_config {
        let path = match args.config.as_deref() {
            Some(path) => config::expand_tilde(path),
            None => config::default_config_path()
                .ok_or_else(|| "cannot locate home directory for config".to_string())?,
        };
        config::ensure_default_config_file(&path)?;
        println!("config: {}", path.display());
        return Ok(());
    }

    let cfg = load_user_config(&args)?;
    let today = chrono::Local::now().date_naive();
    let run_config = build_run_config(args, cfg, today)?;
    run(run_config)
}
