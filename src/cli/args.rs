use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dashview",
    version,
    about = "search, filter and page dashboard collections",
    long_about = "Dashview applies the dashboard's collection view (search, field filters, date range, sort, pagination) to users, invoices or reports loaded from a JSON/YAML file or the built-in sample data.\n\nExamples:\n  dashview --sample -k users -f role=member -p 2\n  dashview -d ./invoices.json -k invoices -q pro -s amount --desc -A json\n  dashview --sample -k reports --range last30 -x ./reports.csv\n\nTip: Use --config to persist defaults like page size and output format."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'd',
        long = "dt",
        visible_alias = "data",
        value_name = "FILE",
        help_heading = "Input",
        help = "Load records from a JSON or YAML file (an array of records)."
    )]
    pub data: Option<String>,

    #[arg(
        short = 'k',
        long = "knd",
        visible_alias = "kind",
        value_name = "KIND",
        help_heading = "Input",
        help = "Record kind: users, invoices or reports (default users)."
    )]
    pub kind: Option<String>,

    #[arg(
        long = "smp",
        visible_alias = "sample",
        help_heading = "Input",
        help = "Use the built-in sample records instead of --data."
    )]
    pub sample: bool,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.dashview/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "ic",
        visible_alias = "init-config",
        help_heading = "Input",
        help = "Write a commented default config file (if missing) and exit."
    )]
    pub init_config: bool,

    #[arg(
        short = 'q',
        long = "srch",
        visible_alias = "search",
        value_name = "TEXT",
        help_heading = "Query",
        help = "Case-insensitive substring matched against the kind's searchable fields."
    )]
    pub search: Option<String>,

    #[arg(
        short = 'f',
        long = "flt",
        visible_alias = "filter",
        value_name = "FIELD=VALUE",
        action = ArgAction::Append,
        help_heading = "Query",
        help = "Exact-match field filter (repeatable, e.g. role=member)."
    )]
    pub filter: Vec<String>,

    #[arg(
        long = "fr",
        visible_alias = "from",
        value_name = "DATE",
        help_heading = "Query",
        help = "Keep records whose date range overlaps from this day on (YYYY-MM-DD)."
    )]
    pub from: Option<String>,

    #[arg(
        long = "ut",
        visible_alias = "to",
        value_name = "DATE",
        help_heading = "Query",
        help = "Keep records whose date range overlaps up to this day (YYYY-MM-DD)."
    )]
    pub to: Option<String>,

    #[arg(
        long = "rng",
        visible_alias = "range",
        value_name = "PRESET",
        help_heading = "Query",
        help = "Date range preset: last7, last30, last90, this-month, last-month."
    )]
    pub range: Option<String>,

    #[arg(
        short = 's',
        long = "srt",
        visible_alias = "sort",
        value_name = "FIELD",
        help_heading = "Query",
        help = "Sort the filtered records by a field (stable)."
    )]
    pub sort: Option<String>,

    #[arg(
        long = "dsc",
        visible_alias = "desc",
        help_heading = "Query",
        help = "Sort descending instead of ascending."
    )]
    pub desc: bool,

    #[arg(
        short = 'p',
        long = "pg",
        visible_alias = "page",
        value_name = "N",
        help_heading = "Query",
        help = "1-based page to show (out-of-range pages are clamped)."
    )]
    pub page: Option<usize>,

    #[arg(
        short = 'n',
        long = "ps",
        visible_alias = "page-size",
        value_name = "N",
        help_heading = "Query",
        help = "Records per page (default 4)."
    )]
    pub page_size: Option<usize>,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write the rendered page to a file instead of stdout."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'A',
        long = "of",
        visible_alias = "output-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Output format (text, json, csv)."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 'x',
        long = "exp",
        visible_alias = "export",
        value_name = "FILE",
        help_heading = "Output",
        help = "Export every filtered record (all pages) to a CSV file."
    )]
    pub export: Option<String>,

    #[arg(
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,
}
