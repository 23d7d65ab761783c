//! CLI argument definitions for the roll viewer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use roll_engine::{DEFAULT_PAGE_SIZE, PAGE_SIZES};
use roll_model::Field;

#[derive(Parser)]
#[command(
    name = "voterroll",
    version,
    about = "Electoral roll viewer - filter, group, and page through roll records",
    long_about = "Inspect an electoral-roll export from the command line.\n\n\
                  Loads a JSON or CSV roll, applies the viewer's filter rules,\n\
                  groups households, and pages through the result."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print roll-wide summary statistics.
    Stats(StatsArgs),

    /// Filter the roll and print one page of matches.
    View(ViewArgs),

    /// List the members of one household ("One Roof") in running-number order.
    Household(HouseholdArgs),

    /// List the distinct values of one field.
    Values(ValuesArgs),
}

#[derive(Args)]
pub struct StatsArgs {
    /// Path to the roll export (.json or .csv).
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Emit JSON instead of tables.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ViewArgs {
    /// Path to the roll export (.json or .csv).
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Constituency (exact match).
    #[arg(long)]
    pub constituency: Option<String>,

    /// Village (repeatable; any listed value matches).
    #[arg(long = "village", value_name = "VILLAGE")]
    pub villages: Vec<String>,

    /// Street (repeatable; any listed value matches).
    #[arg(long = "street", value_name = "STREET")]
    pub streets: Vec<String>,

    /// Booth (repeatable; any listed value matches).
    #[arg(long = "booth", value_name = "BOOTH")]
    pub booths: Vec<String>,

    /// Ward (repeatable; any listed value matches).
    #[arg(long = "ward", value_name = "WARD")]
    pub wards: Vec<String>,

    /// Voter id (case-insensitive substring).
    #[arg(long = "voter-id")]
    pub voter_id: Option<String>,

    /// House number (case-insensitive exact match).
    #[arg(long = "house")]
    pub house_number: Option<String>,

    /// Serial number (numeric-aware exact match).
    #[arg(long = "serial")]
    pub serial_number: Option<String>,

    /// Name (case-insensitive substring).
    #[arg(long)]
    pub name: Option<String>,

    /// Relation type (matched after normalization).
    #[arg(long = "relation")]
    pub relation_type: Option<String>,

    /// Relative name (case-insensitive substring).
    #[arg(long = "relative")]
    pub relative_name: Option<String>,

    /// Minimum age, inclusive.
    #[arg(long = "age-from")]
    pub age_from: Option<u32>,

    /// Maximum age, inclusive.
    #[arg(long = "age-to")]
    pub age_to: Option<u32>,

    /// Gender (matched after normalization; "f", "female" and the Tamil
    /// word all select female).
    #[arg(long)]
    pub gender: Option<String>,

    /// Roll PDF page number (case-insensitive exact match).
    #[arg(long = "pdf-page")]
    pub pdf_page: Option<String>,

    /// Household id (exact match).
    #[arg(long = "household")]
    pub household_id: Option<String>,

    /// Household running number (exact match).
    #[arg(long = "household-seq")]
    pub household_seq: Option<String>,

    /// Result page to show (out-of-range values are clamped).
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,

    /// Rows per page.
    #[arg(long = "page-size", default_value_t = DEFAULT_PAGE_SIZE, value_parser = parse_page_size)]
    pub page_size: usize,

    /// Emit the page as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct HouseholdArgs {
    /// Path to the roll export (.json or .csv).
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Household id ("One Roof" value).
    #[arg(value_name = "ID")]
    pub household_id: String,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ValuesArgs {
    /// Path to the roll export (.json or .csv).
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Field to enumerate (e.g. village, ward, booth, relation).
    #[arg(value_name = "FIELD", value_parser = parse_field)]
    pub field: Field,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_field(raw: &str) -> Result<Field, String> {
    raw.parse()
}

fn parse_page_size(raw: &str) -> Result<usize, String> {
    let size: usize = raw
        .parse()
        .map_err(|_| format!("invalid page size: {raw}"))?;
    if PAGE_SIZES.contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "page size must be one of {PAGE_SIZES:?}, got {size}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_accepts_allowed_values() {
        for size in PAGE_SIZES {
            assert_eq!(parse_page_size(&size.to_string()), Ok(size));
        }
    }

    #[test]
    fn page_size_rejects_other_values() {
        assert!(parse_page_size("7").is_err());
        assert!(parse_page_size("zero").is_err());
    }

    #[test]
    fn cli_parses_view_filters() {
        let cli = Cli::try_parse_from([
            "voterroll",
            "view",
            "roll.json",
            "--village",
            "Melur",
            "--village",
            "Usilampatti",
            "--age-from",
            "20",
            "--page",
            "3",
            "--page-size",
            "50",
        ])
        .expect("parse");
        let Command::View(args) = cli.command else {
            panic!("expected view command");
        };
        assert_eq!(args.villages, vec!["Melur", "Usilampatti"]);
        assert_eq!(args.age_from, Some(20));
        assert_eq!(args.page, 3);
        assert_eq!(args.page_size, 50);
    }
}
