//! Command implementations.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use roll_cli::render::{
    age_table, gender_table, household_table, page_footer, page_table, summary_table,
};
use roll_engine::{FilterState, RollSession};
use roll_ingest::load_dataset;

use crate::cli::{HouseholdArgs, StatsArgs, ValuesArgs, ViewArgs};

pub fn run_stats(args: &StatsArgs) -> Result<()> {
    let dataset = load_dataset(&args.data).context("load dataset")?;
    let session = RollSession::new(dataset);
    let summary = session.summary();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    println!("{}", summary_table(&summary));
    println!("{}", gender_table(&summary));
    println!("{}", age_table(&summary));
    Ok(())
}

pub fn run_view(args: &ViewArgs) -> Result<()> {
    let span = info_span!("view", data = %args.data.display());
    let _guard = span.enter();
    let dataset = load_dataset(&args.data).context("load dataset")?;
    let dataset_len = dataset.len();
    let mut session = RollSession::new(dataset);
    session.set_filters(filter_state(args));
    session.set_page_size(args.page_size);
    session.go_to_page(args.page);
    debug!(
        filtered = session.filtered_count(),
        page = args.page,
        page_size = args.page_size,
        "projecting view"
    );
    let view = session.page();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }
    println!("{}", page_table(&view));
    println!("{}", page_footer(&view, dataset_len));
    Ok(())
}

pub fn run_household(args: &HouseholdArgs) -> Result<()> {
    let dataset = load_dataset(&args.data).context("load dataset")?;
    let session = RollSession::new(dataset);
    let members = session.household(&args.household_id);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&members)?);
        return Ok(());
    }
    if members.is_empty() {
        println!("no records for household {}", args.household_id);
        return Ok(());
    }
    println!("{}", household_table(&members));
    Ok(())
}

pub fn run_values(args: &ValuesArgs) -> Result<()> {
    let dataset = load_dataset(&args.data).context("load dataset")?;
    let session = RollSession::new(dataset);
    for value in session.unique_values(args.field) {
        println!("{value}");
    }
    Ok(())
}

/// Assemble engine filter state from CLI flags; blank values stay unset.
fn filter_state(args: &ViewArgs) -> FilterState {
    let text = |value: &Option<String>| {
        value
            .as_deref()
            .and_then(|raw| FilterState::text_criterion(raw))
    };
    let set = |values: &[String]| {
        values
            .iter()
            .filter_map(|raw| FilterState::text_criterion(raw))
            .collect()
    };
    FilterState {
        constituency: text(&args.constituency),
        villages: set(&args.villages),
        streets: set(&args.streets),
        booths: set(&args.booths),
        wards: set(&args.wards),
        voter_id: text(&args.voter_id),
        house_number: text(&args.house_number),
        serial_number: text(&args.serial_number),
        name: text(&args.name),
        relation_type: text(&args.relation_type),
        relative_name: text(&args.relative_name),
        age_from: args.age_from,
        age_to: args.age_to,
        gender: text(&args.gender),
        page_number: text(&args.pdf_page),
        household_id: text(&args.household_id),
        household_seq: text(&args.household_seq),
    }
}
