//! comfy-table rendering for roll views.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use roll_engine::{DatasetSummary, PageView};
use roll_model::{Field, VoterRecord};

/// Columns shown in record tables, in display order.
const RECORD_COLUMNS: [Field; 11] = [
    Field::SerialNumber,
    Field::Name,
    Field::RelationType,
    Field::RelativeName,
    Field::Age,
    Field::Gender,
    Field::HouseNumber,
    Field::Village,
    Field::Ward,
    Field::HouseholdId,
    Field::HouseholdSeq,
];

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn record_row(record: &VoterRecord) -> Vec<Cell> {
    RECORD_COLUMNS
        .iter()
        .map(|&field| Cell::new(record.text(field).unwrap_or_default()))
        .collect()
}

fn record_table<'a>(records: impl IntoIterator<Item = &'a VoterRecord>) -> Table {
    let mut table = styled_table();
    table.set_header(RECORD_COLUMNS.iter().map(|field| header_cell(field.column())));
    for record in records {
        table.add_row(record_row(record));
    }
    table
}

/// Render one page of the filtered roll.
pub fn page_table(view: &PageView<'_>) -> Table {
    record_table(view.visible.iter().copied())
}

/// Footer line under a page table.
pub fn page_footer(view: &PageView<'_>, dataset_len: usize) -> String {
    format!(
        "Showing {} of {} entries ({} total), page {} of {}",
        view.visible.len(),
        view.total_count,
        dataset_len,
        view.page_number,
        view.page_count
    )
}

/// Render the members of one household.
pub fn household_table(members: &[&VoterRecord]) -> Table {
    record_table(members.iter().copied())
}

/// Render the roll-wide summary counts.
pub fn summary_table(summary: &DatasetSummary) -> Table {
    let mut table = styled_table();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    let rows: [(&str, usize); 6] = [
        ("Voters", summary.total),
        ("Constituencies", summary.constituencies),
        ("Booths", summary.booths),
        ("Wards", summary.wards),
        ("Streets", summary.streets),
        ("Villages", summary.villages),
    ];
    for (label, count) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Render the gender tally.
pub fn gender_table(summary: &DatasetSummary) -> Table {
    let mut table = styled_table();
    table.set_header(vec![header_cell("Gender"), header_cell("Count")]);
    for (label, count) in [
        ("Male", summary.male),
        ("Female", summary.female),
        ("Other", summary.other),
    ] {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Render the age-bracket tally.
pub fn age_table(summary: &DatasetSummary) -> Table {
    let mut table = styled_table();
    table.set_header(vec![header_cell("Age range"), header_cell("Count")]);
    for (label, count) in [
        ("18-20", summary.age_groups.from_18_to_20),
        ("21-25", summary.age_groups.from_21_to_25),
        ("26-40", summary.age_groups.from_26_to_40),
        ("41-50", summary.age_groups.from_41_to_50),
        ("51-70+", summary.age_groups.from_51_up),
    ] {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use roll_engine::project;

    fn record(name: &str, age: u32) -> VoterRecord {
        VoterRecord {
            name: Some(name.to_string()),
            age: Some(age),
            village: Some("Melur".to_string()),
            ..VoterRecord::default()
        }
    }

    #[test]
    fn page_table_contains_visible_rows_only() {
        let owned = vec![record("Kumar", 34), record("Lakshmi", 31), record("Mani", 52)];
        let refs: Vec<&VoterRecord> = owned.iter().collect();
        let view = project(&refs, 2, 2);
        let rendered = page_table(&view).to_string();
        assert!(rendered.contains("Mani"));
        assert!(!rendered.contains("Kumar"));
    }

    #[test]
    fn page_footer_reports_counts() {
        let owned = vec![record("Kumar", 34), record("Lakshmi", 31)];
        let refs: Vec<&VoterRecord> = owned.iter().collect();
        let view = project(&refs, 10, 1);
        let footer = page_footer(&view, 5);
        assert_eq!(footer, "Showing 2 of 2 entries (5 total), page 1 of 1");
    }

    #[test]
    fn summary_tables_render_counts() {
        let summary = DatasetSummary::compute(&[record("Kumar", 34)]);
        let rendered = summary_table(&summary).to_string();
        assert!(rendered.contains("Villages"));
        assert!(rendered.contains('1'));
        let ages = age_table(&summary).to_string();
        assert!(ages.contains("26-40"));
    }
}
