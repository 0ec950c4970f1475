//! Table rendering for search and list results.

use crate::record::VisitRecord;

/// Width of the horizontal rules around a table.
const RULE_WIDTH: usize = 123;

/// Column header row.
const HEADER: &str = "No. | SR-Code |      Name     |   Health Problem  |    Program    |   Date    |  Time | Contact Number |";

/// Heading printed above search results.
pub const SEARCH_TITLE: &str = "Current Clinic Student Record(s): ";

/// Heading printed above the full listing.
pub const LIST_TITLE: &str = "Current Student Clinical Record(s): ";

/// Line printed in place of rows when nothing matched.
pub const NO_RECORDS: &str = "No Record Found!";

/// A rule of `ch` spanning the table width.
#[must_use]
pub fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(RULE_WIDTH).collect()
}

/// Format one numbered table row.
#[must_use]
pub fn row(number: usize, record: &VisitRecord) -> String {
    format!(
        " {} | {} | {} | {} | {} | {} | {} | {}",
        number,
        record.code,
        record.name,
        record.health_problem,
        record.program,
        record.date,
        record.time,
        record.contact
    )
}

/// Render a titled, numbered table of records.
///
/// Rows are numbered from 1 in the order given. Every line, including the
/// last, ends with a newline.
#[must_use]
pub fn table(title: &str, records: &[&VisitRecord]) -> String {
    let rule = rule('=');
    let mut lines = vec![title.to_string(), rule.clone(), HEADER.to_string(), rule.clone()];

    lines.extend(
        records
            .iter()
            .enumerate()
            .map(|(i, record)| row(i + 1, record)),
    );
    if records.is_empty() {
        lines.push(NO_RECORDS.to_string());
    }
    lines.push(rule);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
