use chrono::NaiveDate;

use crate::ledger::Ledger;

use super::output;

const HEADERS: [&str; 5] = ["Name", "Table", "Time", "Price", "Date"];

/// Prints the quick-stats panel: booking count, total and today's revenue.
pub fn render_stats(ledger: &Ledger, today: NaiveDate) {
    output::section("Quick Stats");
    if ledger.is_empty() {
        output::info("No bookings yet.");
        return;
    }
    println!("Total bookings : {}", ledger.len());
    println!("Total revenue  : {:.2}", ledger.total_revenue());
    println!("Today's revenue: {:.2}", ledger.revenue_on(today));
}

/// Prints all bookings as a fixed-width table, newest date first.
pub fn render_bookings(ledger: &Ledger) {
    output::section("All Saved Bookings");
    if ledger.is_empty() {
        output::info("No bookings saved yet.");
        return;
    }

    let rows: Vec<[String; 5]> = ledger
        .sorted_by_date_desc()
        .into_iter()
        .map(|record| {
            [
                record.customer_name.clone(),
                record.resource_id.clone(),
                record.time_range.clone(),
                format!("{:.2}", record.price),
                record.date.to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    print_row(&HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("{}", rule.join("-+-"));
    for row in &rows {
        print_row(row, &widths);
    }
}

fn print_row(cells: &[String; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{:<width$}", cell))
        .collect();
    println!("{}", line.join(" | "));
}
