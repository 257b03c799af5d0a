//! Display formatting for money, dates and months.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Rupee amount with Indian digit grouping, e.g. `₹1,23,456.00`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() || amount == 0.0 {
        return "₹0.00".to_string();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}₹{}.{}", sign, group_indian(whole), fraction)
}

/// Last three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// `Jan 5, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Jan 5, 2024, 09:30 AM`.
pub fn format_date_time(timestamp: NaiveDateTime) -> String {
    timestamp.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Empty string for a missing date.
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}

pub fn format_optional_date_time(timestamp: Option<NaiveDateTime>) -> String {
    timestamp.map(format_date_time).unwrap_or_default()
}

/// English month name for 1-12, empty otherwise.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// `March 2024`.
pub fn period_label(month: u32, year: i32) -> String {
    format!("{} {}", month_name(month), year)
}

/// Years offered by period pickers: five back, four ahead.
pub fn selectable_years(today: NaiveDate) -> Vec<i32> {
    let current = today.year();
    (current - 5..current + 5).collect()
}
