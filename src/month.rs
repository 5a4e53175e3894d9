//! Month filter parsing and month-number to month-name resolution.

use crate::Error;

/// Parse a raw `month` query parameter into a calendar month number.
///
/// # Errors
/// Returns [Error::InvalidParameter] if `raw` is not an integer between 1 and
/// 12 (inclusive).
pub fn parse_month(raw: &str) -> Result<u8, Error> {
    let month: u8 = raw
        .trim()
        .parse()
        .map_err(|_| Error::InvalidParameter(format!("month must be a number, got \"{raw}\"")))?;

    if !(1..=12).contains(&month) {
        return Err(Error::InvalidParameter(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }

    Ok(month)
}

/// Resolve a month number to its English name.
pub fn month_name(month: u8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        // Months come from parse_month, which rejects anything outside 1-12.
        _ => "",
    }
}
