//! Formatting utilities: color-marker substitution and datetime display.

use crate::config::color;

/// Replace the reserved color markers in a line with markup tags.
///
/// Pure and total: text without markers passes through unchanged, and an
/// unmatched marker simply never gets its closing tag rewritten.
pub fn render_markup(text: &str) -> String {
    text.replace(color::DIR, "<span class=\"text-blue-400\">")
        .replace(color::FILE, "<span class=\"text-green-400\">")
        .replace(color::RESET, "</span>")
}

/// Format a Unix timestamp as `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Civil-date arithmetic is done by hand, accounting for leap years.
pub fn format_datetime(timestamp: u64) -> String {
    let days = timestamp / 86400;
    let mut year = 1970i64;
    let mut remaining_days = days as i64;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 1;
    for days_in_month in days_in_months.iter() {
        if remaining_days < *days_in_month {
            break;
        }
        remaining_days -= days_in_month;
        month += 1;
    }

    let day = remaining_days + 1;
    let hour = (timestamp % 86400) / 3600;
    let min = (timestamp % 3600) / 60;
    let sec = timestamp % 60;
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        year, month, day, hour, min, sec
    )
}

/// Check if a year is a leap year.
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markup_directory() {
        let line = format!("{}projects{}", color::DIR, color::RESET);
        assert_eq!(
            render_markup(&line),
            "<span class=\"text-blue-400\">projects</span>"
        );
    }

    #[test]
    fn test_render_markup_file() {
        let line = format!("{}about.txt{}", color::FILE, color::RESET);
        assert_eq!(
            render_markup(&line),
            "<span class=\"text-green-400\">about.txt</span>"
        );
    }

    #[test]
    fn test_render_markup_plain_text_unchanged() {
        assert_eq!(render_markup("no markers here"), "no markers here");
        assert_eq!(render_markup(""), "");
    }

    #[test]
    fn test_render_markup_unmatched_marker() {
        // A lone reset still rewrites; text around it is untouched.
        assert_eq!(render_markup("x\x1b[0my"), "x</span>y");
    }

    #[test]
    fn test_format_datetime_epoch() {
        assert_eq!(format_datetime(0), "1970-01-01 00:00:00");
    }

    #[test]
    fn test_format_datetime_leap_year() {
        // 2024-02-29 12:34:56 UTC
        assert_eq!(format_datetime(1709210096), "2024-02-29 12:34:56");
    }

    #[test]
    fn test_format_datetime_recent() {
        // 2024-01-01 00:00:00 UTC
        assert_eq!(format_datetime(1704067200), "2024-01-01 00:00:00");
    }
}
