//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render a signed minute count as `XhYYm` (e.g. "7h 24m", "-0h 05m").
/// Hours are unpadded, minutes are always two digits.
pub fn format_duration(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let abs_m = minutes.abs();
    format!("{}{}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

/// Inverse of [`format_duration`] for values in `(-1440, 1440)`.
pub fn parse_duration(s: &str) -> Option<i64> {
    let trimmed = s.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (hours, minutes) = rest.split_once("h ")?;
    let minutes = minutes.strip_suffix('m')?;

    let hours = hours.trim().parse::<i64>().ok()?;
    let minutes = minutes.trim().parse::<i64>().ok()?;

    let total = hours * 60 + minutes;
    Some(if negative { -total } else { total })
}
