//! Display formatting for counts, durations and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

/// Rolling analytics windows offered on the dashboard.
pub const ANALYTICS_WINDOWS: [u32; 3] = [7, 30, 90];
pub const DEFAULT_ANALYTICS_DAYS: u32 = 30;
const MAX_ANALYTICS_DAYS: u32 = 90;

/// Clamp a requested window to what the backend accepts.
pub fn clamp_days(days: u32) -> u32 {
    days.clamp(1, MAX_ANALYTICS_DAYS)
}

/// `1234567` → `"1,234,567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Minutes as `Xh Ym`, dropping a zero part.
pub fn format_minutes(total: u64) -> String {
    let hours = total / 60;
    let minutes = total % 60;
    match (hours, minutes) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{}h", format_count(h)),
        (h, m) => format!("{}h {m}m", format_count(h)),
    }
}

/// Lesson length label, e.g. `"45 min"`.
pub fn format_duration(minutes: Option<i64>) -> Option<String> {
    minutes.filter(|m| *m > 0).map(|m| format!("{m} min"))
}

/// RFC 3339 timestamp as `Mar 1, 2024 10:05 AM`. Unparseable input is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) else {
        return raw.to_owned();
    };
    let fmt = format_description!(
        "[month repr:short] [day padding:none], [year] [hour repr:12 padding:none]:[minute] [period]"
    );
    parsed.format(&fmt).unwrap_or_else(|_| raw.to_owned())
}
