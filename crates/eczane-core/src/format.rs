//! # Display Formatting
//!
//! Turkish-convention formatting for text, money, file sizes and dates.
//! All functions are pure; anything time-relative takes `now` as an
//! argument instead of reading the clock.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Default cut-off for [`truncate_text`] used by list views.
pub const DEFAULT_TRUNCATE_CHARS: usize = 50;

/// Cut `text` to `max_chars` characters and append `...` if anything was
/// removed.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Up to two uppercase initials from a space-separated name:
/// `"ayşe nur yılmaz"` gives `"AN"`.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Format an amount of Turkish lira given in kuruş (1/100 lira):
/// `123456` gives `₺1.234,56`.
pub fn format_try(kurus: i64) -> String {
    let sign = if kurus < 0 { "-" } else { "" };
    let magnitude = kurus.unsigned_abs();
    let lira = group_thousands(magnitude / 100, '.');
    format!("{sign}₺{lira},{:02}", magnitude % 100)
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size in binary units, at most two decimals with trailing
/// zeros dropped: `1536` gives `1.5 KB`. Sizes of a terabyte or more are
/// still expressed in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut threshold: u64 = 1024;
    while unit < SIZE_UNITS.len() - 1 && bytes >= threshold {
        unit += 1;
        threshold = threshold.saturating_mul(1024);
    }

    let scaled = bytes as f64 / 1024f64.powi(unit as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    let number = format!("{rounded:.2}");
    let number = number.trim_end_matches('0').trim_end_matches('.');
    format!("{number} {}", SIZE_UNITS[unit])
}

/// Extension after the last dot, without the dot. Empty for names with no
/// dot or whose only dot is the first character (`.env`).
pub fn file_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if dot > 0 => &name[dot + 1..],
        _ => "",
    }
}

/// `dd/MM/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `dd/MM/yyyy HH:mm`.
pub fn format_date_time(datetime: NaiveDateTime) -> String {
    datetime.format("%d/%m/%Y %H:%M").to_string()
}

const MINUTES_IN_DAY: u64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: u64 = 2_520;
const MINUTES_IN_MONTH: u64 = 43_200;
const MINUTES_IN_TWO_MONTHS: u64 = 86_400;

fn round_div(value: u64, divisor: u64) -> u64 {
    (value + divisor / 2) / divisor
}

/// Turkish distance between `then` and `now` with a direction suffix:
/// `yaklaşık 3 saat önce`, `5 gün sonra`.
///
/// Buckets follow the usual "time ago" scale: under a minute, minutes,
/// about-hours, days, about-months, months, then years qualified as
/// about / more than / almost. Months are 30 days.
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds();
    let suffix = if seconds >= 0 { "önce" } else { "sonra" };
    let minutes = round_div(seconds.unsigned_abs(), 60);

    let distance = if minutes < 1 {
        "1 dakikadan az".to_string()
    } else if minutes < 45 {
        format!("{minutes} dakika")
    } else if minutes < 90 {
        "yaklaşık 1 saat".to_string()
    } else if minutes < MINUTES_IN_DAY {
        format!("yaklaşık {} saat", round_div(minutes, 60))
    } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        "1 gün".to_string()
    } else if minutes < MINUTES_IN_MONTH {
        format!("{} gün", round_div(minutes, MINUTES_IN_DAY))
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        format!("yaklaşık {} ay", round_div(minutes, MINUTES_IN_MONTH))
    } else {
        let months = minutes / MINUTES_IN_MONTH;
        if months < 12 {
            format!("{months} ay")
        } else {
            let years = months / 12;
            match months % 12 {
                0..=2 => format!("yaklaşık {years} yıl"),
                3..=8 => format!("{years} yıldan fazla"),
                _ => format!("neredeyse {} yıl", years + 1),
            }
        }
    };

    format!("{distance} {suffix}")
}
