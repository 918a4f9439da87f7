//! Text helpers shared by the sidebar, header and message pane.

use chrono::{DateTime, Utc};

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Chữ cái đầu của mỗi phần trong tên, dùng làm avatar dự phòng.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|part| part.chars().next())
        .collect()
}

/// "1 member" / "24 members". Zero is treated as unknown.
pub fn member_label(count: Option<u32>) -> Option<String> {
    match count {
        None | Some(0) => None,
        Some(1) => Some("1 member".to_string()),
        Some(n) => Some(format!("{n} members")),
    }
}

pub fn presence_label(is_online: bool) -> &'static str {
    if is_online {
        "Active now"
    } else {
        "Last seen recently"
    }
}

/// Khoảng cách từ `timestamp` tới `now`, ví dụ "5 minutes ago" hoặc "in about 2 hours".
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(timestamp).num_seconds();
    let distance = distance_in_words(seconds.unsigned_abs() as i64);

    if seconds < 0 {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

fn distance_in_words(seconds: i64) -> String {
    let minutes = round_div(seconds, 60);

    if minutes < 2 {
        return if minutes == 0 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        };
    }
    if minutes < 45 {
        return format!("{minutes} minutes");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        return format!("about {} hours", round_div(minutes, 60));
    }
    if minutes < 2_520 {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        return format!("{} days", round_div(minutes, MINUTES_IN_DAY));
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        return plural(round_div(minutes, MINUTES_IN_MONTH), "about ", "month");
    }

    let months = minutes / MINUTES_IN_MONTH;
    if months < 12 {
        return format!("{} months", round_div(minutes, MINUTES_IN_MONTH));
    }

    let years = months / 12;
    match months % 12 {
        0..=2 => plural(years, "about ", "year"),
        3..=8 => plural(years, "over ", "year"),
        _ => format!("almost {} years", years + 1),
    }
}

fn plural(n: i64, prefix: &str, unit: &str) -> String {
    if n == 1 {
        format!("{prefix}1 {unit}")
    } else {
        format!("{prefix}{n} {unit}s")
    }
}

fn round_div(value: i64, divisor: i64) -> i64 {
    (value as f64 / divisor as f64).round() as i64
}
