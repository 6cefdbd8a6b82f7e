//! Display formatting for feed entries

use chrono::{DateTime, NaiveDate, Utc};

const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Shown when a language has no entry in the palette
pub const DEFAULT_LANGUAGE_COLOR: &str = "#00ff88";

/// GitHub's linguist color for a language
pub fn language_color(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#f1e05a",
        "Python" => "#3572A5",
        "TypeScript" => "#2b7489",
        "Java" => "#b07219",
        "C++" => "#f34b7d",
        "C" => "#555555",
        "HTML" => "#e34c26",
        "CSS" => "#563d7c",
        "Go" => "#00ADD8",
        "Rust" => "#dea584",
        "Swift" => "#ffac45",
        "Kotlin" => "#F18E33",
        "PHP" => "#4F5D95",
        "Ruby" => "#701516",
        "Shell" => "#89e051",
        "Jupyter Notebook" => "#DA5B0B",
        _ => DEFAULT_LANGUAGE_COLOR,
    }
}

fn div_ceil(value: i64, divisor: i64) -> i64 {
    (value + divisor - 1) / divisor
}

/// Coarse "time ago" label, counting partial days as whole days
pub fn relative_time(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let diff_ms = (now - then).num_milliseconds().abs();
    let days = div_ceil(diff_ms, MS_PER_DAY);

    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        d if d < 7 => format!("{} days ago", d),
        d if d < 30 => format!("{} weeks ago", div_ceil(d, 7)),
        d if d < 365 => format!("{} months ago", div_ceil(d, 30)),
        d => format!("{} years ago", div_ceil(d, 365)),
    }
}

/// e.g. "December 1, 2024"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
