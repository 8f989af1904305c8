use chrono::{NaiveDateTime, Utc};

/// How long ago `then` was, relative to now.
pub fn time_ago(then: NaiveDateTime) -> String {
    relative_to(then, Utc::now().naive_utc())
}

/// How long before `now` the moment `then` was, e.g. "5 minutes ago".
///
/// Anything older than a month is shown as a date.
pub fn relative_to(then: NaiveDateTime, now: NaiveDateTime) -> String {
    let seconds = (now - then).num_seconds();

    if seconds < 60 {
        return "just now".to_string();
    }

    let (amount, unit) = match seconds {
        s if s < 3_600 => (s / 60, "minute"),
        s if s < 86_400 => (s / 3_600, "hour"),
        s if s < 30 * 86_400 => (s / 86_400, "day"),
        _ => return then.format("%b %-d, %Y").to_string(),
    };

    if amount == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", amount, unit)
    }
}
