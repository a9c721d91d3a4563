use chrono::{DateTime, Utc};

const DAYS_PER_MONTH: i64 = 30;
const MONTHS_PER_YEAR: i64 = 12;

/// Short relative label for a last-update timestamp ("3 days ago").
pub fn updated_label(updated_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(updated_at) = updated_at else {
        return String::new();
    };

    let days = now.signed_duration_since(updated_at).num_days();
    if days < 1 {
        return "today".to_string();
    }
    if days == 1 {
        return "yesterday".to_string();
    }
    if days < DAYS_PER_MONTH {
        return format!("{days} days ago");
    }

    let months = days / DAYS_PER_MONTH;
    if months < MONTHS_PER_YEAR {
        return plural_ago(months, "month");
    }

    plural_ago(months / MONTHS_PER_YEAR, "year")
}

fn plural_ago(value: i64, unit: &str) -> String {
    if value == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{value} {unit}s ago")
    }
}
