use chrono::{DateTime, Utc};

/// Coarse age bucket for a timestamp: "{m}m ago" under an hour, "{h}h ago"
/// under a day, "{d}d ago" beyond. Integer-truncated, not calendar-aware.
/// An unparseable timestamp renders as "unknown".
pub fn relative_age(timestamp: &str, now: DateTime<Utc>) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) else {
        return "unknown".to_string();
    };

    let minutes = (now - parsed.with_timezone(&Utc)).num_minutes().max(0);
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}

/// Elapsed runtime as "{hours}h {minutes}m", floor-truncated. An
/// unparseable start time renders as a literal em dash.
pub fn runtime_since(start_time: &str, now: DateTime<Utc>) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(start_time) else {
        return "—".to_string();
    };

    let minutes = (now - parsed.with_timezone(&Utc)).num_minutes().max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2024-01-15T12:00:00Z".parse().unwrap()
    }

    fn ago(d: Duration) -> String {
        (now() - d).to_rfc3339()
    }

    #[test]
    fn minutes_bucket() {
        assert_eq!(relative_age(&ago(Duration::minutes(45)), now()), "45m ago");
        assert_eq!(relative_age(&ago(Duration::minutes(59)), now()), "59m ago");
    }

    #[test]
    fn hours_bucket() {
        assert_eq!(relative_age(&ago(Duration::hours(3)), now()), "3h ago");
        assert_eq!(relative_age(&ago(Duration::minutes(60)), now()), "1h ago");
    }

    #[test]
    fn days_bucket() {
        assert_eq!(relative_age(&ago(Duration::days(2)), now()), "2d ago");
        assert_eq!(relative_age(&ago(Duration::hours(24)), now()), "1d ago");
    }

    #[test]
    fn unparseable_timestamp_is_unknown() {
        assert_eq!(relative_age("not-a-date", now()), "unknown");
        assert_eq!(relative_age("", now()), "unknown");
    }

    #[test]
    fn future_timestamp_truncates_to_zero() {
        assert_eq!(relative_age(&(now() + Duration::minutes(5)).to_rfc3339(), now()), "0m ago");
    }

    #[test]
    fn runtime_formats_hours_and_minutes() {
        assert_eq!(runtime_since(&ago(Duration::minutes(150)), now()), "2h 30m");
        assert_eq!(runtime_since(&ago(Duration::minutes(5)), now()), "0h 5m");
    }

    #[test]
    fn runtime_with_bad_start_is_dash() {
        assert_eq!(runtime_since("garbage", now()), "—");
    }
}
