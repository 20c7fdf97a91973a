use chrono::{DateTime, Utc};

use fbreaper_client::{ClientError, HealthStatus};
use reaperdash_common::{ScraperError, ScraperStatus};

use crate::timefmt::runtime_since;

/// Only this many of the backend's error entries are shown, in the order
/// the backend provided them.
pub const MAX_VISIBLE_ERRORS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub is_active: bool,
    pub current_target: String,
    pub progress: u8,
    pub runtime: String,
    pub eta: String,
    pub processed_items: u32,
    pub total_items: u32,
    pub errors: Vec<ErrorView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorView {
    pub kind_label: String,
    pub message: String,
    pub timestamp: String,
    pub target: String,
}

impl StatusView {
    pub fn from_status(status: &ScraperStatus, now: DateTime<Utc>) -> Self {
        Self {
            is_active: status.is_active,
            current_target: status.current_target.clone(),
            progress: status.progress,
            runtime: runtime_since(&status.start_time, now),
            eta: status.estimated_completion.clone(),
            processed_items: status.processed_items,
            total_items: status.total_items,
            errors: status
                .errors
                .iter()
                .take(MAX_VISIBLE_ERRORS)
                .map(ErrorView::from_error)
                .collect(),
        }
    }
}

impl ErrorView {
    fn from_error(error: &ScraperError) -> Self {
        Self {
            kind_label: kind_label(&error.kind.to_string()),
            message: error.message.clone(),
            timestamp: error.timestamp.clone(),
            target: error.target.clone(),
        }
    }
}

/// "rate_limit" -> "Rate Limit": underscores to spaces, each word
/// capitalized.
fn kind_label(kind: &str) -> String {
    kind.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Backend reachability as the status page shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendHealth {
    Up,
    Down,
}

/// Decide the indicator from a health probe. Anything other than a 2xx
/// response whose body says `"status": "UP"` is Down; errors are not
/// distinguished from a degraded body.
pub fn backend_health(result: Result<HealthStatus, ClientError>) -> BackendHealth {
    match result {
        Ok(health) if health.is_up() => BackendHealth::Up,
        _ => BackendHealth::Down,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reaperdash_common::ErrorKind;

    fn now() -> DateTime<Utc> {
        "2024-01-15T10:15:00Z".parse().unwrap()
    }

    fn status_with_errors(count: usize) -> ScraperStatus {
        ScraperStatus {
            is_active: true,
            current_target: "protest.group.2024".to_string(),
            progress: 67,
            total_items: 1500,
            processed_items: 1005,
            errors: (0..count)
                .map(|i| ScraperError {
                    id: i.to_string(),
                    message: format!("error {i}"),
                    timestamp: "2024-01-15T10:30:00Z".to_string(),
                    target: "protest.group.2024".to_string(),
                    kind: ErrorKind::RateLimit,
                })
                .collect(),
            start_time: "2024-01-15T08:00:00Z".to_string(),
            estimated_completion: "2h 15m".to_string(),
        }
    }

    #[test]
    fn runtime_is_floor_truncated() {
        let view = StatusView::from_status(&status_with_errors(0), now());
        assert_eq!(view.runtime, "2h 15m");
    }

    #[test]
    fn bad_start_time_renders_dash() {
        let mut status = status_with_errors(0);
        status.start_time = "not a date".to_string();
        let view = StatusView::from_status(&status, now());
        assert_eq!(view.runtime, "—");
    }

    #[test]
    fn eta_is_passed_through_verbatim() {
        let view = StatusView::from_status(&status_with_errors(0), now());
        assert_eq!(view.eta, "2h 15m");
    }

    #[test]
    fn errors_are_capped_at_five_in_order() {
        let view = StatusView::from_status(&status_with_errors(8), now());
        assert_eq!(view.errors.len(), MAX_VISIBLE_ERRORS);
        assert_eq!(view.errors[0].message, "error 0");
        assert_eq!(view.errors[4].message, "error 4");
    }

    #[test]
    fn kind_label_replaces_underscores_and_capitalizes() {
        assert_eq!(kind_label("rate_limit"), "Rate Limit");
        assert_eq!(kind_label("blocked"), "Blocked");
        assert_eq!(kind_label("parse_error"), "Parse Error");
    }

    #[test]
    fn health_indicator_decision_table() {
        let up: HealthStatus = serde_json::from_str(r#"{"status":"UP"}"#).unwrap();
        assert_eq!(backend_health(Ok(up)), BackendHealth::Up);

        let degraded: HealthStatus = serde_json::from_str(r#"{"status":"DEGRADED"}"#).unwrap();
        assert_eq!(backend_health(Ok(degraded)), BackendHealth::Down);

        let absent: HealthStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(backend_health(Ok(absent)), BackendHealth::Down);

        assert_eq!(
            backend_health(Err(ClientError::RequestFailed("Health check failed"))),
            BackendHealth::Down
        );
    }
}
