use chrono::Utc;

/// Whether a supporter period (epoch milliseconds) is still running.
pub fn is_supporter_active(supporter_until: Option<i64>) -> bool {
    match supporter_until {
        Some(until) => until > Utc::now().timestamp_millis(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_supporter_active;
    use chrono::Utc;

    #[test]
    fn future_timestamp_is_active() {
        let next_week = Utc::now().timestamp_millis() + 7 * 24 * 60 * 60 * 1000;
        assert!(is_supporter_active(Some(next_week)));
    }

    #[test]
    fn past_or_missing_timestamp_is_inactive() {
        assert!(!is_supporter_active(Some(0)));
        assert!(!is_supporter_active(None));
    }
}
