use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum QueryError {
    #[error("Please select an Earth date or Martian sol")]
    MissingSelector,

    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Unknown mission event \"{input}\" (run `rovercam events` to list them)")]
    UnknownEvent { input: String },
}

#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("network error: {0}")]
    Network(ureq::Error),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no photos in response")]
    Empty,
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    Query(#[from] QueryError),

    #[error("{0}")]
    Fetch(#[from] FetchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_error_display_missing_selector() {
        assert_eq!(
            QueryError::MissingSelector.to_string(),
            "Please select an Earth date or Martian sol"
        );
    }

    #[test]
    fn query_error_display_date() {
        let e = QueryError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn query_error_display_unknown_event() {
        let e = QueryError::UnknownEvent {
            input: "olympus".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Unknown mission event "olympus" (run `rovercam events` to list them)"#
        );
    }

    #[test]
    fn fetch_error_status_carries_code() {
        assert_eq!(
            FetchError::Status(403).to_string(),
            "server responded with HTTP 403"
        );
    }

    #[test]
    fn fetch_error_empty() {
        assert_eq!(FetchError::Empty.to_string(), "no photos in response");
    }

    #[test]
    fn app_error_from_query_error() {
        let app: AppError = QueryError::MissingSelector.into();
        assert_eq!(app.to_string(), "Please select an Earth date or Martian sol");
    }

    #[test]
    fn app_error_from_fetch_error() {
        let app: AppError = FetchError::Status(500).into();
        assert_eq!(app.to_string(), "server responded with HTTP 500");
    }
}
