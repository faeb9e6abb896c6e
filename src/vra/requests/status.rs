//! Request status normalization

use serde_json::Value;
use std::fmt;

use crate::config::api;

/// Status lookup input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusQuery {
    pub id: String,
    /// Return the full record instead of the normalized status
    pub raw: bool,
}

impl StatusQuery {
    pub fn new(id: impl Into<String>, raw: bool) -> Self {
        Self { id: id.into(), raw }
    }
}

/// Normalized request status
#[derive(Debug, Clone, PartialEq)]
pub enum RequestStatus {
    /// Request is submitted, awaiting approval or running
    InProgress,
    /// Terminal completion state reported by the server (e.g. `SUCCESSFUL`, `FAILED`)
    Completed(String),
    /// Neither a running state nor a completion record; rendered as `ERROR`
    Unknown,
    /// Full server record, returned when the query asked for it
    Raw(Value),
}

impl RequestStatus {
    /// Build the status for a fetched request record
    pub fn from_record(record: Value, raw: bool) -> Self {
        if raw {
            return RequestStatus::Raw(record);
        }
        Self::normalize(&record)
    }

    /// Map `state` and `requestCompletion` onto the status vocabulary
    ///
    /// Running states win over any completion record present.
    pub fn normalize(record: &Value) -> Self {
        let state = record.get("state").and_then(Value::as_str);
        if state.is_some_and(|s| api::IN_PROGRESS_STATES.contains(&s)) {
            return RequestStatus::InProgress;
        }

        match record
            .get("requestCompletion")
            .and_then(|c| c.get("requestCompletionState"))
            .and_then(Value::as_str)
        {
            Some(completion) => RequestStatus::Completed(completion.to_string()),
            None => RequestStatus::Unknown,
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::InProgress => write!(f, "IN_PROGRESS"),
            RequestStatus::Completed(state) => write!(f, "{}", state),
            RequestStatus::Unknown => write!(f, "ERROR"),
            RequestStatus::Raw(record) => match serde_json::to_string_pretty(record) {
                Ok(json) => write!(f, "{}", json),
                Err(_) => write!(f, "{}", record),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_in_progress_ignores_completion_record() {
        let record = json!({
            "state": "IN_PROGRESS",
            "requestCompletion": {"requestCompletionState": "FAILED"}
        });
        assert_eq!(RequestStatus::normalize(&record), RequestStatus::InProgress);
    }

    #[test]
    fn test_pending_and_submitted_are_in_progress() {
        for state in ["PENDING_PRE_APPROVAL", "SUBMITTED"] {
            let record = json!({"state": state});
            assert_eq!(RequestStatus::normalize(&record), RequestStatus::InProgress);
        }
    }

    #[test]
    fn test_completion_state_is_returned() {
        let record = json!({
            "state": "SUCCESSFUL",
            "requestCompletion": {"requestCompletionState": "SUCCESSFUL"}
        });
        let status = RequestStatus::normalize(&record);
        assert_eq!(status, RequestStatus::Completed("SUCCESSFUL".to_string()));
        assert_eq!(status.to_string(), "SUCCESSFUL");
    }

    #[test]
    fn test_failed_completion() {
        let record = json!({
            "state": "PROVIDER_FAILED",
            "requestCompletion": {"requestCompletionState": "FAILED"}
        });
        assert_eq!(
            RequestStatus::normalize(&record).to_string(),
            "FAILED"
        );
    }

    #[test]
    fn test_unknown_renders_error() {
        let record = json!({"state": "SOMETHING_ELSE"});
        let status = RequestStatus::normalize(&record);
        assert_eq!(status, RequestStatus::Unknown);
        assert_eq!(status.to_string(), "ERROR");
    }

    #[test]
    fn test_completion_without_state_field_is_unknown() {
        let record = json!({"requestCompletion": {"completionDetails": "n/a"}});
        assert_eq!(RequestStatus::normalize(&record), RequestStatus::Unknown);
    }

    #[test]
    fn test_empty_record_is_unknown() {
        assert_eq!(RequestStatus::normalize(&json!({})), RequestStatus::Unknown);
    }

    #[test]
    fn test_raw_passthrough() {
        let record = json!({"state": "IN_PROGRESS", "id": "r-1"});
        match RequestStatus::from_record(record.clone(), true) {
            RequestStatus::Raw(value) => assert_eq!(value, record),
            other => panic!("Expected RequestStatus::Raw, got {:?}", other),
        }
    }

    #[test]
    fn test_in_progress_display() {
        assert_eq!(RequestStatus::InProgress.to_string(), "IN_PROGRESS");
    }

    #[test]
    fn test_status_query_new() {
        let query = StatusQuery::new("r-1", false);
        assert_eq!(query.id, "r-1");
        assert!(!query.raw);
    }
}
