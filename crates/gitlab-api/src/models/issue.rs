use serde::Serialize;
use serde_json::Value;

/// Request to create an issue.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssue {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// Filters for searching project issues.
#[derive(Debug, Clone, Default)]
pub struct IssueSearch {
    /// Free-text query. Omitted from the request when unset.
    pub search: Option<String>,
    /// Issue state (`opened`, `closed` or `all`). Defaults to `opened`.
    pub state: Option<String>,
    /// Labels the issues must carry, sent as one comma-joined parameter.
    pub labels: Option<Vec<String>>,
}

/// Issues matching a search, passed through as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct IssueSearchResults {
    pub issues: Vec<Value>,
    pub count: usize,
}
