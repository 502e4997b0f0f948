mod issue;
mod merge_request;

pub use issue::{CreateIssue, IssueSearch, IssueSearchResults};
pub use merge_request::CreateMergeRequest;

use serde::Serialize;

/// Outcome of a single API operation: the HTTP status plus the decoded
/// payload.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResult<T> {
    pub status: u16,
    pub payload: T,
}

/// Reference to a freshly created resource.
///
/// GitLab reports `id` as a JSON number for most resources; it is carried
/// here as an opaque string either way.
#[derive(Debug, Clone, Serialize)]
pub struct Created {
    pub id: String,
    pub web_url: String,
}
