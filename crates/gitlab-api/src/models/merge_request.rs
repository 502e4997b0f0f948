use serde::Serialize;

/// Request to create a merge request.
#[derive(Debug, Clone, Serialize)]
pub struct CreateMergeRequest {
    pub title: String,
    pub source_branch: String,
    pub target_branch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
