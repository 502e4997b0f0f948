use crate::config::ClientConfig;
use crate::error::{GitLabError, Result};

/// Build the project-scoped endpoint path for an API resource.
///
/// `resource` is a literal path segment (`"merge_requests"`, `"issues"`).
/// The project ID is percent-encoded so path identifiers like
/// `group/project` work alongside numeric IDs.
pub fn resource_endpoint(config: &ClientConfig, resource: &str) -> Result<String> {
    if config.project_id.is_empty() {
        return Err(GitLabError::MissingField("project_id"));
    }
    Ok(format!(
        "{}/{}/{}",
        config.resolved_api_path(),
        urlencoding::encode(&config.project_id),
        resource
    ))
}
