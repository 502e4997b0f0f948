use serde::{Deserialize, Serialize};

use crate::error::{GitLabError, Result};

/// Instance URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://gitlab.com";

/// API path prefix used when none is configured.
pub const DEFAULT_API_PATH: &str = "/api/v4/projects";

/// Connection settings shared by every API operation.
///
/// `token` and `project_id` are mandatory and checked before any request
/// goes out. `base_url` and `api_path` fall back to the gitlab.com defaults
/// when left empty, so self-hosted instances only need to override what
/// differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: String,
    pub project_id: String,
    pub api_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: String::new(),
            project_id: String::new(),
            api_path: DEFAULT_API_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    /// Settings for the public gitlab.com instance.
    ///
    /// `project_id` can be a numeric ID or a path like `group/project`.
    pub fn new(token: &str, project_id: &str) -> Self {
        Self {
            token: token.to_string(),
            project_id: project_id.to_string(),
            ..Self::default()
        }
    }

    /// Check that the mandatory fields are present.
    pub fn validate(&self) -> Result<()> {
        if self.token.is_empty() {
            return Err(GitLabError::MissingField("token"));
        }
        if self.project_id.is_empty() {
            return Err(GitLabError::MissingField("project_id"));
        }
        Ok(())
    }

    /// Instance URL with the default applied and trailing slashes trimmed.
    pub(crate) fn resolved_base_url(&self) -> &str {
        let url = self.base_url.trim_end_matches('/');
        if url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            url
        }
    }

    /// API path prefix with the default applied and trailing slashes trimmed.
    pub(crate) fn resolved_api_path(&self) -> &str {
        let path = self.api_path.trim_end_matches('/');
        if path.is_empty() {
            DEFAULT_API_PATH
        } else {
            path
        }
    }
}
