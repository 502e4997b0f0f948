use std::time::Duration;

use serde_json::Value;
use ureq::Agent;

use crate::config::ClientConfig;
use crate::endpoint::resource_endpoint;
use crate::error::{GitLabError, Result};
use crate::models::*;

/// Issue state applied when a search does not specify one.
const DEFAULT_SEARCH_STATE: &str = "opened";

/// GitLab REST API client scoped to a single project.
///
/// Every operation is one synchronous request; the client holds no state
/// across calls and can be shared between threads.
pub struct GitLabClient {
    agent: Agent,
    config: ClientConfig,
}

impl GitLabClient {
    /// Create a new client from connection settings.
    ///
    /// Mandatory fields are checked before each call rather than here, so
    /// a client with incomplete settings can be constructed but not used.
    pub fn new(config: ClientConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Self { agent, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL for a project-scoped resource.
    fn resource_url(&self, resource: &str) -> Result<String> {
        let endpoint = resource_endpoint(&self.config, resource)?;
        Ok(format!("{}{}", self.config.resolved_base_url(), endpoint))
    }

    /// The access token, required before any request is built.
    fn token(&self) -> Result<&str> {
        if self.config.token.is_empty() {
            return Err(GitLabError::MissingField("token"));
        }
        Ok(&self.config.token)
    }

    /// Check response status, keeping the raw body in the error if it is
    /// not successful.
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        Err(GitLabError::Api { status, body })
    }

    /// Decode a create response into its `{id, web_url}` pair.
    ///
    /// `id` usually arrives as a JSON number; it is passed through as an
    /// opaque string either way.
    fn decode_created(
        &self,
        response: ureq::http::Response<ureq::Body>,
    ) -> Result<ApiResult<Created>> {
        let mut response = self.check_response(response)?;
        let status = response.status().as_u16();

        let body = response.body_mut().read_to_string()?;
        let value: Value = serde_json::from_str(&body)?;

        let id = match value.get("id") {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.clone(),
            _ => return Err(GitLabError::MalformedResponse("id")),
        };
        let web_url = value
            .get("web_url")
            .and_then(Value::as_str)
            .ok_or(GitLabError::MalformedResponse("web_url"))?
            .to_string();

        Ok(ApiResult {
            status,
            payload: Created { id, web_url },
        })
    }

    /// Create a merge request from `source_branch` into `target_branch`.
    pub fn create_merge_request(&self, mr: &CreateMergeRequest) -> Result<ApiResult<Created>> {
        if mr.title.is_empty() {
            return Err(GitLabError::MissingField("title"));
        }
        if mr.source_branch.is_empty() {
            return Err(GitLabError::MissingField("source_branch"));
        }
        if mr.target_branch.is_empty() {
            return Err(GitLabError::MissingField("target_branch"));
        }

        let token = self.token()?;
        let url = self.resource_url("merge_requests")?;

        let response = self
            .agent
            .post(&url)
            .header("PRIVATE-TOKEN", token)
            .header("Content-Type", "application/json")
            .send_json(mr)?;

        self.decode_created(response)
    }

    /// Create a new issue.
    pub fn create_issue(&self, issue: &CreateIssue) -> Result<ApiResult<Created>> {
        if issue.title.is_empty() {
            return Err(GitLabError::MissingField("title"));
        }

        let token = self.token()?;
        let url = self.resource_url("issues")?;

        let response = self
            .agent
            .post(&url)
            .header("PRIVATE-TOKEN", token)
            .header("Content-Type", "application/json")
            .send_json(issue)?;

        self.decode_created(response)
    }

    /// Search project issues by text, state and labels.
    ///
    /// The matching records are passed through verbatim; `count` is the
    /// length of the returned page.
    pub fn search_issues(&self, query: &IssueSearch) -> Result<ApiResult<IssueSearchResults>> {
        let token = self.token()?;
        let mut url = self.resource_url("issues")?;

        let mut params = Vec::new();
        if let Some(search) = query.search.as_deref() {
            params.push(format!("search={}", urlencoding::encode(search)));
        }
        let state = query
            .state
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SEARCH_STATE);
        params.push(format!("state={}", state));
        if let Some(labels) = &query.labels {
            if !labels.is_empty() {
                params.push(format!("labels={}", urlencoding::encode(&labels.join(","))));
            }
        }
        url.push('?');
        url.push_str(&params.join("&"));

        let response = self
            .agent
            .get(&url)
            .header("PRIVATE-TOKEN", token)
            .header("Content-Type", "application/json")
            .call()?;

        let mut response = self.check_response(response)?;
        let status = response.status().as_u16();

        let body = response.body_mut().read_to_string()?;
        let issues: Vec<Value> = serde_json::from_str(&body)?;
        let count = issues.len();

        Ok(ApiResult {
            status,
            payload: IssueSearchResults { issues, count },
        })
    }
}
