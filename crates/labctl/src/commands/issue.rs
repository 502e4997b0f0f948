use crate::cli::{IssueCommands, OutputFormat};
use crate::output::output_result;
use anyhow::{Context, Result};
use gitlab_api::{CreateIssue, GitLabClient, IssueSearch};

pub fn handle_issue(
    client: &GitLabClient,
    action: &IssueCommands,
    format: OutputFormat,
) -> Result<()> {
    match action {
        IssueCommands::Create {
            title,
            description,
            labels,
        } => handle_create(client, title, description.as_deref(), labels, format),
        IssueCommands::Search {
            query,
            state,
            labels,
        } => handle_search(client, query.as_deref(), state.as_deref(), labels, format),
    }
}

fn handle_create(
    client: &GitLabClient,
    title: &str,
    description: Option<&str>,
    labels: &[String],
    format: OutputFormat,
) -> Result<()> {
    let issue = CreateIssue {
        title: title.to_string(),
        description: description.map(|s| s.to_string()),
        labels: if labels.is_empty() {
            None
        } else {
            Some(labels.to_vec())
        },
    };

    let result = client
        .create_issue(&issue)
        .with_context(|| format!("Failed to create issue '{}'", title))?;

    output_result(&result, format);
    Ok(())
}

fn handle_search(
    client: &GitLabClient,
    query: Option<&str>,
    state: Option<&str>,
    labels: &[String],
    format: OutputFormat,
) -> Result<()> {
    let search = IssueSearch {
        search: query.map(|s| s.to_string()),
        state: state.map(|s| s.to_string()),
        labels: if labels.is_empty() {
            None
        } else {
            Some(labels.to_vec())
        },
    };

    let result = client
        .search_issues(&search)
        .context("Failed to search issues")?;

    output_result(&result, format);
    Ok(())
}
