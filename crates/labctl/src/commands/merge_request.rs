use crate::cli::{MergeRequestCommands, OutputFormat};
use crate::output::output_result;
use anyhow::{Context, Result};
use gitlab_api::{CreateMergeRequest, GitLabClient};

pub fn handle_merge_request(
    client: &GitLabClient,
    action: &MergeRequestCommands,
    format: OutputFormat,
) -> Result<()> {
    match action {
        MergeRequestCommands::Create {
            title,
            source,
            target,
            description,
        } => handle_create(
            client,
            title,
            source,
            target,
            description.as_deref(),
            format,
        ),
    }
}

fn handle_create(
    client: &GitLabClient,
    title: &str,
    source: &str,
    target: &str,
    description: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let mr = CreateMergeRequest {
        title: title.to_string(),
        source_branch: source.to_string(),
        target_branch: target.to_string(),
        description: description.map(|s| s.to_string()),
    };

    let result = client
        .create_merge_request(&mr)
        .with_context(|| format!("Failed to create merge request '{}'", title))?;

    output_result(&result, format);
    Ok(())
}
