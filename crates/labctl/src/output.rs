use crate::cli::OutputFormat;
use colored::Colorize;
use gitlab_api::{ApiResult, Created, IssueSearchResults};
use serde::Serialize;
use serde_json::Value;

pub fn output_result<T: Serialize + Displayable>(result: &T, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(result) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            println!("{}", result.display());
        }
    }
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err)
                .unwrap_or_else(|_| format!(r#"{{"error": true, "message": "{}"}}"#, err))
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}

pub trait Displayable {
    fn display(&self) -> String;
}

impl Displayable for ApiResult<Created> {
    fn display(&self) -> String {
        format!(
            "{} (HTTP {})\n  {}: {}\n  {}: {}",
            "Created".green().bold(),
            self.status,
            "ID".dimmed(),
            self.payload.id,
            "URL".dimmed(),
            self.payload.web_url.cyan()
        )
    }
}

impl Displayable for ApiResult<IssueSearchResults> {
    fn display(&self) -> String {
        let mut output = format!(
            "{} issues found (HTTP {})",
            self.payload.count.to_string().white().bold(),
            self.status
        );

        for issue in &self.payload.issues {
            let title = field(issue, "title").unwrap_or("<untitled>");
            let state = field(issue, "state").unwrap_or("unknown");
            output.push_str(&format!(
                "\n  {} {} [{}]",
                issue_ref(issue).cyan().bold(),
                title,
                state.dimmed()
            ));
            if let Some(web_url) = field(issue, "web_url") {
                output.push_str(&format!("\n    {}", web_url.dimmed()));
            }
        }

        output
    }
}

fn field<'a>(issue: &'a Value, name: &str) -> Option<&'a str> {
    issue.get(name).and_then(Value::as_str)
}

/// Project-scoped issue number, falling back to the global id.
fn issue_ref(issue: &Value) -> String {
    issue
        .get("iid")
        .or_else(|| issue.get("id"))
        .map(|id| format!("#{}", id))
        .unwrap_or_else(|| "#?".to_string())
}
