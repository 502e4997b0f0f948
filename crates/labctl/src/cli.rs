use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "labctl",
    version,
    about = "CLI for GitLab merge requests and issues"
)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to a TOML config file
    #[arg(long, env = "GITLAB_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// GitLab instance URL (overrides config file)
    #[arg(long, env = "GITLAB_URL", global = true)]
    pub url: Option<String>,

    /// Personal access token (overrides config file)
    #[arg(long, env = "GITLAB_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Project ID or path like group/project (overrides config file)
    #[arg(long, short = 'p', env = "GITLAB_PROJECT_ID", global = true)]
    pub project: Option<String>,

    /// API path prefix, for instances mounted under a subpath
    #[arg(long, env = "GITLAB_API_PATH", global = true)]
    pub api_path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge request operations
    #[command(visible_alias = "mr")]
    MergeRequest {
        #[command(subcommand)]
        action: MergeRequestCommands,
    },
    /// Issue operations
    #[command(visible_alias = "i")]
    Issue {
        #[command(subcommand)]
        action: IssueCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum MergeRequestCommands {
    /// Create a merge request
    Create {
        /// Merge request title
        #[arg(long, short = 't')]
        title: String,

        /// Source branch
        #[arg(long)]
        source: String,

        /// Target branch
        #[arg(long)]
        target: String,

        /// Merge request description
        #[arg(long, short = 'd')]
        description: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum IssueCommands {
    /// Create an issue
    Create {
        /// Issue title
        #[arg(long, short = 't')]
        title: String,

        /// Issue description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Label to assign (repeatable)
        #[arg(long = "label", value_name = "LABEL")]
        labels: Vec<String>,
    },
    /// Search issues in the project
    Search {
        /// Free-text query
        query: Option<String>,

        /// Issue state: opened, closed or all
        #[arg(long)]
        state: Option<String>,

        /// Label to filter by (repeatable)
        #[arg(long = "label", value_name = "LABEL")]
        labels: Vec<String>,
    },
}
