use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitLabError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("required field is empty: {0}")]
    MissingField(&'static str),

    #[error("response is missing field: {0}")]
    MalformedResponse(&'static str),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, GitLabError>;
