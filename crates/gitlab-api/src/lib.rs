pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod models;


pub use client::GitLabClient;
pub use config::ClientConfig;
pub use error::{GitLabError, Result};
pub use models::*;
