use crate::cli::Cli;
use anyhow::{anyhow, Result};
use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use gitlab_api::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration merged from config files, environment and CLI flags.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    pub url: Option<String>,
    pub token: Option<String>,
    pub project_id: Option<String>,
    pub api_path: Option<String>,
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed("GITLAB_"));

        let config: Config = figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))?;

        Ok(config)
    }

    /// CLI flags override everything else.
    pub fn merge_with_cli(&mut self, cli: &Cli) {
        if let Some(url) = &cli.url {
            self.url = Some(url.clone());
        }
        if let Some(token) = &cli.token {
            self.token = Some(token.clone());
        }
        if let Some(project) = &cli.project {
            self.project_id = Some(project.clone());
        }
        if let Some(api_path) = &cli.api_path {
            self.api_path = Some(api_path.clone());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.token.is_none() {
            return Err(anyhow!(
                "GitLab token not configured. Set via --token, GITLAB_TOKEN env var, or config file"
            ));
        }
        if self.project_id.is_none() {
            return Err(anyhow!(
                "GitLab project ID not configured. Set via --project, GITLAB_PROJECT_ID env var, or config file"
            ));
        }
        Ok(())
    }

    /// Connection settings for the API client, with defaults applied for
    /// anything left unset.
    pub fn to_client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(url) = &self.url {
            config.base_url = url.clone();
        }
        if let Some(token) = &self.token {
            config.token = token.clone();
        }
        if let Some(project_id) = &self.project_id {
            config.project_id = project_id.clone();
        }
        if let Some(api_path) = &self.api_path {
            config.api_path = api_path.clone();
        }
        config
    }
}

fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_local_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "labctl").map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("labctl").join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("labctl")
            .join("config.toml")
    })
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join("labctl.toml"))
}
