//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default base URL for the code-hosting API.
fn default_github_api_base() -> String {
    "https://api.github.com".to_string()
}

/// Default host for the web shell to bind.
fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

/// Default port for the web shell to bind.
fn default_server_port() -> u16 {
    8080
}

/// Configuration for the status-bot application.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Jira base URL, e.g. `https://your-domain.atlassian.net` (`JIRA_BASE_URL`).
    pub jira_base_url: String,
    /// Jira account email used for basic auth (`JIRA_EMAIL`).
    pub jira_email: String,
    /// Jira API token used for basic auth (`JIRA_API_TOKEN`).
    pub jira_api_token: String,
    /// GitHub access token (`GITHUB_TOKEN`).
    pub github_token: String,
    /// GitHub repository owner, organization or username (`GITHUB_OWNER`).
    pub github_owner: String,
    /// GitHub repository name (`GITHUB_REPO`).
    pub github_repo: String,
    /// GitHub API base URL (`GITHUB_API_BASE`).
    #[serde(default = "default_github_api_base")]
    pub github_api_base: String,
    /// Host for the web shell to bind (`SERVER_HOST`).
    #[serde(default = "default_server_host")]
    pub server_host: String,
    /// Port for the web shell to bind (`SERVER_PORT`).
    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("STATUS_BOT"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let mut inner: ConfigInner = cfg.build()?.try_deserialize()?;

        // The request paths all start with `/`, so trailing slashes here would
        // produce double-slash URLs.
        inner.jira_base_url = inner.jira_base_url.trim_end_matches('/').to_string();
        inner.github_api_base = inner.github_api_base.trim_end_matches('/').to_string();

        let result = Config { inner: Arc::new(inner) };

        if result.jira_base_url.is_empty() {
            return Err(anyhow::anyhow!("Jira base URL must be set."));
        }

        if result.github_owner.is_empty() || result.github_repo.is_empty() {
            return Err(anyhow::anyhow!("GitHub owner and repo must be set."));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_explicit_file_trims_trailing_slashes() {
        let path = std::env::temp_dir().join(format!("status-bot-config-{}.toml", std::process::id()));

        std::fs::write(
            &path,
            r#"
jira_base_url = "https://example.atlassian.net/"
jira_email = "bot@example.com"
jira_api_token = "jira-token"
github_token = "github-token"
github_owner = "example"
github_repo = "widgets"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();

        std::fs::remove_file(&path).ok();

        assert_eq!(config.jira_base_url, "https://example.atlassian.net");
        assert_eq!(config.github_api_base, "https://api.github.com");
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 8080);
    }
}
