use std::env;
use serde::{Deserialize, Serialize};
use crate::config::constants::{
    DEFAULT_SERVER_URL, GITHUB_ACTOR_ENV, GITHUB_REF_NAME_ENV, GITHUB_REPOSITORY_ENV,
    GITHUB_RUN_ID_ENV, GITHUB_RUN_NUMBER_ENV, GITHUB_SERVER_URL_ENV, GITHUB_SHA_ENV,
    GITHUB_WORKFLOW_ENV,
};

/// Identity of the CI run a notification is about.
///
/// Built once at process start and handed to every dispatcher by reference,
/// so dispatch never reads the process environment itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunContext {
    pub repository: String,
    pub run_id: String,
    pub run_number: String,
    pub server_url: String,

    #[serde(default)]
    pub workflow: String,

    #[serde(default)]
    pub sha: String,

    #[serde(default)]
    pub ref_name: String,

    #[serde(default)]
    pub actor: String,
}

impl RunContext {
    pub fn new(repository: &str, run_id: &str, run_number: &str, server_url: &str) -> Self {
        Self {
            repository: repository.to_string(),
            run_id: run_id.to_string(),
            run_number: run_number.to_string(),
            server_url: server_url.trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a context from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).unwrap_or_default();
        let server_url = lookup(GITHUB_SERVER_URL_ENV)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        Self {
            repository: read(GITHUB_REPOSITORY_ENV),
            run_id: read(GITHUB_RUN_ID_ENV),
            run_number: read(GITHUB_RUN_NUMBER_ENV),
            server_url: server_url.trim_end_matches('/').to_string(),
            workflow: read(GITHUB_WORKFLOW_ENV),
            sha: read(GITHUB_SHA_ENV),
            ref_name: read(GITHUB_REF_NAME_ENV),
            actor: read(GITHUB_ACTOR_ENV),
        }
    }

    pub fn repository_url(&self) -> String {
        format!("{}/{}", self.server_url, self.repository)
    }

    pub fn run_url(&self) -> String {
        format!("{}/actions/runs/{}", self.repository_url(), self.run_id)
    }

    /// Name/value pairs exposed to body templates as `{{name}}`.
    pub fn placeholders(&self) -> Vec<(&'static str, String)> {
        vec![
            ("repository", self.repository.clone()),
            ("run_url", self.run_url()),
            ("run_id", self.run_id.clone()),
            ("run_number", self.run_number.clone()),
            ("server_url", self.server_url.clone()),
            ("workflow", self.workflow.clone()),
            ("sha", self.sha.clone()),
            ("ref_name", self.ref_name.clone()),
            ("actor", self.actor.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use super::*;

    #[test]
    fn test_run_url_contains_repository() {
        let context = RunContext::new("octo/widgets", "4242", "17", "https://github.com");
        assert_eq!(context.run_url(), "https://github.com/octo/widgets/actions/runs/4242");
        assert!(context.run_url().contains("octo/widgets"));
    }

    #[test]
    fn test_from_lookup_reads_github_variables() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("GITHUB_REPOSITORY", "o/r"),
            ("GITHUB_RUN_ID", "99"),
            ("GITHUB_RUN_NUMBER", "3"),
            ("GITHUB_SERVER_URL", "https://ghe.example.com/"),
            ("GITHUB_SHA", "abc123"),
        ]);

        let context = RunContext::from_lookup(|key| vars.get(key).map(|v| (*v).to_string()));

        assert_eq!(context.repository, "o/r");
        assert_eq!(context.run_id, "99");
        assert_eq!(context.run_number, "3");
        assert_eq!(context.server_url, "https://ghe.example.com");
        assert_eq!(context.sha, "abc123");
        assert_eq!(context.actor, "");
    }

    #[test]
    fn test_server_url_defaults_to_github() {
        let context = RunContext::from_lookup(|_| None);
        assert_eq!(context.server_url, "https://github.com");
    }
}
