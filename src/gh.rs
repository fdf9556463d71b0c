use std::process::Command;

use camino::Utf8PathBuf;
use command_error::CommandExt;
use command_error::OutputContext;
use serde::de::DeserializeOwned;
use utf8_command::Utf8Output;

use crate::fetcher::FetchError;
use crate::fetcher::RequestFetcher;
use crate::pull_request::PullRequest;
use crate::pull_request::PULL_REQUEST_FIELDS;

/// `gh` CLI wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gh {
    program: Utf8PathBuf,
    repo: Option<String>,
    limit: usize,
}

impl Gh {
    pub fn new(program: impl Into<Utf8PathBuf>) -> Self {
        Self {
            program: program.into(),
            repo: None,
            limit: 100,
        }
    }

    /// Query this repository instead of the one in the current directory.
    pub fn with_repo(mut self, repo: Option<String>) -> Self {
        self.repo = repo;
        self
    }

    /// Maximum number of pull requests to list.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Arguments for `gh pr view`.
    fn view_args(&self, id: &str) -> Vec<String> {
        let mut args = vec![
            "pr".to_owned(),
            "view".to_owned(),
            id.to_owned(),
            "--json".to_owned(),
            PULL_REQUEST_FIELDS.to_owned(),
        ];
        self.push_repo_args(&mut args);
        args
    }

    /// Arguments for `gh pr list`.
    fn list_args(&self, author: &str) -> Vec<String> {
        let mut args = vec![
            "pr".to_owned(),
            "list".to_owned(),
            "--author".to_owned(),
            author.to_owned(),
            "--limit".to_owned(),
            self.limit.to_string(),
            "--json".to_owned(),
            PULL_REQUEST_FIELDS.to_owned(),
        ];
        self.push_repo_args(&mut args);
        args
    }

    fn push_repo_args(&self, args: &mut Vec<String>) {
        if let Some(repo) = &self.repo {
            args.push("--repo".to_owned());
            args.push(repo.clone());
        }
    }

    /// A `gh` command with the given arguments.
    pub fn command(&self, args: impl IntoIterator<Item = impl AsRef<str>>) -> Command {
        let mut cmd = Command::new(self.program.as_std_path());
        cmd.args(args.into_iter().map(|arg| arg.as_ref().to_owned()));
        cmd
    }

    /// Run `gh` and parse its standard output as JSON.
    fn json<T: DeserializeOwned>(
        &self,
        args: Vec<String>,
        expected: &'static str,
    ) -> Result<T, FetchError> {
        let command_line = format!(
            "{} {}",
            shell_words::quote(self.program.as_str()),
            shell_words::join(&args)
        );
        tracing::debug!(command = %command_line, "Running gh");

        self.command(&args)
            .output_checked_as(|context: OutputContext<Utf8Output>| {
                if context.status().success() {
                    serde_json::from_str(&context.output().stdout).map_err(|source| {
                        FetchError::Malformed {
                            command: command_line.clone(),
                            expected,
                            source,
                        }
                    })
                } else {
                    Err(FetchError::Failed {
                        command: command_line.clone(),
                        stderr: context.output().stderr.trim_end().to_owned(),
                    })
                }
            })
    }
}

impl Default for Gh {
    fn default() -> Self {
        Self::new("gh")
    }
}

impl RequestFetcher for Gh {
    fn fetch_by_id(&self, id: &str) -> Result<PullRequest, FetchError> {
        self.json(self.view_args(id), "a pull request")
    }

    fn fetch_list_by_author(&self, author: &str) -> Result<Vec<PullRequest>, FetchError> {
        self.json(self.list_args(author), "a list of pull requests")
    }
}
