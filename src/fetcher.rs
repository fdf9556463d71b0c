use miette::Diagnostic;

use crate::pull_request::PullRequest;
use crate::request_set::RequestSet;

/// An error fetching pull requests.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum FetchError {
    /// The fetching program couldn't be run at all.
    #[error("Failed to run the GitHub CLI")]
    #[diagnostic(
        code(gh_stack::gh::unavailable),
        help("Install `gh` from https://cli.github.com/ or point `--gh` at it")
    )]
    Unavailable(#[source] command_error::Error),

    /// The fetching program ran but reported failure.
    #[error("`{command}` failed:\n{stderr}")]
    #[diagnostic(code(gh_stack::gh::failed))]
    Failed { command: String, stderr: String },

    /// The fetching program's output wasn't valid UTF-8.
    #[error("The GitHub CLI printed output that isn't valid UTF-8")]
    #[diagnostic(code(gh_stack::gh::malformed))]
    NotUtf8(#[source] command_error::Error),

    /// The fetching program's output wasn't the JSON we expected.
    #[error("Failed to parse {expected} from `{command}`")]
    #[diagnostic(code(gh_stack::gh::malformed))]
    Malformed {
        command: String,
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<command_error::Error> for FetchError {
    fn from(error: command_error::Error) -> Self {
        match error {
            command_error::Error::Conversion(_) => Self::NotUtf8(error),
            _ => Self::Unavailable(error),
        }
    }
}

/// A source of pull requests.
pub trait RequestFetcher {
    /// Fetch exactly one pull request.
    ///
    /// `id` may be anything `gh pr view` accepts: a number, a URL, or a branch name.
    fn fetch_by_id(&self, id: &str) -> Result<PullRequest, FetchError>;

    /// Fetch an author's open pull requests, in the order the service lists them.
    fn fetch_list_by_author(&self, author: &str) -> Result<Vec<PullRequest>, FetchError>;

    /// Fetch an author's open pull requests, keyed by head branch.
    fn fetch_by_author(&self, author: &str) -> Result<RequestSet, FetchError> {
        let requests = self.fetch_list_by_author(author)?;
        tracing::debug!(author, count = requests.len(), "Fetched pull requests");
        Ok(RequestSet::from_requests(requests))
    }
}
