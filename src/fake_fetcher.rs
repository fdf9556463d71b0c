//! An in-memory [`RequestFetcher`] for tests.

use std::cell::RefCell;

use crate::fetcher::FetchError;
use crate::fetcher::RequestFetcher;
use crate::pull_request::PullRequest;

#[derive(Debug, Default)]
pub struct FakeFetcher {
    requests: Vec<PullRequest>,
    /// Viewable by number, but not listed.
    closed: Vec<PullRequest>,
    fail_with: Option<String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn new(requests: impl IntoIterator<Item = PullRequest>) -> Self {
        Self {
            requests: requests.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Add a pull request that can be viewed but isn't listed, like a closed one.
    pub fn with_closed(mut self, request: PullRequest) -> Self {
        self.closed.push(request);
        self
    }

    /// A fetcher whose every call fails with the given stderr.
    pub fn failing(stderr: &str) -> Self {
        Self {
            fail_with: Some(stderr.to_owned()),
            ..Default::default()
        }
    }

    fn check(&self, call: String) -> Result<(), FetchError> {
        self.calls.borrow_mut().push(call.clone());
        match &self.fail_with {
            Some(stderr) => Err(FetchError::Failed {
                command: call,
                stderr: stderr.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl RequestFetcher for FakeFetcher {
    fn fetch_by_id(&self, id: &str) -> Result<PullRequest, FetchError> {
        self.check(format!("view {id}"))?;
        self.requests
            .iter()
            .chain(&self.closed)
            .find(|request| request.number.to_string() == id || request.head_ref_name.as_str() == id)
            .cloned()
            .ok_or_else(|| FetchError::Failed {
                command: format!("view {id}"),
                stderr: format!("no pull requests found for branch \"{id}\""),
            })
    }

    fn fetch_list_by_author(&self, author: &str) -> Result<Vec<PullRequest>, FetchError> {
        self.check(format!("list {author}"))?;
        Ok(self
            .requests
            .iter()
            .filter(|request| author == "@me" || request.author.login == author)
            .cloned()
            .collect())
    }
}
