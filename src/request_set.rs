use std::collections::BTreeMap;

use crate::branch_name::BranchName;
use crate::pull_request::PullRequest;

/// One author's open pull requests, keyed by head branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSet {
    requests: BTreeMap<BranchName, PullRequest>,
}

impl RequestSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index pull requests by head branch.
    ///
    /// If two pull requests share a head branch, the later one wins and a warning is logged.
    pub fn from_requests(requests: impl IntoIterator<Item = PullRequest>) -> Self {
        let mut set = Self::new();
        for request in requests {
            if let Some(replaced) = set.insert(request) {
                tracing::warn!(
                    branch = %replaced.head_ref_name,
                    dropped = %replaced.number.pretty(),
                    "Multiple pull requests share a head branch; only the last one is shown"
                );
            }
        }
        set
    }

    /// Insert a pull request, returning the pull request it replaced, if any.
    pub fn insert(&mut self, request: PullRequest) -> Option<PullRequest> {
        self.requests.insert(request.head_ref_name.clone(), request)
    }

    pub fn get(&self, branch: &str) -> Option<&PullRequest> {
        self.requests.get(branch)
    }

    pub fn contains(&self, branch: &str) -> bool {
        self.requests.contains_key(branch)
    }

    /// The base branch of the pull request for `branch`, if the base is itself in this set.
    pub fn in_set_base(&self, branch: &str) -> Option<&BranchName> {
        self.get(branch)
            .map(|request| &request.base_ref_name)
            .filter(|base| self.contains(base))
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    #[cfg(test)]
    pub fn branches(&self) -> impl Iterator<Item = &BranchName> {
        self.requests.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PullRequest> {
        self.requests.values()
    }
}

impl FromIterator<PullRequest> for RequestSet {
    fn from_iter<T: IntoIterator<Item = PullRequest>>(iter: T) -> Self {
        Self::from_requests(iter)
    }
}
