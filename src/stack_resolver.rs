use std::collections::BTreeMap;
use std::collections::BTreeSet;

use itertools::Itertools;
use miette::Diagnostic;

use crate::branch_name::BranchName;
use crate::fetcher::FetchError;
use crate::fetcher::RequestFetcher;
use crate::pull_request::PullRequest;
use crate::request_set::RequestSet;
use crate::stack::Stack;
use crate::stack_collection::StackCollection;

/// An error resolving stacks of pull requests.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum StackError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Fetch(#[from] FetchError),

    /// Following base branches led back to a branch already visited.
    #[error("Pull request base branches form a cycle at `{branch}`: {}", .chain.iter().join(" -> "))]
    #[diagnostic(
        code(gh_stack::cycle),
        help("Change the base branch of one of these pull requests")
    )]
    CycleDetected {
        branch: BranchName,
        chain: Vec<BranchName>,
    },
}

/// Resolved stacks, along with the pull requests they refer to.
#[derive(Debug)]
pub struct ResolvedStacks {
    pub requests: RequestSet,
    pub stacks: Vec<Stack>,
}

/// Finds stacks of pull requests.
pub struct StackResolver<'a, F> {
    fetcher: &'a F,
}

impl<'a, F: RequestFetcher> StackResolver<'a, F> {
    pub fn new(fetcher: &'a F) -> Self {
        Self { fetcher }
    }

    /// The stack below a single pull request, down to its root.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn stack_for_pull_request(&self, id: &str) -> Result<ResolvedStacks, StackError> {
        let seed = self.fetcher.fetch_by_id(id)?;
        let mut requests = self.fetcher.fetch_by_author(&seed.author.login)?;
        let first_base = Some(&seed.base_ref_name).filter(|base| requests.contains(base));
        let stack = walk_from(&requests, &seed.head_ref_name, first_base)?;
        // Closed pull requests aren't listed, and another pull request may have reused the branch.
        let number = seed.number;
        if let Some(replaced) = requests.insert(seed).filter(|replaced| replaced.number != number) {
            tracing::debug!(
                branch = %replaced.head_ref_name,
                listed = %replaced.number.pretty(),
                "Showing the requested pull request instead of the listed one"
            );
        }
        Ok(ResolvedStacks {
            requests,
            stacks: vec![stack],
        })
    }

    /// Every stack of pull requests by an author.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn stacks_for_author(&self, author: &str) -> Result<ResolvedStacks, StackError> {
        let requests = self.fetcher.fetch_by_author(author)?;
        let stacks = resolve_stacks(&requests)?.into_ordered(&requests);
        Ok(ResolvedStacks { requests, stacks })
    }
}

/// Follow base branches down from `head` while they belong to `requests`.
pub fn walk_stack(requests: &RequestSet, head: &BranchName) -> Result<Stack, StackError> {
    walk_from(requests, head, requests.in_set_base(head))
}

/// Walk down from `head`, whose base is `first_base`, while base branches belong to `requests`.
fn walk_from<'a>(
    requests: &'a RequestSet,
    head: &'a BranchName,
    first_base: Option<&'a BranchName>,
) -> Result<Stack, StackError> {
    let mut walk = vec![head.clone()];
    let mut seen = BTreeSet::from([head]);
    let mut next = first_base;

    while let Some(base) = next {
        walk.push(base.clone());
        if !seen.insert(base) {
            return Err(StackError::CycleDetected {
                branch: base.clone(),
                chain: walk,
            });
        }
        next = requests.in_set_base(base);
    }

    Ok(Stack::from_tip_first(walk))
}

/// Group pull requests into maximal stacks.
///
/// Pull requests are processed in layers, bases before the pull requests which target them. When
/// several pull requests target the same base (a fork), the one with the lowest number extends
/// the base's stack and the rest start new stacks of their own.
pub fn resolve_stacks(requests: &RequestSet) -> Result<StackCollection, StackError> {
    // Number of unprocessed in-set bases, which is 0 or 1.
    let mut pending = BTreeMap::<&BranchName, usize>::new();
    let mut dependents = BTreeMap::<&BranchName, Vec<&PullRequest>>::new();
    let mut ready = Vec::new();

    for request in requests.iter() {
        match requests.in_set_base(&request.head_ref_name) {
            Some(base) => {
                pending.insert(&request.head_ref_name, 1);
                dependents.entry(base).or_default().push(request);
            }
            None => {
                pending.insert(&request.head_ref_name, 0);
                ready.push(request);
            }
        }
    }

    let mut collection = StackCollection::new();
    let mut processed = 0;

    while !ready.is_empty() {
        ready.sort_by(|a, b| {
            (a.number, &a.head_ref_name).cmp(&(b.number, &b.head_ref_name))
        });

        // Bases which have been stacked on during this layer. Removed once the layer is done.
        let mut absorbed = BTreeSet::new();
        let mut next = Vec::new();

        for request in ready.drain(..) {
            let head = &request.head_ref_name;
            let base = &request.base_ref_name;

            let stack = match collection.get(base) {
                Some(base_stack) if !absorbed.contains(base) => {
                    absorbed.insert(base);
                    base_stack.extended(head.clone())
                }
                Some(_) => {
                    tracing::debug!(%head, %base, "Base is already stacked on; starting a new stack");
                    Stack::singleton(head.clone())
                }
                None => Stack::singleton(head.clone()),
            };
            collection.insert(head.clone(), stack);
            processed += 1;

            for dependent in dependents.get(head).into_iter().flatten() {
                if let Some(count) = pending.get_mut(&dependent.head_ref_name) {
                    *count -= 1;
                    if *count == 0 {
                        next.push(*dependent);
                    }
                }
            }
        }

        for base in absorbed {
            collection.remove(base);
        }

        ready = next;
    }

    if processed < requests.len() {
        // Whatever is left over is on or above a cycle, so walking down from it fails.
        if let Some((branch, _)) = pending.iter().find(|(_, count)| **count > 0) {
            walk_stack(requests, branch)?;
        }
    }

    tracing::debug!(stacks = collection.len(), "Resolved stacks");
    Ok(collection)
}
