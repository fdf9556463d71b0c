use std::collections::BTreeMap;

use itertools::Itertools;

use crate::branch_name::BranchName;
use crate::request_set::RequestSet;
use crate::stack::Stack;

/// Stacks keyed by their tip branch.
///
/// While stacks are being resolved, a stack whose tip gains a dependent is replaced by the longer
/// stack ending at that dependent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackCollection {
    stacks: BTreeMap<BranchName, Stack>,
}

impl StackCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tip: &str) -> Option<&Stack> {
        self.stacks.get(tip)
    }

    pub fn insert(&mut self, tip: BranchName, stack: Stack) {
        self.stacks.insert(tip, stack);
    }

    pub fn remove(&mut self, tip: &str) -> Option<Stack> {
        self.stacks.remove(tip)
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// The stacks, ordered by the number of each stack's root pull request.
    pub fn into_ordered(self, requests: &RequestSet) -> Vec<Stack> {
        self.stacks
            .into_values()
            .sorted_by_key(|stack| {
                let root = stack.root().cloned();
                let number = root
                    .as_deref()
                    .and_then(|root| requests.get(root))
                    .map(|request| request.number);
                (number, root)
            })
            .collect()
    }
}
