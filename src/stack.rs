use crate::branch_name::BranchName;

/// A chain of dependent pull requests, by head branch.
///
/// Ordered from the root (whose base is outside the author's pull requests) to the tip (which
/// nothing depends on). Each branch's pull request targets the branch before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    branches: Vec<BranchName>,
}

impl Stack {
    pub fn singleton(head: BranchName) -> Self {
        Self {
            branches: vec![head],
        }
    }

    /// Construct a stack from a walk that starts at the tip and follows base branches down.
    pub fn from_tip_first(mut walk: Vec<BranchName>) -> Self {
        walk.reverse();
        Self { branches: walk }
    }

    /// This stack with `head` stacked on top.
    pub fn extended(&self, head: BranchName) -> Self {
        let mut branches = self.branches.clone();
        branches.push(head);
        Self { branches }
    }

    pub fn root(&self) -> Option<&BranchName> {
        self.branches.first()
    }

    pub fn tip(&self) -> Option<&BranchName> {
        self.branches.last()
    }

    /// Root-first.
    pub fn branches(&self) -> &[BranchName] {
        &self.branches
    }

    pub fn tip_first(&self) -> impl Iterator<Item = &BranchName> {
        self.branches.iter().rev()
    }

    #[cfg(test)]
    pub fn from_root_first(branches: &[&str]) -> Self {
        Self {
            branches: branches.iter().map(|branch| BranchName::from(*branch)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stack_from_tip_first() {
        let stack = Stack::from_tip_first(vec!["f2".into(), "f1".into()]);
        assert_eq!(stack, Stack::from_root_first(&["f1", "f2"]));
        assert_eq!(stack.root(), Some(&BranchName::from("f1")));
        assert_eq!(stack.tip(), Some(&BranchName::from("f2")));
        assert_eq!(
            stack.tip_first().map(|branch| branch.as_str()).collect::<Vec<_>>(),
            ["f2", "f1"]
        );
    }

    #[test]
    fn test_stack_extended() {
        let base = Stack::singleton("f1".into());
        let stack = base.extended("f2".into());
        assert_eq!(base.branches().len(), 1);
        assert_eq!(stack, Stack::from_root_first(&["f1", "f2"]));
    }
}
