use derive_more::{AsRef, Constructor, Deref, Display, From, Into};

/// A Git branch name, as reported by GitHub.
///
/// Pull requests are keyed by their head branch within one author's set.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Into,
    From,
    AsRef,
    Deref,
    Constructor,
)]
#[serde(transparent)]
pub struct BranchName(String);

impl From<&str> for BranchName {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl std::borrow::Borrow<str> for BranchName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
