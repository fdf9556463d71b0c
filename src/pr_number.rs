use derive_more::{Display, From, Into};

/// A GitHub pull request number.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
)]
#[serde(transparent)]
pub struct PrNumber(u64);

impl PrNumber {
    /// A `#123`-style reference.
    pub fn pretty(&self) -> String {
        format!("#{}", self.0)
    }
}
