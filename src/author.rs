/// An author of a GitHub pull request.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub login: String,
}

impl Author {
    #[cfg(test)]
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }
}
