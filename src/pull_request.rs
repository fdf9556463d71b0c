use crate::author::Author;
use crate::branch_name::BranchName;
use crate::pr_number::PrNumber;

/// The fields requested from `gh` with `--json`.
///
/// These must stay in sync with the fields of [`PullRequest`].
pub const PULL_REQUEST_FIELDS: &str = "number,headRefName,baseRefName,url,title,author";

/// A GitHub pull request, as reported by `gh pr view` and `gh pr list`.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub number: PrNumber,
    /// The branch containing the proposed change.
    pub head_ref_name: BranchName,
    /// The branch this pull request merges into.
    pub base_ref_name: BranchName,
    pub url: String,
    pub title: String,
    pub author: Author,
}

impl PullRequest {
    /// A pull request with placeholder metadata, for tests.
    #[cfg(test)]
    pub fn new(number: u64, head: &str, base: &str) -> Self {
        Self {
            number: number.into(),
            head_ref_name: head.into(),
            base_ref_name: base.into(),
            url: format!("https://github.com/octo/repo/pull/{number}"),
            title: format!("Change {head}"),
            author: Author::new("octocat"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pull_request_deserialize() {
        let pull_request: PullRequest = serde_json::from_str(indoc!(
            r#"
            {
              "author": {
                "id": "MDQ6VXNlcjU4MzIzMQ==",
                "is_bot": false,
                "login": "octocat",
                "name": "The Octocat"
              },
              "baseRefName": "main",
              "headRefName": "feature-branch",
              "number": 123,
              "title": "Add a feature",
              "url": "https://github.com/octo/repo/pull/123"
            }
            "#
        ))
        .unwrap();

        assert_eq!(
            pull_request,
            PullRequest {
                number: 123_u64.into(),
                head_ref_name: "feature-branch".into(),
                base_ref_name: "main".into(),
                url: "https://github.com/octo/repo/pull/123".to_owned(),
                title: "Add a feature".to_owned(),
                author: Author::new("octocat"),
            }
        );
    }

    #[test]
    fn test_pull_request_missing_field() {
        assert!(serde_json::from_str::<PullRequest>(
            r#"{"number": 1, "headRefName": "f1", "url": "", "title": "", "author": {"login": "a"}}"#
        )
        .is_err());
    }
}
