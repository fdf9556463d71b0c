use std::fmt::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream;

use crate::request_set::RequestSet;
use crate::stack::Stack;

/// Format a stack, tip first.
///
/// ```text
///   - Add the widget [#2]
///     widget
///     https://github.com/octo/repo/pull/2
///
/// ```
pub fn format_stack(stack: &Stack, requests: &RequestSet) -> String {
    let mut ret = String::new();
    for head in stack.tip_first() {
        let Some(request) = requests.get(head) else {
            tracing::warn!(%head, "No pull request for branch in stack");
            continue;
        };
        // Writing to a `String` can't fail.
        let _ = write!(
            ret,
            "  - {} [{}]\n    {}\n    {}\n\n",
            request
                .title
                .if_supports_color(Stream::Stdout, |text| text.bold()),
            request
                .number
                .pretty()
                .if_supports_color(Stream::Stdout, |text| text.green()),
            head.if_supports_color(Stream::Stdout, |text| text.cyan()),
            request
                .url
                .if_supports_color(Stream::Stdout, |text| text.dimmed()),
        );
    }
    ret
}

/// Format a list of stacks, each labeled with its 1-based position.
pub fn format_stacks<'a>(
    stacks: impl IntoIterator<Item = &'a Stack>,
    requests: &RequestSet,
) -> String {
    let mut ret = String::new();
    for (index, stack) in stacks.into_iter().enumerate() {
        let label = format!("Stack {}:", index + 1);
        let _ = write!(
            ret,
            "{}\n\n{}",
            label.if_supports_color(Stream::Stdout, |text| text.bold()),
            format_stack(stack, requests)
        );
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pull_request::PullRequest;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn requests() -> RequestSet {
        RequestSet::from_requests([
            PullRequest::new(1, "f2", "f1"),
            PullRequest::new(2, "f1", "main"),
            PullRequest::new(3, "f3", "main"),
        ])
    }

    #[test]
    fn test_format_stack_tip_first() {
        owo_colors::set_override(false);
        assert_eq!(
            format_stack(&Stack::from_root_first(&["f1", "f2"]), &requests()),
            concat!(
                "  - Change f2 [#1]\n",
                "    f2\n",
                "    https://github.com/octo/repo/pull/1\n",
                "\n",
                "  - Change f1 [#2]\n",
                "    f1\n",
                "    https://github.com/octo/repo/pull/2\n",
                "\n",
            )
        );
    }

    #[test]
    fn test_format_stacks_labels() {
        owo_colors::set_override(false);
        let stacks = [
            Stack::from_root_first(&["f1", "f2"]),
            Stack::from_root_first(&["f3"]),
        ];
        assert_eq!(
            format_stacks(&stacks, &requests()),
            indoc!(
                "
                Stack 1:

                  - Change f2 [#1]
                    f2
                    https://github.com/octo/repo/pull/1

                  - Change f1 [#2]
                    f1
                    https://github.com/octo/repo/pull/2

                Stack 2:

                  - Change f3 [#3]
                    f3
                    https://github.com/octo/repo/pull/3

                "
            )
        );
    }

    #[test]
    fn test_format_stacks_empty() {
        assert_eq!(format_stacks(&[], &requests()), "");
    }
}
