use camino::Utf8PathBuf;
use clap::Parser;

/// Show stacks of dependent GitHub pull requests.
///
/// A stack is a chain of pull requests where each one targets another's branch.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
#[command(max_term_width = 100)]
pub struct Opts {
    /// Log filter directives, of the form `target[span{field=value}]=level`, where all components
    /// except the level are optional.
    ///
    /// Try `debug` or `trace`.
    #[arg(long, default_value = "info", env = "GH_STACK_LOG")]
    pub log: String,

    /// Show stacks of pull requests by this GitHub user.
    ///
    /// `@me` is the user `gh` is logged in as.
    #[arg(long, default_value = "@me", env = "GH_STACK_AUTHOR")]
    pub author: String,

    /// Show the stack below this pull request instead.
    ///
    /// Accepts a number, URL, or branch name. Takes precedence over `--author`.
    #[arg(long)]
    pub pr: Option<String>,

    /// Query this repository instead of the one in the current directory, in `OWNER/REPO` form.
    #[arg(short = 'R', long, env = "GH_STACK_REPO")]
    pub repo: Option<String>,

    /// Maximum number of pull requests to fetch for an author.
    #[arg(long, default_value_t = 100)]
    pub limit: usize,

    /// The `gh` executable to run.
    #[arg(long, default_value = "gh", env = "GH_STACK_GH")]
    pub gh: Utf8PathBuf,
}
