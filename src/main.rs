mod author;
mod branch_name;
mod cli;
#[cfg(test)]
mod fake_fetcher;
mod fetcher;
mod format_stacks;
mod gh;
mod install_tracing;
mod pr_number;
mod pull_request;
mod request_set;
mod stack;
mod stack_collection;
mod stack_resolver;

use calm_io::stdout;
use clap::Parser;
use cli::Opts;
use format_stacks::format_stack;
use format_stacks::format_stacks;
use gh::Gh;
use install_tracing::install_tracing;
use stack_resolver::StackResolver;

fn main() -> miette::Result<()> {
    let opts = Opts::parse();
    install_tracing(&opts.log)?;

    let gh = Gh::new(opts.gh)
        .with_repo(opts.repo)
        .with_limit(opts.limit);
    let resolver = StackResolver::new(&gh);

    match opts.pr {
        Some(pr) => {
            let resolved = resolver.stack_for_pull_request(&pr)?;
            for stack in &resolved.stacks {
                let _ = stdout!("{}", format_stack(stack, &resolved.requests));
            }
        }
        None => {
            let resolved = resolver.stacks_for_author(&opts.author)?;
            if resolved.stacks.is_empty() {
                tracing::warn!(author = %opts.author, "No open pull requests found");
            }
            let _ = stdout!("{}", format_stacks(&resolved.stacks, &resolved.requests));
        }
    }

    Ok(())
}
