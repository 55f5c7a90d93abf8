use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use strdb::database::{DatabaseParserBuilder, DuplicatePolicy};
use tracing_subscriber::EnvFilter;

/// Flags the profiles of a STR database that match its two reference
/// sequences and removes all others.
#[derive(Parser, Debug)]
#[command(name = "strdb", version, about)]
struct Args {
    /// Profile database file
    database: PathBuf,

    /// Fail if a full name occurs more than once
    #[arg(long)]
    reject_duplicates: bool,

    /// Fail if content follows the last announced person
    #[arg(long)]
    strict: bool,

    /// Print the tree before and after cleanup
    #[arg(long)]
    show_tree: bool,

    /// Only report unmarked people, do not remove them
    #[arg(long)]
    no_prune: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let path = args.database.display().to_string();

    let policy = if args.reject_duplicates {
        DuplicatePolicy::Reject
    } else {
        DuplicatePolicy::Allow
    };
    let mut builder = DatabaseParserBuilder::for_file(&args.database)
        .with_context(|| format!("cannot read {path}"))?
        .with_duplicate_policy(policy);
    if args.strict {
        builder = builder.with_strict_trailing();
    }
    let mut index = builder
        .build()
        .and_then(|parser| parser.into_index())
        .with_context(|| format!("cannot parse {path}"))?;

    println!("Profiles: {}", index.len());

    index.classify();
    let num_marked = index.count_matching(true);
    let unmarked = index.collect_by_flag(false);
    println!("Of interest: {num_marked}");
    println!("Not of interest: {}", unmarked.len());
    for name in &unmarked {
        println!("  {name}");
    }

    if args.show_tree {
        print!("{}", index.render_tree());
    }

    if args.no_prune {
        return Ok(());
    }

    let removed = index.prune_unmarked();
    println!("Removed: {removed}");
    println!("Remaining:");
    for node in &index {
        println!("  {}", node.key());
    }

    if args.show_tree {
        print!("{}", index.render_tree());
    }

    Ok(())
}
