use std::collections::HashSet;
use std::io::{self, Write};

use crate::error::SzzError;
use crate::hg::repository::Repository;
use crate::szz::attribution::{blamed_revisions, earliest_revision_per_author};
use crate::szz::diff::RevisionDiff;
use crate::szz::queries::{AuthorIndex, BlameSource, DiffSource, RevisionLookup};
use crate::utils::debug_log;

/// Runs the full attribution pipeline and writes one prior-commit count per
/// attributed author to `out`.
///
/// A keyword with no matching revisions produces no output and triggers no
/// further collaborator queries.
pub fn run<C, W>(collab: &C, keyword: &str, rust_only: bool, out: &mut W) -> Result<(), SzzError>
where
    C: RevisionLookup + DiffSource + BlameSource + AuthorIndex,
    W: Write,
{
    let fixing = collab.revisions_matching(keyword)?;
    if fixing.is_empty() {
        return Ok(());
    }
    debug_log(&format!(
        "{} fixing revisions for keyword {:?}",
        fixing.len(),
        keyword
    ));

    let mut diffs = Vec::with_capacity(fixing.len());
    for &revision in &fixing {
        let text = collab.diff_text(revision)?;
        diffs.push(RevisionDiff::parse(revision, &text)?);
    }

    // a fix never blames itself or a sibling fix
    let exclude: HashSet<_> = fixing.iter().copied().collect();
    let blamed = blamed_revisions(collab, &diffs, &exclude, rust_only)?;
    debug_log(&format!("{} blamed revisions", blamed.len()));

    let per_author = earliest_revision_per_author(collab, &blamed)?;
    for (author, &revision) in &per_author {
        let count = collab.prior_commit_count(author, revision)?;
        writeln!(out, "{}", count)?;
    }
    Ok(())
}

/// CLI boundary: binds the pipeline to the real repository and stdout.
pub fn handle_attribute(repo: &Repository, keyword: &str, rust_only: bool) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(repo, keyword, rust_only, &mut out) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
