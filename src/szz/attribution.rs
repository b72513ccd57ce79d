use std::collections::{HashMap, HashSet};

use crate::error::SzzError;
use crate::szz::blame::blamed_revisions_for_file;
use crate::szz::diff::RevisionDiff;
use crate::szz::queries::{AuthorIndex, BlameSource};
use crate::szz::revision::Revision;

/// Unions the blamed revisions of every file across every fixing revision.
///
/// `exclude` is the full fixing set: a fix never blames itself or a sibling
/// fix. With `rust_only`, non-`.rs` files are dropped before any blame query
/// is issued.
pub fn blamed_revisions<B: BlameSource>(
    source: &B,
    diffs: &[RevisionDiff],
    exclude: &HashSet<Revision>,
    rust_only: bool,
) -> Result<HashSet<Revision>, SzzError> {
    let mut blamed = HashSet::new();
    for diff in diffs {
        for file in &diff.files {
            if rust_only && !file.is_rust_file() {
                continue;
            }
            blamed.extend(blamed_revisions_for_file(
                source,
                diff.revision,
                file,
                exclude,
            )?);
        }
    }
    Ok(blamed)
}

/// Reduces blamed revisions to one entry per author, keeping the numerically
/// smallest revision, the author's earliest touch on the blamed lines.
///
/// The reduction is a commutative min, so iteration order over the set does
/// not affect the result.
pub fn earliest_revision_per_author<A: AuthorIndex>(
    index: &A,
    blamed: &HashSet<Revision>,
) -> Result<HashMap<String, Revision>, SzzError> {
    let mut earliest: HashMap<String, Revision> = HashMap::new();
    for &revision in blamed {
        let author = index.author_of(revision)?;
        earliest
            .entry(author)
            .and_modify(|current| {
                if revision < *current {
                    *current = revision;
                }
            })
            .or_insert(revision);
    }
    Ok(earliest)
}
