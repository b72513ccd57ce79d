use std::collections::HashSet;

use crate::error::SzzError;
use crate::szz::diff::{DiffRange, FileDiff};
use crate::szz::queries::BlameSource;
use crate::szz::revision::Revision;

/// Collects the distinct revisions blamed for any line inside `ranges`.
///
/// `blame` holds one revision per zero-based line index and `ranges` is
/// sorted by start, so a single cursor over the ranges suffices; the scan
/// stops as soon as the last range is consumed.
pub fn blamed_revisions_in_ranges(
    blame: &[Revision],
    ranges: &[DiffRange],
    exclude: &HashSet<Revision>,
) -> HashSet<Revision> {
    let mut blamed = HashSet::new();
    let mut cursor = ranges.iter();
    let Some(mut range) = cursor.next() else {
        return blamed;
    };
    for (i, &revision) in blame.iter().enumerate() {
        while i >= range.start + range.count {
            match cursor.next() {
                Some(next) => range = next,
                None => return blamed,
            }
        }
        if i >= range.start && !exclude.contains(&revision) {
            blamed.insert(revision);
        }
    }
    blamed
}

/// Blames `file` at the fixing revision's parent and intersects the listing
/// with the file's hunks.
///
/// A diff with no parsed hunks yields an empty set without querying blame.
pub fn blamed_revisions_for_file<B: BlameSource>(
    source: &B,
    fixing: Revision,
    file: &FileDiff,
    exclude: &HashSet<Revision>,
) -> Result<HashSet<Revision>, SzzError> {
    if file.ranges.is_empty() {
        return Ok(HashSet::new());
    }
    let parent = source.parent(fixing)?;
    let blame = source.blame(&file.filename, parent)?;
    Ok(blamed_revisions_in_ranges(&blame, &file.ranges, exclude))
}
