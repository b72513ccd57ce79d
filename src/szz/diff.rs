use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SzzError;
use crate::szz::revision::Revision;

// Old-side range of a unified-diff hunk header. The count is absent for
// one-line hunks.
static HUNK_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+").unwrap());

/// One contiguous span of pre-change lines touched by a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffRange {
    /// Zero-based first old-side line of the hunk.
    pub start: usize,
    /// Number of old-side lines in the hunk.
    pub count: usize,
}

/// The hunks of a single file within one revision's diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub filename: String,
    /// Hunk spans in diff order, so starts are non-decreasing.
    pub ranges: Vec<DiffRange>,
}

impl FileDiff {
    pub fn is_rust_file(&self) -> bool {
        self.filename.ends_with(".rs")
    }
}

/// The diff of one fixing revision, decomposed per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionDiff {
    pub revision: Revision,
    pub files: Vec<FileDiff>,
}

impl RevisionDiff {
    /// Parses the raw `hg log -p` text of one revision.
    ///
    /// Only structural lines matter: a `diff ` marker starts a new file and a
    /// `@@` header contributes the old-side hunk range. Content lines carry no
    /// information this pipeline needs and are ignored.
    pub fn parse(revision: Revision, text: &str) -> Result<Self, SzzError> {
        let mut files: Vec<FileDiff> = Vec::new();
        for line in text.lines() {
            if line.is_empty() {
                continue;
            }
            if line.starts_with("diff ") {
                files.push(FileDiff {
                    filename: parse_file_marker(revision, line)?,
                    ranges: Vec::new(),
                });
            } else if line.starts_with('@') {
                let range = parse_hunk_header(revision, line)?;
                match files.last_mut() {
                    Some(current) => current.ranges.push(range),
                    None => {
                        return Err(SzzError::DiffParseError {
                            revision: revision.to_string(),
                            line: line.to_string(),
                            reason: "hunk header before any file header".to_string(),
                        });
                    }
                }
            }
        }
        Ok(RevisionDiff { revision, files })
    }
}

/// The filename is the last token of the marker line, minus the `a/` or `b/`
/// path prefix.
fn parse_file_marker(revision: Revision, line: &str) -> Result<String, SzzError> {
    let token = line.split_whitespace().last().unwrap_or_default();
    match token.get(2..) {
        Some(filename) if !filename.is_empty() => Ok(filename.to_string()),
        _ => Err(SzzError::DiffParseError {
            revision: revision.to_string(),
            line: line.to_string(),
            reason: "file header carries no path".to_string(),
        }),
    }
}

fn parse_hunk_header(revision: Revision, line: &str) -> Result<DiffRange, SzzError> {
    let parse_error = |reason: &str| SzzError::DiffParseError {
        revision: revision.to_string(),
        line: line.to_string(),
        reason: reason.to_string(),
    };
    let caps = HUNK_HEADER
        .captures(line)
        .ok_or_else(|| parse_error("malformed hunk header"))?;
    let start: usize = caps[1]
        .parse()
        .map_err(|_| parse_error("hunk start out of range"))?;
    let count: usize = match caps.get(2) {
        Some(m) => m
            .as_str()
            .parse()
            .map_err(|_| parse_error("hunk count out of range"))?,
        // a bare `-N` old-side range is a one-line hunk
        None => 1,
    };
    // `-0,0` appears for files with no old side; saturate instead of
    // underflowing the zero-based conversion
    Ok(DiffRange {
        start: start.saturating_sub(1),
        count,
    })
}
