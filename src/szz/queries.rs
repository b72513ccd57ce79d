use crate::error::SzzError;
use crate::szz::revision::Revision;

/// Looks up revisions whose log entry matches a keyword.
pub trait RevisionLookup {
    /// Matching revisions, in the collaborator's own order.
    fn revisions_matching(&self, keyword: &str) -> Result<Vec<Revision>, SzzError>;
}

/// Produces the full patch text of a revision.
pub trait DiffSource {
    fn diff_text(&self, revision: Revision) -> Result<String, SzzError>;
}

/// Answers line-level blame queries.
pub trait BlameSource {
    /// First parent of a revision.
    fn parent(&self, revision: Revision) -> Result<Revision, SzzError>;

    /// The revision that last touched each line of `filename` as of
    /// `revision`, one entry per line in file order.
    fn blame(&self, filename: &str, revision: Revision) -> Result<Vec<Revision>, SzzError>;
}

/// Answers author-identity queries.
pub trait AuthorIndex {
    fn author_of(&self, revision: Revision) -> Result<String, SzzError>;

    /// Number of commits by `author` at or before `revision`.
    ///
    /// Implementations must answer with a single collaborator call; the
    /// orchestrator asks once per attributed author.
    fn prior_commit_count(&self, author: &str, revision: Revision) -> Result<u64, SzzError>;
}
