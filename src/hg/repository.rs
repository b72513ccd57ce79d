use std::path::PathBuf;
use std::process::{Command, Output};
use std::str::FromStr;

use crate::config::Config;
use crate::error::SzzError;
use crate::szz::queries::{AuthorIndex, BlameSource, DiffSource, RevisionLookup};
use crate::szz::revision::Revision;
use crate::utils::debug_log;

/// Handle on a Mercurial repository, addressed through the hg CLI.
///
/// The CLI is Mercurial's documented stable API; every query below is one
/// blocking subprocess round-trip.
pub struct Repository {
    repo_path: Option<PathBuf>,
}

impl Repository {
    pub fn new(repo_path: Option<PathBuf>) -> Self {
        Repository { repo_path }
    }

    /// Global arguments prepended to every hg invocation.
    pub fn global_args_for_exec(&self) -> Vec<String> {
        match &self.repo_path {
            Some(path) => vec!["-R".to_string(), path.to_string_lossy().to_string()],
            None => Vec::new(),
        }
    }
}

/// Runs hg with `args`, failing on a non-zero exit status.
pub fn exec_hg(args: &[String]) -> Result<Output, SzzError> {
    debug_log(&format!("hg {}", args.join(" ")));
    let output = Command::new(Config::get().hg_cmd()).args(args).output()?;
    if !output.status.success() {
        return Err(SzzError::HgCliError {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            args: args.to_vec(),
        });
    }
    Ok(output)
}

fn stdout_string(output: Output) -> Result<String, SzzError> {
    Ok(String::from_utf8(output.stdout)?)
}

impl RevisionLookup for Repository {
    fn revisions_matching(&self, keyword: &str) -> Result<Vec<Revision>, SzzError> {
        let mut args = self.global_args_for_exec();
        args.push("log".to_string());
        args.push("-T".to_string());
        args.push("{rev} ".to_string());
        args.push("--keyword".to_string());
        args.push(keyword.to_string());
        let stdout = stdout_string(exec_hg(&args)?)?;
        stdout.split_whitespace().map(Revision::from_str).collect()
    }
}

impl DiffSource for Repository {
    fn diff_text(&self, revision: Revision) -> Result<String, SzzError> {
        let mut args = self.global_args_for_exec();
        args.push("log".to_string());
        args.push("-p".to_string());
        args.push("-r".to_string());
        args.push(revision.to_string());
        stdout_string(exec_hg(&args)?)
    }
}

impl BlameSource for Repository {
    fn parent(&self, revision: Revision) -> Result<Revision, SzzError> {
        let mut args = self.global_args_for_exec();
        args.push("log".to_string());
        args.push("-T".to_string());
        args.push("{p1rev}".to_string());
        args.push("-r".to_string());
        args.push(revision.to_string());
        stdout_string(exec_hg(&args)?)?.parse()
    }

    fn blame(&self, filename: &str, revision: Revision) -> Result<Vec<Revision>, SzzError> {
        let mut args = self.global_args_for_exec();
        args.push("annotate".to_string());
        args.push("-r".to_string());
        args.push(revision.to_string());
        args.push(filename.to_string());
        let stdout = stdout_string(exec_hg(&args)?)?;
        stdout
            .lines()
            .map(|line| {
                // annotate prints "<rev>: <content>" per line
                line.split_once(':')
                    .map(|(rev_field, _)| rev_field)
                    .unwrap_or(line)
                    .parse()
            })
            .collect()
    }
}

impl AuthorIndex for Repository {
    fn author_of(&self, revision: Revision) -> Result<String, SzzError> {
        let mut args = self.global_args_for_exec();
        args.push("log".to_string());
        args.push("-T".to_string());
        args.push("{author}".to_string());
        args.push("-r".to_string());
        args.push(revision.to_string());
        stdout_string(exec_hg(&args)?)
    }

    /// One batched log call per author: the template emits a single byte per
    /// matching commit, so the count is the output length. Keeps the cost at
    /// one process spawn per author instead of one per commit walked.
    fn prior_commit_count(&self, author: &str, revision: Revision) -> Result<u64, SzzError> {
        let mut args = self.global_args_for_exec();
        args.push("log".to_string());
        args.push("-T".to_string());
        args.push("1".to_string());
        args.push("--user".to_string());
        args.push(author.to_string());
        args.push("-r".to_string());
        args.push(format!("::{}", revision));
        let output = exec_hg(&args)?;
        Ok(output.stdout.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_args_without_repo_path() {
        let repo = Repository::new(None);
        assert!(repo.global_args_for_exec().is_empty());
    }

    #[test]
    fn test_global_args_with_repo_path() {
        let repo = Repository::new(Some(PathBuf::from("/srv/repo")));
        assert_eq!(
            repo.global_args_for_exec(),
            vec!["-R".to_string(), "/srv/repo".to_string()]
        );
    }
}
