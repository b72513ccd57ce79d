use std::fmt;

#[derive(Debug)]
pub enum SzzError {
    IoError(std::io::Error),
    /// Errors from invoking the hg CLI that exited with a non-zero status
    HgCliError {
        code: Option<i32>,
        stderr: String,
        args: Vec<String>,
    },
    FromUtf8Error(std::string::FromUtf8Error),
    /// Structurally invalid diff text within one revision's patch
    DiffParseError {
        revision: String,
        line: String,
        reason: String,
    },
    /// A revision identifier that is not a local revision number
    RevisionParseError { input: String },
    Generic(String),
}

impl fmt::Display for SzzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SzzError::IoError(e) => write!(f, "IO error: {}", e),
            SzzError::HgCliError { code, stderr, args } => match code {
                Some(c) => write!(
                    f,
                    "Hg CLI ({}) failed with exit code {}: {}",
                    args.join(" "),
                    c,
                    stderr
                ),
                None => write!(f, "Hg CLI ({}) failed: {}", args.join(" "), stderr),
            },
            SzzError::FromUtf8Error(e) => write!(f, "From UTF-8 error: {}", e),
            SzzError::DiffParseError {
                revision,
                line,
                reason,
            } => write!(
                f,
                "Malformed diff for revision {} at {:?}: {}",
                revision, line, reason
            ),
            SzzError::RevisionParseError { input } => {
                write!(f, "Not a revision number: {:?}", input)
            }
            SzzError::Generic(e) => write!(f, "Generic error: {}", e),
        }
    }
}

impl std::error::Error for SzzError {}

impl From<std::io::Error> for SzzError {
    fn from(err: std::io::Error) -> Self {
        SzzError::IoError(err)
    }
}

impl From<std::string::FromUtf8Error> for SzzError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        SzzError::FromUtf8Error(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SzzError::from(io_err);
        let display = format!("{}", err);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_hg_cli_error_with_code() {
        let err = SzzError::HgCliError {
            code: Some(255),
            stderr: "abort: no repository found".to_string(),
            args: vec!["log".to_string(), "-p".to_string()],
        };
        let display = format!("{}", err);
        assert!(display.contains("255"));
        assert!(display.contains("abort: no repository found"));
        assert!(display.contains("log -p"));
    }

    #[test]
    fn test_error_display_hg_cli_error_without_code() {
        let err = SzzError::HgCliError {
            code: None,
            stderr: "command terminated".to_string(),
            args: vec!["annotate".to_string()],
        };
        let display = format!("{}", err);
        assert!(display.contains("Hg CLI"));
        assert!(display.contains("command terminated"));
        assert!(display.contains("annotate"));
    }

    #[test]
    fn test_error_display_from_utf8_error() {
        let invalid_utf8 = vec![0xFF, 0xFE, 0xFD];
        let from_utf8_err = String::from_utf8(invalid_utf8).unwrap_err();
        let err = SzzError::from(from_utf8_err);
        let display = format!("{}", err);
        assert!(display.contains("From UTF-8 error"));
    }

    #[test]
    fn test_error_display_diff_parse_error() {
        let err = SzzError::DiffParseError {
            revision: "412".to_string(),
            line: "@@ garbage".to_string(),
            reason: "malformed hunk header".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("412"));
        assert!(display.contains("@@ garbage"));
        assert!(display.contains("malformed hunk header"));
    }

    #[test]
    fn test_error_display_revision_parse_error() {
        let err = SzzError::RevisionParseError {
            input: "-1".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("Not a revision number"));
        assert!(display.contains("-1"));
    }

    #[test]
    fn test_error_display_generic() {
        let err = SzzError::Generic("custom error message".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Generic error"));
        assert!(display.contains("custom error message"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = SzzError::Generic("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
