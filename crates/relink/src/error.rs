//! Error types for the rewrite pipeline.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelinkError>;

#[derive(Debug, Error)]
pub enum RelinkError {
    // Config loading errors
    #[error("tsconfig not found: {0}")]
    TsconfigNotFound(PathBuf),

    #[error("invalid tsconfig: {0}")]
    InvalidTsconfig(String),

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    /// A module could not be parsed into specifier occurrences.
    /// Fatal for the run; extraction never partially mutates anything.
    #[error("failed to parse imports of {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Asset mirroring failed. Fatal, names both paths.
    #[error("unable to copy asset\n  from {from}\n    to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    /// A circular local-dependency chain was detected and cycles are
    /// disallowed. Carries the full ordered chain, first node repeated
    /// at the end.
    #[error("circular dependencies found:\n{}", format_chain(.chain))]
    Cycle { chain: Vec<String> },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_chain(chain: &[String]) -> String {
    chain
        .iter()
        .map(|id| format!("    {id}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_error_lists_full_chain() {
        let err = RelinkError::Cycle {
            chain: vec!["a.js".into(), "b.js".into(), "a.js".into()],
        };
        let message = err.to_string();
        assert!(message.contains("    a.js\n    b.js\n    a.js"));
    }

    #[test]
    fn copy_error_names_both_paths() {
        let err = RelinkError::Copy {
            from: PathBuf::from("src/logo.png"),
            to: PathBuf::from("lib/logo.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let message = err.to_string();
        assert!(message.contains("src/logo.png"));
        assert!(message.contains("lib/logo.png"));
    }
}
