//! Project configuration, read once per run from `tsconfig.json`.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::alias::AliasTable;
use crate::error::{RelinkError, Result};

/// The slice of `tsconfig.json` this tool consumes. Unknown fields are
/// ignored; the file is not owned here.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TsconfigFile {
    compiler_options: CompilerOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CompilerOptions {
    out_dir: Option<String>,
    base_url: Option<String>,
    /// Alias patterns in declaration order; order is the tie-break.
    paths: IndexMap<String, Vec<String>>,
}

/// Resolved per-project configuration for one run.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub project_dir: PathBuf,
    pub tsconfig_path: PathBuf,
    /// Where the TypeScript sources live.
    pub src_dir: PathBuf,
    /// Where the compiler emitted the output tree.
    pub out_dir: PathBuf,
    pub aliases: AliasTable,
    /// Skip cycle detection entirely when set.
    pub allow_cycles: bool,
}

impl ProjectConfig {
    /// Load `tsconfig.json` from `project_dir` and derive the alias
    /// table. `src_dir_name` is relative to the project directory
    /// (conventionally `src`).
    pub fn load(project_dir: &Path, src_dir_name: &str) -> Result<Self> {
        let project_dir = std::path::absolute(project_dir)?;
        let tsconfig_path = project_dir.join("tsconfig.json");
        if !tsconfig_path.is_file() {
            return Err(RelinkError::TsconfigNotFound(tsconfig_path));
        }
        let text = fs::read_to_string(&tsconfig_path)?;
        let tsconfig: TsconfigFile = serde_json::from_str(&text)
            .map_err(|err| RelinkError::InvalidTsconfig(err.to_string()))?;

        let options = tsconfig.compiler_options;
        let out_dir = options.out_dir.ok_or_else(|| {
            RelinkError::InvalidValue(
                "compilerOptions.outDir must be set in tsconfig.json".to_string(),
            )
        })?;
        let out_dir = project_dir.join(out_dir);
        let src_dir = project_dir.join(src_dir_name);
        let base_url = project_dir.join(options.base_url.as_deref().unwrap_or("."));
        let aliases = AliasTable::from_tsconfig_paths(&options.paths, &base_url, &src_dir);

        Ok(Self {
            project_dir,
            tsconfig_path,
            src_dir,
            out_dir,
            aliases,
            allow_cycles: false,
        })
    }

    pub fn with_allow_cycles(mut self, allow_cycles: bool) -> Self {
        self.allow_cycles = allow_cycles;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_tsconfig(dir: &Path, body: &str) {
        fs::write(dir.join("tsconfig.json"), body).unwrap();
    }

    #[test]
    fn loads_out_dir_and_aliases() {
        let dir = tempfile::tempdir().unwrap();
        write_tsconfig(
            dir.path(),
            r#"{
                "compilerOptions": {
                    "outDir": "lib",
                    "baseUrl": ".",
                    "paths": { "@/*": ["src/*"] },
                    "strict": true
                }
            }"#,
        );

        let config = ProjectConfig::load(dir.path(), "src").unwrap();
        assert!(config.out_dir.ends_with("lib"));
        assert!(config.src_dir.ends_with("src"));
        assert!(!config.allow_cycles);
        assert_eq!(
            config.aliases.expand("@/util"),
            Some(vec!["util".to_string()])
        );
    }

    #[test]
    fn missing_out_dir_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_tsconfig(dir.path(), r#"{ "compilerOptions": {} }"#);
        let err = ProjectConfig::load(dir.path(), "src").unwrap_err();
        assert!(matches!(err, RelinkError::InvalidValue(_)));
    }

    #[test]
    fn missing_tsconfig_is_reported_with_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectConfig::load(dir.path(), "src").unwrap_err();
        match err {
            RelinkError::TsconfigNotFound(path) => assert!(path.ends_with("tsconfig.json")),
            other => panic!("expected tsconfig-not-found, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_an_invalid_tsconfig() {
        let dir = tempfile::tempdir().unwrap();
        write_tsconfig(dir.path(), "{ not json");
        let err = ProjectConfig::load(dir.path(), "src").unwrap_err();
        assert!(matches!(err, RelinkError::InvalidTsconfig(_)));
    }

    #[test]
    fn missing_compiler_options_still_requires_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_tsconfig(dir.path(), "{}");
        let err = ProjectConfig::load(dir.path(), "src").unwrap_err();
        assert!(matches!(err, RelinkError::InvalidValue(_)));
    }
}
