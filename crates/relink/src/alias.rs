//! Alias rules derived from `tsconfig.compilerOptions.paths`.
//!
//! A rule maps a specifier pattern (optionally ending in one `*`) to an
//! ordered list of physical-path templates. Rule order is significant:
//! the first matching rule wins and later rules are never consulted.

use std::path::Path;

use indexmap::IndexMap;

use crate::paths::relative_specifier;

/// One alias rule. Candidate templates are stored relative to the
/// source directory, with the wildcard placeholder kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRule {
    pub pattern: String,
    pub candidates: Vec<String>,
}

/// Ordered alias rule set for one project.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    rules: Vec<AliasRule>,
}

/// Outcome of matching one specifier against one pattern.
enum PatternMatch<'a> {
    /// Exact pattern match: candidates are used verbatim.
    Exact,
    /// Trailing-wildcard match, carrying the captured remainder.
    Wildcard(&'a str),
}

fn match_pattern<'a>(specifier: &'a str, pattern: &str) -> Option<PatternMatch<'a>> {
    if let Some(prefix) = pattern.strip_suffix('*') {
        return specifier
            .strip_prefix(prefix)
            .map(PatternMatch::Wildcard);
    }
    (specifier == pattern).then_some(PatternMatch::Exact)
}

impl AliasTable {
    pub fn new(rules: Vec<AliasRule>) -> Self {
        Self { rules }
    }

    /// Build the table from `compilerOptions.paths`, preserving
    /// declaration order. Each template is resolved against `base_url`
    /// and stored relative to `src_dir`.
    pub fn from_tsconfig_paths(
        paths: &IndexMap<String, Vec<String>>,
        base_url: &Path,
        src_dir: &Path,
    ) -> Self {
        let rules = paths
            .iter()
            .map(|(pattern, templates)| AliasRule {
                pattern: pattern.clone(),
                candidates: templates
                    .iter()
                    .map(|template| {
                        let resolved = base_url.join(template);
                        pathdiff::diff_paths(&resolved, src_dir)
                            .unwrap_or(resolved)
                            .to_string_lossy()
                            .replace('\\', "/")
                    })
                    .collect(),
            })
            .collect();
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Expand an aliased specifier into source-dir-relative candidates.
    ///
    /// Iterates rules in declared order and short-circuits on the first
    /// match; returns `None` when the specifier is not aliased (the
    /// caller passes it through as its own single candidate).
    pub fn expand(&self, specifier: &str) -> Option<Vec<String>> {
        for rule in &self.rules {
            match match_pattern(specifier, &rule.pattern) {
                Some(PatternMatch::Exact) => return Some(rule.candidates.clone()),
                Some(PatternMatch::Wildcard(rest)) => {
                    return Some(
                        rule.candidates
                            .iter()
                            .map(|template| template.replacen('*', rest, 1))
                            .collect(),
                    );
                }
                None => continue,
            }
        }
        None
    }

    /// Expand an aliased specifier into candidates relative to the
    /// importing module's directory, ready for filesystem probing.
    ///
    /// `module_dir` is the compiled module's directory inside the output
    /// tree; candidates are rebased through the equivalent source
    /// directory so the relative shape survives the out-tree move.
    /// Returns the specifier itself as the single candidate when no
    /// rule matches.
    pub fn expand_for_module(
        &self,
        specifier: &str,
        module_dir: &Path,
        src_dir: &Path,
        out_dir: &Path,
    ) -> Vec<String> {
        let Some(candidates) = self.expand(specifier) else {
            return vec![specifier.to_string()];
        };
        let ts_module_dir = match pathdiff::diff_paths(module_dir, out_dir) {
            Some(rel) => src_dir.join(rel),
            None => src_dir.to_path_buf(),
        };
        candidates
            .iter()
            .map(|candidate| relative_specifier(&ts_module_dir, &src_dir.join(candidate)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn table(rules: &[(&str, &[&str])]) -> AliasTable {
        AliasTable::new(
            rules
                .iter()
                .map(|(pattern, candidates)| AliasRule {
                    pattern: (*pattern).to_string(),
                    candidates: candidates.iter().map(|c| (*c).to_string()).collect(),
                })
                .collect(),
        )
    }

    #[test]
    fn wildcard_substitution() {
        let table = table(&[("@/*", &["src/*", "node_modules/*"])]);
        assert_eq!(
            table.expand("@/toto"),
            Some(vec!["src/toto".to_string(), "node_modules/toto".to_string()])
        );
    }

    #[test]
    fn exact_match_returns_candidates_verbatim() {
        let table = table(&[("react", &["vendor/react"])]);
        assert_eq!(table.expand("react"), Some(vec!["vendor/react".to_string()]));
    }

    #[test]
    fn first_matching_rule_wins() {
        let table = table(&[
            ("@lib/*", &["./vendor/*"]),
            ("@lib/core", &["./special-core"]),
        ]);
        assert_eq!(
            table.expand("@lib/core"),
            Some(vec!["./vendor/core".to_string()])
        );
    }

    #[test]
    fn unaliased_specifier_is_none() {
        let table = table(&[("@/*", &["src/*"])]);
        assert_eq!(table.expand("./local"), None);
        assert_eq!(table.expand("lodash"), None);
    }

    #[test]
    fn from_tsconfig_paths_rebases_to_src_dir() {
        let mut paths = IndexMap::new();
        paths.insert("@/*".to_string(), vec!["src/*".to_string()]);
        let table = AliasTable::from_tsconfig_paths(
            &paths,
            Path::new("/project"),
            Path::new("/project/src"),
        );
        assert_eq!(table.expand("@/util"), Some(vec!["util".to_string()]));
    }

    #[test]
    fn expand_for_module_yields_module_relative_specifiers() {
        let mut paths = IndexMap::new();
        paths.insert("@/*".to_string(), vec!["src/*".to_string()]);
        let src_dir = PathBuf::from("/project/src");
        let out_dir = PathBuf::from("/project/lib");
        let table = AliasTable::from_tsconfig_paths(&paths, Path::new("/project"), &src_dir);

        let candidates = table.expand_for_module(
            "@/util/log",
            Path::new("/project/lib/deep/nested"),
            &src_dir,
            &out_dir,
        );
        assert_eq!(candidates, vec!["../../util/log".to_string()]);
    }

    #[test]
    fn expand_for_module_passes_unaliased_through() {
        let table = table(&[("@/*", &["src/*"])]);
        let candidates = table.expand_for_module(
            "./sibling",
            Path::new("/project/lib"),
            Path::new("/project/src"),
            Path::new("/project/lib"),
        );
        assert_eq!(candidates, vec!["./sibling".to_string()]);
    }
}
