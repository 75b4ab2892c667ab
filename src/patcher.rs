use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::text::{SourceText, TextError};

/// A fixed (pattern, replacement) literal text pair.
///
/// Patterns match as exact, case- and whitespace-sensitive substrings. This
/// is brittle by design: any drift in the target file's formatting means the
/// rule silently stops matching, which reads as "already applied".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRule {
    /// Short identifier used in diagnostics
    pub name: String,
    /// Exact text block to search for
    pub pattern: String,
    /// Exact text block to substitute
    pub replacement: String,
}

impl ReplacementRule {
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// True when the pattern no longer occurs once the replacement is in
    /// place. Every built-in rule must satisfy this; it is what makes a
    /// second run a no-op.
    pub fn is_idempotent(&self) -> bool {
        !self.replacement.contains(&self.pattern)
    }

    /// Replace every occurrence of the exact pattern.
    ///
    /// An absent pattern is a normal outcome, not an error: the patch was
    /// already applied or is inapplicable to this revision of the target.
    pub fn apply<'a>(&self, text: &'a str) -> (Cow<'a, str>, RuleOutcome) {
        let occurrences = text.matches(self.pattern.as_str()).count();
        if occurrences == 0 {
            (Cow::Borrowed(text), RuleOutcome::NotFound)
        } else {
            (
                Cow::Owned(text.replace(&self.pattern, &self.replacement)),
                RuleOutcome::Replaced { occurrences },
            )
        }
    }
}

/// Outcome of a single rule against the current text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The pattern matched and was substituted
    Replaced { occurrences: usize },
    /// The pattern was absent (already applied or inapplicable)
    NotFound,
}

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("failed to read {file}: {source}")]
    Read {
        file: PathBuf,
        #[source]
        source: TextError,
    },

    #[error("failed to write {file}: {source}")]
    Write {
        file: PathBuf,
        #[source]
        source: TextError,
    },
}

/// Result of a full patch run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "PatchResult should be checked to see whether the file was written"]
pub enum PatchResult {
    /// At least one rule matched and the file was rewritten
    Patched { file: PathBuf, rules_applied: usize },
    /// No rule changed the text; the file was not touched
    Unchanged { file: PathBuf },
}

/// The whole tool: read the target once, run the rules strictly in declared
/// order, and write the file back only if the text changed.
///
/// Each rule operates on the output of the previous rule, so later rules may
/// depend on earlier rules having already run. All reads happen before the
/// single write; a failure can never leave the file half-patched.
#[derive(Debug, Clone)]
pub struct Patcher {
    file: PathBuf,
    rules: Vec<ReplacementRule>,
}

impl Patcher {
    pub fn new(file: impl Into<PathBuf>, rules: Vec<ReplacementRule>) -> Self {
        Self {
            file: file.into(),
            rules,
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    /// Apply the rules to a string without touching the filesystem.
    ///
    /// Returns the final text and the number of rules that matched.
    pub fn apply_rules(&self, text: &str) -> (String, usize) {
        let mut current = text.to_string();
        let mut applied = 0;

        for rule in &self.rules {
            let (next, outcome) = rule.apply(&current);
            if let RuleOutcome::Replaced { .. } = outcome {
                let next = next.into_owned();
                current = next;
                applied += 1;
            }
        }

        (current, applied)
    }

    /// Run the patch: read, substitute, conditionally write.
    ///
    /// The file is overwritten if and only if the resulting text differs
    /// from the text read at the start. A no-op run leaves the on-disk
    /// bytes, encoding markers, and timestamps untouched.
    pub fn apply(&self) -> Result<PatchResult, PatchError> {
        let source = SourceText::read(&self.file).map_err(|source| PatchError::Read {
            file: self.file.clone(),
            source,
        })?;

        let (patched, rules_applied) = self.apply_rules(source.as_str());

        if rules_applied == 0 || patched == source.as_str() {
            return Ok(PatchResult::Unchanged {
                file: self.file.clone(),
            });
        }

        source
            .with_text(patched)
            .write(&self.file)
            .map_err(|source| PatchError::Write {
                file: self.file.clone(),
                source,
            })?;

        Ok(PatchResult::Patched {
            file: self.file.clone(),
            rules_applied,
        })
    }
}
