//! One-shot literal text patcher for the QuickLauncher view-model.
//!
//! Reads one hardcoded C# source file, applies a fixed ordered list of
//! exact-match text substitutions, and writes the file back only when at
//! least one substitution changed the text. A pattern that no longer
//! matches is treated as already applied, which makes re-runs no-ops.
//!
//! # Safety
//!
//! - Patterns match as exact literals; no fuzzy or whitespace-insensitive
//!   matching
//! - Atomic file writes (tempfile + fsync + rename)
//! - A UTF-8 BOM on the target survives the rewrite
//! - All reads happen before the single write, so a failure never leaves
//!   the file half-patched
//!
//! # Example
//!
//! ```no_run
//! use viewmodel_patcher::{builtin_rules, Patcher, TARGET_FILE};
//!
//! let patcher = Patcher::new(TARGET_FILE, builtin_rules());
//! match patcher.apply() {
//!     Ok(result) => println!("Patch run finished: {:?}", result),
//!     Err(e) => eprintln!("Patch run failed: {}", e),
//! }
//! ```

pub mod patcher;
pub mod rules;
pub mod text;

// Re-exports
pub use patcher::{PatchError, PatchResult, Patcher, ReplacementRule, RuleOutcome};
pub use rules::{builtin_rules, TARGET_FILE};
pub use text::{SourceText, TextError};
