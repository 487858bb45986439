pub mod classify;
pub mod document;
pub mod matching;
pub mod patterns;
pub mod report;

// Re-export key types for easier usage
pub use classify::{Lookahead, LineClassification, LineType, ParagraphClassifier};
pub use document::{ClassifiedDoc, classify_document, split_lines};
pub use matching::{LineMatchSet, Match, Span, apply, match_lines};
pub use patterns::{Category, PatternRegistry, PatternSet, RegistryError, RuleSource};
