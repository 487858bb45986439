//! # Paragraph Classification
//!
//! Two-phase classification over the per-line match sets of a whole document.
//!
//! ## Phases
//!
//! 1. **Local facts**: each line's sorted name list and `safe` flag, computed
//!    without reference to neighbours
//! 2. **Forward scan**: a carried state (`Carry`) and a one-line lookahead
//!    (`Next`) decide each line's `LineType`
//!
//! ## Modules
//!
//! - **`types`**: `LineType`, `LineClassification`, `Lookahead`, and the scan
//!   states `Carry` and `Next`
//! - **`classifier`**: `ParagraphClassifier`, the scan itself
//!
//! ## Key Invariants
//!
//! - Output has exactly one record per input line, in line order
//! - The scan is sequential; only matching may run in parallel

pub mod classifier;
pub mod types;

pub use classifier::ParagraphClassifier;
pub use types::{Carry, LineClassification, LineType, Lookahead, Next};
