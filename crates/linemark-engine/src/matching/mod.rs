//! # Line Matching
//!
//! Applies every compiled pattern to a single line and records what matched.
//!
//! - **`span`**: byte ranges into a line
//! - **`apply`**: `apply` for one line, `match_lines` for a whole document
//! - **`line_set`**: `LineMatchSet`, the name set the classifier consumes

pub mod apply;
pub mod line_set;
pub mod span;

pub use apply::{Match, apply, match_lines};
pub use line_set::LineMatchSet;
pub use span::Span;
