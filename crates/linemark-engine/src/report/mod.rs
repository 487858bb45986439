//! # Reports
//!
//! Stable, serialisable views of a [`ClassifiedDoc`](crate::ClassifiedDoc),
//! used by the CLI and by snapshot tests.
//!
//! ## Modules
//!
//! - **`normalize`**: converts a classified document to `Report`
//! - **`table`**: one-line-per-row plain text rendering
//! - **`invariants`**: runtime checks on classifier output (one record per
//!   line, indices in order, ranges inside their line)

pub mod invariants;
pub mod normalize;
pub mod table;

pub use invariants::check as invariants;
pub use normalize::{LineReport, Report, normalize};
pub use table::render_table;
