//! # Pattern Registry
//!
//! Named matching rules in two families and their compiled form.
//!
//! ## Modules
//!
//! - **`set`**: `PatternSet`, the plain configuration value holding the textual
//!   rules (`PatternSet::builtin()` for the default block and span tables)
//! - **`registry`**: `PatternRegistry`, the compiled, immutable matcher built
//!   from a `PatternSet`
//!
//! ## Key Invariants
//!
//! - A pattern name belongs to exactly one category
//! - Reserved slots (`img`, `escape`, `autolink`) are present but never match
//! - Iteration order is fixed: block patterns by name, then span patterns by name

pub mod registry;
pub mod set;

pub use registry::{Pattern, PatternRegistry, RegistryError, Rule, SPAN_GROUP};
pub use set::{Category, LINEBREAK, PatternSet, RuleSource};
