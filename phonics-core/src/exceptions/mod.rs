//! Exception overrides for scan units
//!
//! Orthographic units are not phonologically reliable in every word: the
//! `oo` of "zoology" must split while the `oo` of "book" must not. Overrides
//! are keyed by the catalog unit and match words exactly or by regex.

pub mod config;
pub mod matcher;
pub mod registry;

pub use config::{ExceptionConfig, ExceptionEntry, ValidationReport};
pub use matcher::WordMatcher;
pub use registry::{Directive, ExceptionRegistry};
