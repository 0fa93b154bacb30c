//! # cleanup-report
//!
//! Reads cleanup metadata scattered across an example repo and reports
//! files cleaned up versus files still needing cleanup. A cleaned file
//! contains code that has been brought up to coding standard, has been
//! tested, and has at least minimal comments. To include a file in the
//! cleaned report, list it in a `metadata.yaml` file somewhere in the
//! repo.
//!
//! ## Modules
//!
//! - [`collect`] — Walk a folder tree gathering source files and metadata
//! - [`metadata`] — Parse and validate YAML cleanup metadata documents
//! - [`report`] — Reconcile metadata references against collected files
//! - [`language`] — Recognized source extensions and their languages
//! - [`url`] — Canonical GitHub URL construction for repo files
//! - [`error`] — Error type shared across the crate

pub mod collect;
pub mod error;
pub mod language;
pub mod metadata;
pub mod report;
pub mod url;
