//! Property tests for the reconciliation invariants.
//!
//! Each test targets an invariant that would break under a common bug
//! class: double-counting duplicates, counting missing files as clean,
//! or non-deterministic report rendering.

use std::path::PathBuf;

use proptest::prelude::*;

use cleanup_report::metadata::{FileEntry, MetadataDoc};
use cleanup_report::report::reconcile;
use cleanup_report::url::{source_url, GITHUB_URL};

/// A lowercase file stem safe to use in paths and URLs.
fn stem() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

/// One metadata document in folder `a`, referencing the given stems.
fn doc_with(stems: &[String]) -> MetadataDoc {
    MetadataDoc {
        files: Some(
            stems
                .iter()
                .map(|s| FileEntry {
                    path: format!("{s}.py"),
                    services: None,
                })
                .collect(),
        ),
        source_path: PathBuf::from("a/metadata.yaml"),
    }
}

proptest! {
    /// Clean files can never outnumber collected files, no matter how
    /// many references the metadata declares.
    #[test]
    fn clean_never_exceeds_collected(
        repo_stems in proptest::collection::vec(stem(), 0..8),
        referenced in proptest::collection::vec(stem(), 0..16),
    ) {
        let repo: Vec<String> = repo_stems
            .iter()
            .map(|s| format!("{GITHUB_URL}a/{s}.py"))
            .collect();
        let outcome = reconcile(&[doc_with(&referenced)], &repo);
        prop_assert!(outcome.clean_files().len() <= repo.len());
    }

    /// Every reference lands in exactly one bucket: each clean file is
    /// distinct, and clean-plus-duplicate-plus-missing accounts for
    /// every entry processed.
    #[test]
    fn every_reference_classified_once(
        repo_stems in proptest::collection::vec(stem(), 0..8),
        referenced in proptest::collection::vec(stem(), 0..16),
    ) {
        let repo: Vec<String> = repo_stems
            .iter()
            .map(|s| format!("{GITHUB_URL}a/{s}.py"))
            .collect();
        let outcome = reconcile(&[doc_with(&referenced)], &repo);

        let duplicates = outcome
            .diagnostics()
            .iter()
            .filter(|d| d.contains("reported a second time"))
            .count();
        prop_assert_eq!(
            outcome.clean_files().len() + duplicates + outcome.missing_files().len(),
            referenced.len()
        );

        let mut distinct = outcome.clean_files().to_vec();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(distinct.len(), outcome.clean_files().len());
    }

    /// Rendering the same reconciliation twice is byte-identical.
    #[test]
    fn render_is_deterministic(
        repo_stems in proptest::collection::vec(stem(), 0..8),
        referenced in proptest::collection::vec(stem(), 0..8),
    ) {
        let repo: Vec<String> = repo_stems
            .iter()
            .map(|s| format!("{GITHUB_URL}a/{s}.py"))
            .collect();
        let outcome = reconcile(&[doc_with(&referenced)], &repo);
        prop_assert_eq!(outcome.render(), outcome.render());
    }

    /// A referenced file that was never collected shows up in the
    /// missing list and never in the detail table.
    #[test]
    fn missing_never_detailed(referenced in proptest::collection::vec(stem(), 1..8)) {
        let outcome = reconcile(&[doc_with(&referenced)], &[]);
        prop_assert!(outcome.clean_files().is_empty());
        prop_assert_eq!(outcome.missing_files().len(), referenced.len());
        prop_assert!(!outcome.render().contains("File,Language,Service"));
    }

    /// The identifier the collector builds for a file in a subfolder
    /// always equals the identifier the reconciler builds when the
    /// parent folder's metadata references the same file through a
    /// relative subfolder path.
    #[test]
    fn identifier_construction_agrees(folder in stem(), sub in stem(), name in stem()) {
        let collected = source_url(
            std::path::Path::new(&format!("{folder}/{sub}")),
            &format!("{name}.py"),
        );
        let referenced = source_url(
            std::path::Path::new(&folder),
            &format!("{sub}/{name}.py"),
        );
        prop_assert_eq!(collected, referenced);
    }
}
