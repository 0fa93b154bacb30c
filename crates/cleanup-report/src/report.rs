//! Reconciliation of metadata references against collected files.
//!
//! Cross-references every file declared in metadata against the set of
//! files the collector actually found, classifying each reference as
//! clean, duplicate, or missing, then renders the counts plus a CSV
//! detail table as one report.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use crate::language::Language;
use crate::metadata::MetadataDoc;
use crate::url;

/// Header row of the CSV detail table.
const DETAIL_HEADER: &str = "File,Language,Service";

/// How one metadata file reference relates to the collected files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// First reference to a file that exists in the repo.
    Clean,
    /// The file exists but was already classified clean.
    Duplicate,
    /// The file does not exist in the repo.
    Missing,
}

/// Outcome of cross-referencing metadata against collected files.
#[derive(Debug, Default)]
pub struct Reconciliation {
    examples: usize,
    bad_examples: usize,
    repo_files: usize,
    clean_files: Vec<String>,
    missing_files: Vec<String>,
    rows: Vec<String>,
    diagnostics: Vec<String>,
}

impl Reconciliation {
    /// Number of usable examples: documents seen minus bad ones.
    pub fn examples_count(&self) -> usize {
        self.examples - self.bad_examples
    }

    /// Files matched to a metadata reference, in first-seen order.
    pub fn clean_files(&self) -> &[String] {
        &self.clean_files
    }

    /// Referenced files that do not exist in the repo. A file
    /// referenced from several examples appears once per reference.
    pub fn missing_files(&self) -> &[String] {
        &self.missing_files
    }

    /// Documents that lacked the required `files` key.
    pub fn bad_examples(&self) -> usize {
        self.bad_examples
    }

    /// Human-readable diagnostics accumulated during reconciliation.
    /// These go to the log stream, never into the report itself.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Render the full report as one string: summary counts, the clean
    /// percentage when any files were collected, and the detail table
    /// when any clean files were found.
    pub fn render(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "Total number of examples: {}.\n",
            self.examples_count()
        ));
        report.push_str(&format!(
            "Total number of cleaned files: {}.\n",
            self.clean_files.len()
        ));
        report.push_str(&format!(
            "Total number of files: {}.\n",
            self.repo_files
        ));
        if self.repo_files > 0 {
            #[allow(clippy::cast_precision_loss)]
            let percent =
                self.clean_files.len() as f64 / self.repo_files as f64 * 100.0;
            report.push_str(&format!("Percent clean: {percent:.0}%.\n"));
        }
        if self.rows.len() > 1 {
            report.push('\n');
            for row in &self.rows {
                report.push_str(row);
                report.push('\n');
            }
        }
        report
    }

    /// Write the rendered report in one operation.
    ///
    /// With a destination path the report replaces any existing file
    /// content and a confirmation line is logged; without one it goes
    /// to standard output, which is left open.
    ///
    /// # Errors
    ///
    /// Propagates any I/O failure from the write. Output failures are
    /// fatal to the run.
    pub fn write(&self, destination: Option<&Path>) -> std::io::Result<()> {
        let text = self.render();
        match destination {
            Some(path) => {
                std::fs::write(path, &text)?;
                eprintln!("Report written to {}.", path.display());
            }
            None => std::io::stdout().write_all(text.as_bytes())?,
        }
        Ok(())
    }
}

/// Classify one resolved identifier against the repo lookup set and
/// the clean files found so far. Membership is case-insensitive; the
/// already-clean check compares exact case.
fn classify(
    file_url: &str,
    repo_lookup: &HashSet<String>,
    clean_files: &[String],
) -> Classification {
    if !repo_lookup.contains(&file_url.to_ascii_lowercase()) {
        Classification::Missing
    } else if clean_files.iter().any(|clean| clean == file_url) {
        Classification::Duplicate
    } else {
        Classification::Clean
    }
}

/// Cross-reference metadata documents against collected repo files.
///
/// Examples are processed in input order, and file entries within an
/// example in declared order. A document without a `files` key is
/// counted bad and skipped; the run never aborts on metadata content.
pub fn reconcile(examples: &[MetadataDoc], repo_files: &[String]) -> Reconciliation {
    let repo_lookup: HashSet<String> = repo_files
        .iter()
        .map(|file| file.to_ascii_lowercase())
        .collect();

    let mut outcome = Reconciliation {
        examples: examples.len(),
        repo_files: repo_files.len(),
        rows: vec![DETAIL_HEADER.to_string()],
        ..Reconciliation::default()
    };
    let default_services = [String::new()];

    for example in examples {
        let entries = match example.file_entries() {
            Ok(entries) => entries,
            Err(err) => {
                outcome.diagnostics.push(format!("ERROR: {err}."));
                outcome.bad_examples += 1;
                continue;
            }
        };
        let metadata_folder = example
            .source_path
            .parent()
            .unwrap_or_else(|| Path::new(""));

        for entry in entries {
            let file_url = url::source_url(metadata_folder, &entry.path);
            match classify(&file_url, &repo_lookup, &outcome.clean_files) {
                Classification::Clean => {
                    let language = Language::from_path(&file_url)
                        .map(|lang| lang.to_string())
                        .unwrap_or_default();
                    let services = entry
                        .services
                        .as_deref()
                        .unwrap_or(&default_services);
                    for service in services {
                        outcome
                            .rows
                            .push(format!("{file_url},{language},{service}"));
                    }
                    outcome.clean_files.push(file_url);
                }
                Classification::Duplicate => {
                    outcome.diagnostics.push(format!(
                        "File '{file_url}' reported a second time in {}.",
                        example.source_path.display()
                    ));
                }
                Classification::Missing => {
                    outcome.diagnostics.push(format!(
                        "File '{file_url}' reported in metadata does not exist in the repo."
                    ));
                    outcome.missing_files.push(file_url);
                }
            }
        }
    }

    outcome
}
