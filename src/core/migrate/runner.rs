//! Migration runner — apply the buffer rewriter across a file tree.
//!
//! Walks candidate files, rewrites each buffer independently, and either
//! reports (dry run) or writes back, optionally after creating a `.backup`
//! sibling. Per-file failures are recorded in the result and never abort
//! the batch; counts are folded from return values, with no state shared
//! across files.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::error::{Error, Result};
use crate::core::migrate::rewrite::rewrite_buffer;
use crate::core::walker::find_candidate_files;
use crate::log_status;
use crate::utils::io::write_file;

#[derive(Debug, Clone, Default)]
pub struct MigrateOptions {
    /// Report changes without touching disk.
    pub dry_run: bool,
    /// Copy each modified file to `<path>.backup` before writing.
    pub backup: bool,
}

/// Per-file outcome. Files with no changes and no error are not reported.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// Path relative to the migration root.
    pub file: String,
    pub includes: usize,
    pub signatures: usize,
    pub calls: usize,
    /// Located calls whose shape had no canonical form.
    pub skipped_calls: usize,
    pub changes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<String>,
    pub written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate result of one migration run.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationResult {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub total_changes: usize,
    pub outcomes: Vec<FileOutcome>,
    /// Whether changes were written to disk.
    pub applied: bool,
}

/// Migrate every candidate file under `root`.
pub fn migrate_path(root: &Path, opts: &MigrateOptions) -> Result<MigrationResult> {
    if !root.exists() {
        return Err(Error::path_not_found(root.display().to_string()));
    }

    let candidates = find_candidate_files(root);
    log_status!("migrate", "Found {} candidate files", candidates.len());

    let mut outcomes = Vec::new();
    let mut files_changed = 0;
    let mut total_changes = 0;

    for path in &candidates {
        let relative = relative_display(path, root);

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                // Unreadable or non-UTF-8: report and keep going
                outcomes.push(failed_outcome(relative, format!("read failed: {}", e)));
                continue;
            }
        };

        let rewrite = rewrite_buffer(&content);
        let changes = rewrite.total_changes();
        if changes == 0 && rewrite.skipped_calls == 0 {
            continue;
        }

        let mut outcome = FileOutcome {
            file: relative.clone(),
            includes: rewrite.includes,
            signatures: rewrite.signatures,
            calls: rewrite.calls,
            skipped_calls: rewrite.skipped_calls,
            changes,
            backup: None,
            written: false,
            error: None,
        };

        if changes > 0 {
            files_changed += 1;
            total_changes += changes;

            if opts.dry_run {
                log_status!("migrate", "[dry run] {}: {} changes", relative, changes);
            } else {
                if opts.backup {
                    let backup_path = backup_path_for(path);
                    match std::fs::copy(path, &backup_path) {
                        Ok(_) => {
                            outcome.backup = Some(backup_path.display().to_string());
                        }
                        Err(e) => {
                            outcome.error = Some(format!("backup failed: {}", e));
                            outcomes.push(outcome);
                            continue;
                        }
                    }
                }

                match write_file(path, &rewrite.content, "write migrated file") {
                    Ok(()) => {
                        outcome.written = true;
                        log_status!("migrate", "{}: {} changes", relative, changes);
                    }
                    Err(e) => {
                        outcome.error = Some(format!("write failed: {}", e));
                    }
                }
            }
        }

        outcomes.push(outcome);
    }

    Ok(MigrationResult {
        files_scanned: candidates.len(),
        files_changed,
        total_changes,
        outcomes,
        applied: !opts.dry_run,
    })
}

fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

fn backup_path_for(path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.backup", path.display()))
}

fn failed_outcome(file: String, error: String) -> FileOutcome {
    FileOutcome {
        file,
        includes: 0,
        signatures: 0,
        calls: 0,
        skipped_calls: 0,
        changes: 0,
        backup: None,
        written: false,
        error: Some(error),
    }
}
