use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use drawmig::migrate::{migrate_path, FileOutcome, MigrateOptions};

use crate::commands::CmdResult;

#[derive(Args)]
pub struct MigrateArgs {
    /// File or directory to migrate
    pub path: String,

    /// Preview changes without modifying files (this is the default mode)
    #[arg(long, conflicts_with = "write")]
    pub dry_run: bool,

    /// Create backup files (.backup extension) before writing
    #[arg(long)]
    pub backup: bool,

    /// Apply changes to disk (default is dry-run)
    #[arg(long)]
    pub write: bool,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum MigrateOutput {
    #[serde(rename = "migrate.run")]
    Run {
        path: String,
        dry_run: bool,
        backup: bool,
        files_scanned: usize,
        files_changed: usize,
        total_changes: usize,
        files: Vec<FileOutcome>,
        applied: bool,
    },
}

pub fn run(args: MigrateArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<MigrateOutput> {
    let root = PathBuf::from(&args.path);
    let opts = MigrateOptions {
        dry_run: !args.write,
        backup: args.backup,
    };

    let result = migrate_path(&root, &opts)?;

    let exit_code = if result.total_changes == 0 { 1 } else { 0 };

    Ok((
        MigrateOutput::Run {
            path: args.path,
            dry_run: opts.dry_run,
            backup: opts.backup,
            files_scanned: result.files_scanned,
            files_changed: result.files_changed,
            total_changes: result.total_changes,
            files: result.outcomes,
            applied: result.applied && result.files_changed > 0,
        },
        exit_code,
    ))
}
