use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

use drawmig::walker::find_candidate_files;
use drawmig::Error;

use crate::commands::CmdResult;

#[derive(Args)]
pub struct ScanArgs {
    /// File or directory to scan for command registrations
    pub path: String,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum ScanOutput {
    #[serde(rename = "scan.list")]
    List {
        path: String,
        total: usize,
        files: Vec<String>,
    },
}

pub fn run(args: ScanArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ScanOutput> {
    let root = PathBuf::from(&args.path);
    if !root.exists() {
        return Err(Error::path_not_found(args.path));
    }

    let files: Vec<String> = find_candidate_files(&root)
        .iter()
        .map(|p| relative_display(p, &root))
        .collect();

    drawmig::log_status!("scan", "Found {} candidate files", files.len());

    let exit_code = if files.is_empty() { 1 } else { 0 };
    let total = files.len();

    Ok((
        ScanOutput::List {
            path: args.path,
            total,
            files,
        },
        exit_code,
    ))
}

fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
