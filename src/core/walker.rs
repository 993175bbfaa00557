//! Candidate discovery — find source files worth migrating.
//!
//! Walks a directory tree for C++ sources and keeps only files whose content
//! suggests Draw command registrations. A file path argument bypasses the
//! heuristic entirely.

use std::path::{Path, PathBuf};

/// Extensions considered C++ sources.
const SOURCE_EXTENSIONS: &[&str] = &["cxx", "cpp", "hxx", "hpp"];

/// Find candidate files under `root`.
///
/// A file argument is returned as the single candidate unconditionally.
/// For a directory, every C++ source is kept when its content mentions
/// `Draw_Interpretor` and either `.Add(` or `Commands(`. Directories whose
/// name starts with `build` are skipped at any depth; unreadable or
/// non-UTF-8 files are skipped silently.
pub fn find_candidate_files(root: &Path) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    let mut files = Vec::new();
    walk_recursive(root, &mut files);
    files.sort();
    files
}

fn walk_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if name.starts_with("build") {
                continue;
            }
            walk_recursive(&path, files);
        } else if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if SOURCE_EXTENSIONS.contains(&ext) && looks_like_command_file(&path) {
                files.push(path);
            }
        }
    }
}

/// Content heuristic: does this file likely register Draw commands?
fn looks_like_command_file(path: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(path) else {
        return false;
    };
    content.contains("Draw_Interpretor")
        && (content.contains(".Add(") || content.contains("Commands("))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn single_file_returned_unconditionally() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "plain.txt", "nothing relevant");

        let files = find_candidate_files(&dir.path().join("plain.txt"));
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn directory_filters_by_extension_and_content() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "commands.cxx",
            "void Foo::Commands(Draw_Interpretor& di) { di.Add(\"x\", \"h\", F); }",
        );
        write(dir.path(), "other.cxx", "int main() { return 0; }");
        write(
            dir.path(),
            "notes.txt",
            "Draw_Interpretor mentioned but wrong extension .Add(",
        );

        let files = find_candidate_files(dir.path());
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("commands.cxx"));
    }

    #[test]
    fn build_directories_are_skipped() {
        let dir = TempDir::new().unwrap();
        let build = dir.path().join("build-release");
        std::fs::create_dir_all(&build).unwrap();
        write(
            &build,
            "generated.cxx",
            "Draw_Interpretor di; di.Add(\"x\", \"h\", F);",
        );

        let files = find_candidate_files(dir.path());
        assert!(files.is_empty());
    }

    #[test]
    fn nested_directories_are_walked() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src").join("tools");
        std::fs::create_dir_all(&nested).unwrap();
        write(
            &nested,
            "deep.hxx",
            "void X::Commands(Draw_Interpretor& di);",
        );

        let files = find_candidate_files(dir.path());
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("deep.hxx"));
    }

    #[test]
    fn results_are_sorted() {
        let dir = TempDir::new().unwrap();
        let body = "Draw_Interpretor di; di.Add(\"x\", \"h\", F);";
        write(dir.path(), "b.cxx", body);
        write(dir.path(), "a.cxx", body);

        let files = find_candidate_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.cxx"));
        assert!(files[1].ends_with("b.cxx"));
    }
}
