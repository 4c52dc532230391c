//! Plugin directory scanner
//!
//! Enumerates candidate plugin files by extension directly inside the
//! target directory (non-recursive) and locates the documentation
//! files the checks care about by exact name. Read-only; empty results
//! are valid and flow into checks as "not found".

use std::path::{Path, PathBuf};

use crate::verifier::{PLUGIN_EXTENSIONS, SCRIPT_EXTENSIONS};

/// Files discovered in a plugin directory.
#[derive(Debug, Clone, Default)]
pub struct PluginScan {
    /// All recognized plugin files, grouped by extension in the fixed
    /// `PLUGIN_EXTENSIONS` order, sorted by name within each group.
    pub plugin_files: Vec<PathBuf>,
    /// `README.md`, if present.
    pub readme: Option<PathBuf>,
    /// `LICENSE`, `LICENSE.txt` or `LICENSE.md`, if present.
    pub license: Option<PathBuf>,
    /// `requirements.txt` or `dependencies.txt`, if present.
    pub dependency_file: Option<PathBuf>,
}

impl PluginScan {
    /// Code-bearing plugin files (script suffixes only, in scan order).
    pub fn script_files(&self) -> Vec<&Path> {
        self.plugin_files
            .iter()
            .filter(|p| has_extension(p, SCRIPT_EXTENSIONS))
            .map(PathBuf::as_path)
            .collect()
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
}

fn find_named(dir: &Path, names: &[&str]) -> Option<PathBuf> {
    names
        .iter()
        .map(|n| dir.join(n))
        .find(|p| p.is_file())
}

/// Scan a plugin directory for plugin files and documentation files.
///
/// The ordering is deterministic: extension groups follow the fixed
/// recognition order, and names are sorted within each group. The
/// short-circuiting scans downstream depend on this order being
/// stable across runs.
pub fn scan_directory(dir: &Path) -> PluginScan {
    let mut entries: Vec<PathBuf> = match std::fs::read_dir(dir) {
        Ok(rd) => rd
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .collect(),
        Err(_) => Vec::new(),
    };
    entries.sort();

    let mut plugin_files = Vec::new();
    for ext in PLUGIN_EXTENSIONS {
        plugin_files.extend(
            entries
                .iter()
                .filter(|p| has_extension(p, &[ext]))
                .cloned(),
        );
    }

    PluginScan {
        plugin_files,
        readme: find_named(dir, &["README.md"]),
        license: find_named(dir, &["LICENSE", "LICENSE.txt", "LICENSE.md"]),
        dependency_file: find_named(dir, &["requirements.txt", "dependencies.txt"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let scan = scan_directory(dir.path());
        assert!(scan.plugin_files.is_empty());
        assert!(scan.readme.is_none());
        assert!(scan.license.is_none());
        assert!(scan.dependency_file.is_none());
    }

    #[test]
    fn test_scan_missing_directory_is_empty() {
        let scan = scan_directory(Path::new("/nonexistent/maxcheck-test"));
        assert!(scan.plugin_files.is_empty());
    }

    #[test]
    fn test_scan_groups_by_extension_then_name() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("zeta.ms"), "").unwrap();
        fs::write(dir.path().join("alpha.mse"), "").unwrap();
        fs::write(dir.path().join("beta.ms"), "").unwrap();
        fs::write(dir.path().join("tool.dlu"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let scan = scan_directory(dir.path());
        let names: Vec<_> = scan
            .plugin_files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["beta.ms", "zeta.ms", "alpha.mse", "tool.dlu"]);
    }

    #[test]
    fn test_script_files_excludes_binary_suffixes() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("tool.ms"), "").unwrap();
        fs::write(dir.path().join("tool.dlo"), "").unwrap();

        let scan = scan_directory(dir.path());
        assert_eq!(scan.plugin_files.len(), 2);
        assert_eq!(scan.script_files().len(), 1);
    }

    #[test]
    fn test_license_name_variants() {
        for name in ["LICENSE", "LICENSE.txt", "LICENSE.md"] {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join(name), "MIT").unwrap();
            let scan = scan_directory(dir.path());
            assert!(scan.license.is_some(), "expected {} to be found", name);
        }
    }

    #[test]
    fn test_dependency_file_variants() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("dependencies.txt"), "").unwrap();
        let scan = scan_directory(dir.path());
        assert!(scan.dependency_file.is_some());
    }

    #[test]
    fn test_subdirectories_are_not_scanned() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/inner.ms"), "").unwrap();
        let scan = scan_directory(dir.path());
        assert!(scan.plugin_files.is_empty());
    }
}
