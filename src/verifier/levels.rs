//! Level evaluators
//!
//! Each `verify_levelN` function runs one level's checks against the
//! scanned directory and feeds them to a sink. File reads are
//! best-effort: an unreadable file is a non-match, never an error, so
//! every level always produces a complete check list.
//!
//! Scans are deliberately bounded (first 3 or 5 files) and
//! short-circuit on the first match. These limits are part of the
//! observable scoring behavior and must not be widened.

use std::path::Path;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::models::LevelKey;
use crate::scanner::PluginScan;

use super::report::CheckSink;
use super::{
    CONTENT_SCAN_LIMIT, HEADER_SCAN_LIMIT, NAMING_VIOLATION_LIMIT, SCRIPT_EXTENSIONS,
    SIZE_LIMIT_MB,
};

fn ci_regex(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("valid check pattern")
}

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").expect("valid heading regex"));
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| ci_regex(r"(version|版本)[\s:：]+(\d+\.\d+\.\d+)"));
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| ci_regex(r"(Plugin\s+Name|Author|Version|Description)"));
static ERROR_HANDLING_RE: LazyLock<Regex> =
    LazyLock::new(|| ci_regex(r"(try|catch|error|exception)"));
static LOGGING_RE: LazyLock<Regex> =
    LazyLock::new(|| ci_regex(r"(log|print|format|messageBox)"));
static SINGLE_LETTER_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| ci_regex(r"\b([a-hln-z])\s*="));
static MAX_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| ci_regex(r"3ds\s*Max\s*\d{4}"));
static SYSTEM_REQ_RE: LazyLock<Regex> =
    LazyLock::new(|| ci_regex(r"(系统要求|system\s+requirements?|windows)"));
static PERFORMANCE_RE: LazyLock<Regex> =
    LazyLock::new(|| ci_regex(r"(performance|optimize|efficient|cache)"));

/// Lossy best-effort read. `None` means "could not read", which every
/// caller treats as a non-match.
fn read_lossy(path: &Path) -> Option<String> {
    std::fs::read(path)
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

fn is_script(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SCRIPT_EXTENSIONS.iter().any(|x| x.eq_ignore_ascii_case(e)))
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("?")
}

/// Metadata extracted from the README as a Level 1 byproduct,
/// independent of check pass/fail.
#[derive(Debug, Clone, Default)]
pub(super) struct ExtractedMeta {
    pub plugin_name: Option<String>,
    pub version: Option<String>,
}

/// Level 1: basic presence and documentation completeness.
pub(super) fn verify_level1(scan: &PluginScan, sink: &mut impl CheckSink) -> ExtractedMeta {
    let level = LevelKey::Level1;
    let mut meta = ExtractedMeta::default();

    sink.add(
        level,
        "Main plugin file exists",
        !scan.plugin_files.is_empty(),
        format!("Found {} plugin file(s)", scan.plugin_files.len()),
    );

    let readme_exists = scan.readme.is_some();
    sink.add(
        level,
        "README.md exists",
        readme_exists,
        if readme_exists {
            "README.md found".to_string()
        } else {
            "README.md not found".to_string()
        },
    );

    let license_exists = scan.license.is_some();
    sink.add(
        level,
        "LICENSE file exists",
        license_exists,
        if license_exists {
            "LICENSE file found".to_string()
        } else {
            "LICENSE file not found".to_string()
        },
    );

    if let Some(readme) = &scan.readme {
        meta = check_readme_content(readme, level, sink);
    }

    if !scan.plugin_files.is_empty() {
        check_file_header(scan, level, sink);
    }

    meta
}

/// README content checks, plus name/version extraction.
fn check_readme_content(readme: &Path, level: LevelKey, sink: &mut impl CheckSink) -> ExtractedMeta {
    let content = read_lossy(readme).unwrap_or_default();

    let plugin_name = HEADING_RE
        .captures(&content)
        .map(|c| c[1].trim().to_string());
    let version = VERSION_RE.captures(&content).map(|c| c[2].to_string());

    static README_SECTIONS: &[(&str, &str, &str)] = &[
        (
            "README includes installation instructions",
            r"(install|安装)",
            "Installation instructions",
        ),
        (
            "README includes usage examples",
            r"(usage|example|使用|示例)",
            "Usage examples",
        ),
        (
            "README includes author information",
            r"(author|作者|developer|开发)",
            "Author information",
        ),
    ];

    for &(name, pattern, label) in README_SECTIONS {
        let found = ci_regex(pattern).is_match(&content);
        sink.add(
            level,
            name,
            found,
            format!("{} {}", label, if found { "found" } else { "not found" }),
        );
    }

    ExtractedMeta {
        plugin_name,
        version,
    }
}

/// Header-completeness check over the first script file that reads
/// successfully. At most one check is produced.
fn check_file_header(scan: &PluginScan, level: LevelKey, sink: &mut impl CheckSink) {
    for path in scan.plugin_files.iter().take(HEADER_SCAN_LIMIT) {
        if !is_script(path) {
            continue;
        }
        let Some(content) = read_lossy(path) else {
            continue;
        };

        let first_100_lines = content.lines().take(100).collect::<Vec<_>>().join("\n");
        let has_header = HEADER_RE.is_match(&first_100_lines);

        sink.add(
            level,
            format!("File header is complete ({})", file_name(path)),
            has_header,
            if has_header {
                "Contains the required metadata fields"
            } else {
                "Missing plugin metadata in the header"
            },
        );
        return;
    }
}

/// Level 2: functional heuristics over script files. Produces zero
/// checks when no script file exists.
pub(super) fn verify_level2(scan: &PluginScan, sink: &mut impl CheckSink) {
    let level = LevelKey::Level2;
    let scripts = scan.script_files();
    if scripts.is_empty() {
        return;
    }

    let has_error_handling = scripts
        .iter()
        .take(CONTENT_SCAN_LIMIT)
        .filter_map(|p| read_lossy(p))
        .any(|content| ERROR_HANDLING_RE.is_match(&content));
    sink.add(
        level,
        "Includes error handling",
        has_error_handling,
        if has_error_handling {
            "Found try-catch or error handling in the code"
        } else {
            "No try-catch or error handling found in the code"
        },
    );

    let has_logging = scripts
        .iter()
        .take(CONTENT_SCAN_LIMIT)
        .filter_map(|p| read_lossy(p))
        .any(|content| LOGGING_RE.is_match(&content));
    sink.add(
        level,
        "Includes logging",
        has_logging,
        if has_logging {
            "Found logging or output statements in the code"
        } else {
            "No logging or output statements found in the code"
        },
    );

    // Coarse textual heuristic over raw source, not a parse: count
    // single-letter assignments outside the tolerated loop letters.
    // Its false positives are part of the reference behavior.
    let mut good_naming = true;
    for path in scripts.iter().take(HEADER_SCAN_LIMIT) {
        let Some(content) = read_lossy(path) else {
            continue;
        };
        if SINGLE_LETTER_VAR_RE.find_iter(&content).count() > NAMING_VIOLATION_LIMIT {
            good_naming = false;
            break;
        }
    }
    sink.add(
        level,
        "Follows naming conventions",
        good_naming,
        if good_naming {
            "Variable naming follows best practices"
        } else {
            "Variable naming needs improvement"
        },
    );
}

/// Level 3: compatibility declarations. README checks are omitted (not
/// failed) when there is no README; the dependency check always runs.
pub(super) fn verify_level3(scan: &PluginScan, sink: &mut impl CheckSink) {
    let level = LevelKey::Level3;

    if let Some(readme) = &scan.readme {
        let content = read_lossy(readme).unwrap_or_default();

        let version_declared = MAX_VERSION_RE.is_match(&content);
        sink.add(
            level,
            "3ds Max version compatibility declared",
            version_declared,
            format!(
                "Version information {} in README",
                if version_declared { "found" } else { "not found" }
            ),
        );

        let system_req = SYSTEM_REQ_RE.is_match(&content);
        sink.add(
            level,
            "System requirements declared",
            system_req,
            format!(
                "System requirements {} in README",
                if system_req { "found" } else { "not found" }
            ),
        );
    }

    let deps_found = scan.dependency_file.is_some();
    sink.add(
        level,
        "Dependencies documented",
        deps_found,
        if deps_found {
            "Dependency file found".to_string()
        } else {
            "Dependency file not found (optional)".to_string()
        },
    );
}

/// Level 4: performance heuristics. Produces zero checks when no
/// plugin file exists.
pub(super) fn verify_level4(scan: &PluginScan, sink: &mut impl CheckSink) {
    let level = LevelKey::Level4;
    if scan.plugin_files.is_empty() {
        return;
    }

    let total_size: u64 = scan
        .plugin_files
        .iter()
        .filter_map(|p| std::fs::metadata(p).ok())
        .map(|m| m.len())
        .sum();
    let size_mb = total_size as f64 / (1024.0 * 1024.0);
    sink.add(
        level,
        "Plugin file size is reasonable",
        size_mb < SIZE_LIMIT_MB,
        format!("Total size: {:.2} MB", size_mb),
    );

    let performance_aware = scan
        .plugin_files
        .iter()
        .take(CONTENT_SCAN_LIMIT)
        .filter(|p| is_script(p))
        .filter_map(|p| read_lossy(p))
        .any(|content| PERFORMANCE_RE.is_match(&content));
    sink.add(
        level,
        "Includes performance-aware code",
        performance_aware,
        if performance_aware {
            "Found performance optimization markers in the code"
        } else {
            "No performance optimization markers found in the code"
        },
    );
}
