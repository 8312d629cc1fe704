//! Registry patcher — splices registration calls at the marker line.
//!
//! The registry (`routes/base.go`) wires every group's registration function
//! into the dispatch layer. It carries one sentinel comment line; each run
//! replaces that line with the calls that are not yet present, followed by
//! the sentinel itself. Runs that add nothing leave the file byte-identical.

use crate::patch::PatchOutcome;
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Sentinel comment replaced (and re-emitted) on every patch.
pub const MARKER: &str = "// (auto-generated: add more RegisterXxxRoutes here)";

/// Name of the hand-maintained root registration function, never a candidate.
const ROOT_REGISTRATION_FN: &str = "RegisterRoutes";

static RE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*// \(auto-generated: add more RegisterXxxRoutes here\).*$").unwrap()
});

/// Exported registration function definitions in generated files.
static RE_REG_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"func (?P<name>Register[A-Za-z0-9_]+Routes)\s*\(").unwrap()
});

/// Registration call-sites already present in the registry.
static RE_REG_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Register[A-Za-z0-9_]+Routes\(v1API, container\)").unwrap());

/// Scan the routes directory for registration function names, in sorted file
/// order. The registry itself (`base.go`) and the reserved root function are
/// excluded. Unreadable files are reported and skipped.
pub fn collect_candidates(routes_dir: &Path) -> Result<Vec<String>> {
    let pattern = routes_dir.join("*.go");
    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())
        .with_context(|| format!("invalid glob pattern: {}", pattern.display()))?
        .filter_map(|r| r.ok())
        .filter(|p| p.file_name().is_some_and(|n| n != "base.go"))
        .collect();
    files.sort();

    let mut candidates = Vec::new();
    for path in &files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };
        for caps in RE_REG_FN.captures_iter(&content) {
            let name = &caps["name"];
            if name != ROOT_REGISTRATION_FN {
                candidates.push(name.to_string());
            }
        }
    }
    Ok(candidates)
}

/// Splice missing registration calls into the registry content.
///
/// Calls already present (matched as call-sites) are never re-inserted; the
/// marker line survives, trailing the call list.
pub fn patch_registry(content: &str, candidates: &[String]) -> PatchOutcome {
    if !RE_MARKER.is_match(content) {
        return PatchOutcome::NoAnchor;
    }

    let existing: HashSet<&str> = RE_REG_CALL.find_iter(content).map(|m| m.as_str()).collect();

    let mut block = String::new();
    for name in candidates {
        let call = format!("{}(v1API, container)", name);
        if !existing.contains(call.as_str()) {
            block.push('\t');
            block.push_str(&call);
            block.push('\n');
        }
    }

    if block.is_empty() {
        return PatchOutcome::AlreadyPresent;
    }

    block.push('\t');
    block.push_str(MARKER);

    let patched = RE_MARKER.replace(content, block.as_str()).to_string();
    PatchOutcome::Changed(patched)
}
