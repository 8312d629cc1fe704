//! Project manifest reader — resolves the module identifier from go.mod.

use std::fs;
use std::path::Path;

/// Read the module identifier from the manifest: the first line starting
/// with `module `. Returns an empty string when the manifest is missing or
/// carries no module line — generated imports then degrade visibly rather
/// than aborting the run.
pub fn module_name(manifest: &Path) -> String {
    let Ok(content) = fs::read_to_string(manifest) else {
        return String::new();
    };
    for line in content.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("module ") {
            return rest.trim().to_string();
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_module_line() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"module example.com/demo\n\ngo 1.22\n").unwrap();
        assert_eq!(module_name(f.path()), "example.com/demo");
    }

    #[test]
    fn tolerates_leading_whitespace() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"  module   spaced.example/x  \n").unwrap();
        assert_eq!(module_name(f.path()), "spaced.example/x");
    }

    #[test]
    fn missing_manifest_is_empty() {
        assert_eq!(module_name(Path::new("/nonexistent/go.mod")), "");
    }

    #[test]
    fn manifest_without_module_line_is_empty() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"go 1.22\n").unwrap();
        assert_eq!(module_name(f.path()), "");
    }
}
