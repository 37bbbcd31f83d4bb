//! Target discovery: which files an audit run looks at.

use crate::error::{AuditError, Result};
use std::collections::BTreeSet;
use std::path::{Component as PathComponent, Path, PathBuf};
use tracing::{debug, warn};

/// Source extensions scanned in directory mode.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jsx", "tsx", "js", "ts"];

/// Directory names pruned from directory scans.
pub const EXCLUDED_DIRS: [&str; 11] = [
    "node_modules",
    ".next",
    "dist",
    "build",
    ".git",
    "vendor",
    "__tests__",
    "coverage",
    ".turbo",
    ".cache",
    ".expo",
];

/// Resolve `target` to a sorted, de-duplicated list of files.
///
/// A file target is returned as-is, whatever its extension. For a directory,
/// every file with a supported extension is collected, except those below a
/// directory named in `EXCLUDED_DIRS` or `extra_excluded`. Only path
/// components below `target` are checked, so a project that itself lives in
/// e.g. `~/build/app` is still scanned.
pub fn discover(target: &Path, extra_excluded: &[String]) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        return Ok(vec![target.to_path_buf()]);
    }
    if !target.is_dir() {
        return Err(AuditError::InvalidTarget(target.to_path_buf()));
    }

    let root = glob::Pattern::escape(&target.to_string_lossy());
    let mut files = BTreeSet::new();
    for ext in SUPPORTED_EXTENSIONS {
        let pattern = format!("{root}/**/*.{ext}");
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) => {
                    if path.is_file() && !is_excluded(target, &path, extra_excluded) {
                        files.insert(path);
                    }
                }
                Err(e) => warn!("skipping unreadable path: {e}"),
            }
        }
    }
    debug!(root = %target.display(), count = files.len(), "discovery finished");
    Ok(files.into_iter().collect())
}

fn is_excluded(root: &Path, path: &Path, extra: &[String]) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components().any(|c| match c {
        PathComponent::Normal(name) => {
            let name = name.to_string_lossy();
            let name: &str = &name;
            EXCLUDED_DIRS.contains(&name) || extra.iter().any(|e| e == name)
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let p = root.join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(p, "export {}").unwrap();
    }

    #[test]
    fn test_directory_scan_filters_and_sorts() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "src/b.tsx");
        touch(root, "src/a.jsx");
        touch(root, "src/util.ts");
        touch(root, "src/styles.css");
        touch(root, "node_modules/lib/index.js");
        touch(root, "src/__tests__/a.test.tsx");
        touch(root, "dist/out.js");

        let files = discover(root, &[]).unwrap();
        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(rel, vec!["src/a.jsx", "src/b.tsx", "src/util.ts"]);
    }

    #[test]
    fn test_only_excluded_files_yields_nothing() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "node_modules/react/index.js");
        touch(dir.path(), "node_modules/react/cjs/react.development.js");
        assert!(discover(dir.path(), &[]).unwrap().is_empty());
    }

    #[test]
    fn test_extra_exclusions() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "generated/api.ts");
        touch(dir.path(), "app/page.tsx");
        let files = discover(dir.path(), &["generated".to_string()]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app/page.tsx"));
    }

    #[test]
    fn test_file_target_and_missing_target() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "notes.md");
        let file = dir.path().join("notes.md");
        assert_eq!(discover(&file, &[]).unwrap(), vec![file]);

        let missing = dir.path().join("nope");
        assert!(matches!(
            discover(&missing, &[]),
            Err(AuditError::InvalidTarget(_))
        ));
    }
}
