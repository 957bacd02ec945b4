//! Recursive content tree scanner

use std::fs;
use std::path::Path;

use crate::error::ScanError;
use crate::node::ContentNode;

/// Entries starting with this marker are hidden from the tree
pub const HIDDEN_PREFIX: char = '.';

/// Directory name reserved for images and other static lesson assets
pub const RESERVED_ASSETS_DIR: &str = "assets";

/// Build the ordered content tree under `root`
///
/// A missing root yields an empty tree. If the root exists but cannot be
/// listed the error is returned; unreadable entries further down are logged
/// and left out.
pub fn scan(root: &Path) -> Result<Vec<ContentNode>, ScanError> {
    if !root.exists() {
        tracing::warn!("Content directory not found: {}", root.display());
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(root).map_err(|source| ScanError::ReadRoot {
        path: root.to_path_buf(),
        source,
    })?;

    Ok(scan_entries(root, entries, ""))
}

/// Children of `dir`; an unlistable directory stays in the tree with none
fn scan_dir(dir: &Path, relative: &str) -> Vec<ContentNode> {
    match fs::read_dir(dir) {
        Ok(entries) => scan_entries(dir, entries, relative),
        Err(e) => {
            tracing::warn!("Skipping unreadable directory {}: {}", dir.display(), e);
            Vec::new()
        }
    }
}

fn scan_entries(dir: &Path, entries: fs::ReadDir, relative: &str) -> Vec<ContentNode> {
    let mut nodes = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if is_excluded(&name) {
            continue;
        }

        // Entries removed between listing and stat are simply absent
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                tracing::debug!("Skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };

        let path = join_relative(relative, &name);
        if file_type.is_dir() {
            let children = scan_dir(&entry.path(), &path);
            nodes.push(ContentNode::Directory {
                name,
                path,
                children,
            });
        } else {
            nodes.push(ContentNode::File { name, path });
        }
    }

    nodes.sort_by(ContentNode::display_cmp);
    nodes
}

fn is_excluded(name: &str) -> bool {
    name.starts_with(HIDDEN_PREFIX) || name == RESERVED_ASSETS_DIR
}

fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"content").unwrap();
    }

    fn names(nodes: &[ContentNode]) -> Vec<&str> {
        nodes.iter().map(ContentNode::name).collect()
    }

    fn collect_names<'a>(nodes: &'a [ContentNode], out: &mut Vec<&'a str>) {
        for node in nodes {
            out.push(node.name());
            collect_names(node.children(), out);
        }
    }

    #[test]
    fn test_scan_missing_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        let tree = scan(&tmp.path().join("does-not-exist")).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_scan_root_that_is_a_file_fails() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "not-a-dir");
        let result = scan(&tmp.path().join("not-a-dir"));
        assert!(matches!(result, Err(ScanError::ReadRoot { .. })));
    }

    #[test]
    fn test_scan_orders_directories_first_then_natural() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "Lesson 10.md");
        touch(tmp.path(), "Lesson 2.md");
        fs::create_dir(tmp.path().join("Intro")).unwrap();

        let tree = scan(tmp.path()).unwrap();
        assert_eq!(names(&tree), vec!["Intro", "Lesson 2.md", "Lesson 10.md"]);
        assert_eq!(tree[0].kind(), NodeKind::Directory);
        assert_eq!(tree[1].kind(), NodeKind::File);
    }

    #[test]
    fn test_scan_nested_relative_paths() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "math/Algebra.md");
        touch(tmp.path(), "math/Algebra.mov");
        touch(tmp.path(), "math/advanced/Calculus.md");

        let tree = scan(tmp.path()).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].path(), "math");

        let children = tree[0].children();
        assert_eq!(names(children), vec!["advanced", "Algebra.md", "Algebra.mov"]);
        assert_eq!(children[0].path(), "math/advanced");
        assert_eq!(children[0].children()[0].path(), "math/advanced/Calculus.md");
        assert_eq!(children[1].path(), "math/Algebra.md");
    }

    #[test]
    fn test_scan_skips_hidden_and_assets_at_every_level() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), ".hidden.md");
        touch(tmp.path(), ".git/config");
        touch(tmp.path(), "assets/logo.png");
        touch(tmp.path(), "course/assets/diagram.png");
        touch(tmp.path(), "course/.DS_Store");
        touch(tmp.path(), "course/Lesson 1.md");

        let tree = scan(tmp.path()).unwrap();
        let mut all = Vec::new();
        collect_names(&tree, &mut all);
        assert_eq!(all, vec!["course", "Lesson 1.md"]);
    }

    #[test]
    fn test_scan_is_stable() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "b/2.md");
        touch(tmp.path(), "a/1.md");
        touch(tmp.path(), "c.md");

        assert_eq!(scan(tmp.path()).unwrap(), scan(tmp.path()).unwrap());
    }

    #[test]
    fn test_scan_dir_unlistable_yields_no_children() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "lesson.md");

        assert!(scan_dir(&tmp.path().join("vanished"), "vanished").is_empty());
        assert!(scan_dir(&tmp.path().join("lesson.md"), "lesson.md").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_unreadable_subdirectory_kept_empty_and_siblings_listed() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "locked/hidden lesson.md");
        touch(tmp.path(), "open/Lesson 1.md");
        touch(tmp.path(), "Intro.md");

        let locked = tmp.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Root ignores directory permissions; nothing to check then
        let listable = fs::read_dir(&locked).is_ok();

        let tree = scan(tmp.path()).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if listable {
            return;
        }

        assert_eq!(names(&tree), vec!["locked", "open", "Intro.md"]);
        assert!(tree[0].is_dir());
        assert!(tree[0].children().is_empty());
        assert_eq!(names(tree[1].children()), vec!["Lesson 1.md"]);
    }

    #[test]
    fn test_scan_empty_directory_has_no_children() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("empty")).unwrap();

        let tree = scan(tmp.path()).unwrap();
        assert!(tree[0].is_dir());
        assert!(tree[0].children().is_empty());
    }
}
