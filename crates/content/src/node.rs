//! Content tree nodes and their ordering

use serde::Serialize;
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Kind of a filesystem entry beneath the content root
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NodeKind {
    Directory,
    File,
}

/// One entry beneath the content root
///
/// Serialized as `{"type": "directory" | "file", "name", "path", "children"?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentNode {
    Directory {
        name: String,
        /// POSIX-style path relative to the content root
        path: String,
        children: Vec<ContentNode>,
    },
    File {
        name: String,
        /// POSIX-style path relative to the content root
        path: String,
    },
}

impl ContentNode {
    pub fn name(&self) -> &str {
        match self {
            ContentNode::Directory { name, .. } | ContentNode::File { name, .. } => name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            ContentNode::Directory { path, .. } | ContentNode::File { path, .. } => path,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            ContentNode::Directory { .. } => NodeKind::Directory,
            ContentNode::File { .. } => NodeKind::File,
        }
    }

    /// Children of a directory; empty for files
    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Directory { children, .. } => children,
            ContentNode::File { .. } => &[],
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind() == NodeKind::Directory
    }

    /// Sidebar ordering: directories first, then natural name order
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        self.kind()
            .cmp(&other.kind())
            .then_with(|| natural_cmp(self.name(), other.name()))
    }
}

/// Case-insensitive, numeric-aware comparison of two names
///
/// Runs of ASCII digits compare by value, so `"Lesson 2"` sorts before
/// `"Lesson 10"`. Names that are equal under that rule fall back to a plain
/// byte comparison to keep the ordering total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                let ord = cmp_digit_runs(&l_run, &r_run);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                let ord = l.to_lowercase().cmp(r.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        run.push(c);
        chars.next();
    }
    run
}

fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
