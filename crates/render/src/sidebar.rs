//! Sidebar navigation built from the content tree

use content::ContentNode;

use crate::constants::LESSON_EXTENSION;
use crate::utils::{display_name, escape_html, lesson_href};

/// Render the navigation tree
///
/// `active_path` is the content-relative path of the page being shown;
/// directories on the way to it render expanded.
pub fn render_sidebar(tree: &[ContentNode], active_path: Option<&str>) -> String {
    let mut out = String::from("<nav class=\"sidebar\"><a class=\"brand\" href=\"/\">Learning Hub</a>");
    if tree.is_empty() {
        out.push_str("<p class=\"empty\">No content found.</p>");
    } else {
        render_list(tree, active_path, &mut out);
    }
    out.push_str("</nav>");
    out
}

fn render_list(nodes: &[ContentNode], active_path: Option<&str>, out: &mut String) {
    out.push_str("<ul>");
    for node in nodes {
        match node {
            ContentNode::Directory {
                name,
                path,
                children,
            } => {
                let open = active_path.is_some_and(|active| is_within(active, path));
                let lessons = children.iter().filter(|c| is_lesson(c)).count();
                out.push_str(&format!(
                    "<li class=\"dir\"><details{}><summary>{} <span class=\"count\">{}</span></summary>",
                    if open { " open" } else { "" },
                    escape_html(name),
                    lessons
                ));
                render_list(children, active_path, out);
                out.push_str("</details></li>");
            }
            ContentNode::File { name, path } => {
                if !is_lesson(node) {
                    continue;
                }
                let active = active_path == Some(path.as_str());
                out.push_str(&format!(
                    "<li class=\"lesson{}\"><a href=\"{}\">{}</a></li>",
                    if active { " active" } else { "" },
                    escape_html(&lesson_href(path)),
                    escape_html(display_name(name))
                ));
            }
        }
    }
    out.push_str("</ul>");
}

fn is_lesson(node: &ContentNode) -> bool {
    !node.is_dir() && node.name().ends_with(LESSON_EXTENSION)
}

fn is_within(active: &str, dir: &str) -> bool {
    active == dir
        || active
            .strip_prefix(dir)
            .is_some_and(|rest| rest.starts_with('/'))
}
