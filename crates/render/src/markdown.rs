//! Markdown to HTML conversion for lesson bodies

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::utils::{asset_url, escape_html, join_normalized, parent_dir};

/// Render a lesson's markdown into an HTML fragment
///
/// `lesson_path` is the lesson's path relative to the content root; relative
/// image sources are resolved against its directory and served through the
/// asset endpoint. Raw HTML in the source is shown as text.
pub fn render_markdown(source: &str, lesson_path: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let base_dir = parent_dir(lesson_path);

    let mut events = Vec::new();
    for event in Parser::new_ext(source, options) {
        match event {
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) => events.push(Event::Start(Tag::Image {
                link_type,
                dest_url: rewrite_image_src(dest_url, base_dir),
                title,
                id,
            })),
            Event::Start(Tag::CodeBlock(kind)) => {
                let label = match &kind {
                    CodeBlockKind::Fenced(info) => info.split_whitespace().next().unwrap_or("text"),
                    CodeBlockKind::Indented => "text",
                };
                events.push(Event::Html(CowStr::from(format!(
                    "<div class=\"code-block\"><div class=\"code-lang\">{}</div>",
                    escape_html(label)
                ))));
                events.push(Event::Start(Tag::CodeBlock(kind)));
            }
            Event::End(TagEnd::CodeBlock) => {
                events.push(Event::End(TagEnd::CodeBlock));
                events.push(Event::Html(CowStr::Borrowed("</div>")));
            }
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            other => events.push(other),
        }
    }

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}

fn rewrite_image_src<'a>(src: CowStr<'a>, base_dir: &str) -> CowStr<'a> {
    if is_external(&src) {
        return src;
    }
    CowStr::from(asset_url(&join_normalized(base_dir, &src)))
}

fn is_external(src: &str) -> bool {
    src.starts_with("http") || src.starts_with('/') || src.starts_with("data:")
}
