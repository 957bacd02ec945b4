//! Full HTML pages

use content::ContentNode;

use crate::constants::{messages, STYLESHEET};
use crate::markdown::render_markdown;
use crate::sidebar::render_sidebar;
use crate::utils::{asset_url, display_name, escape_html, video_url};

/// A lesson ready to render
#[derive(Debug, Clone, Copy)]
pub struct Lesson<'a> {
    /// Path relative to the content root
    pub path: &'a str,
    /// Raw markdown source
    pub markdown: &'a str,
    /// Relative path of the paired video, if one exists
    pub video_path: Option<&'a str>,
}

impl Lesson<'_> {
    fn title(&self) -> &str {
        let name = self.path.rsplit('/').next().unwrap_or(self.path);
        display_name(name)
    }
}

pub fn lesson_page(tree: &[ContentNode], lesson: &Lesson<'_>) -> String {
    let mut body = String::new();
    if let Some(video) = lesson.video_path {
        body.push_str(&format!(
            "<div class=\"video\"><video controls preload=\"metadata\" src=\"{}\">Your browser does not support the video tag.</video></div>",
            escape_html(&video_url(video))
        ));
    }
    body.push_str("<article>");
    body.push_str(&render_markdown(lesson.markdown, lesson.path));
    body.push_str("</article>");

    layout(lesson.title(), &render_sidebar(tree, Some(lesson.path)), &body)
}

/// Page for a non-lesson file reached through the lesson route
pub fn file_page(tree: &[ContentNode], path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    let body = format!(
        "<article><h1>{}</h1><p>{} <a href=\"{}\">Open file</a></p></article>",
        escape_html(name),
        messages::NOT_A_LESSON,
        escape_html(&asset_url(path))
    );
    layout(name, &render_sidebar(tree, Some(path)), &body)
}

/// Placeholder shown when a directory is selected
pub fn directory_page(tree: &[ContentNode], path: &str) -> String {
    let body = placeholder(messages::SELECT_LESSON);
    let title = path.rsplit('/').next().unwrap_or(path);
    layout(title, &render_sidebar(tree, Some(path)), &body)
}

pub fn home_page(tree: &[ContentNode]) -> String {
    let body = format!(
        "<div class=\"placeholder\"><div><h1>Learning Hub</h1><p>{}</p><p>{}</p></div></div>",
        messages::WELCOME,
        messages::SELECT_LESSON
    );
    layout("Learning Hub", &render_sidebar(tree, None), &body)
}

pub fn not_found_page(tree: &[ContentNode]) -> String {
    layout(
        "Not Found",
        &render_sidebar(tree, None),
        &placeholder(messages::NOT_FOUND),
    )
}

/// Generic denial page; never echoes the requested path
pub fn denied_page() -> String {
    layout("Access Denied", "", &placeholder(messages::ACCESS_DENIED))
}

fn placeholder(message: &str) -> String {
    format!("<div class=\"placeholder\"><p>{}</p></div>", message)
}

fn layout(title: &str, sidebar: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{} | Learning Hub</title><style>{}</style></head>\
         <body>{}<main>{}</main></body></html>",
        escape_html(title),
        STYLESHEET,
        sidebar,
        body
    )
}
