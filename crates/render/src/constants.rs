//! Constants used throughout page rendering

/// Extension that marks a file as a lesson
pub const LESSON_EXTENSION: &str = ".md";

/// Video extensions paired with a lesson, in lookup order
pub const VIDEO_EXTENSIONS: [&str; 3] = ["mov", "mp4", "webm"];

/// User-facing messages
pub mod messages {
    pub const SELECT_LESSON: &str = "Select a lesson from the sidebar to start learning.";
    pub const NOT_FOUND: &str = "This lesson could not be found.";
    pub const ACCESS_DENIED: &str = "Access denied.";
    pub const WELCOME: &str = "Personal Learning Content Visualizer";
    pub const NOT_A_LESSON: &str = "This file is not a lesson.";
}

/// Page stylesheet, one rule group per rendered element kind
pub const STYLESHEET: &str = r#"
:root { color-scheme: dark; --bg: #09090b; --panel: #111114; --border: #27272a; --text: #d4d4d8; --muted: #71717a; --accent: #00f0ff; }
* { box-sizing: border-box; }
body { margin: 0; display: flex; min-height: 100vh; background: var(--bg); color: var(--text); font-family: system-ui, sans-serif; }
.sidebar { width: 300px; flex-shrink: 0; padding: 1rem; border-right: 1px solid var(--border); background: var(--panel); overflow-y: auto; }
.sidebar .brand { display: block; margin-bottom: 1rem; color: var(--accent); font-weight: 700; letter-spacing: .2em; text-transform: uppercase; text-decoration: none; }
.sidebar ul { list-style: none; margin: 0; padding-left: .75rem; }
.sidebar summary { cursor: pointer; padding: .25rem 0; }
.sidebar .count { color: var(--muted); font-size: .75rem; }
.sidebar .lesson a { display: block; padding: .2rem .5rem; color: var(--text); text-decoration: none; border-radius: 4px; }
.sidebar .lesson.active a { background: rgba(0, 240, 255, .1); color: var(--accent); }
main { flex: 1; padding: 2rem; overflow-y: auto; }
.placeholder { display: flex; height: 100%; align-items: center; justify-content: center; color: var(--muted); }
.video { max-width: 80rem; margin: 0 auto 2rem; aspect-ratio: 16 / 9; background: #000; border-radius: 12px; overflow: hidden; }
.video video { width: 100%; height: 100%; }
article { max-width: 56rem; margin: 0 auto; line-height: 1.75; }
article h1 { font-size: 1.875rem; margin: 2.5rem 0 1.5rem; padding-bottom: .5rem; border-bottom: 1px solid var(--border); color: #f4f4f5; }
article h2 { font-size: 1.5rem; margin: 2rem 0 1rem; padding-bottom: .25rem; border-bottom: 1px solid var(--border); color: #f4f4f5; }
article h3, article h4 { margin: 1.5rem 0 .75rem; color: #f4f4f5; }
article p { margin: 0 0 1rem; }
article ul, article ol { margin: 0 0 1rem 1.5rem; }
article blockquote { margin: 1rem 0; padding: .25rem 1rem; border-left: 4px solid #3b82f6; background: rgba(24, 24, 27, .5); color: #a1a1aa; font-style: italic; }
article code { font-family: ui-monospace, monospace; font-size: .875rem; background: #27272a; padding: .1rem .35rem; border-radius: 4px; }
article .code-block { margin: 1rem 0; border: 1px solid var(--border); border-radius: 8px; overflow: hidden; background: #1e1e1e; }
article .code-lang { padding: .5rem 1rem; font-family: ui-monospace, monospace; font-size: .75rem; color: #a1a1aa; background: #18181b; border-bottom: 1px solid var(--border); }
article pre { margin: 0; padding: 1rem; overflow-x: auto; }
article pre code { background: none; padding: 0; }
article hr { margin: 2rem 0; border: 0; border-top: 1px solid var(--border); }
article table { width: 100%; margin: 1.5rem 0; border-collapse: collapse; text-align: left; }
article th { padding: .5rem; border-bottom: 1px solid #3f3f46; color: #e4e4e7; }
article td { padding: .5rem; border-bottom: 1px solid var(--border); }
article a { color: #60a5fa; }
article img { display: block; max-width: 100%; height: auto; margin: 2rem auto; border: 1px solid var(--border); border-radius: 8px; }
"#;
