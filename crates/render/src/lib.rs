//! HTML rendering for lesson pages
//!
//! Turns the content tree and lesson markdown into complete pages: a
//! sidebar, an optional video player and the rendered lesson body.

pub mod constants;
pub mod markdown;
pub mod page;
pub mod sidebar;
pub mod utils;

pub use markdown::render_markdown;
pub use page::{denied_page, directory_page, file_page, home_page, lesson_page, not_found_page, Lesson};
pub use sidebar::render_sidebar;
