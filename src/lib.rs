pub mod builder;
pub mod config;
pub mod logger;
pub mod manifest;
pub mod render;
pub mod resolver;

pub use builder::ManifestBuilder;
pub use manifest::ChapterEntry;
pub use render::render_chapter_list;
pub use resolver::{ChapterSource, HttpSource, resolve_chapters};
