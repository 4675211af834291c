pub mod cursor;
pub mod document;
pub mod markers;
pub mod search;
pub mod sections;

pub use cursor::Cursor;
pub use document::{AnnotatedDocument, Region};
pub use markers::render;
pub use search::annotate_search;
pub use sections::{SECTION_MARKER, annotate_sections};
