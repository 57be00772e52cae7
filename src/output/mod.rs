// output/mod.rs
//
// Rendering consumers: plain-text rendering and on-disk transcript files.
//
// Split into focused files:
// - utils.rs: Filename sanitization
// - text.rs: Plain-text transcript rendering
// - writer.rs: TXT and JSON transcript file writing

pub mod text;
pub mod utils;
pub mod writer;

pub use text::{render_transcript, UNKNOWN_SPEAKER};
pub use utils::sanitize_filename;
pub use writer::{write_transcript_json_to_file, write_transcript_to_file};
