//! The handlers behind the CLI commands.
//!
//! Each handler owns its read loop over [`crate::stream::Codepoints`] and
//! takes its input and output streams as parameters, so tests can drive
//! them with in-memory buffers.

pub mod dump;
pub mod info;
pub mod transform;

pub use dump::dump;
pub use info::info;
pub use transform::transform;

use crate::engine::UnicodeData;

/// `U+`-prefixed lowercase hex form of a codepoint: four digits inside the
/// BMP, six above it.
fn format_codepoint(ch: char) -> String {
    let value = ch as u32;
    if value <= 0xffff {
        format!("U+{value:04x}")
    } else {
        format!("U+{value:06x}")
    }
}

/// Name of the codepoint, or the placeholder substituted when the database
/// has none.
fn name_or_placeholder<D: UnicodeData>(db: &D, ch: char) -> String {
    db.char_name(ch)
        .unwrap_or_else(|| "Error: no character name".to_string())
}
