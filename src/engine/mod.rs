//! Capability interface over the external Unicode engine.
//!
//! The command handlers depend only on the traits defined here, so any
//! standards-compliant character-database or transform provider can stand
//! in for the default [`UcdEngine`].

pub mod ucd;

pub use ucd::UcdEngine;

use crate::error::Result;

/// Binary character properties the `info` command reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Deprecated,
    Alphabetic,
    Ideographic,
    Cased,
    Lowercase,
    Uppercase,
    Diacritic,
    Extender,
    Radical,
    Dash,
    QuotationMark,
    SentenceTerminal,
    WhiteSpace,
    Math,
    RegionalIndicator,
    Emoji,
    EmojiComponent,
    EmojiModifier,
    EmojiModifierBase,
    EmojiPresentation,
    DefaultIgnorable,
}

/// Character-database lookups by codepoint.
pub trait UnicodeData {
    /// Canonical character name, or `None` when the database assigns no
    /// name to the codepoint.
    fn char_name(&self, ch: char) -> Option<String>;

    /// Name of the Unicode block containing the codepoint.
    fn block_name(&self, ch: char) -> Option<&'static str>;

    /// General category of the codepoint as its two-letter code.
    fn general_category(&self, ch: char) -> &'static str;

    /// Tests a binary property.
    fn has_property(&self, ch: char, property: Property) -> bool;
}

/// Streaming write-side text transformation.
///
/// Codepoints are pushed through one at a time; `finish` drains anything a
/// stage buffered once the input is exhausted.
pub trait TransliterationFilter {
    /// Transforms one incoming codepoint, appending the (possibly empty)
    /// result to `out`.
    fn push(&mut self, ch: char, out: &mut String);

    /// Flushes buffered state at end of input.
    fn finish(&mut self, out: &mut String);
}

/// Compilation of transform specifications into streaming filters.
pub trait TransformEngine {
    /// Compiles a specification string into a filter, reporting the
    /// offending id together with the full spec text on failure.
    fn compile(&self, spec: &str) -> Result<Box<dyn TransliterationFilter>>;
}
