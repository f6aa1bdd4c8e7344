//! Named transform pipelines applied to the codepoint stream.
//!
//! A specification is a `;`-separated list of stage ids, applied left to
//! right. Ids are matched ASCII-case-insensitively and may carry an `Any-`
//! source prefix, so `"NFD; Lower"` and `"any-nfd;any-lower"` compile to
//! the same pipeline.

use std::io::Write;
use std::mem;

use unicode_normalization::UnicodeNormalization;

use crate::engine::TransliterationFilter;
use crate::error::{Result, ToolError};

/// Normalization forms the buffering stages produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

/// One stage of a compiled pipeline.
enum Stage {
    /// Pass-through.
    Null,
    /// Drops every codepoint.
    Remove,
    /// Full Unicode lowercase mapping.
    Lower,
    /// Full Unicode uppercase mapping.
    Upper,
    /// Latin-to-ASCII folding; unmapped codepoints pass through unchanged.
    AsciiFold,
    /// Normalization. Buffers until end of input; combining sequences
    /// cannot be normalized incrementally without safe-point detection.
    Normalize { form: Form, pending: String },
}

impl Stage {
    fn push(&mut self, ch: char, out: &mut String) {
        match self {
            Stage::Null => out.push(ch),
            Stage::Remove => {}
            Stage::Lower => out.extend(ch.to_lowercase()),
            Stage::Upper => out.extend(ch.to_uppercase()),
            Stage::AsciiFold => match deunicode::deunicode_char(ch) {
                Some(folded) => out.push_str(folded),
                None => out.push(ch),
            },
            Stage::Normalize { pending, .. } => pending.push(ch),
        }
    }

    fn finish(&mut self, out: &mut String) {
        if let Stage::Normalize { form, pending } = self {
            let pending = mem::take(pending);
            match form {
                Form::Nfc => out.extend(pending.chars().nfc()),
                Form::Nfd => out.extend(pending.chars().nfd()),
                Form::Nfkc => out.extend(pending.chars().nfkc()),
                Form::Nfkd => out.extend(pending.chars().nfkd()),
            }
        }
    }
}

/// A compiled, reusable pipeline of transform stages.
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl TransliterationFilter for Pipeline {
    fn push(&mut self, ch: char, out: &mut String) {
        let mut current = String::from(ch);
        for stage in &mut self.stages {
            let mut next = String::new();
            for c in current.chars() {
                stage.push(c, &mut next);
            }
            current = next;
        }
        out.push_str(&current);
    }

    fn finish(&mut self, out: &mut String) {
        // Each stage's tail output still has to travel through the stages
        // after it before those are finished in turn.
        for index in 0..self.stages.len() {
            let mut pending = String::new();
            self.stages[index].finish(&mut pending);
            for stage in &mut self.stages[index + 1..] {
                let mut next = String::new();
                for c in pending.chars() {
                    stage.push(c, &mut next);
                }
                pending = next;
            }
            out.push_str(&pending);
        }
    }
}

/// Compiles a transform specification into a pipeline.
///
/// Empty specifications and unknown stage ids are compile errors carrying
/// the full spec text, reported before any input is read.
pub fn compile(spec: &str) -> Result<Box<dyn TransliterationFilter>> {
    let mut stages = Vec::new();
    for raw in spec.split(';') {
        let id = raw.trim();
        if id.is_empty() {
            continue;
        }
        stages.push(parse_stage(spec, id)?);
    }
    if stages.is_empty() {
        return Err(ToolError::EmptySpec {
            spec: spec.to_string(),
        });
    }
    Ok(Box::new(Pipeline { stages }))
}

fn parse_stage(spec: &str, id: &str) -> Result<Stage> {
    let lowered = id.to_ascii_lowercase();
    let name = lowered.strip_prefix("any-").unwrap_or(&lowered);
    let stage = match name {
        "null" => Stage::Null,
        "remove" => Stage::Remove,
        "lower" => Stage::Lower,
        "upper" => Stage::Upper,
        "latin-ascii" | "ascii" => Stage::AsciiFold,
        "nfc" => Stage::Normalize {
            form: Form::Nfc,
            pending: String::new(),
        },
        "nfd" => Stage::Normalize {
            form: Form::Nfd,
            pending: String::new(),
        },
        "nfkc" => Stage::Normalize {
            form: Form::Nfkc,
            pending: String::new(),
        },
        "nfkd" => Stage::Normalize {
            form: Form::Nfkd,
            pending: String::new(),
        },
        _ => {
            return Err(ToolError::UnknownTransform {
                spec: spec.to_string(),
                id: id.to_string(),
            });
        }
    };
    Ok(stage)
}

/// Write-side filter: codepoints written through it come out the other end
/// transformed.
pub struct TransformWriter<W> {
    inner: W,
    filter: Box<dyn TransliterationFilter>,
    staged: String,
}

impl<W: Write> TransformWriter<W> {
    /// Installs `filter` in front of `inner`.
    pub fn new(inner: W, filter: Box<dyn TransliterationFilter>) -> Self {
        Self {
            inner,
            filter,
            staged: String::new(),
        }
    }

    /// Pushes one codepoint through the filter into the stream.
    pub fn write_char(&mut self, ch: char) -> Result<()> {
        self.staged.clear();
        self.filter.push(ch, &mut self.staged);
        self.inner.write_all(self.staged.as_bytes())?;
        Ok(())
    }

    /// Drains buffered stages and flushes the underlying stream.
    pub fn finish(mut self) -> Result<()> {
        self.staged.clear();
        self.filter.finish(&mut self.staged);
        self.inner.write_all(self.staged.as_bytes())?;
        self.inner.flush()?;
        Ok(())
    }
}
