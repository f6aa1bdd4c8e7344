use std::io::{BufRead, Write};

use tracing::{info, instrument};

use crate::engine::UnicodeData;
use crate::error::Result;
use crate::stream::Codepoints;

use super::{format_codepoint, name_or_placeholder};

/// Prints one `U+XXXX NAME` line per codepoint on the input stream.
#[instrument(level = "info", skip_all)]
pub fn dump<D: UnicodeData>(db: &D, input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut count = 0u64;
    for decoded in Codepoints::new(input) {
        let ch = decoded?;
        writeln!(
            output,
            "{} {}",
            format_codepoint(ch),
            name_or_placeholder(db, ch)
        )?;
        count += 1;
    }
    output.flush()?;
    info!(codepoints = count, "dump finished");
    Ok(())
}
