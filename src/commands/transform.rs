use std::io::{BufRead, Write};

use tracing::{debug, info, instrument};

use crate::engine::TransformEngine;
use crate::error::Result;
use crate::stream::Codepoints;
use crate::transform::TransformWriter;

/// Compiles the given specification and copies the input stream through
/// the resulting filter.
///
/// Compilation failures abort before any input is read. Once the stream is
/// exhausted the filter is finished and the output flushed; the filter and
/// its spec are dropped on every exit path.
#[instrument(level = "info", skip_all, fields(spec = %spec))]
pub fn transform<E: TransformEngine>(
    engine: &E,
    spec: &str,
    input: impl BufRead,
    output: impl Write,
) -> Result<()> {
    let filter = engine.compile(spec)?;
    debug!("transform compiled");
    let mut writer = TransformWriter::new(output, filter);
    let mut count = 0u64;
    for decoded in Codepoints::new(input) {
        writer.write_char(decoded?)?;
        count += 1;
    }
    writer.finish()?;
    info!(codepoints = count, "transform finished");
    Ok(())
}
