use std::io::{BufRead, Write};

use tracing::{debug, instrument};

use crate::engine::{Property, UnicodeData};
use crate::error::Result;
use crate::stream::Codepoints;

use super::{format_codepoint, name_or_placeholder};

/// A display name paired with the binary property it reports on.
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub property: Property,
}

/// Properties reported by `info`, in output order.
///
/// The order of this table is the output contract for the flags line; it
/// must never be sorted or regrouped.
#[rustfmt::skip]
pub const PROPERTY_TABLE: &[PropertyDescriptor] = &[
    PropertyDescriptor { name: "Deprecated", property: Property::Deprecated },

    PropertyDescriptor { name: "Alphabetic", property: Property::Alphabetic },
    PropertyDescriptor { name: "Ideographic", property: Property::Ideographic },
    PropertyDescriptor { name: "Cased", property: Property::Cased },
    PropertyDescriptor { name: "Lowercase", property: Property::Lowercase },
    PropertyDescriptor { name: "Uppercase", property: Property::Uppercase },
    PropertyDescriptor { name: "Diacritic", property: Property::Diacritic },
    PropertyDescriptor { name: "Extender", property: Property::Extender },
    PropertyDescriptor { name: "Radical", property: Property::Radical },

    PropertyDescriptor { name: "Dash", property: Property::Dash },
    PropertyDescriptor { name: "Quotation mark", property: Property::QuotationMark },
    PropertyDescriptor { name: "Sentence terminal", property: Property::SentenceTerminal },
    PropertyDescriptor { name: "White space", property: Property::WhiteSpace },

    PropertyDescriptor { name: "Math", property: Property::Math },

    PropertyDescriptor { name: "Regional indicator", property: Property::RegionalIndicator },

    PropertyDescriptor { name: "Emoji", property: Property::Emoji },
    PropertyDescriptor { name: "Emoji component", property: Property::EmojiComponent },
    PropertyDescriptor { name: "Emoji modifier", property: Property::EmojiModifier },
    PropertyDescriptor { name: "Emoji modifier base", property: Property::EmojiModifierBase },
    PropertyDescriptor { name: "Emoji presentation", property: Property::EmojiPresentation },

    PropertyDescriptor { name: "Default ignorable", property: Property::DefaultIgnorable },
];

/// Prints a multi-line record per codepoint: a `CODE NAME` header, a flags
/// line when any tracked property matches, and a blank separator line.
///
/// Block and general-category lookups are recorded on the diagnostic
/// stream; the stdout record shape stays fixed for consumers.
#[instrument(level = "info", skip_all)]
pub fn info<D: UnicodeData>(db: &D, input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut count = 0u64;
    for decoded in Codepoints::new(input) {
        let ch = decoded?;
        let code = format_codepoint(ch);
        if let Some(block) = db.block_name(ch) {
            debug!(codepoint = %code, block, "block lookup");
        }
        debug!(codepoint = %code, category = db.general_category(ch), "category lookup");
        writeln!(output, "{} {}", code, name_or_placeholder(db, ch))?;
        let mut matched = 0u32;
        for descriptor in PROPERTY_TABLE {
            if db.has_property(ch, descriptor.property) {
                if matched == 0 {
                    write!(output, "  Flags: {}", descriptor.name)?;
                } else {
                    write!(output, ", {}", descriptor.name)?;
                }
                matched += 1;
            }
        }
        if matched > 0 {
            writeln!(output)?;
        }
        writeln!(output)?;
        count += 1;
    }
    output.flush()?;
    tracing::info!(codepoints = count, "info finished");
    Ok(())
}
