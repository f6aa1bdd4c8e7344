//! Default engine backed by the ecosystem Unicode database crates.

use icu_properties::{GeneralCategory, maps, sets};

use crate::error::Result;
use crate::transform;

use super::{Property, TransformEngine, TransliterationFilter, UnicodeData};

/// Unicode engine backed by `unicode_names2` for character names,
/// `unicode-blocks` for block names, and `icu_properties` for binary
/// properties and general categories. Transform compilation is delegated
/// to [`crate::transform`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UcdEngine;

impl UcdEngine {
    /// Creates the engine. All lookups run against data compiled into the
    /// provider crates, so construction cannot fail.
    pub fn new() -> Self {
        Self
    }
}

impl UnicodeData for UcdEngine {
    fn char_name(&self, ch: char) -> Option<String> {
        unicode_names2::name(ch).map(|name| name.to_string())
    }

    fn block_name(&self, ch: char) -> Option<&'static str> {
        unicode_blocks::find_unicode_block(ch).map(|block| block.name())
    }

    fn general_category(&self, ch: char) -> &'static str {
        category_code(maps::general_category().get(ch))
    }

    fn has_property(&self, ch: char, property: Property) -> bool {
        let set = match property {
            Property::Deprecated => sets::deprecated(),
            Property::Alphabetic => sets::alphabetic(),
            Property::Ideographic => sets::ideographic(),
            Property::Cased => sets::cased(),
            Property::Lowercase => sets::lowercase(),
            Property::Uppercase => sets::uppercase(),
            Property::Diacritic => sets::diacritic(),
            Property::Extender => sets::extender(),
            Property::Radical => sets::radical(),
            Property::Dash => sets::dash(),
            Property::QuotationMark => sets::quotation_mark(),
            Property::SentenceTerminal => sets::sentence_terminal(),
            Property::WhiteSpace => sets::white_space(),
            Property::Math => sets::math(),
            Property::RegionalIndicator => sets::regional_indicator(),
            Property::Emoji => sets::emoji(),
            Property::EmojiComponent => sets::emoji_component(),
            Property::EmojiModifier => sets::emoji_modifier(),
            Property::EmojiModifierBase => sets::emoji_modifier_base(),
            Property::EmojiPresentation => sets::emoji_presentation(),
            Property::DefaultIgnorable => sets::default_ignorable_code_point(),
        };
        set.contains(ch)
    }
}

impl TransformEngine for UcdEngine {
    fn compile(&self, spec: &str) -> Result<Box<dyn TransliterationFilter>> {
        transform::compile(spec)
    }
}

/// Two-letter UCD code for a general category value.
fn category_code(category: GeneralCategory) -> &'static str {
    match category {
        GeneralCategory::UppercaseLetter => "Lu",
        GeneralCategory::LowercaseLetter => "Ll",
        GeneralCategory::TitlecaseLetter => "Lt",
        GeneralCategory::ModifierLetter => "Lm",
        GeneralCategory::OtherLetter => "Lo",
        GeneralCategory::NonspacingMark => "Mn",
        GeneralCategory::SpacingMark => "Mc",
        GeneralCategory::EnclosingMark => "Me",
        GeneralCategory::DecimalNumber => "Nd",
        GeneralCategory::LetterNumber => "Nl",
        GeneralCategory::OtherNumber => "No",
        GeneralCategory::SpaceSeparator => "Zs",
        GeneralCategory::LineSeparator => "Zl",
        GeneralCategory::ParagraphSeparator => "Zp",
        GeneralCategory::Control => "Cc",
        GeneralCategory::Format => "Cf",
        GeneralCategory::PrivateUse => "Co",
        GeneralCategory::Surrogate => "Cs",
        GeneralCategory::DashPunctuation => "Pd",
        GeneralCategory::OpenPunctuation => "Ps",
        GeneralCategory::ClosePunctuation => "Pe",
        GeneralCategory::ConnectorPunctuation => "Pc",
        GeneralCategory::OtherPunctuation => "Po",
        GeneralCategory::InitialPunctuation => "Pi",
        GeneralCategory::FinalPunctuation => "Pf",
        GeneralCategory::MathSymbol => "Sm",
        GeneralCategory::CurrencySymbol => "Sc",
        GeneralCategory::ModifierSymbol => "Sk",
        GeneralCategory::OtherSymbol => "So",
        _ => "Cn",
    }
}
