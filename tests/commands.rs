use std::io::Cursor;

use unitool::ToolError;
use unitool::commands::{dump, info, transform};
use unitool::engine::UcdEngine;

fn run_dump(input: &str) -> String {
    let engine = UcdEngine::new();
    let mut output = Vec::new();
    dump(&engine, Cursor::new(input.as_bytes()), &mut output).expect("dump succeeded");
    String::from_utf8(output).expect("dump output is UTF-8")
}

fn run_info(input: &str) -> String {
    let engine = UcdEngine::new();
    let mut output = Vec::new();
    info(&engine, Cursor::new(input.as_bytes()), &mut output).expect("info succeeded");
    String::from_utf8(output).expect("info output is UTF-8")
}

fn run_transform(spec: &str, input: &str) -> Result<String, ToolError> {
    let engine = UcdEngine::new();
    let mut output = Vec::new();
    transform(&engine, spec, Cursor::new(input.as_bytes()), &mut output)?;
    Ok(String::from_utf8(output).expect("transform output is UTF-8"))
}

#[test]
fn dump_formats_bmp_codepoints_with_four_hex_digits() {
    assert_eq!(run_dump("A"), "U+0041 LATIN CAPITAL LETTER A\n");
}

#[test]
fn dump_formats_supplementary_codepoints_with_six_hex_digits() {
    assert_eq!(run_dump("😀"), "U+01f600 GRINNING FACE\n");
}

#[test]
fn dump_emits_one_line_per_codepoint() {
    assert_eq!(
        run_dump("hi"),
        "U+0068 LATIN SMALL LETTER H\nU+0069 LATIN SMALL LETTER I\n"
    );
}

#[test]
fn dump_substitutes_placeholder_for_unnamed_codepoints() {
    assert_eq!(run_dump("\n"), "U+000a Error: no character name\n");
}

#[test]
fn dump_of_empty_input_is_empty() {
    assert_eq!(run_dump(""), "");
}

#[test]
fn info_lists_flags_in_table_order() {
    assert_eq!(
        run_info("A"),
        "U+0041 LATIN CAPITAL LETTER A\n  Flags: Alphabetic, Cased, Uppercase\n\n"
    );
}

#[test]
fn info_keeps_cased_before_the_case_specific_flags() {
    assert_eq!(
        run_info("a"),
        "U+0061 LATIN SMALL LETTER A\n  Flags: Alphabetic, Cased, Lowercase\n\n"
    );
}

#[test]
fn info_reports_a_single_matching_flag() {
    assert_eq!(run_info(" "), "U+0020 SPACE\n  Flags: White space\n\n");
}

#[test]
fn info_orders_emoji_flags_by_declaration() {
    assert_eq!(
        run_info("😀"),
        "U+01f600 GRINNING FACE\n  Flags: Emoji, Emoji presentation\n\n"
    );
}

#[test]
fn info_omits_the_flags_line_when_nothing_matches() {
    assert_eq!(run_info("\u{0}"), "U+0000 Error: no character name\n\n");
}

#[test]
fn info_separates_consecutive_records_with_blank_lines() {
    assert_eq!(
        run_info("A "),
        "U+0041 LATIN CAPITAL LETTER A\n  Flags: Alphabetic, Cased, Uppercase\n\n\
         U+0020 SPACE\n  Flags: White space\n\n"
    );
}

#[test]
fn transform_identity_round_trips_arbitrary_input() {
    let input = "héllo wörld 😀 Grüße\n";
    let output = run_transform("Null", input).expect("identity transform succeeded");
    assert_eq!(output, input);
}

#[test]
fn transform_of_empty_input_produces_empty_output() {
    let output = run_transform("Lower", "").expect("transform of empty input succeeded");
    assert_eq!(output, "");
}

#[test]
fn transform_with_unknown_spec_fails_without_output() {
    let engine = UcdEngine::new();
    let mut output = Vec::new();
    let error = transform(&engine, "Bogus", Cursor::new("abc".as_bytes()), &mut output)
        .expect_err("unknown transform id is rejected");
    assert!(matches!(error, ToolError::UnknownTransform { .. }));
    assert!(error.to_string().contains("Bogus"));
    assert!(output.is_empty());
}

#[test]
fn transform_applies_full_uppercase_mapping() {
    let output = run_transform("Upper", "Grüße").expect("uppercase transform succeeded");
    assert_eq!(output, "GRÜSSE");
}

#[test]
fn transform_folds_latin_to_ascii() {
    let output = run_transform("Latin-ASCII", "café").expect("ASCII folding succeeded");
    assert_eq!(output, "cafe");
}

#[test]
fn transform_composes_combining_sequences() {
    let output = run_transform("NFC", "e\u{301}").expect("NFC transform succeeded");
    assert_eq!(output, "\u{e9}");
}

#[test]
fn transform_applies_compound_specs_left_to_right() {
    let output = run_transform("NFD; Lower", "É").expect("compound transform succeeded");
    assert_eq!(output, "e\u{301}");
}
