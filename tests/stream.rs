use std::io::{BufReader, Cursor};

use unitool::stream::Codepoints;

fn decode_all(bytes: &[u8]) -> Vec<char> {
    Codepoints::new(Cursor::new(bytes))
        .map(|decoded| decoded.expect("stream decoded"))
        .collect()
}

#[test]
fn decodes_mixed_width_scalars() {
    assert_eq!(
        decode_all("aé€😀".as_bytes()),
        vec!['a', 'é', '€', '😀']
    );
}

#[test]
fn decodes_scalars_spanning_buffer_refills() {
    let reader = BufReader::with_capacity(2, Cursor::new("héllo 😀".as_bytes()));
    let decoded: Vec<char> = Codepoints::new(reader)
        .map(|decoded| decoded.expect("stream decoded"))
        .collect();
    assert_eq!(decoded, vec!['h', 'é', 'l', 'l', 'o', ' ', '😀']);
}

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(decode_all(b""), Vec::<char>::new());
}

#[test]
fn invalid_leading_byte_ends_the_stream() {
    assert_eq!(decode_all(b"A\xffB"), vec!['A']);
}

#[test]
fn bad_continuation_byte_ends_the_stream() {
    assert_eq!(decode_all(b"A\xc3\x28B"), vec!['A']);
}

#[test]
fn truncated_tail_sequence_ends_the_stream() {
    assert_eq!(decode_all(b"ok\xe2\x82"), vec!['o', 'k']);
}

#[test]
fn stream_is_fused_after_ending() {
    let mut codepoints = Codepoints::new(Cursor::new(b"\xff".as_slice()));
    assert!(codepoints.next().is_none());
    assert!(codepoints.next().is_none());
}
