use alloc::{string::String, vec, vec::Vec};

use rstest::rstest;

use super::utils::{CountingSource, PieceSource, scan_all};
use crate::{ByteSource, Position, Scanner, ScannerOptions, produce_chunks};

#[test]
fn scans_mixed_width_text_one_call_per_char() {
    let mut scanner = Scanner::new("Hi, 世界".as_bytes());
    assert_eq!(scanner.scan(), Ok(Some('H')));
    assert_eq!(scanner.scan(), Ok(Some('i')));
    assert_eq!(scanner.scan(), Ok(Some(',')));
    assert_eq!(scanner.scan(), Ok(Some(' ')));
    assert_eq!(scanner.scan(), Ok(Some('世')));
    assert_eq!(scanner.scan(), Ok(Some('界')));
    assert_eq!(scanner.scan(), Ok(None));
    assert_eq!(scanner.bytes_consumed(), "Hi, 世界".len());
}

#[test]
fn one_byte_reads_complete_a_three_byte_char() {
    let mut scanner = Scanner::new(CountingSource::new("世".as_bytes().chunked(1)));
    assert_eq!(scanner.scan(), Ok(Some('世')));
    assert_eq!(scanner.get_ref().reads, 3);
    assert_eq!(scanner.scan(), Ok(None));
}

#[test]
fn over_read_bytes_are_carried_not_reread() {
    let mut scanner = Scanner::new(CountingSource::new("abc".as_bytes()));
    assert_eq!(scanner.scan(), Ok(Some('a')));
    assert_eq!(scanner.carried(), 2);
    assert_eq!(scanner.scan(), Ok(Some('b')));
    assert_eq!(scanner.scan(), Ok(Some('c')));
    // Only the first read and the final end-of-stream read hit the source.
    assert_eq!(scanner.scan(), Ok(None));
    assert_eq!(scanner.get_ref().reads, 2);
}

#[rstest]
#[case::ascii("hello")]
#[case::latin("ångström")]
#[case::cjk("郷に入っては郷に従え")]
#[case::emoji("👍🏽 ok 🚀")]
#[case::newlines("a\nb\r\nc")]
#[case::max_scalar("\u{10FFFF}\u{0}")]
fn reproduces_text_for_every_capacity_and_chunking(
    #[case] text: &str,
    #[values(4, 5, 16, 1024)] read_capacity: usize,
    #[values(1, 2, 3, 7)] chunk: usize,
) {
    let source = text.as_bytes().chunked(chunk);
    let mut scanner = Scanner::with_options(source, ScannerOptions { read_capacity }).unwrap();
    let (out, err) = scan_all(&mut scanner);
    assert_eq!(err, None);
    assert_eq!(out, text);
    assert_eq!(scanner.bytes_consumed(), text.len());
    assert_eq!(scanner.carried(), 0);
}

#[test]
fn code_point_split_across_uneven_pieces() {
    // 😊 = F0 9F 98 8A, delivered as [F0] [9F 98] [8A 21]
    let bytes = "😊!".as_bytes();
    let pieces = vec![&bytes[..1], &bytes[1..3], &bytes[3..]];
    let mut scanner = Scanner::new(PieceSource::new(pieces));
    assert_eq!(scanner.scan(), Ok(Some('😊')));
    assert_eq!(scanner.scan(), Ok(Some('!')));
    assert_eq!(scanner.scan(), Ok(None));
}

#[rstest]
fn even_pieces_split_inside_code_points(#[values(1, 2, 3, 4, 7, 40)] parts: usize) {
    let text = "Hi, 世界 😊 ångström\n郷に入っては郷に従え";
    let pieces = produce_chunks(text.as_bytes(), parts);
    let mut scanner = Scanner::new(PieceSource::new(pieces));
    let (out, err) = scan_all(&mut scanner);
    assert_eq!(err, None);
    assert_eq!(out, text);
    assert_eq!(scanner.bytes_consumed(), text.len());
}

#[test]
fn empty_source_is_immediately_exhausted() {
    let mut scanner = Scanner::new(b"".as_slice());
    assert_eq!(scanner.scan(), Ok(None));
    assert_eq!(scanner.scan(), Ok(None));
    assert_eq!(scanner.position(), Position::default());
}

#[test]
fn position_tracks_lines_and_columns() {
    let mut scanner = Scanner::new("ab\n世x".as_bytes());
    let mut seen = Vec::new();
    while let Some(ch) = scanner.scan().unwrap() {
        let at = scanner.position();
        seen.push((ch, at.line, at.column, at.offset));
    }
    assert_eq!(
        seen,
        vec![
            ('a', 1, 2, 1),
            ('b', 1, 3, 2),
            ('\n', 2, 1, 3),
            ('世', 2, 2, 6),
            ('x', 2, 3, 7),
        ]
    );
}

#[test]
fn iterator_collects_and_fuses() {
    let mut scanner = Scanner::new("αβγ".as_bytes());
    let text: Result<String, _> = scanner.by_ref().collect();
    assert_eq!(text.unwrap(), "αβγ");
    assert_eq!(scanner.next(), None);
}

#[test]
fn chained_sources_scan_as_one_stream() {
    // The first half ends in the middle of 世.
    let bytes = "Hello, 世界".as_bytes();
    let source = bytes[..8].chain(&bytes[8..]);
    let text: Result<String, _> = Scanner::new(source).collect();
    assert_eq!(text.unwrap(), "Hello, 世界");
}

#[test]
fn into_parts_returns_carried_bytes_first() {
    let mut scanner = Scanner::new("xyz".as_bytes());
    assert_eq!(scanner.scan(), Ok(Some('x')));
    let (carry, rest) = scanner.into_parts();
    assert_eq!(carry, b"yz");
    assert!(rest.is_empty());
}
