#![no_main]

use arbitrary::Arbitrary;
use charscan::{ByteSource, ScanError, Scanner, ScannerOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    /// Read buffer size, offset so it is always valid.
    capacity: u8,
    /// Maximum bytes delivered per physical read.
    chunk: u8,
    bytes: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let read_capacity = 4 + usize::from(input.capacity % 60);
    let source = input.bytes.as_slice().chunked(usize::from(input.chunk));
    let mut scanner = Scanner::with_options(source, ScannerOptions { read_capacity })
        .expect("capacity is at least four");

    let mut decoded = String::new();
    let outcome = loop {
        match scanner.scan() {
            Ok(Some(ch)) => decoded.push(ch),
            Ok(None) => break None,
            Err(err) => break Some(err),
        }
    };

    match (std::str::from_utf8(&input.bytes), outcome) {
        (Ok(text), None) => assert_eq!(decoded, text),
        (Err(expected), Some(ScanError::Decode(actual))) => {
            let valid_up_to = expected.valid_up_to();
            assert_eq!(decoded.as_bytes(), &input.bytes[..valid_up_to]);
            assert_eq!(actual.offset, valid_up_to);
            // The failing bytes are still available to the caller.
            let (carry, rest) = scanner.into_parts();
            let mut unread = carry;
            unread.extend_from_slice(rest.into_inner());
            assert_eq!(unread, &input.bytes[valid_up_to..]);
        }
        (expected, actual) => panic!("validation {expected:?} but scan ended with {actual:?}"),
    }
});
