//! Prints every code point read from standard input, one per line, together
//! with its position.
//!
//! Run with
//!
//! ```bash
//! printf 'Hi, 世界\n' | cargo run -p charscan --example scan_stdin
//! ```
//!
//! Invalid UTF-8 stops the scan with a non-zero exit status.

use std::{io, process::ExitCode};

use charscan::{ScanError, Scanner};

fn main() -> ExitCode {
    let stdin = io::stdin().lock();
    let mut scanner = Scanner::from_reader(stdin);
    loop {
        match scanner.scan() {
            Ok(Some(ch)) => {
                let at = scanner.position();
                println!("{:>4}:{:<4} U+{:04X} {ch:?}", at.line, at.column, u32::from(ch));
            }
            Ok(None) => return ExitCode::SUCCESS,
            Err(ScanError::Decode(err)) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
            Err(ScanError::Read(err)) => {
                eprintln!("failed to read standard input: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
}
