//! Integer token scanning with `scanf("%d")` rules.
//!
//! Leading whitespace is skipped, an optional sign is accepted, and digits
//! are consumed until the first non-digit byte, which is left in the
//! stream. Nothing is pushed back across calls.

use std::io::{self, BufRead};

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("input exhausted before an integer token")]
    EndOfInput,
    #[error("expected a decimal digit, found {}", describe(.found))]
    NotAnInteger { found: Option<u8> },
    #[error("stdin read failed: {0}")]
    Io(#[from] io::Error),
}

fn describe(found: &Option<u8>) -> String {
    match *found {
        Some(b) => format!("{:?}", char::from(b)),
        None => "end of input".to_string(),
    }
}

fn peek<R: BufRead>(input: &mut R) -> io::Result<Option<u8>> {
    Ok(input.fill_buf()?.first().copied())
}

// C `isspace` in the "C" locale.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

pub fn scan_i32<R: BufRead>(input: &mut R) -> Result<i32, ScanError> {
    loop {
        match peek(input)? {
            None => return Err(ScanError::EndOfInput),
            Some(b) if is_space(b) => input.consume(1),
            Some(_) => break,
        }
    }

    let mut negative = false;
    if let Some(b @ (b'+' | b'-')) = peek(input)? {
        negative = b == b'-';
        input.consume(1);
    }

    // Accumulate toward the sign so i32::MIN is reachable; clamp on overflow.
    let mut acc: i32 = 0;
    let mut digits = 0usize;
    while let Some(b) = peek(input)? {
        if !b.is_ascii_digit() {
            break;
        }
        let d = i32::from(b - b'0');
        acc = if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        };
        digits += 1;
        input.consume(1);
    }

    if digits == 0 {
        return Err(ScanError::NotAnInteger {
            found: peek(input)?,
        });
    }
    Ok(acc)
}
