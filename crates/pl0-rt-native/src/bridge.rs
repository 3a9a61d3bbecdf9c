use std::io::{self, Write};

use pl0_rt_contracts::{BOOLEAN_FALSE_TEXT, BOOLEAN_TRUE_TEXT};

/// One value handed across the call boundary by a print routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Printable<'a> {
    Int32(i32),
    Int16(i16),
    Int8(i8),
    Uint16(u16),
    Uint8(u8),
    Boolean(bool),
    /// Bytes up to, not including, the NUL terminator.
    Text(&'a [u8]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEnd {
    Terminate,
    Continue,
}

impl LineEnd {
    /// Decodes the trailing `newline` argument: nonzero terminates.
    pub fn from_flag(flag: i32) -> Self {
        if flag != 0 {
            LineEnd::Terminate
        } else {
            LineEnd::Continue
        }
    }
}

impl Printable<'_> {
    pub fn write_to<W: Write>(&self, out: &mut W, end: LineEnd) -> io::Result<()> {
        match *self {
            Printable::Int32(v) => write!(out, "{v}")?,
            Printable::Int16(v) => write!(out, "{v}")?,
            Printable::Int8(v) => write!(out, "{v}")?,
            Printable::Uint16(v) => write!(out, "{v}")?,
            Printable::Uint8(v) => write!(out, "{v}")?,
            Printable::Boolean(v) => {
                let text = if v {
                    BOOLEAN_TRUE_TEXT
                } else {
                    BOOLEAN_FALSE_TEXT
                };
                out.write_all(text.as_bytes())?;
            }
            Printable::Text(bytes) => out.write_all(bytes)?,
        }
        if end == LineEnd::Terminate {
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}
