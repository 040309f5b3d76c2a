//! ASCII control character names
//!
//! The table covers the C0 range (0-31) and DEL (127). It is a `static`
//! slice, so it is built at compile time and shared freely across threads.

use serde::Serialize;
use std::fmt;

/// A named, non-printable ASCII code point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlCharacter {
    /// Code point value
    pub code: u8,
    /// Standard short mnemonic, e.g. `HT`
    pub abbreviation: &'static str,
    /// Human-readable name, e.g. `horizontal tab`
    pub name: &'static str,
}

impl fmt::Display for ControlCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.abbreviation, self.name)
    }
}

const fn entry(code: u8, abbreviation: &'static str, name: &'static str) -> ControlCharacter {
    ControlCharacter {
        code,
        abbreviation,
        name,
    }
}

/// C0 control characters indexed by code point; DEL is kept separately.
static C0_CONTROLS: [ControlCharacter; 32] = [
    entry(0, "NUL", "null"),
    entry(1, "SOH", "start of heading"),
    entry(2, "STX", "start of text"),
    entry(3, "ETX", "end of text"),
    entry(4, "EOT", "end of transmission"),
    entry(5, "ENQ", "enquiry"),
    entry(6, "ACK", "acknowledge"),
    entry(7, "BEL", "bell"),
    entry(8, "BS", "backspace"),
    entry(9, "HT", "horizontal tab"),
    entry(10, "LF", "line feed"),
    entry(11, "VT", "vertical tab"),
    entry(12, "FF", "form feed"),
    entry(13, "CR", "carriage return"),
    entry(14, "SO", "shift out"),
    entry(15, "SI", "shift in"),
    entry(16, "DLE", "data link escape"),
    entry(17, "DC1", "device control 1"),
    entry(18, "DC2", "device control 2"),
    entry(19, "DC3", "device control 3"),
    entry(20, "DC4", "device control 4"),
    entry(21, "NAK", "negative acknowledge"),
    entry(22, "SYN", "synchronous idle"),
    entry(23, "ETB", "end of transmission block"),
    entry(24, "CAN", "cancel"),
    entry(25, "EM", "end of medium"),
    entry(26, "SUB", "substitute"),
    entry(27, "ESC", "escape"),
    entry(28, "FS", "file separator"),
    entry(29, "GS", "group separator"),
    entry(30, "RS", "record separator"),
    entry(31, "US", "unit separator"),
];

static DELETE: ControlCharacter = entry(127, "DEL", "delete");

/// Look up the control character for a code point, if it has one
pub fn lookup(code: u32) -> Option<&'static ControlCharacter> {
    match code {
        0..=31 => C0_CONTROLS.get(code as usize),
        127 => Some(&DELETE),
        _ => None,
    }
}

/// Iterate over every entry of the table in code point order
pub fn all() -> impl Iterator<Item = &'static ControlCharacter> {
    C0_CONTROLS.iter().chain(std::iter::once(&DELETE))
}
