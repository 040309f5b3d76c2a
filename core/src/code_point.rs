//! Code point value type and its derived renderings

use crate::control::{self, ControlCharacter};
use serde::{Serialize, Serializer};
use std::fmt;

/// Highest value accepted as a code point (the Unicode scalar ceiling)
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Highest value of the standard 7-bit ASCII range
pub const ASCII_MAX: u32 = 0x7F;

/// An integer identifying a character, in `0..=MAX_CODE_POINT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(u32);

impl CodePoint {
    /// Create a code point, rejecting values above [`MAX_CODE_POINT`]
    pub fn new(value: u32) -> Option<Self> {
        (value <= MAX_CODE_POINT).then_some(Self(value))
    }

    /// Code point of a character
    pub fn from_char(ch: char) -> Self {
        Self(ch as u32)
    }

    /// Raw integer value
    pub fn value(self) -> u32 {
        self.0
    }

    pub fn range(self) -> Range {
        if self.0 <= ASCII_MAX {
            Range::Standard
        } else {
            Range::Extended
        }
    }

    /// Base-10 rendering
    pub fn decimal(self) -> String {
        self.0.to_string()
    }

    /// Lowercase base-16 rendering with a `0x` prefix
    pub fn hex(self) -> String {
        format!("{:#x}", self.0)
    }

    /// Base-2 rendering with a `0b` prefix and no padding
    pub fn binary(self) -> String {
        format!("{:#b}", self.0)
    }

    /// The character for this code point; `None` for surrogates
    pub fn glyph(self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// Pick the label for this code point: printable glyph first, then the
    /// control table, then a non-standard glyph.
    pub fn label(self) -> Label {
        match (self.0, self.glyph()) {
            (32..=126, Some(ch)) => Label::Printable(ch),
            _ => match (control::lookup(self.0), self.glyph()) {
                (Some(control), _) => Label::Control(control),
                (None, Some(ch)) => Label::NonStandard(ch),
                (None, None) => Label::Surrogate,
            },
        }
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for CodePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

/// Whether a code point belongs to 7-bit ASCII
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Range {
    /// 0-127
    Standard,
    /// Anything above 127
    Extended,
}

/// Human-readable description of a code point's character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Printable ASCII (32-126)
    Printable(char),
    /// Named control character (0-31, 127)
    Control(&'static ControlCharacter),
    /// Any other character; not part of standard ASCII
    NonStandard(char),
    /// UTF-16 surrogate value, which has no character of its own
    Surrogate,
}

impl Label {
    /// Machine-friendly name of the label variant
    pub fn kind(&self) -> &'static str {
        match self {
            Label::Printable(_) => "printable",
            Label::Control(_) => "control",
            Label::NonStandard(_) => "non_standard",
            Label::Surrogate => "surrogate",
        }
    }

    pub fn is_control(&self) -> bool {
        matches!(self, Label::Control(_))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Printable(ch) => write!(f, "'{}'", ch),
            Label::Control(control) => write!(f, "{}", control),
            Label::NonStandard(ch) => write!(f, "'{}' (non-standard)", ch),
            Label::Surrogate => write!(f, "<surrogate> (non-standard)"),
        }
    }
}
