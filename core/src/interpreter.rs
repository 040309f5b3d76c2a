//! Code point interpreter
//!
//! Turns raw user text into a [`Description`] of a single code point, or a
//! [`NoResult`](Interpretation::NoResult) when the text cannot be read as one.
//!
//! Classification, after trimming surrounding whitespace (including the
//! information separators U+001C to U+001F):
//!
//! 1. empty text has no result;
//! 2. text starting with `0x` (any case) is a base-16 literal;
//! 3. exactly one character is looked up by its own code point;
//! 4. anything else has no result.

use crate::code_point::{CodePoint, Label, Range, MAX_CODE_POINT};
use std::fmt;
use tracing::trace;

/// Outcome of interpreting one input string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpretation {
    /// The input names a code point
    Described(Description),
    /// The input is not something to display
    NoResult(NoResultReason),
}

impl Interpretation {
    /// The description, if there is one
    pub fn description(&self) -> Option<&Description> {
        match self {
            Interpretation::Described(description) => Some(description),
            Interpretation::NoResult(_) => None,
        }
    }

    pub fn into_description(self) -> Option<Description> {
        match self {
            Interpretation::Described(description) => Some(description),
            Interpretation::NoResult(_) => None,
        }
    }

    pub fn is_no_result(&self) -> bool {
        matches!(self, Interpretation::NoResult(_))
    }
}

/// Why an input produced no result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoResultReason {
    /// Nothing but whitespace
    Empty,
    /// Plain text longer than one character
    NotASingleCharacter,
    /// `0x` followed by something that is not a hex number
    MalformedHex,
    /// Hex literal above the highest code point
    OutOfRange,
}

impl fmt::Display for NoResultReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            NoResultReason::Empty => "empty input",
            NoResultReason::NotASingleCharacter => "not a single character or 0x literal",
            NoResultReason::MalformedHex => "malformed hexadecimal literal",
            NoResultReason::OutOfRange => "value beyond the highest code point",
        };
        f.write_str(text)
    }
}

/// Structured description of one code point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Description {
    code_point: CodePoint,
}

impl Description {
    pub fn new(code_point: CodePoint) -> Self {
        Self { code_point }
    }

    pub fn code_point(&self) -> CodePoint {
        self.code_point
    }

    pub fn range(&self) -> Range {
        self.code_point.range()
    }

    pub fn is_extended(&self) -> bool {
        self.range() == Range::Extended
    }

    pub fn decimal(&self) -> String {
        self.code_point.decimal()
    }

    pub fn hex(&self) -> String {
        self.code_point.hex()
    }

    pub fn binary(&self) -> String {
        self.code_point.binary()
    }

    pub fn label(&self) -> Label {
        self.code_point.label()
    }
}

/// Whitespace for trimming purposes: Unicode whitespace plus the
/// information separators FS, GS, RS and US (U+001C..=U+001F)
fn is_trimmable(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Interpret a line of user input
pub fn interpret(input: &str) -> Interpretation {
    let text = input.trim_matches(is_trimmable);

    let parsed = if text.is_empty() {
        Err(NoResultReason::Empty)
    } else if let Some(digits) = strip_hex_prefix(text) {
        parse_hex(digits)
    } else {
        single_character(text)
    };

    trace!(input = text, ?parsed, "interpreted input");

    match parsed {
        Ok(code_point) => Interpretation::Described(Description::new(code_point)),
        Err(reason) => Interpretation::NoResult(reason),
    }
}

/// Return the text after a case-insensitive `0x` prefix
fn strip_hex_prefix(text: &str) -> Option<&str> {
    match text.as_bytes() {
        [b'0', b'x' | b'X', ..] => Some(&text[2..]),
        _ => None,
    }
}

/// Parse the digits of a hex literal. A single underscore may follow the
/// prefix or separate two digits.
fn parse_hex(digits: &str) -> Result<CodePoint, NoResultReason> {
    let body = digits.strip_prefix('_').unwrap_or(digits);
    if body.is_empty() {
        return Err(NoResultReason::MalformedHex);
    }

    let mut value: u32 = 0;
    let mut overflowed = false;
    let mut after_separator = true;

    for ch in body.chars() {
        if ch == '_' {
            if after_separator {
                return Err(NoResultReason::MalformedHex);
            }
            after_separator = true;
            continue;
        }

        let digit = ch.to_digit(16).ok_or(NoResultReason::MalformedHex)?;
        after_separator = false;

        // Keep scanning after overflow so trailing garbage still reads as malformed
        match value.checked_mul(16).and_then(|v| v.checked_add(digit)) {
            Some(next) => value = next,
            None => overflowed = true,
        }
    }

    if after_separator {
        return Err(NoResultReason::MalformedHex);
    }

    if overflowed || value > MAX_CODE_POINT {
        return Err(NoResultReason::OutOfRange);
    }

    CodePoint::new(value).ok_or(NoResultReason::OutOfRange)
}

/// Exactly one code point, no more
fn single_character(text: &str) -> Result<CodePoint, NoResultReason> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(CodePoint::from_char(ch)),
        _ => Err(NoResultReason::NotASingleCharacter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control;

    fn described(input: &str) -> Description {
        match interpret(input) {
            Interpretation::Described(description) => description,
            other => panic!("expected a description for {:?}, got {:?}", input, other),
        }
    }

    fn reason(input: &str) -> NoResultReason {
        match interpret(input) {
            Interpretation::NoResult(reason) => reason,
            other => panic!("expected no result for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_printable_characters_describe_themselves() {
        for ch in '!'..='~' {
            let description = described(&ch.to_string());
            assert_eq!(description.decimal(), (ch as u32).to_string());
            assert_eq!(description.label().to_string(), format!("'{}'", ch));
            assert_eq!(description.range(), Range::Standard);
        }
    }

    #[test]
    fn test_hex_literal_capital_a() {
        let description = described("0x41");
        assert_eq!(description.decimal(), "65");
        assert_eq!(description.hex(), "0x41");
        assert_eq!(description.binary(), "0b1000001");
        assert_eq!(description.label().to_string(), "'A'");
    }

    #[test]
    fn test_hex_literal_tab() {
        let description = described("0x9");
        assert_eq!(description.decimal(), "9");
        assert_eq!(description.label(), Label::Control(control::lookup(9).unwrap()));
    }

    #[test]
    fn test_hex_literal_delete() {
        let description = described("0x7f");
        assert_eq!(description.decimal(), "127");
        assert_eq!(
            description.label(),
            Label::Control(control::lookup(127).unwrap())
        );
    }

    #[test]
    fn test_empty_and_whitespace_have_no_result() {
        assert_eq!(reason(""), NoResultReason::Empty);
        assert_eq!(reason("   "), NoResultReason::Empty);
        assert_eq!(reason("\t\n"), NoResultReason::Empty);
    }

    #[test]
    fn test_multiple_characters_have_no_result() {
        assert_eq!(reason("ab"), NoResultReason::NotASingleCharacter);
        assert_eq!(reason("0y41"), NoResultReason::NotASingleCharacter);
        assert_eq!(reason("x41"), NoResultReason::NotASingleCharacter);
    }

    #[test]
    fn test_malformed_hex_has_no_result() {
        for input in ["0xzz", "0x", "0x_", "0x-1", "0x+1", "0x4__1", "0x41_", "0x__41", "0x4 1"] {
            assert_eq!(reason(input), NoResultReason::MalformedHex, "input {:?}", input);
        }
    }

    #[test]
    fn test_out_of_range_hex_has_no_result() {
        assert_eq!(reason("0x110000"), NoResultReason::OutOfRange);
        assert_eq!(reason("0xffffffffff"), NoResultReason::OutOfRange);
    }

    #[test]
    fn test_overflow_followed_by_garbage_is_malformed() {
        assert_eq!(reason("0xffffffffffzz"), NoResultReason::MalformedHex);
    }

    #[test]
    fn test_hex_accepts_case_and_separators() {
        assert_eq!(described("0X41").decimal(), "65");
        assert_eq!(described("0x4_1").decimal(), "65");
        assert_eq!(described("0x_41").decimal(), "65");
        assert_eq!(described("0xFF").hex(), "0xff");
        assert_eq!(described("0x0041").decimal(), "65");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(described("  A ").decimal(), "65");
        assert_eq!(described(" 0x41\n").decimal(), "65");
    }

    #[test]
    fn test_information_separators_are_trimmed() {
        for ch in '\u{1c}'..='\u{1f}' {
            assert_eq!(reason(&ch.to_string()), NoResultReason::Empty);
        }
        assert_eq!(described("\u{1f}A\u{1c}").decimal(), "65");
        // Still reachable through hex
        assert!(described("0x1c").label().is_control());
    }

    #[test]
    fn test_zero_is_a_character_not_a_prefix() {
        assert_eq!(described("0").decimal(), "48");
    }

    #[test]
    fn test_extended_values() {
        let accented = described("é");
        assert!(accented.is_extended());
        assert_eq!(accented.decimal(), "233");
        assert_eq!(accented.label().to_string(), "'é' (non-standard)");

        let highest = described("0x10ffff");
        assert!(highest.is_extended());

        let surrogate = described("0xd800");
        assert_eq!(surrogate.label(), Label::Surrogate);
    }

    #[test]
    fn test_one_code_point_means_one_char() {
        assert_eq!(described("中").decimal(), "20013");
        // e + combining acute accent is two code points
        assert_eq!(reason("e\u{301}"), NoResultReason::NotASingleCharacter);
    }

    #[test]
    fn test_interpret_is_idempotent() {
        for input in ["A", "0x41", "0xzz", "", "ab", "é", "0x7f"] {
            assert_eq!(interpret(input), interpret(input));
        }
    }

    #[test]
    fn test_standard_renderings_parse_back() {
        for value in 0..=127u32 {
            let description = described(&format!("{:#x}", value));
            let hex = description.hex();
            let binary = description.binary();
            assert_eq!(u32::from_str_radix(&hex[2..], 16).unwrap(), value);
            assert_eq!(u32::from_str_radix(&binary[2..], 2).unwrap(), value);
            assert_eq!(description.decimal(), value.to_string());
        }
    }

    #[test]
    fn test_interpretation_accessors() {
        assert!(interpret("").is_no_result());
        assert!(interpret("A").description().is_some());
        assert_eq!(
            interpret("A").into_description().map(|d| d.code_point().value()),
            Some(65)
        );
    }
}
