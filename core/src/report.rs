//! Rendering of descriptions for display and serialization

use crate::code_point::{CodePoint, Label, Range, ASCII_MAX};
use crate::error::Result;
use crate::interpreter::Description;
use serde::Serialize;
use std::fmt;

/// Field names of the result panel, in display order
pub const FIELD_DECIMAL: &str = "Decimal";
pub const FIELD_HEX: &str = "Hex";
pub const FIELD_BINARY: &str = "Binary";
pub const FIELD_CHARACTER: &str = "Character";
pub const FIELD_CONTROL: &str = "Control character";

impl Description {
    /// Caption of the label line; control characters get their own caption
    pub fn label_caption(&self) -> &'static str {
        if self.label().is_control() {
            FIELD_CONTROL
        } else {
            FIELD_CHARACTER
        }
    }

    /// Field/value pairs of the result panel
    pub fn fields(&self) -> [(&'static str, String); 4] {
        [
            (FIELD_DECIMAL, self.decimal()),
            (FIELD_HEX, self.hex()),
            (FIELD_BINARY, self.binary()),
            (self.label_caption(), self.label().to_string()),
        ]
    }

    /// Serializable view of this description
    pub fn to_record(&self) -> DescriptionRecord {
        let label = self.label();
        DescriptionRecord {
            code_point: self.code_point(),
            decimal: self.decimal(),
            hex: self.hex(),
            binary: self.binary(),
            range: self.range(),
            kind: label.kind(),
            label: label_text(&label),
        }
    }

    /// Single-line JSON of [`Self::to_record`]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }
}

/// Label text without the quoting and annotation used on screen
fn label_text(label: &Label) -> String {
    match label {
        Label::Printable(ch) | Label::NonStandard(ch) => ch.to_string(),
        Label::Control(control) => control.to_string(),
        Label::Surrogate => String::new(),
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields();
        for (index, (name, value)) in fields.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

/// JSON shape of a description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionRecord {
    pub code_point: CodePoint,
    pub decimal: String,
    pub hex: String,
    pub binary: String,
    pub range: Range,
    pub kind: &'static str,
    pub label: String,
}

/// Descriptions of every standard ASCII code point, in order
pub fn standard_table() -> impl Iterator<Item = Description> {
    (0..=ASCII_MAX).filter_map(CodePoint::new).map(Description::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::interpret;

    fn describe(input: &str) -> Description {
        interpret(input)
            .into_description()
            .expect("input should be described")
    }

    #[test]
    fn test_panel_for_printable() {
        assert_eq!(
            describe("A").to_string(),
            "Decimal: 65\nHex: 0x41\nBinary: 0b1000001\nCharacter: 'A'"
        );
    }

    #[test]
    fn test_panel_for_control() {
        assert_eq!(
            describe("0x9").to_string(),
            "Decimal: 9\nHex: 0x9\nBinary: 0b1001\nControl character: HT (horizontal tab)"
        );
    }

    #[test]
    fn test_panel_for_extended() {
        let panel = describe("0xe9").to_string();
        assert!(panel.ends_with("Character: 'é' (non-standard)"));
    }

    #[test]
    fn test_json_record() {
        let json = describe("0x7f").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["code_point"], 127);
        assert_eq!(value["decimal"], "127");
        assert_eq!(value["hex"], "0x7f");
        assert_eq!(value["binary"], "0b1111111");
        assert_eq!(value["range"], "standard");
        assert_eq!(value["kind"], "control");
        assert_eq!(value["label"], "DEL (delete)");
    }

    #[test]
    fn test_json_record_extended() {
        let record = describe("é").to_record();
        assert_eq!(record.range, Range::Extended);
        assert_eq!(record.kind, "non_standard");
        assert_eq!(record.label, "é");
    }

    #[test]
    fn test_standard_table_covers_ascii() {
        let table: Vec<Description> = standard_table().collect();
        assert_eq!(table.len(), 128);
        assert_eq!(table[0].decimal(), "0");
        assert_eq!(table[127].decimal(), "127");
        assert!(table.iter().all(|d| d.range() == Range::Standard));
    }
}
