//! Line formatting for the coverage summary

use crate::types::CounterRecord;

/// Default padding width of the type, missed and covered columns
pub const DEFAULT_COLUMN_WIDTH: usize = 13;

/// Separator line bounding the counter block
pub const SEPARATOR: &str = "-----------------------------------------------------";

/// Banner printed above the counter block
pub const BANNER: [&str; 3] = [
    " -------------------------",
    "|   Coverage Results     |",
    " -------------------------",
];

/// Message emitted when the report file does not exist
pub const NOT_FOUND_MESSAGE: &str = "No coverage tests found !";

/// Label rendered in place of an undefined percentage
pub const UNDEFINED_PERCENTAGE: &str = "n/a";

/// Lower-case the metric name and capitalize its first character
pub fn capitalize_kind(kind: &str) -> String {
    let lower = kind.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Percentage label: `Total.<n>` for instructions, `<n>` otherwise
pub fn percentage_label(counter: &CounterRecord) -> String {
    let value = match counter.percentage() {
        Some(percentage) => percentage.to_string(),
        None => UNDEFINED_PERCENTAGE.to_string(),
    };

    if counter.is_instruction() {
        format!("Total.{}", value)
    } else {
        value
    }
}

/// Format one counter line
///
/// `- {type} - Missed: {m} - Covered: {c} ({label}%)` with the first three
/// columns padded on the right to `width`.
pub fn format_counter(counter: &CounterRecord, width: usize) -> String {
    let kind = capitalize_kind(&counter.kind);
    let missed = format!("Missed: {}", counter.missed);
    let covered = format!("Covered: {}", counter.covered);

    format!(
        "- {:<width$} - {:<width$} - {:<width$} ({}%)",
        kind,
        missed,
        covered,
        percentage_label(counter),
        width = width
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_kind() {
        assert_eq!(capitalize_kind("LINE"), "Line");
        assert_eq!(capitalize_kind("complexity"), "Complexity");
        assert_eq!(capitalize_kind("mEtHoD"), "Method");
        assert_eq!(capitalize_kind("x"), "X");
        assert_eq!(capitalize_kind(""), "");
    }

    #[test]
    fn test_type_column_padded_to_width() {
        let line = format_counter(&CounterRecord::new("LINE", 1, 2), DEFAULT_COLUMN_WIDTH);
        let type_column = &line[2..2 + DEFAULT_COLUMN_WIDTH];
        assert_eq!(type_column, "Line         ");
        assert_eq!(type_column.len(), 13);
    }

    #[test]
    fn test_instruction_line() {
        let line = format_counter(&CounterRecord::new("INSTRUCTION", 10, 90), DEFAULT_COLUMN_WIDTH);
        assert_eq!(
            line,
            "- Instruction   - Missed: 10    - Covered: 90   (Total.900%)"
        );
    }

    #[test]
    fn test_branch_line() {
        let line = format_counter(&CounterRecord::new("branch", 5, 5), DEFAULT_COLUMN_WIDTH);
        assert_eq!(line, "- Branch        - Missed: 5     - Covered: 5    (100%)");
    }

    #[test]
    fn test_long_values_are_not_truncated() {
        let line = format_counter(&CounterRecord::new("complexity", 1234567, 7654321), DEFAULT_COLUMN_WIDTH);
        assert_eq!(
            line,
            "- Complexity    - Missed: 1234567 - Covered: 7654321 (620%)"
        );
    }

    #[test]
    fn test_zero_missed_is_undefined() {
        let branch = CounterRecord::new("branch", 0, 5);
        assert_eq!(percentage_label(&branch), "n/a");

        let instruction = CounterRecord::new("instruction", 0, 5);
        assert_eq!(percentage_label(&instruction), "Total.n/a");
        assert!(format_counter(&instruction, DEFAULT_COLUMN_WIDTH).ends_with("(Total.n/a%)"));
    }

    #[test]
    fn test_custom_width() {
        let line = format_counter(&CounterRecord::new("line", 1, 1), 4);
        assert_eq!(line, "- Line - Missed: 1 - Covered: 1 (100%)");
    }
}
