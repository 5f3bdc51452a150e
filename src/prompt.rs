use std::io::{BufRead, Write};

use crate::error::{ChooserError, Result, Selection};

/// Turns a 1-based answer into a 0-based index below `len`.
///
/// Only an answer with no text at all picks the first entry.
pub fn parse_choice(input: &str, len: usize, kind: Selection) -> Result<usize> {
    if input.is_empty() {
        return Ok(0);
    }

    let number: i64 = input
        .trim()
        .parse()
        .map_err(|source| ChooserError::InvalidNumber {
            kind,
            input: input.to_string(),
            source,
        })?;

    match number.checked_sub(1).and_then(|n| usize::try_from(n).ok()) {
        Some(index) if index < len => Ok(index),
        _ => Err(ChooserError::OutOfRange { kind }),
    }
}

/// Writes `question` and reads one line. `None` means stdin is closed.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> Result<Option<String>> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub fn ask_choice<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
    len: usize,
    kind: Selection,
) -> Result<(usize, bool)> {
    let answer = ask(input, out, question)?.ok_or(ChooserError::InputClosed { kind })?;
    let index = parse_choice(&answer, len, kind)?;
    Ok((index, answer.is_empty()))
}

pub fn is_yes(answer: Option<&str>) -> bool {
    answer.is_some_and(|a| a.eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_answer_defaults_to_first() {
        assert_eq!(parse_choice("", 2, Selection::Channel).unwrap(), 0);
    }

    #[test]
    fn whitespace_is_not_an_empty_answer() {
        let err = parse_choice("   ", 2, Selection::Channel).unwrap_err();
        assert!(matches!(err, ChooserError::InvalidNumber { kind: Selection::Channel, .. }));
        assert_eq!(parse_choice(" 2 ", 2, Selection::Channel).unwrap(), 1);
    }

    #[test]
    fn answers_are_one_based() {
        assert_eq!(parse_choice("1", 3, Selection::Channel).unwrap(), 0);
        assert_eq!(parse_choice("3\n", 3, Selection::Channel).unwrap(), 2);
    }

    #[test]
    fn out_of_range_answers_fail() {
        for answer in ["0", "-2", "4", "99999999999", "-9223372036854775808"] {
            let err = parse_choice(answer, 3, Selection::Video).unwrap_err();
            assert!(
                matches!(err, ChooserError::OutOfRange { kind: Selection::Video }),
                "{answer}: {err}"
            );
        }
    }

    #[test]
    fn non_numbers_fail_to_parse() {
        let err = parse_choice("two", 3, Selection::Channel).unwrap_err();
        assert!(matches!(err, ChooserError::InvalidNumber { ref input, .. } if input == "two"));
        assert_eq!(
            err.to_string(),
            "invalid channel selection \"two\": invalid digit found in string"
        );
    }

    #[test]
    fn ask_reads_a_line_and_reports_eof() {
        let mut out = Vec::new();
        let mut input = Cursor::new("2\r\n");
        let answer = ask(&mut input, &mut out, "Pick: ").unwrap();
        assert_eq!(answer.as_deref(), Some("2"));
        assert_eq!(String::from_utf8(out).unwrap(), "Pick: ");

        let mut out = Vec::new();
        assert_eq!(ask(&mut Cursor::new(""), &mut out, "Pick: ").unwrap(), None);
    }

    #[test]
    fn closed_input_fails_a_choice() {
        let mut out = Vec::new();
        let err =
            ask_choice(&mut Cursor::new(""), &mut out, "? ", 2, Selection::Channel).unwrap_err();
        assert!(matches!(err, ChooserError::InputClosed { kind: Selection::Channel }));
    }

    #[test]
    fn only_y_confirms() {
        assert!(is_yes(Some("y")));
        assert!(is_yes(Some("Y")));
        assert!(!is_yes(Some(" y ")));
        assert!(!is_yes(Some("Y ")));
        assert!(!is_yes(Some("yes")));
        assert!(!is_yes(Some("")));
        assert!(!is_yes(None));
    }
}
