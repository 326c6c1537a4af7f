// Interactive numbered-list selection.
// Reads lines until the user picks a valid 1-based index or cancels.

use std::io::{self, BufRead, Write};

/// Prompt the user to pick one of `count` items shown as a numbered list.
///
/// Returns the 0-based index of the chosen item, or `None` if the user
/// cancelled (`q`/`quit`, case-insensitive, or end of input). With exactly
/// one item the choice is unambiguous and no input is read; with zero items
/// there is nothing to choose. Invalid and out-of-range inputs re-prompt
/// indefinitely, each with its own message.
pub fn prompt_index_choice(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    count: usize,
    prompt: &str,
    current_hint: Option<&str>,
) -> io::Result<Option<usize>> {
    if count == 0 {
        return Ok(None);
    }
    if count == 1 {
        return Ok(Some(0));
    }

    let hint = current_hint
        .map(|h| format!(" (current: {})", h))
        .unwrap_or_default();

    loop {
        write!(writer, "{} [1-{}]{} (or 'q' to cancel): ", prompt, count, hint)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            // End of input counts as a cancel.
            return Ok(None);
        }

        let choice = line.trim();
        if choice.eq_ignore_ascii_case("q") || choice.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }

        // Digits only: signs and other decorations are invalid input, while
        // any all-digit string ("0", or one too large to parse) is a number
        // that is merely out of range.
        if choice.is_empty() || !choice.chars().all(|c| c.is_ascii_digit()) {
            writeln!(writer, "Please enter a number or 'q' to cancel.")?;
            continue;
        }

        match choice.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(Some(n - 1)),
            _ => writeln!(writer, "Please choose a number between 1 and {}.", count)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(input: &str, count: usize) -> (Option<usize>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let choice =
            prompt_index_choice(&mut reader, &mut output, count, "Select a task list", None)
                .unwrap();
        (choice, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_valid_choice_returns_zero_based_index() {
        let (choice, _) = run("2\n", 2);
        assert_eq!(choice, Some(1));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let (choice, _) = run("  1  \n", 2);
        assert_eq!(choice, Some(0));
    }

    #[test]
    fn test_out_of_range_then_cancel() {
        let (choice, output) = run("9\nq\n", 2);
        assert_eq!(choice, None);
        assert_eq!(
            output.matches("Please choose a number between 1 and 2.").count(),
            1
        );
    }

    #[test]
    fn test_zero_is_out_of_range() {
        let (choice, output) = run("0\n1\n", 2);
        assert_eq!(choice, Some(0));
        assert!(output.contains("Please choose a number between 1 and 2."));
    }

    #[test]
    fn test_non_numeric_reprompts_with_invalid_message() {
        let (choice, output) = run("abc\n2\n", 2);
        assert_eq!(choice, Some(1));
        assert!(output.contains("Please enter a number or 'q' to cancel."));
        assert!(!output.contains("between 1 and"));
    }

    #[test]
    fn test_signed_input_is_invalid_not_numeric() {
        let (choice, output) = run("+2\n-1\nq\n", 2);
        assert_eq!(choice, None);
        assert_eq!(
            output.matches("Please enter a number or 'q' to cancel.").count(),
            2
        );
        assert!(!output.contains("between 1 and"));
    }

    #[test]
    fn test_overlong_digit_string_is_out_of_range() {
        let (choice, output) = run("99999999999999999999999\n1\n", 2);
        assert_eq!(choice, Some(0));
        assert!(output.contains("Please choose a number between 1 and 2."));
        assert!(!output.contains("Please enter a number or 'q' to cancel."));
    }

    #[test]
    fn test_quit_token_is_case_insensitive() {
        assert_eq!(run("Q\n", 3).0, None);
        assert_eq!(run("QUIT\n", 3).0, None);
    }

    #[test]
    fn test_single_candidate_reads_no_input() {
        // Input would be an invalid choice if it were read.
        let (choice, output) = run("garbage\n", 1);
        assert_eq!(choice, Some(0));
        assert!(output.is_empty());
    }

    #[test]
    fn test_zero_candidates_selects_nothing() {
        let (choice, output) = run("1\n", 0);
        assert_eq!(choice, None);
        assert!(output.is_empty());
    }

    #[test]
    fn test_end_of_input_cancels() {
        let (choice, _) = run("", 2);
        assert_eq!(choice, None);
    }

    #[test]
    fn test_current_hint_is_shown() {
        let mut reader = Cursor::new(b"1\n".to_vec());
        let mut output = Vec::new();
        prompt_index_choice(&mut reader, &mut output, 2, "Select", Some("Work")).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("(current: Work)"));
    }
}
