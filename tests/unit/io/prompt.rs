//! Tests for the interactive grid-size prompt

#[cfg(test)]
mod tests {
    use grassfire::PathfindingError;
    use grassfire::io::configuration::GridLimits;
    use grassfire::io::prompt::{GridSizePrompt, NOT_AN_INTEGER_MESSAGE};

    const MINIMUM_MESSAGE: &str = "Grid must be at least 8 rows and 8 columns.";

    /// Run the prompt over scripted answers, returning the result and the transcript
    fn run(answers: &str) -> (grassfire::Result<(usize, usize)>, String) {
        let mut prompt = GridSizePrompt::new(answers.as_bytes(), Vec::new(), GridLimits::default());
        let result = prompt.prompt_grid_size().map(|shape| shape.dim());
        let (_, output) = prompt.into_parts();
        (result, String::from_utf8(output).expect("utf-8 transcript"))
    }

    #[test]
    fn test_accepts_valid_size() {
        let (result, transcript) = run("8\n12\n");
        assert_eq!(result.expect("valid size"), (8, 12));
        assert_eq!(
            transcript,
            "Enter the number of rows for the grid (minimum 8): \
             Enter the number of columns for the grid (minimum 8): "
        );
    }

    // Tests an undersized answer is reported and the whole round repeats
    // Verified by keeping the accepted rows from the failed round
    #[test]
    fn test_undersized_grid_repeats_round() {
        let (result, transcript) = run("7\n8\n8\n9\n");
        assert_eq!(result.expect("valid size"), (8, 9));
        assert_eq!(transcript.matches(MINIMUM_MESSAGE).count(), 1);
        assert_eq!(transcript.matches("Enter the number of rows").count(), 2);
    }

    // Tests a non-integer answer restarts at the rows question
    // Verified by re-asking only the failed question
    #[test]
    fn test_non_integer_restarts_round() {
        let (result, transcript) = run("8\nwide\n10\n11\n");
        assert_eq!(result.expect("valid size"), (10, 11));
        assert_eq!(transcript.matches(NOT_AN_INTEGER_MESSAGE).count(), 1);
        assert!(!transcript.contains(MINIMUM_MESSAGE));
        assert_eq!(transcript.matches("Enter the number of rows").count(), 2);
    }

    // Tests a non-integer column answer skips the minimum check on the round
    // Verified by validating the stale rows before restarting
    #[test]
    fn test_non_integer_columns_print_one_message() {
        let (result, transcript) = run("8\nwide\n8\n8\n");
        assert_eq!(result.expect("valid size"), (8, 8));
        assert_eq!(transcript.matches(NOT_AN_INTEGER_MESSAGE).count(), 1);
        assert_eq!(transcript.matches(MINIMUM_MESSAGE).count(), 0);
    }

    #[test]
    fn test_negative_and_padded_answers() {
        let (result, transcript) = run("-3\n8\n  9 \n 8\n");
        assert_eq!(result.expect("valid size"), (9, 8));
        assert!(transcript.contains(MINIMUM_MESSAGE));
        assert!(!transcript.contains(NOT_AN_INTEGER_MESSAGE));
    }

    #[test]
    fn test_fractional_answer_is_not_an_integer() {
        let (result, transcript) = run("8.5\n8\n8\n");
        assert_eq!(result.expect("valid size"), (8, 8));
        assert!(transcript.contains(NOT_AN_INTEGER_MESSAGE));
    }

    // Tests end of input stops the prompt with an error
    // Verified by looping on empty reads
    #[test]
    fn test_end_of_input_is_an_error() {
        let (result, _) = run("");
        assert!(matches!(
            result,
            Err(PathfindingError::PromptClosed { prompt: "rows" })
        ));

        let (result, _) = run("7\n7\n");
        assert!(matches!(
            result,
            Err(PathfindingError::PromptClosed { prompt: "rows" })
        ));
    }

    #[test]
    fn test_custom_limits_in_questions() {
        let limits = GridLimits {
            min_rows: 3,
            min_cols: 2,
        };
        let mut prompt = GridSizePrompt::new(&b"3\n2\n"[..], Vec::new(), limits);
        let shape = prompt.prompt_grid_size().expect("valid size");
        let (_, output) = prompt.into_parts();
        let transcript = String::from_utf8(output).expect("utf-8 transcript");

        assert_eq!(shape.dim(), (3, 2));
        assert!(transcript.contains("(minimum 3)"));
        assert!(transcript.contains("(minimum 2)"));
    }
}
