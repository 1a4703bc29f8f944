//! Interactive grid-size prompt with local recovery from bad answers
//!
//! A round asks for rows, then columns. A non-integer answer ends the round
//! early; a size below the configured minimum is reported and the round is
//! repeated. Only the end of input stops the prompt without a valid size.
//!
//! A non-integer answer prints only the integer message: the partial round is
//! discarded without checking its rows against the minimum.

use std::io::{BufRead, Write};

use crate::io::configuration::GridLimits;
use crate::io::error::{PathfindingError, Result, terminal_error};
use crate::spatial::grid::GridShape;

/// Message shown when an answer does not parse as an integer
pub const NOT_AN_INTEGER_MESSAGE: &str = "Please enter integer values only.";

/// Grid-size prompt over any line reader and writer
pub struct GridSizePrompt<R, W> {
    input: R,
    output: W,
    limits: GridLimits,
}

impl<R: BufRead, W: Write> GridSizePrompt<R, W> {
    /// Create a prompt reading answers from `input` and writing questions to `output`
    pub const fn new(input: R, output: W, limits: GridLimits) -> Self {
        Self {
            input,
            output,
            limits,
        }
    }

    /// Ask until both dimensions are integers meeting the minimums
    ///
    /// # Errors
    ///
    /// Returns `PromptClosed` if input ends first and `FileSystem` if the
    /// terminal cannot be read or written
    pub fn prompt_grid_size(&mut self) -> Result<GridShape> {
        loop {
            let Some(rows) = self.ask_integer(
                "rows",
                &format!(
                    "Enter the number of rows for the grid (minimum {}): ",
                    self.limits.min_rows
                ),
            )?
            else {
                continue;
            };
            let Some(cols) = self.ask_integer(
                "columns",
                &format!(
                    "Enter the number of columns for the grid (minimum {}): ",
                    self.limits.min_cols
                ),
            )?
            else {
                continue;
            };

            if self.limits.accepts(rows, cols) {
                return GridShape::new(rows as usize, cols as usize);
            }
            self.say(&format!(
                "Grid must be at least {} rows and {} columns.",
                self.limits.min_rows, self.limits.min_cols
            ))?;
        }
    }

    /// Ask one question; `None` means the answer was not an integer and the
    /// round should restart
    fn ask_integer(&mut self, what: &'static str, question: &str) -> Result<Option<i64>> {
        write!(self.output, "{question}").map_err(|e| terminal_error("write prompt", e))?;
        self.output
            .flush()
            .map_err(|e| terminal_error("flush prompt", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| terminal_error("read answer", e))?;
        if read == 0 {
            return Err(PathfindingError::PromptClosed { prompt: what });
        }

        if let Ok(value) = line.trim().parse::<i64>() {
            Ok(Some(value))
        } else {
            self.say(NOT_AN_INTEGER_MESSAGE)?;
            Ok(None)
        }
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").map_err(|e| terminal_error("write message", e))
    }

    /// Give back the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
