// src/prompt.rs
use crate::error::{Error, Result};
use crate::export::QualityTier;
use std::io::{BufRead, Write};
use tracing::warn;

/// Ask `question` until `parse` accepts the answer.
///
/// Recoverable rejections are reported on `output` and the question is asked
/// again; any other error is returned at once. Running out of input fails
/// with [`Error::InputClosed`].
pub fn read_selection<T, R, W, F>(input: &mut R, output: &mut W, question: &str, parse: F) -> Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T>,
{
    let mut line = String::new();

    loop {
        write!(output, "{}: ", question)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        match parse(line.trim()) {
            Ok(selection) => return Ok(selection),
            Err(e) if e.is_recoverable() => {
                warn!("Rejected selection: {}", line.trim());
                writeln!(output, "{}", e)?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Ask for an export quality until a valid one is entered
pub fn read_quality_tier<R, W>(input: &mut R, output: &mut W) -> Result<QualityTier>
where
    R: BufRead,
    W: Write,
{
    let options = QualityTier::keys().collect::<Vec<_>>().join(", ");
    let question = format!("Enter desired output quality ({})", options);

    read_selection(input, output, &question, |key| key.parse::<QualityTier>())
}
