//! Input processing and configuration utilities
//!
//! Interactive prompting on the terminal plus the environment lookups used
//! by the configuration layer.

use crate::error::InputError;
use crate::utils::logging::LogLevel;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Environment variable configuration reader
pub struct EnvConfigReader;

impl EnvConfigReader {
    /// Read NO_COLOR environment variable
    pub fn read_no_color() -> bool {
        std::env::var("NO_COLOR").is_ok()
    }

    /// Read DIALOGKIT_LOG_LEVEL environment variable
    pub fn read_log_level() -> Option<LogLevel> {
        std::env::var("DIALOGKIT_LOG_LEVEL")
            .ok()
            .and_then(|s| s.parse::<LogLevel>().ok())
    }

    /// Read DIALOGKIT_LOG_FILE environment variable
    pub fn read_log_file() -> Option<PathBuf> {
        std::env::var("DIALOGKIT_LOG_FILE")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }
}

fn wrong_input_message(valid_values: &[String], max_suggested: usize) -> String {
    let shown = valid_values
        .iter()
        .take(max_suggested)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let more = if valid_values.len() > max_suggested {
        ",..."
    } else {
        ""
    };
    format!("Invalid answer, only {}{} allowed\n", shown, more)
}

/// Ask on stdin until the answer is one of `valid_values`.
///
/// With `valid_values` set to `None` the first line is accepted as is.
pub fn request_input(
    valid_values: Option<&[String]>,
    prompt: Option<&str>,
    max_suggested: usize,
) -> Result<String, InputError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    request_input_from(
        &mut stdin.lock(),
        &mut stdout.lock(),
        valid_values,
        prompt,
        max_suggested,
    )
}

/// Prompt loop over arbitrary reader and writer.
///
/// The trailing line break is stripped from each answer. A wrong answer
/// prints the first `max_suggested` allowed values and asks again. Reaching
/// the end of the input is reported as [`InputError::Closed`].
pub fn request_input_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    valid_values: Option<&[String]>,
    prompt: Option<&str>,
    max_suggested: usize,
) -> Result<String, InputError> {
    loop {
        if let Some(prompt) = prompt {
            write!(writer, "{}", prompt).map_err(InputError::Write)?;
            writer.flush().map_err(InputError::Write)?;
        }

        let mut line = String::new();
        let read = reader.read_line(&mut line).map_err(InputError::Read)?;
        if read == 0 {
            return Err(InputError::Closed);
        }
        let answer = line.trim_end_matches(['\n', '\r']).to_string();

        match valid_values {
            Some(valid) if !valid.iter().any(|v| *v == answer) => {
                log::debug!("Rejected answer '{}'", answer);
                writeln!(writer, "{}", wrong_input_message(valid, max_suggested))
                    .map_err(InputError::Write)?;
            }
            _ => return Ok(answer),
        }
    }
}
