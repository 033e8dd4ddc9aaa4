//! Line-based console prompts.

use std::io::{self, BufRead, Write};

/// Print `message` and read one trimmed line from stdin.
pub fn line(message: &str) -> io::Result<String> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{message}")?;
    stdout.flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().to_owned())
}

/// Use the provided value when present, otherwise prompt for one.
pub fn or_prompt(value: Option<&String>, message: &str) -> io::Result<String> {
    match value {
        Some(value) => Ok(value.clone()),
        None => line(message),
    }
}
