// Console Operations
// Prompting for and reading the single line of input text

use std::io::{self, BufRead, Write};

/// Prompt shown before reading the input line
pub const PROMPT: &str = "Enter a string: ";

/// Write `prompt`, then read one line from `reader`
///
/// The trailing line terminator is stripped; any other whitespace is kept.
/// Reaching end of input before any line is an error.
pub fn read_line<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> io::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input line"));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}

/// Prompt on stdout and read one line from stdin
pub fn prompt_line() -> io::Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_line(&mut stdin.lock(), &mut stdout.lock(), PROMPT)
}
