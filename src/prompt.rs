use std::io::{self, BufRead, Write};

/// Ask a yes/no question on the terminal.
///
/// # Errors
///
/// Returns an error if:
/// - Standard output cannot be flushed
/// - Reading from standard input fails
pub fn confirm(question: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    confirm_with(&mut stdin.lock(), &mut stdout, question)
}

/// Ask until the answer is `y`/`yes` or `n`/`no`. End of input declines.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn confirm_with<R, W>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{question} (y/n): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(false);
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please enter 'y' for yes or 'n' for no.")?,
        }
    }
}
