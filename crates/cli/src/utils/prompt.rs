use std::io::{self, BufRead, Write};

/// Print `message` without a newline and read the reply.
///
/// Returns the trimmed line, or `None` once input is exhausted. Bytes that
/// are not valid UTF-8 are replaced, so a garbled line reaches the caller's
/// parser instead of ending the session.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}
