use crate::alphabet::{is_stripped_whitespace, translate, Mode};
use crate::error::{HexlishError, Result};
use std::io::{BufRead, Read, Write};

/// Ceiling on the content of a single line, excluding the terminator.
/// A line past this is a reportable error, never a silent truncation.
pub const MAX_LINE_BYTES: usize = 1024 * 1024;

/// Transcode one line under the given mode
/// Mapped characters are substituted, space/tab/CR/LF are dropped, and
/// everything else passes through unchanged
pub fn transcode_line(line: &str, mode: Mode) -> String {
    let mut out = String::with_capacity(line.len());
    for ch in line.chars() {
        if let Some(mapped) = translate(ch, mode) {
            out.push(mapped);
        } else if !is_stripped_whitespace(ch) {
            out.push(ch);
        }
    }
    out
}

/// Transcode an entire input stream to an output stream, one line at a time.
/// Accepts `\n` and `\r\n` terminators on input; every output line ends with
/// a single `\n`, including a final input line with no terminator of its own.
/// Returns the number of lines written.
pub fn transcode_stream<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    mode: Mode,
) -> Result<u64> {
    let mut lines = 0u64;
    let mut buf = Vec::with_capacity(64 * 1024);

    loop {
        buf.clear();
        if read_line_capped(&mut reader, &mut buf)? == 0 {
            break;
        }
        strip_terminator(&mut buf);

        // Invalid UTF-8 becomes U+FFFD, which no table maps and which is not
        // stripped whitespace, so it passes through
        let line = String::from_utf8_lossy(&buf);
        let transcoded = transcode_line(&line, mode);
        writer.write_all(transcoded.as_bytes())?;
        writer.write_all(b"\n")?;
        lines += 1;
    }

    writer.flush()?;
    Ok(lines)
}

/// Read one line including its `\n` if present, refusing lines whose content
/// would exceed MAX_LINE_BYTES. Returns the number of bytes read; 0 at end
/// of stream.
fn read_line_capped<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<usize> {
    let limit = MAX_LINE_BYTES + 1;
    let n = reader.by_ref().take(limit as u64).read_until(b'\n', buf)?;
    if n == limit && buf.last() != Some(&b'\n') {
        return Err(HexlishError::LineTooLong(MAX_LINE_BYTES));
    }
    Ok(n)
}

/// Strip the trailing terminator, whichever of `\n` or `\r\n` the input uses
fn strip_terminator(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}
