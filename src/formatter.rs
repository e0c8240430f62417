use std::fmt::Write as _;

use crate::error::Result;
use crate::types::Mode;

/// Decodes `raw` as UTF-8 and renders it for `mode`.
///
/// # Errors
/// Returns `Decode` if `raw` is not valid UTF-8.
pub fn format_bytes(raw: &[u8], mode: Mode) -> Result<String> {
    let text = std::str::from_utf8(raw)?;
    Ok(render(&split_lines(text), mode))
}

/// Splits on `\n` with the same semantics as `str::split('\n')`: text ending
/// in a line feed yields a trailing empty element, and empty text yields `[""]`.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::with_capacity(memchr::memchr_iter(b'\n', bytes).count() + 1);
    let mut start = 0;
    for i in memchr::memchr_iter(b'\n', bytes) {
        lines.push(&text[start..i]);
        start = i + 1;
    }
    lines.push(&text[start..]);
    lines
}

pub fn render(lines: &[&str], mode: Mode) -> String {
    let mut out = String::new();
    match mode {
        Mode::Numbered => {
            for (i, line) in lines.iter().enumerate() {
                push_numbered(&mut out, i + 1, line);
            }
        }
        Mode::NonBlank => {
            for (i, line) in lines.iter().filter(|l| !l.is_empty()).enumerate() {
                push_numbered(&mut out, i + 1, line);
            }
        }
        Mode::Plain => {
            if let Some((last, body)) = lines.split_last() {
                for line in body {
                    out.push_str(line);
                    out.push('\n');
                }
                // the trailing split artifact is not a line
                if !last.is_empty() {
                    out.push_str(last);
                    out.push('\n');
                }
            }
        }
    }
    out
}

fn push_numbered(out: &mut String, n: usize, line: &str) {
    let _ = writeln!(out, "{n} {line}");
}
