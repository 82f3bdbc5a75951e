//! CSV Quote Lexer
//!
//! A single pass over the raw bytes that walks field boundaries the way an
//! RFC 4180 reader does and rejects input whose quoting is malformed. The
//! `csv` crate is lenient about stray quotes, so this runs first.

use std::borrow::Cow;
use std::ops::Range;

use crate::error::ParseError;

const QUOTE: u8 = b'"';
const DELIMITER: u8 = b',';

fn is_padding(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Check that every quoted field in `input` is well formed.
///
/// Spaces and tabs in front of an opening quote are allowed. They are cut
/// from the returned bytes so the record reader decodes the field as quoted;
/// unquoted fields are returned untouched. Borrows when nothing was cut.
///
/// Line numbers in errors are 1-based and count every `\n`, including the
/// ones embedded in quoted fields.
pub fn lint_quoting(input: &[u8]) -> Result<Cow<'_, [u8]>, ParseError> {
    let mut line: u64 = 1;
    let mut i = 0;
    let mut padding: Vec<Range<usize>> = Vec::new();

    while i < input.len() {
        // At the start of a field
        let field_start = i;
        let mut content_start = i;
        while input.get(content_start).copied().is_some_and(is_padding) {
            content_start += 1;
        }

        if input.get(content_start) == Some(&QUOTE) {
            if content_start > field_start {
                padding.push(field_start..content_start);
            }
            let opened_on = line;
            i = content_start + 1;

            loop {
                match input.get(i) {
                    None => return Err(ParseError::UnterminatedQuote { line: opened_on }),
                    Some(&QUOTE) if input.get(i + 1) == Some(&QUOTE) => i += 2,
                    Some(&QUOTE) => {
                        i += 1;
                        break;
                    }
                    Some(&b'\n') => {
                        line += 1;
                        i += 1;
                    }
                    Some(_) => i += 1,
                }
            }

            match input.get(i) {
                None | Some(&DELIMITER) | Some(&b'\n') | Some(&b'\r') => {}
                Some(_) => return Err(ParseError::ExtraneousQuote { line }),
            }
        } else {
            while let Some(&byte) = input.get(i) {
                match byte {
                    DELIMITER | b'\n' | b'\r' => break,
                    QUOTE => return Err(ParseError::BareQuote { line }),
                    _ => i += 1,
                }
            }
        }

        // Consume the field terminator
        match input.get(i) {
            Some(&b'\n') => {
                line += 1;
                i += 1;
            }
            Some(&DELIMITER) | Some(&b'\r') => i += 1,
            _ => {}
        }
    }

    if padding.is_empty() {
        return Ok(Cow::Borrowed(input));
    }

    let mut stripped = Vec::with_capacity(input.len());
    let mut kept_from = 0;
    for range in padding {
        stripped.extend_from_slice(&input[kept_from..range.start]);
        kept_from = range.end;
    }
    stripped.extend_from_slice(&input[kept_from..]);

    Ok(Cow::Owned(stripped))
}
