//! Single-pass template scanning.
//!
//! The scanner walks the template once, copying literal runs straight into
//! the output sink and yielding one [`Placeholder`] descriptor per call.
//! The outer loop (markers, escapes, termination policy) is hand-rolled;
//! the delimited placeholder body is handed to the combinator parser in
//! the `body` submodule.
//!
//! # Termination policy
//!
//! The grammar treats end-of-input asymmetrically, and both halves of the
//! asymmetry are load-bearing:
//!
//! - An opened placeholder whose first body byte is not a digit is a hard
//!   [`InvalidReference`](TemplateError::InvalidReference) error, as is a
//!   specifier section (colon seen) that never finds its close marker.
//! - A digit-led body that simply runs out of input before the close
//!   marker degrades to literal text: `"a%1 b"` renders as `"a%1 b"`.

use crate::constants::{DEFAULT_FILL, MARKER, SPECIFIER_SEPARATOR};
use crate::error::TemplateError;
use crate::types::Placeholder;

mod body;

/// Scan cursor over one format template.
///
/// The position only ever moves forward and always stays within the
/// template bounds. A scanner is created at the start of one formatting
/// call and discarded at the end; it holds no heap state.
#[derive(Debug)]
pub struct Scanner<'t> {
    template: &'t str,
    position: usize,
}

impl<'t> Scanner<'t> {
    pub fn new(template: &'t str) -> Self {
        Self {
            template,
            position: 0,
        }
    }

    /// Current byte offset into the template.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Resume scanning from the current position.
    ///
    /// Literal text up to the next placeholder is appended to `sink`.
    /// Returns `Ok(Some(descriptor))` when a placeholder was found (the
    /// cursor now points past its close marker), `Ok(None)` when the
    /// template is exhausted (the literal tail has been flushed), and an
    /// error for the hard-failure cases described in the module docs.
    pub fn scan(&mut self, sink: &mut String) -> Result<Option<Placeholder<'t>>, TemplateError> {
        let bytes = self.template.as_bytes();

        while self.position < bytes.len() {
            let literal_start = self.position;

            let marker_at = match find_marker(bytes, literal_start) {
                Some(at) => at,
                None => {
                    sink.push_str(&self.template[literal_start..]);
                    self.position = bytes.len();
                    return Ok(None);
                }
            };

            sink.push_str(&self.template[literal_start..marker_at]);
            let body_start = marker_at + 1;

            match bytes.get(body_start) {
                // Double marker where a body was expected: one literal marker.
                Some(&MARKER) => {
                    sink.push(MARKER as char);
                    self.position = body_start + 1;
                    continue;
                }
                Some(head) if !head.is_ascii_digit() => {
                    return Err(TemplateError::InvalidReference {
                        position: body_start,
                    });
                }
                Some(_) => {}
                // Lone trailing marker: literal text.
                None => {
                    sink.push(MARKER as char);
                    self.position = body_start;
                    return Ok(None);
                }
            }

            return match find_marker(bytes, body_start) {
                Some(close_at) => {
                    let parsed = body::parse(&self.template[body_start..close_at], body_start)?;
                    self.position = close_at + 1;
                    Ok(Some(Placeholder {
                        index: parsed.index,
                        width: parsed.width,
                        right_align: parsed.right_align,
                        fill: DEFAULT_FILL,
                        spec: parsed.spec,
                        position: marker_at,
                    }))
                }
                None => {
                    let tail = &self.template[body_start..];
                    if let Some(colon) = tail.bytes().position(|b| b == SPECIFIER_SEPARATOR) {
                        return Err(TemplateError::InvalidReferenceFormat {
                            position: body_start + colon,
                        });
                    }
                    // Unterminated digit-led body: emit marker and body
                    // verbatim and finish the scan.
                    sink.push(MARKER as char);
                    sink.push_str(tail);
                    self.position = bytes.len();
                    Ok(None)
                }
            };
        }

        Ok(None)
    }
}

fn find_marker(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from..].iter().position(|&b| b == MARKER).map(|at| from + at)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_all(template: &str) -> (String, Vec<Placeholder<'_>>) {
        let mut sink = String::new();
        let mut scanner = Scanner::new(template);
        let mut found = Vec::new();
        while let Some(placeholder) = scanner.scan(&mut sink).unwrap() {
            found.push(placeholder);
        }
        (sink, found)
    }

    #[test]
    fn test_literal_only_template() {
        let (sink, found) = scan_all("no placeholders here");
        assert_eq!(sink, "no placeholders here");
        assert!(found.is_empty());
    }

    #[test]
    fn test_descriptor_fields() {
        let (sink, found) = scan_all("ab %2+10:Xy% cd");
        assert_eq!(sink, "ab  cd");
        assert_eq!(
            found,
            vec![Placeholder {
                index: 2,
                width: 10,
                right_align: true,
                fill: ' ',
                spec: "Xy",
                position: 3,
            }]
        );
    }

    #[test]
    fn test_left_alignment_and_no_width() {
        let (_, found) = scan_all("%0-4%%7%");
        assert_eq!(found[0].width, 4);
        assert!(!found[0].right_align);
        assert_eq!(found[1].index, 7);
        assert_eq!(found[1].width, 0);
        assert_eq!(found[1].spec, "");
    }

    #[test]
    fn test_escaped_marker() {
        let (sink, found) = scan_all("100%% done");
        assert_eq!(sink, "100% done");
        assert!(found.is_empty());
    }

    #[test]
    fn test_double_marker_alone() {
        let (sink, _) = scan_all("%%");
        assert_eq!(sink, "%");
    }

    #[test]
    fn test_placeholder_directly_after_escape() {
        let (sink, found) = scan_all("%%%0%");
        assert_eq!(sink, "%");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].index, 0);
    }

    #[test]
    fn test_unterminated_body_degrades_to_text() {
        let (sink, found) = scan_all("a%1 b");
        assert_eq!(sink, "a%1 b");
        assert!(found.is_empty());
    }

    #[test]
    fn test_trailing_marker_degrades_to_text() {
        let (sink, _) = scan_all("50%");
        assert_eq!(sink, "50%");
    }

    #[test]
    fn test_non_digit_body_head_is_an_error() {
        let mut sink = String::new();
        let error = Scanner::new("a%x%").scan(&mut sink).unwrap_err();
        assert_eq!(error, TemplateError::InvalidReference { position: 2 });
    }

    #[test]
    fn test_unclosed_specifier_is_an_error() {
        let mut sink = String::new();
        let error = Scanner::new("a%0:x").scan(&mut sink).unwrap_err();
        assert_eq!(error, TemplateError::InvalidReferenceFormat { position: 3 });
    }

    #[test]
    fn test_junk_after_index_in_delimited_body() {
        let mut sink = String::new();
        let error = Scanner::new("%1 %").scan(&mut sink).unwrap_err();
        assert_eq!(error, TemplateError::InvalidReference { position: 2 });
    }

    #[test]
    fn test_sign_without_width_digits() {
        let mut sink = String::new();
        let error = Scanner::new("%0+%").scan(&mut sink).unwrap_err();
        assert_eq!(error, TemplateError::InvalidReference { position: 2 });
    }

    #[test]
    fn test_multibyte_literals_pass_through() {
        let (sink, found) = scan_all("héllo %0% → 100%% ✓");
        assert_eq!(sink, "héllo  → 100% ✓");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_cursor_is_monotonic() {
        let mut sink = String::new();
        let mut scanner = Scanner::new("x%0%y%1%z");
        let mut last = scanner.position();
        while scanner.scan(&mut sink).unwrap().is_some() {
            assert!(scanner.position() > last);
            last = scanner.position();
        }
        assert_eq!(scanner.position(), 9);
    }
}
