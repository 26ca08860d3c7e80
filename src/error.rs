//! Failure taxonomy for one formatting call.
//!
//! Every failure is surfaced as a value and carries the offending byte
//! offset within the original template. Formatting is deterministic, so
//! retrying with the same inputs can never succeed; the position exists to
//! point the caller at the template defect.

use thiserror::Error;

/// Why a formatting call was aborted.
///
/// The first error encountered ends the call. Output already appended to
/// the sink is not rolled back: the sink holds a correct prefix followed by
/// nothing. Callers that need transactional output should format into a
/// scratch buffer and merge it on success.
///
/// Note that an unterminated placeholder at end-of-input is *not* an error:
/// a digit-led body that never finds its close marker (and never opens a
/// specifier section) degrades to literal text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A placeholder body does not match the reference grammar: the byte
    /// after the opening marker is not a decimal digit, a sign has no width
    /// digits after it, the index or width overflows `usize`, or a
    /// delimited body carries trailing bytes that are neither a specifier
    /// section nor the close marker.
    #[error("malformed argument reference at byte {position} of the template")]
    InvalidReference {
        /// Byte offset of the first offending character.
        position: usize,
    },

    /// A format-specifier section was opened (colon seen) but the close
    /// marker never arrives before end-of-input.
    #[error("format specifier opened at byte {position} is never closed")]
    InvalidReferenceFormat {
        /// Byte offset of the colon that opened the specifier section.
        position: usize,
    },

    /// A placeholder addressed an argument past the end of the supplied
    /// list. Nothing is emitted for the placeholder.
    #[error(
        "placeholder at byte {position} references argument {index}, but only {supplied} were supplied"
    )]
    ReferenceOutOfBounds {
        /// Byte offset of the placeholder's opening marker.
        position: usize,
        /// The index the placeholder asked for.
        index: usize,
        /// How many arguments the caller passed.
        supplied: usize,
    },
}

impl TemplateError {
    /// The offending byte offset within the original template.
    pub fn position(&self) -> usize {
        match *self {
            TemplateError::InvalidReference { position }
            | TemplateError::InvalidReferenceFormat { position }
            | TemplateError::ReferenceOutOfBounds { position, .. } => position,
        }
    }
}
