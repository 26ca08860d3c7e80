//! Core types shared between scanning and rendering.

use crate::constants::DEFAULT_FILL;

/// The parsed result of one successful scan step.
///
/// A descriptor is produced fresh for each placeholder the scanner finds,
/// handed to the dispatcher, and discarded. `spec` borrows the specifier
/// substring straight from the template, so the descriptor cannot outlive
/// the formatting call that produced it.
///
/// # Fields vs. grammar
///
/// For the template `"%2+10:X%"` the descriptor is: `index` 2, `width` 10,
/// `right_align` true, `spec` `"X"`. A width of 0 means no padding was
/// requested. `fill` is always [`DEFAULT_FILL`] when produced by the
/// scanner; callers driving [`Scanner`](crate::Scanner) directly may
/// override it before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'t> {
    /// Zero-based position of the argument this placeholder renders.
    pub index: usize,

    /// Requested field width in bytes; 0 = unset.
    pub width: usize,

    /// `+` in the body selects right alignment; `-` (or nothing) left.
    pub right_align: bool,

    /// Padding character, space unless overridden by the caller.
    pub fill: char,

    /// The unparsed specifier substring after the colon; empty when the
    /// body had no colon. Interpreted by each type formatter.
    pub spec: &'t str,

    /// Byte offset of the opening marker in the template, for diagnostics.
    pub position: usize,
}

impl<'t> Placeholder<'t> {
    /// A descriptor with no width, no specifier, and the default fill.
    /// Useful for rendering a value outside of any template.
    pub fn bare(index: usize) -> Self {
        Self {
            index,
            width: 0,
            right_align: false,
            fill: DEFAULT_FILL,
            spec: "",
            position: 0,
        }
    }
}
