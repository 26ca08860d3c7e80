//! Grammar characters and capacity constants for the formatting engine.

// ============================================================================
// Grammar
// ============================================================================

/// The reserved delimiter character. The same character opens and closes a
/// placeholder; two consecutive markers where a body was expected are one
/// literal marker.
pub const MARKER: u8 = b'%';

/// Opens the format-specifier section inside a placeholder body.
pub const SPECIFIER_SEPARATOR: u8 = b':';

/// Fill character used for width padding. The placeholder grammar has no
/// token for overriding it; callers driving the scanner themselves may set
/// [`Placeholder::fill`](crate::Placeholder) before rendering.
pub const DEFAULT_FILL: char = ' ';

// ============================================================================
// Capacities
// ============================================================================

/// Scratch buffer size for integer rendering.
///
/// A 64-bit value needs at most 22 digits in octal, plus one byte for the
/// sign. Rounded up so the buffer covers every supported base without
/// reallocation.
pub const NUMERIC_SCRATCH_LEN: usize = 24;

/// Capacity hint for rendered floating-point text.
///
/// Covers the hex-float worst case (`-0x1.` + 13 mantissa nibbles + `p` +
/// signed four-digit exponent) with room to spare for fixed notation of
/// ordinary values.
pub const FLOAT_TEXT_CAPACITY: usize = 32;

/// Initial capacity of the reusable per-thread output buffer.
pub const RENDER_BUFFER_CAPACITY: usize = 1024;
