//! Per-type value rendering and the shared width/fill/alignment helper.
//!
//! Each renderer produces the unpadded text for one value into local
//! scratch storage, then routes it through [`emit_padded`] exactly once.
//! Integers never touch the heap: digits are produced least-significant
//! first into a fixed scratch buffer and emitted from the high end.
//! Floating-point rendering delegates digit generation to the standard
//! library except for hex-float notation, which is derived from the IEEE
//! bit pattern.

use std::iter;

use crate::constants::{FLOAT_TEXT_CAPACITY, NUMERIC_SCRATCH_LEN};
use crate::types::Placeholder;

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Append `text` to `sink`, padded to the descriptor's width.
///
/// Lengths are byte counts. Text at least as wide as the field is emitted
/// verbatim; otherwise `width - text.len()` fill characters go before the
/// text (right alignment) or after it (left alignment, the default).
///
/// Custom [`RenderValue`](crate::RenderValue) implementations should route
/// their rendered text through this helper so width requests in the
/// template apply to them too.
pub fn emit_padded(sink: &mut String, placeholder: &Placeholder<'_>, text: &str) {
    let width = placeholder.width;
    if width <= text.len() {
        sink.push_str(text);
        return;
    }

    let pad = width - text.len();
    if placeholder.right_align {
        sink.extend(iter::repeat(placeholder.fill).take(pad));
        sink.push_str(text);
    } else {
        sink.push_str(text);
        sink.extend(iter::repeat(placeholder.fill).take(pad));
    }
}

pub(crate) fn signed(sink: &mut String, placeholder: &Placeholder<'_>, value: i64) {
    integral(sink, placeholder, value < 0, value.unsigned_abs());
}

pub(crate) fn unsigned(sink: &mut String, placeholder: &Placeholder<'_>, value: u64) {
    integral(sink, placeholder, false, value);
}

pub(crate) fn text(sink: &mut String, placeholder: &Placeholder<'_>, value: &str) {
    emit_padded(sink, placeholder, value);
}

/// Base selection: first specifier byte, `x`/`X` hexadecimal (lower/upper),
/// `o` octal, anything else decimal.
fn integral(sink: &mut String, placeholder: &Placeholder<'_>, negative: bool, magnitude: u64) {
    let (base, digits) = match placeholder.spec.as_bytes().first() {
        Some(b'x') => (16, LOWER_DIGITS),
        Some(b'X') => (16, UPPER_DIGITS),
        Some(b'o') => (8, LOWER_DIGITS),
        _ => (10, LOWER_DIGITS),
    };

    let mut scratch = [0u8; NUMERIC_SCRATCH_LEN];
    let mut at = NUMERIC_SCRATCH_LEN;
    let mut value = magnitude;
    loop {
        at -= 1;
        scratch[at] = digits[(value % base) as usize];
        value /= base;
        if value == 0 {
            break;
        }
    }
    if negative {
        at -= 1;
        scratch[at] = b'-';
    }

    let rendered = std::str::from_utf8(&scratch[at..]).expect("scratch holds ASCII digits only");
    emit_padded(sink, placeholder, rendered);
}

/// Notation selection: first specifier byte, `e`/`E` scientific, `g`/`G`
/// shortest round-trip, `a`/`A` hex-float, anything else fixed with six
/// fractional digits.
pub(crate) fn float(sink: &mut String, placeholder: &Placeholder<'_>, value: f64) {
    let rendered = match placeholder.spec.as_bytes().first() {
        Some(b'e') => format!("{value:e}"),
        Some(b'E') => format!("{value:E}"),
        Some(b'g') | Some(b'G') => format!("{value}"),
        Some(b'a') => hex_float(value, false),
        Some(b'A') => hex_float(value, true),
        _ => format!("{value:.6}"),
    };
    emit_padded(sink, placeholder, &rendered);
}

/// C `%a`-style hex-float: `[-]0x<h>.<mantissa>p<signed exponent>`.
///
/// Trailing mantissa zeros are trimmed and the point is dropped when the
/// mantissa is empty. Subnormals keep the raw fraction with a `0` leading
/// digit and exponent -1022; zero renders as `0x0p+0`.
fn hex_float(value: f64, uppercase: bool) -> String {
    if value.is_nan() || value.is_infinite() {
        return format!("{value}");
    }

    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);

    let mut out = String::with_capacity(FLOAT_TEXT_CAPACITY);
    if bits >> 63 == 1 {
        out.push('-');
    }
    out.push_str(if uppercase { "0X" } else { "0x" });

    let (lead, exponent) = if biased == 0 {
        if fraction == 0 {
            ('0', 0)
        } else {
            ('0', -1022)
        }
    } else {
        ('1', biased - 1023)
    };
    out.push(lead);

    if fraction != 0 {
        out.push('.');
        let digits = if uppercase { UPPER_DIGITS } else { LOWER_DIGITS };
        // Left-align the 52 fraction bits so nibbles stream from the top;
        // the loop stops once only trailing zeros remain.
        let mut rest = fraction << 12;
        while rest != 0 {
            out.push(digits[(rest >> 60) as usize] as char);
            rest <<= 4;
        }
    }

    out.push(if uppercase { 'P' } else { 'p' });
    out.push_str(&format!("{exponent:+}"));
    out
}
