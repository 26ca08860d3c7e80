//! Positional runtime text formatting with typed arguments.
//!
//! This crate renders templates like `"Hello: %0%"` against an ordered
//! list of heterogeneous values. Placeholders address arguments by
//! position, so one value can appear several times and in any order, and
//! every failure is a [`TemplateError`] value rather than a panic.
//!
//! # Architecture
//!
//! One formatting call is a loop over two phases:
//! 1. **Scan**: [`Scanner`] copies literal text into the sink and yields
//!    the next [`Placeholder`] descriptor, or reports the template done.
//! 2. **Dispatch**: the descriptor's index selects one [`Argument`]; its
//!    type category picks the renderer, which appends through the shared
//!    width/fill/alignment helper [`emit_padded`].
//!
//! The implementation is organized into focused modules:
//! - `constants`: grammar characters and buffer capacities
//! - `types`: the placeholder descriptor
//! - `error`: the failure taxonomy
//! - `scanning`: the hand-rolled scan loop and the body grammar parser
//! - `arguments`: typed value wrapper and positional dispatch
//! - `rendering`: per-type renderers and the padding helper
//! - `console`: per-thread reusable buffer and stdout convenience
//!
//! # Allocation behavior
//!
//! [`format_into`] appends into a caller-supplied `String` and is the
//! zero-extra-copy path: literal runs are copied once from the template,
//! integers render through a fixed stack scratch buffer, and the sink is
//! pre-reserved with the template length. Reusing one buffer across calls
//! (clearing it first) makes steady-state formatting allocation-free for
//! integer and text arguments.
//!
//! # Concurrency
//!
//! Formatting is synchronous and runs entirely on the calling thread. The
//! sink and argument list are exclusively owned by the in-flight call, so
//! no locking exists anywhere in the crate. The only reusable state, the
//! [`print`] buffer, is thread-local and cleared at acquisition.

#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

// ============================================================================
// Module Organization
// ============================================================================

mod arguments;
mod console;
mod constants;
mod error;
mod rendering;
mod scanning;
mod types;

// ============================================================================
// Re-exports for Public API
// ============================================================================

pub use arguments::{Argument, RenderValue};
pub use console::print;
pub use constants::{DEFAULT_FILL, MARKER, SPECIFIER_SEPARATOR};
pub use error::TemplateError;
pub use rendering::emit_padded;
pub use scanning::Scanner;
pub use types::Placeholder;

// ============================================================================
// Formatting Entry Points
// ============================================================================

/// Render `template` against `arguments` into a fresh owned `String`.
///
/// # Examples
///
/// ```
/// use bfmt::args;
///
/// let rendered = bfmt::format("%0%: %2% and %1%", &args!["order", 2u32, 1u32])?;
/// assert_eq!(rendered, "order: 1 and 2");
/// # Ok::<(), bfmt::TemplateError>(())
/// ```
pub fn format(template: &str, arguments: &[Argument<'_>]) -> Result<String, TemplateError> {
    let mut rendered = String::new();
    format_into(&mut rendered, template, arguments)?;
    Ok(rendered)
}

/// Render `template` against `arguments`, appending to `sink`.
///
/// This is the zero-extra-copy path: nothing is written anywhere but
/// `sink`, which is grown by appension only. On failure the sink keeps the
/// correct prefix rendered before the error; nothing is rolled back.
///
/// # Examples
///
/// ```
/// use bfmt::args;
///
/// let mut line = String::from("> ");
/// bfmt::format_into(&mut line, "%0:x% bytes", &args![202u32])?;
/// assert_eq!(line, "> ca bytes");
/// # Ok::<(), bfmt::TemplateError>(())
/// ```
pub fn format_into(
    sink: &mut String,
    template: &str,
    arguments: &[Argument<'_>],
) -> Result<(), TemplateError> {
    sink.reserve(template.len());
    let mut scanner = Scanner::new(template);
    while let Some(placeholder) = scanner.scan(sink)? {
        arguments::dispatch(sink, &placeholder, arguments)?;
    }
    Ok(())
}

// ============================================================================
// Convenience Macros
// ============================================================================

/// Build a `[Argument; N]` list from heterogeneous values.
///
/// Numeric values are taken by value (they are `Copy`); strings are
/// borrowed, so pass owned `String`s by reference.
///
/// ```
/// use bfmt::args;
///
/// let name = String::from("Ada");
/// let list = args![&name, 42u8, -1i64, 0.5f64, "tail"];
/// assert_eq!(list.len(), 5);
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        [$($crate::Argument::from($value)),*]
    };
}

/// [`format`] with the argument list built inline.
///
/// ```
/// let line = bfmt::bformat!("%1%, %0%!", "world", "hello")?;
/// assert_eq!(line, "hello, world!");
/// # Ok::<(), bfmt::TemplateError>(())
/// ```
#[macro_export]
macro_rules! bformat {
    ($template:expr $(, $value:expr)* $(,)?) => {
        $crate::format($template, &$crate::args![$($value),*])
    };
}

/// [`print`] with the argument list built inline: renders into the
/// thread-local buffer and writes it to stdout.
///
/// ```no_run
/// bfmt::bprint!("%0-8% %1%\n", "status", "ok")?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[macro_export]
macro_rules! bprint {
    ($template:expr $(, $value:expr)* $(,)?) => {
        $crate::print($template, &$crate::args![$($value),*])
    };
}
