//! Typed argument values and positional dispatch.
//!
//! Arguments are wrapped at the call site into [`Argument`], which fixes
//! each value's type category (signed integral, unsigned integral, floating
//! point, text, custom) before formatting begins. Dispatch is then an
//! indexed lookup over the caller's ordered slice plus a branch on the
//! category tag; no runtime type inspection happens.

use crate::error::TemplateError;
use crate::rendering;
use crate::types::Placeholder;

/// Rendering hook for value types the crate does not know about.
///
/// Implementations receive the output sink and the full placeholder
/// descriptor; `placeholder.spec` carries the specifier substring unparsed.
/// Route the rendered text through [`emit_padded`](crate::emit_padded) so
/// width requests in the template apply.
///
/// ```
/// use bfmt::{Argument, Placeholder, RenderValue, emit_padded};
///
/// struct Point { x: i64, y: i64 }
///
/// impl RenderValue for Point {
///     fn render(&self, sink: &mut String, placeholder: &Placeholder<'_>) {
///         let text = format!("({}, {})", self.x, self.y);
///         emit_padded(sink, placeholder, &text);
///     }
/// }
///
/// let point = Point { x: 3, y: -1 };
/// let rendered = bfmt::format("%0+11%", &[Argument::custom(&point)]).unwrap();
/// assert_eq!(rendered, "    (3, -1)");
/// ```
pub trait RenderValue {
    fn render(&self, sink: &mut String, placeholder: &Placeholder<'_>);
}

/// One value in a formatting call's argument list.
///
/// Numeric values are widened into their category's 64-bit representative;
/// text is borrowed from the caller. The set of renderable types is open:
/// anything implementing [`RenderValue`] participates via
/// [`Argument::custom`] without touching the dispatcher.
#[derive(Clone, Copy)]
pub enum Argument<'a> {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(&'a str),
    Custom(&'a dyn RenderValue),
}

impl<'a> Argument<'a> {
    /// Wrap a caller-defined type for rendering through its
    /// [`RenderValue`] implementation.
    pub fn custom(value: &'a dyn RenderValue) -> Self {
        Argument::Custom(value)
    }

    pub(crate) fn render(&self, sink: &mut String, placeholder: &Placeholder<'_>) {
        match *self {
            Argument::Signed(value) => rendering::signed(sink, placeholder, value),
            Argument::Unsigned(value) => rendering::unsigned(sink, placeholder, value),
            Argument::Float(value) => rendering::float(sink, placeholder, value),
            Argument::Text(value) => rendering::text(sink, placeholder, value),
            Argument::Custom(value) => value.render(sink, placeholder),
        }
    }
}

/// Select the argument a placeholder addresses and render it.
///
/// Either exactly one argument is rendered or the call fails with
/// [`TemplateError::ReferenceOutOfBounds`] and zero bytes are emitted for
/// the placeholder.
pub(crate) fn dispatch(
    sink: &mut String,
    placeholder: &Placeholder<'_>,
    arguments: &[Argument<'_>],
) -> Result<(), TemplateError> {
    match arguments.get(placeholder.index) {
        Some(argument) => {
            argument.render(sink, placeholder);
            Ok(())
        }
        None => Err(TemplateError::ReferenceOutOfBounds {
            position: placeholder.position,
            index: placeholder.index,
            supplied: arguments.len(),
        }),
    }
}

macro_rules! argument_from_value {
    ($variant:ident: $($source:ty),+) => {
        $(impl From<$source> for Argument<'_> {
            fn from(value: $source) -> Self {
                Argument::$variant(value.into())
            }
        })+
    };
}

argument_from_value!(Signed: i8, i16, i32, i64);
argument_from_value!(Unsigned: u8, u16, u32, u64);
argument_from_value!(Float: f32, f64);

impl From<isize> for Argument<'_> {
    fn from(value: isize) -> Self {
        Argument::Signed(value as i64)
    }
}

impl From<usize> for Argument<'_> {
    fn from(value: usize) -> Self {
        Argument::Unsigned(value as u64)
    }
}

impl<'a> From<&'a str> for Argument<'a> {
    fn from(value: &'a str) -> Self {
        Argument::Text(value)
    }
}

impl<'a> From<&'a String> for Argument<'a> {
    fn from(value: &'a String) -> Self {
        Argument::Text(value)
    }
}
