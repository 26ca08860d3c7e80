//! Reusable per-thread buffer and stdout convenience.
//!
//! The buffer is explicit thread-local state: it is never visible to other
//! threads and is cleared when acquired, not when released, so a caller
//! always starts from an empty sink regardless of how the previous call on
//! this thread ended.

use std::cell::RefCell;
use std::io::{self, Write};

use crate::arguments::Argument;
use crate::constants::RENDER_BUFFER_CAPACITY;
use crate::format_into;

thread_local! {
    static RENDER_BUFFER: RefCell<String> =
        RefCell::new(String::with_capacity(RENDER_BUFFER_CAPACITY));
}

/// Render `template` with `arguments` into the thread-local buffer and
/// write the result to stdout, flushing.
///
/// Template failures are surfaced as [`io::ErrorKind::InvalidInput`] with
/// the [`TemplateError`](crate::TemplateError) as source, so one result
/// channel covers both formatting and I/O.
pub fn print(template: &str, arguments: &[Argument<'_>]) -> io::Result<()> {
    RENDER_BUFFER.with(|cell| {
        let mut buffer = cell.borrow_mut();
        buffer.clear();
        format_into(&mut buffer, template, arguments)
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

        let mut stdout = io::stdout().lock();
        stdout.write_all(buffer.as_bytes())?;
        stdout.flush()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[test]
    fn test_print_succeeds_on_a_valid_template() {
        print("printed from a test: %0%\n", &args![42u8]).unwrap();
    }

    #[test]
    fn test_print_surfaces_template_failures_as_invalid_input() {
        let error = print("%x%", &[]).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_buffer_state_does_not_leak_between_calls() {
        // Cleared at acquisition: a failed call leaves residue behind, the
        // next call must not reprint it.
        let _ = print("partial %9%", &args![1u8]);
        print("clean\n", &[]).unwrap();
    }
}
