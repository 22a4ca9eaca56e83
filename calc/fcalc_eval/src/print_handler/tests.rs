use std::io::{self, Write};
use std::sync::Arc;

use super::*;
use pretty_assertions::assert_eq;

/// A writer whose reader went away.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::ErrorKind::BrokenPipe.into())
    }
}

#[test]
fn buffer_handler_println_captures_with_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("hello");
    assert_eq!(handler.get_output(), "hello\n");
}

#[test]
fn buffer_handler_prompt_has_no_newline() {
    let handler = buffer_handler();
    assert!(handler.print("please enter number of wanted functions: ").is_ok());
    assert!(handler.println("ok").is_ok());
    assert_eq!(
        handler.get_output(),
        "please enter number of wanted functions: ok\n"
    );
}

#[test]
fn buffer_handler_clear_empties_buffer() {
    let handler = buffer_handler();
    assert!(handler.println("hello").is_ok());
    handler.clear();
    assert!(handler.get_output().is_empty());
}

#[test]
fn stream_handler_writes_through() {
    let handler = StreamPrintHandler::new(Vec::new());
    assert!(handler.print("a").is_ok());
    assert!(handler.println("b").is_ok());
}

#[test]
fn stream_handler_reports_write_failures() {
    let handler = PrintHandlerImpl::Stream(StreamPrintHandler::new(ClosedPipe));
    assert!(matches!(
        handler.println("lost"),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe
    ));
    assert!(handler.print("lost").is_err());
    assert_eq!(handler.get_output(), "");
    assert!(!handler.is_terminal());
}

#[test]
fn stdout_handler_captures_nothing() {
    let handler = stdout_handler();
    assert_eq!(handler.get_output(), "");
}

#[test]
fn writer_forwards_complete_lines() {
    let handler = buffer_handler();
    let mut writer = HandlerWriter::new(handler.clone());
    assert!(write!(writer, "error[E1002]: ").is_ok());
    assert_eq!(handler.get_output(), "");
    assert!(writeln!(writer, "command `x` not found").is_ok());
    assert_eq!(handler.get_output(), "error[E1002]: command `x` not found\n");
}

#[test]
fn writer_flushes_partial_line() {
    let handler = buffer_handler();
    let mut writer = HandlerWriter::new(handler.clone());
    assert!(write!(writer, "a\nb").is_ok());
    assert!(writer.flush().is_ok());
    assert_eq!(handler.get_output(), "a\nb");
}

#[test]
fn writer_passes_on_handler_failures() {
    let handler = Arc::new(PrintHandlerImpl::Stream(StreamPrintHandler::new(ClosedPipe)));
    let mut writer = HandlerWriter::new(handler);
    assert!(writeln!(writer, "error[E9001]: gone").is_err());
}
