use super::*;
use crate::{ErrorCode, Location};
use pretty_assertions::assert_eq;

fn render(diag: &Diagnostic, mode: ColorMode, verbose: bool) -> String {
    let mut out = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut out, mode, false).verbose(verbose);
    assert!(emitter.emit(diag).is_ok());
    assert!(emitter.flush().is_ok());
    String::from_utf8(out).unwrap_or_default()
}

/// Accepts `room` bytes, then fails like a closed pipe.
struct ShortWriter {
    room: usize,
}

impl Write for ShortWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.room == 0 {
            return Err(io::ErrorKind::BrokenPipe.into());
        }
        let n = buf.len().min(self.room);
        self.room -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn emits_single_line() {
    let diag = Diagnostic::error(ErrorCode::E2001).with_message("resize expects 2..=100, got 150");
    assert_eq!(
        render(&diag, ColorMode::Never, false),
        "error[E2001]: resize expects 2..=100, got 150\n"
    );
}

#[test]
fn emits_location_suffix() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("`abc` is not a number")
        .with_location(Location::new("script.txt", 2));
    assert_eq!(
        render(&diag, ColorMode::Never, false),
        "error[E1001]: `abc` is not a number (at script.txt:2)\n"
    );
}

#[test]
fn hides_notes_unless_verbose() {
    let diag = Diagnostic::error(ErrorCode::E2003)
        .with_message("registry is full (4 of 4)")
        .with_suggestion("delete a function or resize");

    let quiet = render(&diag, ColorMode::Never, false);
    assert_eq!(quiet.lines().count(), 1);

    let loud = render(&diag, ColorMode::Never, true);
    assert_eq!(
        loud,
        "error[E2003]: registry is full (4 of 4)\n  = help: delete a function or resize\n"
    );
}

#[test]
fn colors_wrap_severity_only() {
    let diag = Diagnostic::error(ErrorCode::E4001).with_message("ln(-1) is undefined");
    let out = render(&diag, ColorMode::Always, false);
    assert!(out.starts_with("\x1b[1;31merror\x1b[0m[E4001]"));
    assert!(out.ends_with("ln(-1) is undefined\n"));
}

#[test]
fn auto_mode_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn warnings_use_their_own_color() {
    let diag = Diagnostic::warning(ErrorCode::E1003).with_message("stopped reading `a.txt`");
    let out = render(&diag, ColorMode::Always, false);
    assert!(out.starts_with("\x1b[1;33mwarning\x1b[0m[E1003]"));
}

#[test]
fn write_failures_are_returned() {
    let diag = Diagnostic::error(ErrorCode::E1002).with_message("command `x` not found");
    for room in [0, 3, 20] {
        let mut emitter =
            TerminalEmitter::with_color_mode(ShortWriter { room }, ColorMode::Never, false);
        assert!(
            matches!(emitter.emit(&diag), Err(e) if e.kind() == io::ErrorKind::BrokenPipe),
            "room {room}"
        );
    }
}
