//! Exact output of short sessions.

use std::io::Cursor;

use pretty_assertions::assert_eq;

use fcalc::commands::build_session;
use fcalc_eval::{buffer_handler, SessionState};

use crate::common::{options, run, run_with};

const LISTING_SEED: &str = "List of available gates:\n0.\tsin(x)\n1.\tln(x)\n\n";
const PROMPT: &str = "Enter command ('help' for the list of available commands): ";

#[test]
fn eval_sine_transcript() {
    let done = run_with(&options(None), "4\neval 0 3.14\nexit\n");
    let expected = format!(
        "please enter number of wanted functions: \n\
         {LISTING_SEED}{PROMPT}sin(3.14) = 0.00\n\
         \n\
         {LISTING_SEED}{PROMPT}Goodbye!\n"
    );
    assert_eq!(done.output, expected);
}

#[test]
fn invalid_command_transcript() {
    let done = run(5, "foo\n");
    let expected = format!(
        "\n{LISTING_SEED}{PROMPT}error[E1002]: command `foo` not found\n\
         \n{LISTING_SEED}{PROMPT}"
    );
    assert_eq!(done.output, expected);
    assert_eq!(done.interp.state(), SessionState::Exited);
}

#[test]
fn listing_shows_new_functions() {
    let done = run(5, "poly 3 -1 0 2\nlog 2 2\n");
    assert!(done
        .output
        .contains("2.\t2*x^2 - 1\n3.\tlog_2(2*x^2 - 1)\n\n"));
}

#[test]
fn resize_bounds_at_the_prompt() {
    let done = run(5, "resize 1\nresize 150\nresize 50\n");
    assert_eq!(done.count("E2001"), 2);
    assert_eq!(done.interp.registry().max_size(), Some(50));
}

#[test]
fn log_of_negative_values() {
    let done = run(5, "poly 1 -2\nlog 10 2\neval 3 1\n");
    assert!(done
        .output
        .contains("error[E4001]: log_10(-2) is undefined\n"));
}

#[test]
fn add_of_sine_and_ln() {
    let done = run(5, "add 0 1\neval 2 1\n");
    assert_eq!(done.functions()[2], "sin(x) + ln(x)");
    assert!(done.output.contains("sin(1.00) + ln(1.00) = 0.84\n"));
}

#[test]
fn comp_applies_second_operand_first() {
    let done = run(5, "poly 2 0 2\ncomp 2 0\ncomp 0 2\neval 3 1\neval 4 1\n");
    assert_eq!(done.functions()[3], "2*sin(x)");
    assert_eq!(done.functions()[4], "sin(2*x)");
    assert!(done.output.contains("2*sin(1.00) = 1.68\n"));
    assert!(done.output.contains("sin(2*1.00) = 0.91\n"));
}

#[test]
fn verbose_diagnostics_show_hints() {
    let mut opts = options(Some(5));
    opts.verbose = true;
    let done = run_with(&opts, "bogus\n");
    assert!(done
        .output
        .contains("  = help: type `help` for the list of available commands\n"));
}

#[test]
fn preset_capacity_out_of_bounds_is_rejected() {
    let print = fcalc_eval::buffer_handler();
    let result = fcalc::commands::build_session(
        &options(Some(500)),
        std::io::Cursor::new(String::new()),
        print,
    );
    assert!(matches!(
        result,
        Err(fcalc_eval::CalcError::Range { value: 500, .. })
    ));
}

#[test]
fn stray_bytes_do_not_end_the_session() {
    let print = buffer_handler();
    let mut interp = build_session(
        &options(Some(10)),
        Cursor::new(b"\xff\n eval 0 1\nexit\n".to_vec()),
        print.clone(),
    )
    .unwrap();
    interp.run().unwrap();
    let expected = format!(
        "\n{LISTING_SEED}{PROMPT}error[E1002]: command `\u{fffd}` not found\n\
         \n{LISTING_SEED}{PROMPT}sin(1.00) = 0.84\n\
         \n{LISTING_SEED}{PROMPT}Goodbye!\n"
    );
    assert_eq!(print.get_output(), expected);
    assert_eq!(interp.state(), SessionState::Exited);
}
