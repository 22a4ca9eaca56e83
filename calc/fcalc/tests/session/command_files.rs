//! Sessions driven partly by command files.

use pretty_assertions::assert_eq;

use fcalc::commands::SessionOptions;
use fcalc_eval::SessionState;

use crate::common::{command_file, options, path_of, run, run_with};

#[test]
fn file_commands_build_functions() {
    let file = command_file("poly 3 1 2 3\n\nmul 0 2\ncomp 1 0\n");
    let done = run(10, &format!("read {}\n", path_of(&file)));
    assert_eq!(
        done.functions(),
        vec![
            "sin(x)",
            "ln(x)",
            "3*x^2 + 2*x + 1",
            "(sin(x)) * (3*x^2 + 2*x + 1)",
            "ln(sin(x))",
        ]
    );
    assert!(done.interp.active_file().is_none());
}

#[test]
fn short_line_asks_before_continuing() {
    let file = command_file("add 0\npoly 1 3\n");
    let done = run(10, &format!("read {}\n1\n", path_of(&file)));
    assert_eq!(done.count("E1003"), 1);
    assert!(done
        .output
        .contains("Continue reading the file ?\nEnter 1 to yes or 2 to no: "));
    assert_eq!(done.functions(), vec!["sin(x)", "ln(x)", "3"]);
}

#[test]
fn abandoning_the_file_returns_to_the_prompt() {
    let file = command_file("add 0\npoly 1 3\n");
    let done = run(10, &format!("read {}\n2\npoly 1 9\n", path_of(&file)));
    assert_eq!(done.functions(), vec!["sin(x)", "ln(x)", "9"]);
    let path = path_of(&file);
    assert!(done
        .output
        .contains(&format!("warning[E1003]: stopped reading `{path}` (at {path}:1)")));
}

#[test]
fn extra_tokens_are_an_argument_problem() {
    let file = command_file("help me\nexit now\n");
    let done = run(10, &format!("read {}\n1\n1\n", path_of(&file)));
    assert_eq!(done.count("E1003"), 2);
    assert!(!done.output.contains("The available commands are:"));
    assert!(!done.output.contains("Goodbye!"));
}

#[test]
fn nested_read_reports_and_continues() {
    let inner = command_file("poly 1 1\n");
    let outer = command_file(&format!("read {}\npoly 1 2\n", path_of(&inner)));
    let done = run(10, &format!("read {}\n", path_of(&outer)));
    assert_eq!(done.count("E3002"), 1);
    assert_eq!(done.functions(), vec!["sin(x)", "ln(x)", "2"]);
}

#[test]
fn unknown_words_in_files_do_not_prompt() {
    let file = command_file("frobnicate 1\npoly 1 5\n");
    let done = run(10, &format!("read {}\n", path_of(&file)));
    assert_eq!(done.count("E1002"), 1);
    assert!(!done.output.contains("Continue reading the file ?"));
    assert_eq!(done.functions().len(), 3);
}

#[test]
fn errors_name_file_and_line() {
    let file = command_file("\n\ndel 7\n");
    let done = run(10, &format!("read {}\n", path_of(&file)));
    let expected = format!("(at {}:3)", path_of(&file));
    assert!(done.output.contains(&expected));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.txt");
    let done = run(10, &format!("read {}\nexit\n", missing.display()));
    assert_eq!(done.count("E3001"), 1);
    assert_eq!(done.interp.state(), SessionState::Exited);
}

#[test]
fn script_option_runs_before_input() {
    let file = command_file("poly 1 6\ndel 0\n");
    let opts = SessionOptions {
        script: Some(path_of(&file)),
        ..options(Some(10))
    };
    let done = run_with(&opts, "eval 1 0\n");
    assert_eq!(done.functions(), vec!["ln(x)", "6"]);
    assert!(done.output.contains("6 = 6.00\n"));
}

#[test]
fn file_can_confirm_nothing_on_its_own() {
    // The shrink answer comes from the terminal, not the next file line.
    let file = command_file("resize 2\n1\n");
    let done = run(3, &format!("poly 1 4\nread {}\n2\n", path_of(&file)));
    assert_eq!(done.functions().len(), 3);
    assert_eq!(done.interp.registry().max_size(), Some(2));
    assert_eq!(done.count("E1002"), 1);
}
