//! Function calculator CLI.

use fcalc::commands::{explain_error, run_session, SessionOptions};
use fcalc_diagnostic::emitter::ColorMode;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("help" | "--help" | "-h") => {
            print_usage();
            return;
        }
        Some("version" | "--version" | "-V") => {
            println!("fcalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Some("--explain" | "explain") => {
            let Some(code) = args.get(2) else {
                eprintln!("Usage: fcalc --explain <ERROR_CODE>");
                eprintln!("Example: fcalc --explain E2002");
                std::process::exit(1);
            };
            explain_error(code);
            return;
        }
        _ => {}
    }

    let mut options = SessionOptions::default();
    let mut log_tree = false;
    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--capacity" | "--script" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("error: {arg} needs a value");
                    std::process::exit(1);
                };
                if arg == "--script" {
                    options.script = Some(value.clone());
                } else {
                    options.capacity = Some(parse_capacity(value));
                }
                i += 2;
                continue;
            }
            "--verbose" | "-v" => options.verbose = true,
            "--log-tree" => log_tree = true,
            "--color=always" => options.color = ColorMode::Always,
            "--color=never" => options.color = ColorMode::Never,
            "--color=auto" => options.color = ColorMode::Auto,
            _ => {
                if let Some(value) = arg.strip_prefix("--capacity=") {
                    options.capacity = Some(parse_capacity(value));
                } else if let Some(value) = arg.strip_prefix("--script=") {
                    options.script = Some(value.to_string());
                } else {
                    eprintln!("Unknown option: {arg}");
                    eprintln!();
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    fcalc::init_tracing(log_tree);

    if let Err(err) = run_session(&options) {
        eprintln!("{}", err.to_diagnostic());
        std::process::exit(1);
    }
}

fn parse_capacity(value: &str) -> usize {
    value.parse().unwrap_or_else(|_| {
        eprintln!("error: --capacity expects a whole number, got `{value}`");
        std::process::exit(1);
    })
}

fn print_usage() {
    println!("fcalc - interactive function calculator");
    println!();
    println!("Usage: fcalc [options]");
    println!("       fcalc --explain <code>");
    println!();
    println!("Options:");
    println!("  --capacity <n>       Start with room for n functions (2-100), no prompt");
    println!("  --script <path>      Run the commands in <path> before reading input");
    println!("  --verbose, -v        Show notes and hints under error messages");
    println!("  --color=<when>       Color error messages: auto, always, never");
    println!("  --log-tree           Print RUST_LOG output as an indented tree");
    println!("  --explain <code>     Explain an error code (e.g., E2002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Commands inside a session: type `help` at the prompt.");
    println!();
    println!("Examples:");
    println!("  fcalc");
    println!("  fcalc --capacity 10 --script setup.txt");
    println!("  RUST_LOG=fcalc_eval=debug fcalc --log-tree");
    println!("  fcalc --explain E2003");
}
