//! plait CLI
//!
//! Check JSON files and try individual grammar rules on text.

use plait::commands::{check_files, match_text, parse_match_args};
use plait::report::{render_file_report, render_outcome};

fn main() {
    plait::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: plait check <file>...");
                std::process::exit(1);
            }
            let reports = match check_files(&args[2..]) {
                Ok(reports) => reports,
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            };
            let mut failed = false;
            for report in &reports {
                if report.verdict.is_accepted() {
                    println!("{}", render_file_report(report));
                } else {
                    failed = true;
                    eprintln!("{}", render_file_report(report));
                }
            }
            if failed {
                std::process::exit(1);
            }
        }
        "match" => {
            let (options, text) = match parse_match_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!("Usage: plait match [--rule=<rule>] [--literals] [--strict] <text>");
                    std::process::exit(1);
                }
            };
            match match_text(&text, options) {
                Ok(outcome) => {
                    println!("{}", render_outcome(&outcome));
                    if outcome.is_rejected() {
                        std::process::exit(1);
                    }
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("plait {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("plait: parser combinators and a JSON recognizer");
    println!();
    println!("Usage: plait <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file>...      Check that each file is one JSON document");
    println!("  match <text>         Run a JSON grammar rule on text");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Match options:");
    println!("  --rule=<rule>        value (default), object, array, string, number, whitespace");
    println!("  --literals           Accept true, false and null");
    println!("  --strict             Require the whole text to be consumed");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=<filter>    Enable tracing output (e.g. RUST_LOG=plait_comb=trace)");
    println!("  PLAIT_LOG_TREE=1     Indent trace output by rule nesting");
    println!();
    println!("Examples:");
    println!("  plait check config.json data/*.json");
    println!("  plait match '[1, 2, 3] tail'");
    println!("  plait match --rule=number --strict -- -0.5e3");
}
