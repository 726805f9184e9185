//! htmlaskama scanner CLI
//!
//! Drives the external scanner over a template file and prints the tokens.

mod commands;

use commands::{init_tracing, list_kinds, parse_kinds, scan_file, ScanOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "scan" => {
            let mut options = ScanOptions::default();
            let mut path = None;

            for arg in args.iter().skip(2) {
                if let Some(list) = arg.strip_prefix("--kinds=") {
                    match parse_kinds(list) {
                        Ok(kinds) => options.requested = kinds,
                        Err(e) => {
                            eprintln!("error: {e}");
                            std::process::exit(1);
                        }
                    }
                } else if arg == "--once" {
                    options.once = true;
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    std::process::exit(1);
                }
            }

            let Some(path) = path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: htmlaskama scan <file> [--kinds=<list>] [--once]");
                std::process::exit(1);
            };

            scan_file(path, &options);
        }
        "kinds" => list_kinds(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command '{other}'");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("htmlaskama - external scanner inspection tool");
    println!();
    println!("Usage: htmlaskama <command> [options]");
    println!();
    println!("Commands:");
    println!("  scan <file>    Scan a template and print the tokens");
    println!("  kinds          List token kinds in priority order");
    println!("  help           Show this message");
    println!();
    println!("Scan options:");
    println!("  --kinds=<list> Comma-separated kinds to request (default: all)");
    println!("                 comment, content, macro-arg, statement, expression");
    println!("  --once         Run a single scan instead of scanning repeatedly");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=htmlaskama_scanner=trace) for scanner traces.");
}
