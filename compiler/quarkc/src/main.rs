//! Quark CLI

use quark_eval::stdout_handler;
use quarkc::commands::{check_file, lex_file, method_doc, method_listing, run_file};
use quarkc::{init_tracing, CliError, Repl, RunConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map_or("repl", String::as_str);

    let outcome = match command {
        "repl" => run_repl(),
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: quark run <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --max-steps=<n>     Stop after n steps");
                eprintln!("  --timeout-ms=<n>    Stop after n milliseconds");
                eprintln!("  --heap-limit=<n>    Maximum heap length in slots (always on, default 1048576)");
                std::process::exit(1);
            }
            RunConfig::parse(&args[2..])
                .and_then(|config| run_file(&config, stdout_handler()).map(|_| ()))
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: quark check <file>");
                std::process::exit(1);
            }
            check_file(&args[2]).map(|report| println!("{report}"))
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: quark lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]).map(|tokens| print!("{tokens}"))
        }
        "methods" => {
            println!("{}", method_listing());
            Ok(())
        }
        "doc" => {
            if args.len() < 3 {
                eprintln!("Usage: quark doc <method>");
                std::process::exit(1);
            }
            method_doc(&args[2]).map(|doc| println!("{doc}"))
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-v" => {
            println!("Quark {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = outcome {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run_repl() -> Result<(), CliError> {
    let mut repl = Repl::new(stdout_handler());
    let stdin = std::io::stdin();
    repl.run(stdin.lock(), std::io::stdout())
        .map_err(|source| CliError::Io {
            path: "<stdin>".into(),
            source,
        })
}

fn print_usage() {
    println!("Quark");
    println!();
    println!("Usage: quark [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                Start the interactive shell (default)");
    println!("  run <file>          Execute a Quark program");
    println!("  check <file>        Resolve a program without running it");
    println!("  lex <file>          Show the classified tokens of each line");
    println!("  methods             List the stock methods");
    println!("  doc <method>        Show the documentation of a method");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Run options:");
    println!("  --max-steps=<n>     Stop after n steps");
    println!("  --timeout-ms=<n>    Stop after n milliseconds");
    println!("  --heap-limit=<n>    Maximum heap length in slots (always on, default 1048576)");
    println!();
    println!("Examples:");
    println!("  quark run countdown.qk");
    println!("  quark run loop.qk --max-steps=10000");
    println!("  quark doc goto");
    println!("  RUST_LOG=quark_eval=trace quark run countdown.qk");
}
