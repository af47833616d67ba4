//! C3 linearization CLI.
//!
//! Reads class hierarchy files and prints method resolution orders.

use std::io;

use mroc::commands::{
    check_command, explain_command, linearize_command, parse_options, read_file,
};

fn main() {
    mroc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "linearize" => {
            let (options, positional) = options_or_exit(&args[2..]);
            if positional.len() < 2 {
                eprintln!("Usage: mroc linearize <file> <type>... [options]");
                eprintln!("Example: mroc linearize shapes.txt Circle 'Shape[]' int");
                std::process::exit(1);
            }
            let path = &positional[0];
            let source = read_file(path);
            let ok = linearize_command(
                path,
                &source,
                &positional[1..],
                &options,
                &mut io::stdout().lock(),
                io::stderr(),
            );
            if !ok {
                std::process::exit(1);
            }
        }
        "check" => {
            let (options, positional) = options_or_exit(&args[2..]);
            let [path] = positional.as_slice() else {
                eprintln!("Usage: mroc check <file> [options]");
                std::process::exit(1);
            };
            let source = read_file(path);
            let ok = check_command(
                path,
                &source,
                &options,
                &mut io::stdout().lock(),
                io::stderr(),
            );
            if !ok {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("mroc {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: mroc --explain <ERROR_CODE>");
                eprintln!("Example: mroc --explain E0001");
                std::process::exit(1);
            }
            if !explain_command(&args[2], &mut io::stdout().lock(), &mut io::stderr()) {
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn options_or_exit(args: &[String]) -> (mroc::commands::CommandOptions, Vec<String>) {
    match parse_options(args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("mroc: C3 method resolution order for class hierarchies");
    println!();
    println!("Usage: mroc <command> [options]");
    println!();
    println!("Commands:");
    println!("  linearize <file> <type>...  Print the linearization of each type");
    println!("  check <file>                Linearize every declared type");
    println!("  --explain <code>            Explain a diagnostic code (e.g., E0001)");
    println!("  help                        Show this help message");
    println!("  version                     Show version information");
    println!();
    println!("Options:");
    println!("  --policy=<name>     superclass-first (default), interfaces-first, interfaces-only");
    println!("  --format=<name>     text (default), json");
    println!("  --color=<mode>      auto (default), always, never");
    println!("  --max-depth=<n>     Ancestor chain limit (default: 4096)");
    println!();
    println!("Hierarchy file:");
    println!("  interface Collection extends Iterable");
    println!("  class AbstractSet extends AbstractCollection implements Set");
    println!("  # comments run to the end of the line");
    println!();
    println!("Types may be class or interface names, primitives (int, boolean, ...),");
    println!("or arrays of either (String[], int[][]).");
    println!();
    println!("Examples:");
    println!("  mroc linearize lib.txt HashSet");
    println!("  mroc linearize lib.txt 'Object[][]' --format=json");
    println!("  mroc check lib.txt --policy=interfaces-first");
    println!("  mroc --explain E0001");
    println!("  RUST_LOG=debug mroc check lib.txt   # trace linearization");
}
