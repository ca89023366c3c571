use neon::frontend::{parse_module, check_module, new_scope};
use std::{env, fs, process::ExitCode};
use tracing_subscriber::EnvFilter;

/*
 * Type checks the declarations in a Neon source file.
 *
 * Usage: neonc <filename>
 * Set RUST_LOG (e.g. RUST_LOG=neon=trace) to log parser activity to stderr.
 */

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("You must supply a filename to execute.");
        return ExitCode::FAILURE;
    }

    if run(&args[1]) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run(filename: &str) -> bool {
    let source = match fs::read_to_string(filename) {
        Ok(source) => source,
        Err(err) => {
            println!("Unable to read '{}': {}", filename, err);
            return false;
        }
    };

    let module = match parse_module(&source, filename) {
        Ok(module) => module,
        Err(err) => {
            println!("{}", err);
            println!("Unable to parse '{}'", filename);
            return false;
        }
    };

    for diagnostic in module.diagnostics() {
        println!("{}", diagnostic);
    }

    let mut scope = new_scope();
    match check_module(&module, &mut scope) {
        Ok(()) => {
            println!("Program type checks.");
            true
        }
        Err(err) => {
            println!("{}", err);
            println!("Program failed type checking.");
            false
        }
    }
}
