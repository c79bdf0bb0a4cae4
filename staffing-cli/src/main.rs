//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = staffing_cli::run() {
        eprintln!("staffing: {err}");
        std::process::exit(1);
    }
}
