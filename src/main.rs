use std::process;

fn main() {
    if let Err(e) = rote::cli::run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
