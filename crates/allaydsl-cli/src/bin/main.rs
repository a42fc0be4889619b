//! allaydsl binary entry point

fn main() {
    if let Err(e) = allaydsl_cli::run_cli() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
