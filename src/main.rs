fn main() {
    // Collector/formatter errors already carry their user-facing message.
    if let Err(err) = ccat::cli::run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
