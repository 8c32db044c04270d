fn main() {
    if let Err(error) = gpxrte::run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
