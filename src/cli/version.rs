/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn handle_version_command() -> ! {
    println!("paydesk {}", VERSION);
    std::process::exit(0)
}
