pub mod check;
pub mod generate;
pub mod kinds;
pub mod workspace_loader;


/// Report `err` on stderr and exit with status 1.
pub fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
