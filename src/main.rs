mod config;
mod error;
mod library;
mod runtime;
mod session;
mod sort;
mod table;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()?;
    Ok(())
}
