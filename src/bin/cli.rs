// src/bin/cli.rs
use valtti_cms::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
