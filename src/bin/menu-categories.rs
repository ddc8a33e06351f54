use clap::Parser;
use log::error;
use menu_import::import_categories;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "menu-categories", version, about = "Convert a category table to menu JSON")]
struct Cli {
    /// Category table (comma-delimited) with columns id, order, ka, en, ru
    input: PathBuf,

    /// Output JSON file
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match import_categories(&cli.input, &cli.output) {
        Ok(count) => {
            println!("Wrote {} categories to {}", count, cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Category import failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
