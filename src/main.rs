use clap::Parser;
use log::error;
use menu_import::{import_dishes, ImportConfig, ImportError};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "menu-dishes", version, about = "Convert a dish table to menu JSON")]
struct Cli {
    /// Dish table (CSV, delimiter detected); defaults to dishes.csv
    input: Option<PathBuf>,

    /// Output JSON file; defaults to dishes.json
    output: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<(), ImportError> {
    let config = ImportConfig::load()?;
    let input = cli.input.unwrap_or_else(|| PathBuf::from(&config.dishes_input));
    let output = cli.output.unwrap_or_else(|| PathBuf::from(&config.dishes_output));

    let count = import_dishes(&input, &output, &config)?;
    println!("Wrote {} dishes to {}", count, output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Dish import failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
