use clap::Parser;
use log::info;
use std::{ path::PathBuf, process::ExitCode, time::Instant };
use weather_build_tools::{
    generate,
    generator::DEFAULT_OUTPUT_PATH,
    major_cities,
    utils::{ common::format_duration, files::read_city_records, logger::init_logger },
};

/// Generate pre-processed city data for faster autocomplete.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Where to write the lookup file
    #[arg(short, long, env = "CITY_DATA_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// JSON array of raw city records to use instead of the built-in list
    #[arg(short, long, env = "CITY_DATA_INPUT")]
    input: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    init_logger(cli.verbose)?;
    let start_time = Instant::now();

    let records = match &cli.input {
        Some(path) => {
            let records = read_city_records(path)?;
            info!("Loaded {} city records from {}", records.len(), path.display());
            records
        }
        None => major_cities(),
    };

    let count = generate(&records, &cli.output)?;
    println!("Generated {} cities to {}", count, cli.output.display());

    let (elapsed_time, unit) = format_duration(start_time.elapsed());
    info!("Done in {:.2} {}", elapsed_time, unit);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
