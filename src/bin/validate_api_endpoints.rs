use clap::Parser;
use log::info;
use std::{ io, path::PathBuf, process::ExitCode, time::Instant };
use weather_build_tools::{
    default_endpoints,
    utils::{ common::format_duration, http::build_client, logger::init_logger },
    validate_endpoints,
    validator::{ write_summary, REQUEST_TIMEOUT },
};

/// Validate that the weather APIs respond before deployment.
///
/// Unreachable endpoints are reported but never fail the build.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Also write the results to a CSV file
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    init_logger(cli.verbose)?;
    let start_time = Instant::now();

    let client = build_client(REQUEST_TIMEOUT)?;
    let mut stdout = io::stdout();
    let report = validate_endpoints(&client, &default_endpoints(), &mut stdout).await?;
    write_summary(&mut stdout, report.all_reachable())?;

    if let Some(path) = &cli.report {
        report.write_csv(path)?;
        info!("Report written to {}", path.display());
    }

    let (elapsed_time, unit) = format_duration(start_time.elapsed());
    info!("Done in {:.2} {}", elapsed_time, unit);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    // 接口不可用只是警告，只有内部错误才返回非0
    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
