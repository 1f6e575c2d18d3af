use anyhow::Result;
use clap::Parser;
use console::style;
use log::info;
use photo_date_organize::cli::Cli;
use photo_date_organize::component::PhotoOrganizer;
use photo_date_organize::config::Config;
use photo_date_organize::init;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            info!("Program exited with error: {e:#}");
            eprintln!("{} {:#}", style("錯誤:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_cli(cli);
    PhotoOrganizer::new(config).run()?;
    Ok(())
}
