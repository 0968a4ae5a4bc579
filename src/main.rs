use clap::Parser;
use flipp::utils::{logger, validation::Validate};
use flipp::{CliConfig, Greeter, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = CliConfig::parse();

    let config = cli.load_toml()?;
    config.validate()?;

    logger::init_cli_logger(cli.verbose, &config.logging)?;
    tracing::debug!("CLI config: {:?}", cli);

    let stdout = std::io::stdout();
    Greeter::default().greet(&mut stdout.lock())?;

    tracing::debug!("done");
    Ok(())
}
