use anyhow::Context;
use clap::Parser;
use persona_intro::utils::{error::exit_code_of, logger};
use persona_intro::{CliConfig, Composite, ConsoleAgeHolder, ConsoleGreeter};

type ConsolePersona = Composite<ConsoleGreeter, ConsoleAgeHolder>;

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let persona = config
        .resolve_persona()
        .context("failed to resolve persona")?;
    tracing::info!("Building persona {:?} aged {}", persona.name, persona.age);

    let composite =
        ConsolePersona::from_persona(&persona).context("failed to build persona")?;
    composite
        .introduce_times(config.repeat)
        .context("introduction failed")?;

    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting persona-intro");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        let exit_code = exit_code_of(&e);
        tracing::error!("{:#} (exit code {})", e, exit_code);
        eprintln!("error: {:#}", e);
        std::process::exit(exit_code);
    }
}
