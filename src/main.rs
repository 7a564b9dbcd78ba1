//! Profile extractor: structured profile data from exported profile documents

use clap::Parser;
use log::{error, info};
use profile_extractor::cli::{self, Cli, Commands, ConfigAction};
use profile_extractor::config::Config;
use profile_extractor::error::{ProfileExtractorError, Result};
use profile_extractor::input::manager::InputManager;
use profile_extractor::output;
use profile_extractor::parser::ProfileParser;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Extract { file, output: format, save } => {
            info!("Extracting profile from {}", file.display());

            cli::validate_file_extension(&file, &["pdf", "txt", "md"])
                .map_err(ProfileExtractorError::InvalidInput)?;

            let output_format =
                cli::parse_output_format(&format).map_err(ProfileExtractorError::InvalidInput)?;

            let mut input_manager = InputManager::new().with_cache(config.input.enable_caching);
            let text = input_manager.extract_text(&file).await?;
            info!("Extracted {} characters of text", text.len());

            let profile = ProfileParser::new().parse(&text);
            info!("Parse finished with confidence {}/4", profile.confidence);

            let rendered = output::format_profile(
                &profile,
                &output_format,
                config.output.color_output,
                config.output.pretty_json,
            )?;

            match save {
                Some(path) => {
                    std::fs::write(&path, &rendered)?;
                    println!("Saved output to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            Ok(())
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Reset) => {
                let config = Config::default();
                config.save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ProfileExtractorError::Configuration(format!(
                        "Failed to serialize config: {}",
                        e
                    ))
                })?;
                println!("{}", content);
                Ok(())
            }
        },
    }
}
