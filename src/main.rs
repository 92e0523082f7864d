use anyhow::Result;
use clap::{Parser, Subcommand};
use petlens::app::App;
use petlens::models::Species;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "petlens")]
#[command(about = "Pet breed recognition and image generation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Describe an uploaded dog or cat photo (breed, characteristics,
    /// temperament, care requirements)
    Describe {
        /// Path to a JPEG or PNG image of a dog or cat
        #[arg(value_name = "IMAGE")]
        image: PathBuf,
    },
    /// Validate a breed name and generate an image of that breed
    Generate {
        /// Pet type the breed belongs to
        #[arg(value_enum)]
        species: Species,
        /// Breed name to look up, for example "Beagle"
        breed: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "petlens=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting petlens");

    let cli = Cli::parse();

    let app = match App::new() {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Describe { image } => app.describe(&image).await,
        Command::Generate { species, breed } => app.generate(species, &breed).await,
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Command failed: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn test_parse_describe_command() {
        let cli = Cli::parse_from(["petlens", "describe", "photo.png"]);
        match cli.command {
            super::Command::Describe { image } => {
                assert_eq!(image.to_string_lossy(), "photo.png");
            }
            _ => panic!("expected describe command"),
        }
    }

    #[test]
    fn test_parse_generate_command() {
        let cli = Cli::parse_from(["petlens", "generate", "dog", "Beagle"]);
        match cli.command {
            super::Command::Generate { species, breed } => {
                assert_eq!(species, petlens::models::Species::Dog);
                assert_eq!(breed, "Beagle");
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_rejects_unknown_species() {
        assert!(Cli::try_parse_from(["petlens", "generate", "bird", "Parrot"]).is_err());
    }
}
