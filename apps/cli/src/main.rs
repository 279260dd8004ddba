mod logging;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use emr_api::{ConceptService, InMemoryConceptService};
use emr_editor::{ConceptEditor, PropertyEditor};
use emr_models::ConceptMapType;
use emr_validator::{ConceptMapTypeValidator, Validator, ValidatorConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "emr")]
#[command(about = "Concept dictionary lookup and validation tools", long_about = None)]
struct Cli {
    /// Log lookups and validation steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DataArgs {
    /// Concept dataset (JSON). Defaults to the bundled standard dataset
    #[arg(long, env = "EMR_DATA")]
    data: Option<PathBuf>,
}

impl DataArgs {
    fn load_service(&self) -> Result<Arc<InMemoryConceptService>> {
        let service = match &self.data {
            Some(path) => InMemoryConceptService::from_path(path)
                .with_context(|| format!("loading concept dataset {}", path.display()))?,
            None => InMemoryConceptService::standard(),
        };
        Ok(Arc::new(service))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a concept from its id or uuid
    Concept {
        /// Concept id or uuid, as it would arrive in a request parameter
        text: String,

        #[command(flatten)]
        data: DataArgs,
    },

    /// Validate a candidate concept map type
    ValidateMapType {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        retire_reason: Option<String>,

        /// Validate as an update of the map type with this uuid
        #[arg(long)]
        uuid: Option<String>,

        /// Validator configuration (YAML)
        #[arg(long, env = "EMR_VALIDATOR_CONFIG")]
        config: Option<PathBuf>,

        #[command(flatten)]
        data: DataArgs,
    },

    /// List concept map types
    MapTypes {
        #[arg(long)]
        include_retired: bool,

        #[command(flatten)]
        data: DataArgs,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Concept { text, data } => {
            let mut editor = ConceptEditor::new(data.load_service()?);
            editor.set_as_text(Some(&text))?;

            match editor.value() {
                Some(concept) => println!("{}", serde_json::to_string_pretty(concept)?),
                None => println!("null"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::ValidateMapType {
            name,
            description,
            retire_reason,
            uuid,
            config,
            data,
        } => {
            let config = match config {
                Some(path) => ValidatorConfig::from_path(&path)
                    .with_context(|| format!("loading validator config {}", path.display()))?,
                None => ValidatorConfig::default(),
            };
            let validator = ConceptMapTypeValidator::from_config(&config, data.load_service()?)?;

            let mut candidate = ConceptMapType::new();
            candidate.name = name;
            candidate.description = description;
            candidate.retire_reason = retire_reason;
            if let Some(uuid) = uuid {
                candidate.uuid = uuid;
            }

            let errors = validator.validate_object(&candidate, "mapType")?;
            println!("{}", serde_json::to_string_pretty(&errors.to_json())?);

            if errors.has_errors() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Commands::MapTypes {
            include_retired,
            data,
        } => {
            let map_types = data
                .load_service()?
                .get_all_concept_map_types(include_retired)?;
            println!("{}", serde_json::to_string_pretty(&map_types)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
