use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use api_shared::MedicalForm;
use clap::{Parser, Subcommand};
use intake_core::{Collection, CoreConfig, FileRecordStore, Outcome, PatientCrud};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "Medical intake record store CLI")]
struct Cli {
    /// Record data directory (defaults to $RECORD_DATA_DIR, then "record_data")
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a patient by stored id
    GetPatient {
        /// Patient id
        id: String,
    },
    /// Find a patient by business identifier
    FindPatient {
        /// Identifier system
        system: String,
        /// Identifier value
        value: String,
    },
    /// Store a patient from a JSON file
    WritePatient {
        /// Path to a JSON object
        file: PathBuf,
    },
    /// Validate an intake form JSON file and store it as a clinical procedure
    SubmitForm {
        /// Path to the form JSON
        file: PathBuf,
    },
    /// List stored ids in a collection
    List {
        /// One of: patients, service-requests, appointments, clinical-procedures
        collection: Collection,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'intake --help' for commands");
        return ExitCode::SUCCESS;
    };

    let data_dir = cli
        .data_dir
        .map(|p| p.to_string_lossy().into_owned())
        .or_else(|| std::env::var("RECORD_DATA_DIR").ok());
    let store = match CoreConfig::from_env_value(data_dir) {
        Ok(cfg) => FileRecordStore::new(Arc::new(cfg)),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&store, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(store: &FileRecordStore, command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::GetPatient { id } => print_read(store.get_patient_by_id(&id)),
        Commands::FindPatient { system, value } => {
            print_read(store.get_patient_by_identifier(&system, &value))
        }
        Commands::WritePatient { file } => {
            let patient = match read_json(&file)? {
                Value::Object(map) => map,
                _ => return Err("patient file must contain a JSON object".into()),
            };
            print_written("patient", store.write_patient(patient))
        }
        Commands::SubmitForm { file } => {
            let form: MedicalForm = serde_json::from_value(read_json(&file)?)?;
            print_written("form", store.write_clinical_procedure(form.to_document()?))
        }
        Commands::List { collection } => {
            let ids = store.list(collection);
            if ids.is_empty() {
                println!("No {} found.", collection);
            }
            for id in ids {
                println!("{}", id);
            }
            Ok(())
        }
    }
}

fn read_json(file: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(file)?;
    Ok(serde_json::from_str(&contents)?)
}

fn print_read(outcome: Outcome<Value>) -> Result<(), Box<dyn std::error::Error>> {
    match outcome {
        Outcome::Success(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Outcome::NotFound => Err("not found".into()),
        Outcome::Failure(status) => Err(format!("internal error: {}", status).into()),
    }
}

fn print_written(kind: &str, outcome: Outcome<String>) -> Result<(), Box<dyn std::error::Error>> {
    match outcome {
        Outcome::Success(id) => {
            println!("Stored {} with id: {}", kind, id);
            Ok(())
        }
        other => Err(format!("failed to store {}: {}", kind, other.status()).into()),
    }
}
