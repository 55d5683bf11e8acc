//! Model package schema CLI
//!
//! Command-line interface for validating model package manifests.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use modelpack_schema::{supported_media_types, ValidateError, Validator};

#[derive(Parser)]
#[command(name = "modelpack-schema")]
#[command(about = "Validate model package manifests against their schemas")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a manifest against the rules for a media type
    Validate {
        /// Manifest file to validate, or "-" for stdin
        file: PathBuf,

        /// Media type selecting the schema and semantic rules
        #[arg(long, short)]
        media_type: String,

        /// Output the result as JSON (for automation)
        #[arg(long)]
        json: bool,
    },

    /// List the supported media types
    MediaTypes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate {
            file,
            media_type,
            json,
        } => run_validate(&file, &media_type, json),

        Commands::MediaTypes => {
            for media_type in supported_media_types() {
                println!("{media_type}");
            }
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run_validate(file: &Path, media_type: &str, json_output: bool) -> Result<(), u8> {
    let validator = Validator::new(media_type);

    let result = if file.as_os_str() == "-" {
        validator.validate(std::io::stdin().lock())
    } else {
        match File::open(file) {
            Ok(f) => validator.validate(f),
            Err(source) => Err(ValidateError::ReadInput { source }),
        }
    };

    match result {
        Ok(()) => {
            if json_output {
                println!(r#"{{"valid":true}}"#);
            } else {
                println!("Valid");
            }
            Ok(())
        }
        Err(err) => {
            if json_output {
                let output = serde_json::json!({
                    "valid": false,
                    "error": err.to_string(),
                    "internal": err.is_internal(),
                });
                println!("{output}");
            } else {
                eprintln!("Error: {err}");
            }
            Err(err.exit_code() as u8)
        }
    }
}
