//! agentry: configuration column tool.
//!
//! Decodes raw column content into its typed record, encodes a typed record
//! into the bytes a column would hold, coerces loose documents into
//! generation parameters, and prints plan quotas.
//!
//! Usage:
//!   agentry decode llm-config --file config.bin
//!   agentry decode connector --null
//!   echo '{"maxTokens":0}' | agentry encode llm-config
//!   agentry coerce --file model_parameters.json
//!   agentry tool-schema --file parameters_schema.json
//!   agentry plan pro --catalog config/plans.toml

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use agentry_codec::{ColumnCodec, FromDocument};
use agentry_contracts::{
    error::{ModelError, ModelResult},
    Document, GenerationParams, LlmConfig, ParametersSchema, ToolConnectorConfig,
};
use agentry_entities::SubscriptionPlan;
use agentry_plans::PlanCatalog;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Inspect and convert agentry configuration columns.
#[derive(Parser)]
#[command(name = "agentry", about = "agentry configuration column tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode raw column content and print the typed record as JSON.
    Decode {
        record: Record,
        #[command(flatten)]
        input: ColumnInput,
    },
    /// Encode a JSON record and print the column content, or NULL.
    Encode {
        record: Record,
        #[command(flatten)]
        input: Input,
    },
    /// Coerce a loose document into generation parameters.
    Coerce {
        #[command(flatten)]
        input: ColumnInput,
    },
    /// Render a stored tool parameter schema as JSON Schema.
    ToolSchema {
        #[command(flatten)]
        input: ColumnInput,
    },
    /// Print the quotas of a subscription plan.
    Plan {
        /// free, basic, pro or enterprise.
        plan: String,
        /// TOML catalog to apply over the built-in quotas.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// The configuration records that live in their own column.
#[derive(Clone, Copy, ValueEnum)]
enum Record {
    LlmConfig,
    Connector,
    ParametersSchema,
    Document,
}

#[derive(Args)]
struct Input {
    /// Read from this file instead of stdin.
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Args)]
struct ColumnInput {
    /// Treat the column as SQL NULL instead of reading any input.
    #[arg(long, conflicts_with = "file")]
    null: bool,
    #[command(flatten)]
    source: Input,
}

impl Input {
    fn read(&self) -> ModelResult<Vec<u8>> {
        match &self.file {
            Some(path) => read_file(path),
            None => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .map_err(|e| ModelError::ConfigError {
                        reason: format!("failed to read stdin: {}", e),
                    })?;
                Ok(buf)
            }
        }
    }
}

impl ColumnInput {
    fn read(&self) -> ModelResult<Option<Vec<u8>>> {
        if self.null {
            return Ok(None);
        }
        self.source.read().map(Some)
    }
}

fn read_file(path: &Path) -> ModelResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| ModelError::ConfigError {
        reason: format!("failed to read '{}': {}", path.display(), e),
    })
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see codec decisions.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> ModelResult<()> {
    match command {
        Command::Decode { record, input } => {
            let raw = input.read()?;
            let rendered = match record {
                Record::LlmConfig => decode_as::<LlmConfig>(raw.as_deref())?,
                Record::Connector => decode_as::<Option<ToolConnectorConfig>>(raw.as_deref())?,
                Record::ParametersSchema => decode_as::<ParametersSchema>(raw.as_deref())?,
                Record::Document => decode_as::<Document>(raw.as_deref())?,
            };
            println!("{}", rendered);
        }
        Command::Encode { record, input } => {
            let json = input.read()?;
            let column = match record {
                Record::LlmConfig => encode_as::<LlmConfig>(&json)?,
                Record::Connector => encode_as::<Option<ToolConnectorConfig>>(&json)?,
                Record::ParametersSchema => encode_as::<ParametersSchema>(&json)?,
                Record::Document => encode_as::<Document>(&json)?,
            };
            match column {
                Some(bytes) => println!("{}", String::from_utf8_lossy(&bytes)),
                None => println!("NULL"),
            }
        }
        Command::Coerce { input } => {
            let raw = input.read()?;
            let doc = Document::decode_column(raw.as_deref())?;
            let (params, warnings) = GenerationParams::from_document_with_warnings(&doc);
            for warning in &warnings {
                eprintln!("warning: {}", warning);
            }
            println!("{}", to_pretty(&params)?);
        }
        Command::ToolSchema { input } => {
            let raw = input.read()?;
            let schema = ParametersSchema::decode_column(raw.as_deref())?;
            println!("{}", to_pretty(&schema.to_json_schema())?);
        }
        Command::Plan { plan, catalog } => {
            let plan = SubscriptionPlan::parse(&plan).ok_or_else(|| ModelError::ConfigError {
                reason: format!("unknown subscription plan '{}'", plan),
            })?;
            let catalog = match catalog {
                Some(path) => PlanCatalog::from_file(&path)?,
                None => PlanCatalog::builtin(),
            };
            println!("{}", to_pretty(&catalog.limits(plan))?);
        }
    }
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn decode_as<T: ColumnCodec + Serialize>(raw: Option<&[u8]>) -> ModelResult<String> {
    debug!(record = T::TARGET, null = raw.is_none(), "decoding column");
    let value = T::decode_column(raw)?;
    to_pretty(&value)
}

fn encode_as<T: ColumnCodec + DeserializeOwned>(json: &[u8]) -> ModelResult<Option<Vec<u8>>> {
    let value: T =
        serde_json::from_slice(json).map_err(|e| ModelError::malformed(T::TARGET, e, json))?;
    value.encode_column()
}

fn to_pretty<T: Serialize>(value: &T) -> ModelResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| ModelError::EncodeFailed {
        target: "output",
        reason: e.to_string(),
    })
}
