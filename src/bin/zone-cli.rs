use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::Value;

use citylink_zones::config::{load_zone_table, ConfigError};
use citylink_zones::http::{ClassifyResponse, ZoneView};
use citylink_zones::{ZoneClassifier, ZoneTable};

#[derive(Parser)]
#[command(name = "zone-cli")]
#[command(about = "Look up CityLink delivery zones for UK postcodes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one or more postcodes locally
    Classify {
        /// Postcodes in any casing or spacing (quote those containing spaces)
        #[arg(required = true)]
        postcodes: Vec<String>,

        /// Zone table file (TOML); defaults to the built-in table
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Show the matching pattern and region
        #[arg(short, long)]
        explain: bool,
    },
    /// Print the zone table as JSON
    Table {
        #[arg(short, long)]
        table: Option<PathBuf>,
    },
    /// Validate a zone table file
    Check { file: PathBuf },
    /// Query a running zone-server
    Remote {
        postcode: String,

        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            postcodes,
            table,
            explain,
        } => {
            let classifier = ZoneClassifier::new(open_table(table.as_deref())?);
            for postcode in postcodes {
                if explain {
                    let response = ClassifyResponse::new(&postcode, classifier.explain(&postcode));
                    println!("{}", serde_json::to_string(&response)?);
                } else {
                    println!("{}\t{}", postcode, classifier.classify(&postcode));
                }
            }
        }
        Commands::Table { table } => {
            let table = open_table(table.as_deref())?;
            let views: Vec<ZoneView> = table.entries().iter().map(ZoneView::from).collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        Commands::Check { file } => match load_zone_table(&file) {
            Ok(table) => {
                println!(
                    "{}: ok ({} zones, {} patterns)",
                    file.display(),
                    table.len(),
                    table.pattern_count()
                );
                for (earlier, later) in table.shadowed_patterns() {
                    println!(
                        "warning: '{}' is shadowed by earlier pattern '{}'",
                        later.declared(),
                        earlier.declared()
                    );
                }
            }
            Err(ConfigError::Validation(errors)) => {
                for error in errors {
                    eprintln!("{}: {}", file.display(), error);
                }
                return Ok(ExitCode::FAILURE);
            }
            Err(e) => {
                eprintln!("{}: {}", file.display(), e);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Remote { postcode, url } => {
            let client = reqwest::Client::new();
            let res = client
                .get(format!("{}/zones/{}", url.trim_end_matches('/'), postcode))
                .send()
                .await?;
            return print_response(res).await;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn open_table(path: Option<&Path>) -> Result<Arc<ZoneTable>, ConfigError> {
    match path {
        Some(path) => load_zone_table(path).map(Arc::new),
        None => Ok(ZoneTable::citylink()),
    }
}

async fn print_response(res: reqwest::Response) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: zone-server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(ExitCode::FAILURE);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(ExitCode::SUCCESS)
}
