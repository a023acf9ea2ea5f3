//! mysql-schema-diff CLI - compare canonical MySQL table schemas.

use clap::{Parser, Subcommand, ValueEnum};
use mysql_schema_diff::error::{EXIT_DRIFT, EXIT_QUERY_ERROR};
use mysql_schema_diff::{
    canonicalize, CompareEngine, CompareReport, Config, DatabaseConfig, MetadataSource,
    MysqlSource, SchemaError, SchemaNormalizer, TableStatus,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mysql-schema-diff")]
#[command(about = "Compare normalized MySQL table schemas across databases")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long, default_value = "schema-diff.yaml")]
    config: PathBuf,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error (RUST_LOG overrides)
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Source,
    Target,
}

#[derive(Subcommand)]
enum Commands {
    /// List base tables (views excluded) of one database
    Tables {
        /// Which configured database to read
        #[arg(long, value_enum, default_value = "source")]
        side: Side,
    },

    /// Print the canonical schema of a table
    Show {
        /// Table name
        table: String,

        /// Which configured database to read
        #[arg(long, value_enum, default_value = "source")]
        side: Side,
    },

    /// Compare every selected table between source and target
    Diff {
        /// Only compare tables matching this pattern (repeatable, `*` wildcard)
        #[arg(long = "table")]
        tables: Vec<String>,

        /// Skip tables matching this pattern (repeatable, `*` wildcard)
        #[arg(long)]
        exclude: Vec<String>,

        /// Exit successfully even when schemas differ
        #[arg(long)]
        no_fail: bool,
    },

    /// Test database connections
    HealthCheck,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<u8, SchemaError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format);

    let mut config = Config::load(&cli.config)?;
    info!("Loaded configuration from {:?}", cli.config);

    match cli.command {
        Commands::Tables { side } => {
            let source = connect(side_config(&config, side)).await?;
            let tables = source.base_tables().await?;

            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&tables)?);
            } else {
                for table in tables {
                    println!("{}", table.name);
                }
            }
            Ok(0)
        }

        Commands::Show { table, side } => {
            let normalizer = SchemaNormalizer::new(connect(side_config(&config, side)).await?);
            let Some(raw) = normalizer.raw_schema(&table).await? else {
                eprintln!("Table {} not found on [{}]", table, normalizer.dialect());
                return Ok(EXIT_QUERY_ERROR);
            };
            let schema = canonicalize(&raw.ddl, &raw.charset);

            if cli.output_json {
                let value = serde_json::json!({
                    "table": table,
                    "dialect": normalizer.dialect(),
                    "charset": raw.charset,
                    "schema": schema,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", schema);
            }
            Ok(0)
        }

        Commands::Diff {
            tables,
            exclude,
            no_fail,
        } => {
            // Apply overrides
            if !tables.is_empty() {
                config.tables = tables;
            }
            config.tables_ignore.extend(exclude);
            config.validate()?;

            let source = SchemaNormalizer::new(connect(&config.source).await?);
            let target = SchemaNormalizer::new(connect(&config.target).await?);

            let start = Instant::now();
            let report = CompareEngine::new(&source, &target)
                .with_filter(config.table_filter())
                .run()
                .await?;

            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
                println!("  Duration: {:.2}s", start.elapsed().as_secs_f64());
            }

            if report.has_drift() && !no_fail {
                Ok(EXIT_DRIFT)
            } else {
                Ok(0)
            }
        }

        Commands::HealthCheck => {
            let source = check_connection(&config.source).await;
            let target = check_connection(&config.target).await;
            let healthy = source.is_ok() && target.is_ok();

            if cli.output_json {
                let value = serde_json::json!({
                    "healthy": healthy,
                    "source": health_json(&config.source, &source),
                    "target": health_json(&config.target, &target),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("Health Check Results:");
                print_health(&config.source, &source);
                print_health(&config.target, &target);
                println!(
                    "\n  Overall: {}",
                    if healthy { "HEALTHY" } else { "UNHEALTHY" }
                );
            }

            match (source, target) {
                (Err(e), _) | (_, Err(e)) => Err(e),
                _ => Ok(0),
            }
        }
    }
}

fn side_config(config: &Config, side: Side) -> &DatabaseConfig {
    match side {
        Side::Source => &config.source,
        Side::Target => &config.target,
    }
}

async fn connect(db: &DatabaseConfig) -> Result<MysqlSource, SchemaError> {
    info!("Connecting to [{}] {}", db.label, db.redacted_dsn());
    MysqlSource::from_config(db).await
}

/// Connect, list tables once and close. Returns the latency in milliseconds.
async fn check_connection(db: &DatabaseConfig) -> Result<u64, SchemaError> {
    let start = Instant::now();
    let source = connect(db).await?;
    let result = source.list_tables().await;
    source.close().await;
    result.map(|_| start.elapsed().as_millis() as u64)
}

fn print_health(db: &DatabaseConfig, result: &Result<u64, SchemaError>) {
    match result {
        Ok(ms) => println!("  {}: OK ({}ms)", db.label, ms),
        Err(e) => {
            println!("  {}: FAILED", db.label);
            println!("    Error: {}", e);
        }
    }
}

fn health_json(db: &DatabaseConfig, result: &Result<u64, SchemaError>) -> serde_json::Value {
    match result {
        Ok(ms) => serde_json::json!({ "label": db.label, "connected": true, "latency_ms": ms }),
        Err(e) => serde_json::json!({ "label": db.label, "connected": false, "error": e.to_string() }),
    }
}

fn print_report(report: &CompareReport) {
    println!(
        "Comparing [{}] -> [{}]\n",
        report.source_label, report.target_label
    );

    for table in &report.tables {
        let marker = if table.status.is_drift() { "✗" } else { "✓" };
        println!("  {} {} ({})", marker, table.table, table.status.as_str());
    }

    for table in report.drifted() {
        if table.status == TableStatus::Differs {
            println!(
                "\n{}",
                table.unified_diff(&report.source_label, &report.target_label)
            );
        }
    }

    println!("\nSummary:");
    println!("  Tables checked: {}", report.tables_checked());
    println!("  Identical: {}", report.tables_identical);
    println!("  Different: {}", report.tables_different);
    println!("  Only in [{}]: {}", report.source_label, report.tables_only_in_source);
    println!("  Only in [{}]: {}", report.target_label, report.tables_only_in_target);
    println!("  Unreadable: {}", report.tables_unreadable);
}

/// Level directive for `--verbosity`; unknown values fall back to info.
fn level_directive(verbosity: &str) -> &'static str {
    match verbosity.to_lowercase().as_str() {
        "debug" => "debug",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    }
}

fn setup_logging(verbosity: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbosity)));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
