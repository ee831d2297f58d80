//! Strata CLI - Inspect the warehouse and run reports and migrations
//!
//! Usage:
//!   strata schema
//!   strata reports
//!   strata query <report-id> [--filter slice=value]... [--granularity month]
//!   strata tables
//!   strata columns <table>
//!   strata migrate --source <table> --target <table> [--map col=expr]... [--auto] [--truncate] [--dry-run]
//!
//! Examples:
//!   strata query monthly_revenue_report --filter plan_key=pro --granularity month
//!   strata migrate --source orders --target Fact_Orders --auto --dry-run

use std::collections::BTreeMap;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use strata::chart::{self, value_keys};
use strata::client::ApiClient;
use strata::config::Settings;
use strata::etl::{self, MappingDraft};
use strata::model::{ChartType, ColumnMapping};
use strata::sql::{dml, Granularity};

#[derive(Parser)]
#[command(name = "strata")]
#[command(about = "Strata - BI reporting and warehouse ETL from the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the warehouse catalog (dimensions and facts)
    Schema,

    /// List persisted reports
    Reports,

    /// Run a report and print its chart records
    Query {
        /// Report id
        report_id: String,

        /// Slice filter, repeatable: slice=value
        #[arg(short, long = "filter", value_name = "SLICE=VALUE")]
        filters: Vec<String>,

        /// Time bucket for date/time group-by columns
        #[arg(short, long, default_value = "day")]
        granularity: GranularityArg,
    },

    /// List tables of the operational source database
    Tables,

    /// List columns of one source table
    Columns {
        /// Source table name
        table: String,
    },

    /// Compile and execute a column migration
    Migrate {
        /// Source table in the operational database
        #[arg(short, long)]
        source: String,

        /// Target table in the warehouse
        #[arg(short, long)]
        target: String,

        /// Column mapping, repeatable: target_column=expression
        #[arg(short, long = "map", value_name = "COLUMN=EXPR")]
        mappings: Vec<String>,

        /// Pre-fill mappings by name matching before applying --map edits
        #[arg(long)]
        auto: bool,

        /// Truncate the target table before copying
        #[arg(long)]
        truncate: bool,

        /// Print the migration SQL instead of executing
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GranularityArg {
    Day,
    Month,
    Year,
}

impl From<GranularityArg> for Granularity {
    fn from(arg: GranularityArg) -> Self {
        match arg {
            GranularityArg::Day => Granularity::Day,
            GranularityArg::Month => Granularity::Month,
            GranularityArg::Year => Granularity::Year,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "strata=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            error!("failed to load settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match ApiClient::from_settings(&settings) {
        Ok(c) => c,
        Err(e) => {
            error!("failed to build API client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Schema => cmd_schema(&client).await,
        Commands::Reports => cmd_reports(&client).await,
        Commands::Query {
            report_id,
            filters,
            granularity,
        } => cmd_query(&client, &report_id, &filters, granularity.into()).await,
        Commands::Tables => cmd_tables(&client).await,
        Commands::Columns { table } => cmd_columns(&client, &table).await,
        Commands::Migrate {
            source,
            target,
            mappings,
            auto,
            truncate,
            dry_run,
        } => {
            cmd_migrate(
                &client, &settings, &source, &target, &mappings, auto, truncate, dry_run,
            )
            .await
        }
    }
}

async fn cmd_schema(client: &ApiClient) -> ExitCode {
    let schema = match client.schema().await {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };

    for (label, tables) in [("Dimensions", &schema.dimensions), ("Facts", &schema.facts)] {
        println!("{}:", label);
        for table in tables {
            let pk = table
                .columns
                .iter()
                .filter(|c| c.primary_key)
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let pk_note = if pk.is_empty() {
                String::new()
            } else {
                format!(", pk: {}", pk)
            };
            println!("  {} ({} columns{})", table.name, table.columns.len(), pk_note);
        }
    }
    ExitCode::SUCCESS
}

async fn cmd_reports(client: &ApiClient) -> ExitCode {
    let reports = match client.reports().await {
        Ok(r) => r,
        Err(e) => return fail(&e),
    };

    for report in reports {
        println!(
            "{:<30} {:?} {:?}  {} group by {}",
            report.id, report.category, report.chart_type, report.source_table, report.group_by
        );
    }
    ExitCode::SUCCESS
}

async fn cmd_query(
    client: &ApiClient,
    report_id: &str,
    filter_args: &[String],
    granularity: Granularity,
) -> ExitCode {
    let filters = match parse_pairs(filter_args) {
        Ok(pairs) => pairs
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect::<BTreeMap<_, _>>(),
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let reports = match client.reports().await {
        Ok(r) => r,
        Err(e) => return fail(&e),
    };
    let chart_type = reports
        .iter()
        .find(|r| r.id == report_id)
        .map(|r| r.chart_type)
        .unwrap_or_default();

    let result = match client.run_query(report_id, &filters, Some(granularity)).await {
        Ok(r) => r,
        Err(e) => return fail(&e),
    };

    let records = chart::to_records(&result, chart_type);
    if records.is_empty() {
        println!("No data available for this period.");
        return ExitCode::SUCCESS;
    }

    if chart_type == ChartType::Matrix {
        let keys = value_keys(&records);
        println!("{:<16} {}", "", keys.join("  "));
        for record in &records {
            let cells: Vec<String> = keys
                .iter()
                .map(|k| match record.value(k).flatten() {
                    Some(v) => chart::cell_style(v).display,
                    None => chart::cell_style(0.0).display,
                })
                .collect();
            println!("{:<16} {}", axis_text(&record.name), cells.join("  "));
        }
    } else {
        for record in &records {
            let mut line = format!("{:<16}", axis_text(&record.name));
            for (key, value) in &record.values {
                match value {
                    Some(v) => line.push_str(&format!(" {}={}", key, chart::axis_label(*v))),
                    None => line.push_str(&format!(" {}=null", key)),
                }
            }
            if let Some(total) = record.total {
                line.push_str(&format!(" Total={}", chart::bar_label(total)));
            }
            println!("{}", line);
        }
    }
    ExitCode::SUCCESS
}

async fn cmd_tables(client: &ApiClient) -> ExitCode {
    match client.source_tables().await {
        Ok(tables) => {
            for table in tables {
                println!("{}", table);
            }
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

async fn cmd_columns(client: &ApiClient, table: &str) -> ExitCode {
    match client.source_columns(table).await {
        Ok(columns) => {
            for column in columns {
                println!("{}", column);
            }
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

#[allow(clippy::too_many_arguments)]
async fn cmd_migrate(
    client: &ApiClient,
    settings: &Settings,
    source: &str,
    target: &str,
    mapping_args: &[String],
    auto: bool,
    truncate: bool,
    dry_run: bool,
) -> ExitCode {
    let edits = match parse_pairs(mapping_args) {
        Ok(pairs) => pairs,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mappings: Vec<ColumnMapping> = if auto {
        let schema = match client.schema().await {
            Ok(s) => s,
            Err(e) => return fail(&e),
        };
        let Some(target_table) = schema.table(target) else {
            eprintln!("Target table '{}' not found in warehouse schema", target);
            return ExitCode::FAILURE;
        };
        let source_columns = match client.source_columns(source).await {
            Ok(c) => c,
            Err(e) => return fail(&e),
        };

        let mut draft = MappingDraft::for_target(target, &target_table.columns, &source_columns);
        for (column, expr) in &edits {
            if !draft.set(column, expr.clone()) {
                eprintln!("Target table '{}' has no column '{}'", target, column);
                return ExitCode::FAILURE;
            }
        }
        draft.mappings().to_vec()
    } else {
        edits
            .into_iter()
            .map(|(column, expr)| ColumnMapping::new(column, expr))
            .collect()
    };

    let plan = match etl::compile(source, target, &mappings, truncate) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if dry_run {
        let schema_name = &settings.api.source_schema;
        if let Some(truncate_stmt) = dml::truncate_sql(&plan) {
            println!("{};", truncate_stmt);
        }
        println!("{};", dml::insert_select_sql(&plan, schema_name));
        println!("-- preview: {}", dml::preview_sql(&plan, schema_name));
        return ExitCode::SUCCESS;
    }

    match client.execute_migration(&plan).await {
        Ok(message) => {
            println!("{}", message);
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

/// Axis values come back as arbitrary JSON; strings print unquoted.
fn axis_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse repeatable `key=value` arguments.
fn parse_pairs(args: &[String]) -> Result<Vec<(String, String)>, String> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| format!("invalid argument '{}': expected key=value", arg))
        })
        .collect()
}

fn fail(error: &dyn std::error::Error) -> ExitCode {
    eprintln!("Error: {}", error);
    ExitCode::FAILURE
}
