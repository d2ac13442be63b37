use anyhow::Context;
use colored::Colorize;
use datakey_catalog::CatalogConfig;
use datakey_types::{CatalogId, DataQuery};
use serde::Serialize;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::CheckId(args) => cmd_check_id(args, cli.format),
        Command::Query(args) => cmd_query(args, cli.format),
        Command::Config(args) => cmd_config(args, cli.format),
    }
}

#[derive(Debug, Serialize)]
struct IdReport {
    id: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn check_id(raw: &str) -> IdReport {
    match CatalogId::parse(raw) {
        Ok(id) => IdReport {
            id: raw.to_string(),
            valid: true,
            namespace: Some(id.namespace().to_string()),
            value: Some(id.value().to_string()),
            error: None,
        },
        Err(e) => IdReport {
            id: raw.to_string(),
            valid: false,
            namespace: None,
            value: None,
            error: Some(e.to_string()),
        },
    }
}

fn cmd_check_id(args: CheckIdArgs, format: OutputFormat) -> anyhow::Result<()> {
    let reports: Vec<IdReport> = args.ids.iter().map(|id| check_id(id)).collect();
    let invalid = reports.iter().filter(|r| !r.valid).count();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            for r in &reports {
                if r.valid {
                    println!("{} {}", "✓".green(), r.id.bold());
                } else {
                    println!(
                        "{} {}: {}",
                        "✗".red(),
                        r.id.bold(),
                        r.error.as_deref().unwrap_or_default()
                    );
                }
            }
        }
    }

    if invalid > 0 {
        anyhow::bail!("{invalid} of {} ids are invalid", reports.len());
    }
    Ok(())
}

fn cmd_query(args: QueryArgs, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_query(&args, format)?);
    Ok(())
}

fn render_query(args: &QueryArgs, format: OutputFormat) -> anyhow::Result<String> {
    let query = DataQuery::of(args.separator, &args.path);
    tracing::debug!(path = %args.path, parts = query.len(), "split query");
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&query)?),
        OutputFormat::Text if query.is_empty() => Ok("(root)".dimmed().to_string()),
        OutputFormat::Text => Ok(query
            .parts()
            .iter()
            .enumerate()
            .map(|(i, part)| format!("{:>3}  {}", i.to_string().dimmed(), part.cyan()))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn cmd_config(args: ConfigArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = CatalogConfig::from_file(&args.path)
        .with_context(|| format!("loading catalog config {}", args.path))?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Text => {
            println!("{} {}", "✓".green().bold(), args.path.bold());
            println!("  Max keys: {}", config.max_keys);
            match &config.allowed_namespaces {
                None => println!("  Namespaces: {}", "any".yellow()),
                Some(list) => println!("  Namespaces: {}", list.join(", ").yellow()),
            }
        }
    }
    Ok(())
}
