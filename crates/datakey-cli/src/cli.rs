use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "datakey",
    about = "DataKey — typed keys, catalog ids and data queries",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether strings are valid catalog ids
    CheckId(CheckIdArgs),
    /// Split a path into data query parts
    Query(QueryArgs),
    /// Validate a catalog configuration file
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct CheckIdArgs {
    /// Ids to check, e.g. `plugin:example_key`
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Path to split, e.g. `data.example`
    pub path: String,

    /// Separator between parts
    #[arg(short, long, default_value_t = '.')]
    pub separator: char,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Path to a TOML catalog configuration
    pub path: String,
}
