mod command;

mod config;
pub use config::{Config, Flavor};

mod schema_file;
pub use schema_file::SchemaFile;

use anyhow::Result;
use clap::Parser;

/// Strata CLI library for building custom command-line tools
#[derive(Debug, Default)]
pub struct StrataCli {
    config: Config,
}

impl StrataCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new StrataCli instance with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and execute CLI commands from command-line arguments
    pub fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run(cli)
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::parse_from(args);
        self.run(cli)
    }

    fn run(&self, cli: Cli) -> Result<()> {
        match cli.command {
            Command::Plan(cmd) => cmd.run(&self.config),
            Command::Sql(cmd) => cmd.run(&self.config),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(about = "Strata CLI - Schema migration planning tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// List the migration steps between two schema files
    Plan(command::PlanCommand),

    /// Print the DDL migrating one schema file to another
    Sql(command::SqlCommand),
}
