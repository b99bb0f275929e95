use super::MigrationArgs;
use crate::Config;

use anyhow::Result;
use clap::Parser;
use console::style;

#[derive(Parser, Debug)]
pub struct PlanCommand {
    #[command(flatten)]
    args: MigrationArgs,

    /// Print the steps as JSON
    #[arg(long)]
    json: bool,
}

impl PlanCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        let loaded = self.args.load()?;
        let migrator = self.args.migrator(config);
        let plan = loaded.plan(&migrator)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(plan.steps())?);
            return Ok(());
        }

        println!();
        println!("  {}", style("Migration Plan").cyan().bold().underlined());
        println!();

        if plan.is_empty() {
            println!(
                "  {}",
                style("The schemas match. No migration needed.")
                    .magenta()
                    .dim()
            );
            println!();
            return Ok(());
        }

        for (i, step) in plan.steps().iter().enumerate() {
            println!("  {} {}", style(format!("{:>3}.", i + 1)).dim(), step);
        }

        println!();
        println!(
            "  {}",
            style(format!(
                "{} step(s), {} statement(s)",
                plan.steps().len(),
                plan.sql().len()
            ))
            .green()
            .bold()
        );
        println!();

        Ok(())
    }
}
