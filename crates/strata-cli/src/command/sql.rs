use super::MigrationArgs;
use crate::Config;

use anyhow::Result;
use clap::Parser;
use strata_sql::migration::BREAKPOINT;

#[derive(Parser, Debug)]
pub struct SqlCommand {
    #[command(flatten)]
    args: MigrationArgs,

    /// Join statements with the breakpoint marker instead of newlines
    #[arg(long)]
    breakpoints: bool,
}

impl SqlCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        let loaded = self.args.load()?;
        let migrator = self.args.migrator(config);
        let plan = loaded.plan(&migrator)?;

        tracing::info!(
            flavor = ?self.args.flavor(config),
            statements = plan.sql().len(),
            "writing migration"
        );

        if self.breakpoints {
            println!("{}", plan.sql().join(BREAKPOINT));
        } else {
            for sql in plan.sql() {
                println!("{sql}");
            }
        }

        Ok(())
    }
}
