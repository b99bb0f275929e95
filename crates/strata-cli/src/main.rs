use strata_cli::{Config, StrataCli};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    StrataCli::with_config(Config::from_env()).parse_and_run()
}
