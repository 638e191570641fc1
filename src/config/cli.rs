use crate::adapters::export::ExportFormat;
use crate::config::toml_config::{ExportConfig, OrderConfig};
use crate::core::actions::OrderAction;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "mock-orders")]
#[command(about = "Seed a mock order list, replay row actions and show the resulting list diffs")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of orders to seed (overrides the config file)
    #[arg(long)]
    pub count: Option<usize>,

    /// Seed for reproducible fake data
    #[arg(long)]
    pub rng_seed: Option<u64>,

    /// Comma separated actions, e.g. like:3,down:3,move:5:-2,remove:1,show:2
    #[arg(long, value_delimiter = ',')]
    pub actions: Vec<OrderAction>,

    /// Export the final list as json or csv
    #[arg(long)]
    pub export: Option<ExportFormat>,

    /// Export destination file or directory
    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Loads the config file (if any) and applies command line overrides.
    pub fn resolve(&self) -> Result<OrderConfig> {
        let mut config = match &self.config {
            Some(path) => OrderConfig::from_file(path)?,
            None => OrderConfig::default(),
        };

        if let Some(count) = self.count {
            config.seed.count = Some(count);
        }
        if let Some(seed) = self.rng_seed {
            config.seed.rng_seed = Some(seed);
        }
        if let Some(format) = self.export {
            config.export = Some(ExportConfig {
                format,
                output_path: self.output_path.clone(),
            });
        }

        Ok(config)
    }
}
