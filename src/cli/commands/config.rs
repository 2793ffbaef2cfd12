use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::FixturegenConfig;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the merged configuration
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,

        /// Only show this section (e.g. "output")
        #[arg(long)]
        section: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
}

pub fn execute(args: ConfigArgs, config: &FixturegenConfig) -> Result<()> {
    match args.command {
        ConfigCommand::Show { format, section } => {
            let value = match section {
                Some(section) => config.get_section(&section)?,
                None => serde_json::to_value(config.settings()?)?,
            };
            match format {
                ConfigFormat::Toml => print!("{}", toml::to_string_pretty(&value)?),
                ConfigFormat::Json => println!("{}", serde_json::to_string_pretty(&value)?),
            }
            Ok(())
        }
    }
}
