pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

pub use toml_config::{AppConfig, IngestSettings, LogFormat};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "feedback-insights")]
#[command(about = "Classify product feedback and derive actionable insights")]
pub struct CliConfig {
    /// Path to a TOML configuration file; defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the store directory from the config
    #[arg(long)]
    pub store_path: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List catalog products
    Products,

    /// Record one piece of feedback
    Submit {
        #[arg(long)]
        sku: String,
        #[arg(long)]
        rating: i32,
        #[arg(long)]
        text: String,
    },

    /// Show rating, sentiment and text of a product's feedback
    Feedback {
        #[arg(long)]
        sku: String,
    },

    /// Sentiment and theme counts for a product
    Stats {
        #[arg(long)]
        sku: String,
    },

    /// Recommendations derived from a product's stats
    Insights {
        #[arg(long)]
        sku: String,
    },

    /// Batch-import feedback from CSV or JSON files
    Ingest {
        #[arg(required = true, value_delimiter = ',')]
        files: Vec<String>,
    },

    /// Write stats and insights for every product
    Report {
        /// Override the output directory from the config
        #[arg(long)]
        output_path: Option<String>,

        /// Override the formats from the config (json, csv)
        #[arg(long, value_delimiter = ',')]
        formats: Vec<String>,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML file (if any) and applies command-line overrides.
    pub fn load_app_config(&self) -> crate::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(store_path) = &self.store_path {
            config.store.path = store_path.clone();
        }

        if let Command::Report {
            output_path,
            formats,
        } = &self.command
        {
            if let Some(output_path) = output_path {
                config.report.output_path = output_path.clone();
            }
            if !formats.is_empty() {
                config.report.output_formats = formats.clone();
            }
        }

        Ok(config)
    }
}
