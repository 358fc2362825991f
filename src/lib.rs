pub mod adapters;
pub mod analysis;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use analysis::{aggregate, classify, generate_insights};
pub use config::{AppConfig, IngestSettings};
pub use crate::core::{
    catalog::Catalog, etl::IngestEngine, pipeline::IngestPipeline, service::FeedbackService,
    store::JsonlFeedbackStore,
};
pub use domain::model::{
    AggregateStats, Classification, FeedbackInput, FeedbackRecord, Product, ProductReport,
    Sentiment, ThemeLabel,
};
pub use utils::error::{FeedbackError, Result};
