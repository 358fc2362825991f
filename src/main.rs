use clap::Parser;
use feedback_insights::config::Command;
use feedback_insights::core::report;
use feedback_insights::utils::error::ErrorSeverity;
use feedback_insights::utils::{logger, validation::Validate};
use feedback_insights::{
    AppConfig, Catalog, CliConfig, FeedbackError, FeedbackInput, FeedbackService, IngestEngine,
    IngestPipeline, IngestSettings, JsonlFeedbackStore, LocalStorage,
};
use serde::Serialize;
use std::sync::Arc;

type Service = FeedbackService<JsonlFeedbackStore<LocalStorage>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.load_app_config() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    logger::init_logger(
        cli.verbose,
        config.logging.level.as_deref(),
        config.logging.format,
    );
    tracing::debug!("CLI arguments: {:?}", cli);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        fail(&e);
    }

    if let Err(e) = run(cli.command, config).await {
        tracing::error!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        fail(&e);
    }

    Ok(())
}

fn build_service(config: &AppConfig) -> Service {
    let catalog = Catalog::from_entries(&config.catalog.products);
    let store = JsonlFeedbackStore::new(
        LocalStorage::new(config.store.path.clone()),
        config.store_filename(),
    );
    FeedbackService::new(catalog, store, config.rating_range())
}

async fn run(command: Command, config: AppConfig) -> feedback_insights::Result<()> {
    let service = build_service(&config);

    match command {
        Command::Products => print_json(service.catalog().list()),
        Command::Submit { sku, rating, text } => {
            let record = service.submit(FeedbackInput::new(sku, rating, text)).await?;
            print_json(&record)
        }
        Command::Feedback { sku } => print_json(&service.feedback_for(&sku).await?),
        Command::Stats { sku } => print_json(&service.stats_for(&sku).await?),
        Command::Insights { sku } => print_json(&service.insights_for(&sku).await?),
        Command::Ingest { files } => {
            let settings = IngestSettings::new(&config, files);
            settings.validate()?;

            let pipeline = IngestPipeline::new(
                LocalStorage::new(".".to_string()),
                Arc::new(service),
                settings,
            );
            let summary = IngestEngine::new(pipeline).run().await?;
            print_json(&summary)
        }
        Command::Report { .. } => {
            let reports = service.report().await?;
            let storage = LocalStorage::new(config.report.output_path.clone());
            let written =
                report::write_reports(&storage, &reports, &config.report.output_formats).await?;
            for path in &written {
                tracing::info!("Report written to {}", storage.full_path(path).display());
            }
            print_json(&reports)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> feedback_insights::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn fail(e: &FeedbackError) -> ! {
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
