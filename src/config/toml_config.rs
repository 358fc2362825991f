use crate::core::ConfigProvider;
use crate::utils::error::{FeedbackError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppInfo,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppInfo {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: "feedback-insights".to_string(),
            description: None,
            version: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: String,
    pub filename: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: "./instance".to_string(),
            filename: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub products: Vec<ProductEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntry {
    pub sku: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub min_rating: Option<i32>,
    pub max_rating: Option<i32>,
    pub allowed_extensions: Option<Vec<String>>,
    pub rejects_filename: Option<String>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            min_rating: Some(1),
            max_rating: Some(5),
            allowed_extensions: None,
            rejects_filename: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: "./output".to_string(),
            output_formats: vec!["json".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub format: LogFormat,
}

pub const DEFAULT_STORE_FILENAME: &str = "feedback.jsonl";
pub const DEFAULT_REJECTS_FILENAME: &str = "rejected.csv";
const VALID_OUTPUT_FORMATS: [&str; 2] = ["json", "csv"];
const VALID_INPUT_EXTENSIONS: [&str; 2] = ["csv", "json"];
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FeedbackError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FeedbackError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FeedbackError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("app.name", &self.app.name)?;
        validation::validate_path("store.path", &self.store.path)?;
        validation::validate_path("store.filename", self.store_filename())?;
        validation::validate_path("report.output_path", &self.report.output_path)?;

        for product in &self.catalog.products {
            validation::validate_non_empty_string("catalog.products.sku", &product.sku)?;
            validation::validate_non_empty_string("catalog.products.name", &product.name)?;
        }
        validation::validate_unique(
            "catalog.products.sku",
            self.catalog.products.iter().map(|p| p.sku.as_str()),
        )?;

        let (min, max) = self.rating_range();
        if min > max {
            return Err(FeedbackError::InvalidConfigValueError {
                field: "ingest.min_rating".to_string(),
                value: min.to_string(),
                reason: format!("min_rating must not exceed max_rating ({})", max),
            });
        }

        for extension in self.allowed_extensions() {
            if !VALID_INPUT_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str()) {
                return Err(FeedbackError::InvalidConfigValueError {
                    field: "ingest.allowed_extensions".to_string(),
                    value: extension,
                    reason: format!(
                        "Unsupported input format. Valid extensions: {}",
                        VALID_INPUT_EXTENSIONS.join(", ")
                    ),
                });
            }
        }

        for format in &self.report.output_formats {
            if !VALID_OUTPUT_FORMATS.contains(&format.as_str()) {
                return Err(FeedbackError::InvalidConfigValueError {
                    field: "report.output_formats".to_string(),
                    value: format.clone(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        VALID_OUTPUT_FORMATS.join(", ")
                    ),
                });
            }
        }

        if let Some(level) = &self.logging.level {
            if !VALID_LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(FeedbackError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Valid levels: {}", VALID_LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }

    pub fn store_filename(&self) -> &str {
        self.store
            .filename
            .as_deref()
            .unwrap_or(DEFAULT_STORE_FILENAME)
    }

    pub fn rating_range(&self) -> (i32, i32) {
        (
            self.ingest.min_rating.unwrap_or(1),
            self.ingest.max_rating.unwrap_or(5),
        )
    }

    pub fn allowed_extensions(&self) -> Vec<String> {
        self.ingest
            .allowed_extensions
            .clone()
            .unwrap_or_else(|| vec!["csv".to_string(), "json".to_string()])
    }

    pub fn rejects_filename(&self) -> &str {
        self.ingest
            .rejects_filename
            .as_deref()
            .unwrap_or(DEFAULT_REJECTS_FILENAME)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

/// Ingest settings resolved from the config plus the files named on the
/// command line. Rejected rows are written next to the store file.
#[derive(Debug, Clone)]
pub struct IngestSettings {
    pub input_files: Vec<String>,
    pub rejects_path: String,
    pub allowed_extensions: Vec<String>,
}

impl IngestSettings {
    pub fn new(config: &AppConfig, input_files: Vec<String>) -> Self {
        Self {
            input_files,
            rejects_path: Path::new(&config.store.path)
                .join(config.rejects_filename())
                .to_string_lossy()
                .into_owned(),
            allowed_extensions: config.allowed_extensions(),
        }
    }
}

impl ConfigProvider for IngestSettings {
    fn input_files(&self) -> &[String] {
        &self.input_files
    }

    fn rejects_path(&self) -> &str {
        &self.rejects_path
    }
}

impl Validate for IngestSettings {
    fn validate(&self) -> Result<()> {
        if self.input_files.is_empty() {
            return Err(FeedbackError::MissingConfigError {
                field: "input".to_string(),
            });
        }
        for file in &self.input_files {
            validation::validate_path("input", file)?;
        }
        validation::validate_file_extensions("input", &self.input_files, &self.allowed_extensions)?;
        validation::validate_path("ingest.rejects_filename", &self.rejects_path)
    }
}
