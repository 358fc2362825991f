use crate::core::Storage;
use crate::domain::model::{ProductReport, ThemeLabel};
use crate::utils::error::{FeedbackError, Result};
use serde::Serialize;

pub const JSON_REPORT: &str = "report.json";
pub const CSV_REPORT: &str = "report.csv";

#[derive(Serialize)]
struct ReportRow<'a> {
    sku: &'a str,
    name: &'a str,
    positive: usize,
    negative: usize,
    comfort: usize,
    durability: usize,
    appearance: usize,
    insights: String,
}

impl<'a> From<&'a ProductReport> for ReportRow<'a> {
    fn from(report: &'a ProductReport) -> Self {
        Self {
            sku: &report.product.sku,
            name: &report.product.name,
            positive: report.stats.sentiments.positive,
            negative: report.stats.sentiments.negative,
            comfort: report.stats.theme_count(ThemeLabel::Comfort),
            durability: report.stats.theme_count(ThemeLabel::Durability),
            appearance: report.stats.theme_count(ThemeLabel::Appearance),
            insights: report.insights.join(" | "),
        }
    }
}

pub fn render_json(reports: &[ProductReport]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(reports)?)
}

/// One row per product; insights are joined with " | ".
pub fn render_csv(reports: &[ProductReport]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for report in reports {
        writer.serialize(ReportRow::from(report))?;
    }
    writer
        .into_inner()
        .map_err(|e| FeedbackError::IoError(e.into_error()))
}

/// Writes the report in each requested format and returns the written paths.
pub async fn write_reports<S: Storage>(
    storage: &S,
    reports: &[ProductReport],
    formats: &[String],
) -> Result<Vec<String>> {
    let mut written = Vec::new();

    for format in formats {
        let (path, data) = match format.as_str() {
            "json" => (JSON_REPORT, render_json(reports)?),
            "csv" => (CSV_REPORT, render_csv(reports)?),
            other => {
                return Err(FeedbackError::InvalidConfigValueError {
                    field: "report.output_formats".to_string(),
                    value: other.to_string(),
                    reason: "Unsupported format. Valid formats: json, csv".to_string(),
                })
            }
        };

        tracing::debug!("Writing {} report ({} bytes)", format, data.len());
        storage.write_file(path, &data).await?;
        written.push(path.to_string());
    }

    Ok(written)
}
