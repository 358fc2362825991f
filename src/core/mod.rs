pub mod catalog;
pub mod etl;
pub mod pipeline;
pub mod report;
pub mod service;
pub mod store;

pub use crate::domain::model::{
    FeedbackInput, FeedbackRecord, IngestRow, IngestSummary, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, FeedbackStore, Pipeline, Storage};
pub use crate::utils::error::Result;
