//! Client for the HR analysis service: resume screening against a job
//! description, and sentiment analysis of employee feedback.

pub mod analysis;
pub mod cli;
pub mod core;
pub mod error;
pub mod types;
pub mod utils;

use std::sync::Arc;

pub use analysis::{ScreeningController, SentimentController};
pub use self::core::{AnalysisService, ClientConfig, ConfigManager, ServiceClient};
pub use error::{AnalysisError, ErrorDescriptor};

/// Build both controllers around one shared client
pub fn build_controllers(
    config: &ClientConfig,
) -> Result<(ScreeningController, SentimentController), AnalysisError> {
    let service: Arc<dyn AnalysisService> = Arc::new(ServiceClient::new(config)?);
    let normalizer = analysis::Normalizer::new(config.screening_contract);

    Ok((
        ScreeningController::new(Arc::clone(&service), normalizer),
        SentimentController::new(service, normalizer),
    ))
}
