// src/core/mod.rs
//! Configuration, file access and the analysis service client

pub mod config_manager;
pub mod fs_ops;
pub mod service_client;

pub use config_manager::{ClientConfig, ConfigManager, ScreeningContract, SentimentField};
pub use fs_ops::FsOps;
pub use service_client::{AnalysisService, ServiceClient};
