// src/analysis/mod.rs
pub mod controller;
pub mod ingestor;
pub mod normalizer;
pub mod renderer;
pub mod samples;
pub mod validator;

pub use controller::{
    PendingSubmission, ScreeningController, SentimentController, SubmissionController,
    SubmissionOutcome, SubmissionState, SubmissionStatus,
};
pub use normalizer::Normalizer;
pub use renderer::{render, Badge, DisplayModel, Tone};
pub use validator::{Draft, ScreeningDraft, SentimentDraft, ValidationResult};
